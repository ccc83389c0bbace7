//! Style and print option setters for the editing session.
//!
//! Each setter persists on success. Rejected values and failed saves leave
//! the session unchanged.

use super::LabelSession;
use crate::error::DesignerResult;
use labelkit_settings::{ColorRef, FontRole, Palette, ThemePreset};

impl LabelSession {
    pub fn apply_preset(&mut self, preset: ThemePreset) -> DesignerResult<()> {
        self.transact(|s| {
            s.style.apply_preset(preset);
            Ok(())
        })
    }

    pub fn set_custom_palette(&mut self, palette: Palette) -> DesignerResult<()> {
        self.transact(|s| {
            s.style.set_custom_palette(palette);
            Ok(())
        })
    }

    pub fn set_color(&mut self, key: ColorRef, value: &str) -> DesignerResult<()> {
        self.transact(|s| Ok(s.style.set_color(key, value)?))
    }

    pub fn set_font_family(&mut self, role: FontRole, family: &str) -> DesignerResult<()> {
        self.transact(|s| Ok(s.style.set_font_family(role, family)?))
    }

    /// Returns the stored, clamped size.
    pub fn set_font_size(&mut self, role: FontRole, size: f64) -> DesignerResult<f64> {
        self.transact(|s| Ok(s.style.set_font_size(role, size)))
    }

    /// Returns the stored, clamped copy count.
    pub fn set_copies(&mut self, copies: u32) -> DesignerResult<u32> {
        self.transact(|s| Ok(s.options.set_copies(copies)))
    }

    /// Returns the stored, clamped radius.
    pub fn set_radius_mm(&mut self, radius_mm: f64) -> DesignerResult<f64> {
        self.transact(|s| Ok(s.options.set_radius_mm(radius_mm)))
    }

    pub fn set_physical_size(&mut self, width_mm: f64, height_mm: f64) -> DesignerResult<()> {
        self.transact(|s| Ok(s.options.set_physical_size(width_mm, height_mm)?))
    }

    pub fn set_shop_name(&mut self, shop_name: &str) -> DesignerResult<()> {
        self.transact(|s| {
            s.options.set_shop_name(shop_name);
            Ok(())
        })
    }

    pub fn set_currency(&mut self, currency: &str) -> DesignerResult<()> {
        self.transact(|s| {
            s.options.set_currency(currency);
            Ok(())
        })
    }
}
