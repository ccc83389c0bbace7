//! Print form state
//!
//! Values that apply to a whole print action rather than to a single row.

use crate::error::{SettingsError, SettingsResult};
use labelkit_core::{clamp_copies, clamp_radius_mm, PageSize, PhysicalSize};
use serde::{Deserialize, Serialize};

/// Default currency label appended to prices
pub const DEFAULT_CURRENCY: &str = "د.ج";

/// Print options for the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Shop name used when a row does not override it
    pub shop_name: String,
    /// Currency label appended to prices
    pub currency: String,
    /// Physical label size
    pub physical_size: PhysicalSize,
    /// Corner radius in millimeters
    pub radius_mm: f64,
    /// Copies printed per row
    pub copies: u32,
    /// Printable page
    pub page: PageSize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            shop_name: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            physical_size: PhysicalSize::default(),
            radius_mm: 2.0,
            copies: 4,
            page: PageSize::A4,
        }
    }
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the copy count, clamped to the accepted range. Returns the stored value.
    pub fn set_copies(&mut self, copies: u32) -> u32 {
        self.copies = clamp_copies(copies);
        self.copies
    }

    /// Set the corner radius, clamped to the editor range. Returns the stored value.
    pub fn set_radius_mm(&mut self, radius_mm: f64) -> f64 {
        self.radius_mm = clamp_radius_mm(radius_mm);
        self.radius_mm
    }

    /// Set the physical size. Page bounds are checked when the request is built.
    pub fn set_physical_size(&mut self, width_mm: f64, height_mm: f64) -> SettingsResult<()> {
        let size = PhysicalSize::new(width_mm, height_mm);
        if !size.is_valid() {
            return Err(SettingsError::invalid(
                "size",
                format!("{width_mm}x{height_mm} mm is not a valid label size"),
            ));
        }
        self.physical_size = size;
        Ok(())
    }

    pub fn set_shop_name(&mut self, shop_name: &str) {
        self.shop_name = shop_name.trim().to_string();
    }

    pub fn set_currency(&mut self, currency: &str) {
        self.currency = currency.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PrintOptions::default();
        assert_eq!(options.copies, 4);
        assert_eq!(options.radius_mm, 2.0);
        assert_eq!(options.physical_size, PhysicalSize::new(40.0, 40.0));
        assert_eq!(options.currency, "د.ج");
        assert_eq!(options.page, PageSize::A4);
    }

    #[test]
    fn test_setters_clamp() {
        let mut options = PrintOptions::default();
        assert_eq!(options.set_copies(0), 1);
        assert_eq!(options.set_copies(99), 35);
        assert_eq!(options.set_radius_mm(12.0), 8.0);
        assert_eq!(options.set_radius_mm(-1.0), 0.0);
        assert_eq!(options.set_radius_mm(2.5), 2.5);
    }

    #[test]
    fn test_physical_size_rejects_garbage() {
        let mut options = PrintOptions::default();
        assert!(options.set_physical_size(0.0, 40.0).is_err());
        assert!(options.set_physical_size(f64::NAN, 40.0).is_err());
        assert_eq!(options.physical_size, PhysicalSize::default());

        options.set_physical_size(60.0, 30.0).unwrap();
        assert_eq!(options.physical_size, PhysicalSize::new(60.0, 30.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: PrintOptions = serde_json::from_str(r#"{"copies": 10}"#).unwrap();
        assert_eq!(options.copies, 10);
        assert_eq!(options.radius_mm, 2.0);
    }
}
