//! Style settings
//!
//! Session-wide look of every label: the six-color palette, the theme
//! selector and the font chosen for each text role. Elements only carry
//! symbolic references ([`ColorRef`], [`FontRole`]); concrete values are
//! looked up here when a render request is built.

use crate::error::{SettingsError, SettingsResult};
use labelkit_core::clamp_font_size;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hex color in `#RRGGBB` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a `#RRGGBB` string. Lowercase digits are normalized to uppercase.
    pub fn parse(value: &str) -> SettingsResult<Self> {
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| SettingsError::InvalidColor(value.to_string()))?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SettingsError::InvalidColor(value.to_string()));
        }
        Ok(Self(format!("#{}", hex.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Color {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Preset tables only contain literals checked by the tests below.
fn c(hex: &str) -> Color {
    Color(hex.to_string())
}

/// Symbolic palette key carried by text elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRef {
    PrimaryColor,
    AccentColor,
    ShopNameColor,
    QuantityColor,
    ExtraInfoColor,
    BorderColor,
}

impl ColorRef {
    pub const ALL: [ColorRef; 6] = [
        ColorRef::PrimaryColor,
        ColorRef::AccentColor,
        ColorRef::ShopNameColor,
        ColorRef::QuantityColor,
        ColorRef::ExtraInfoColor,
        ColorRef::BorderColor,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::PrimaryColor => "primaryColor",
            Self::AccentColor => "accentColor",
            Self::ShopNameColor => "shopNameColor",
            Self::QuantityColor => "quantityColor",
            Self::ExtraInfoColor => "extraInfoColor",
            Self::BorderColor => "borderColor",
        }
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorRef {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| SettingsError::invalid("color", format!("unknown palette key '{s}'")))
    }
}

/// The six label colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary_color: Color,
    pub accent_color: Color,
    pub shop_name_color: Color,
    pub quantity_color: Color,
    pub extra_info_color: Color,
    pub border_color: Color,
}

impl Palette {
    pub fn get(&self, key: ColorRef) -> &Color {
        match key {
            ColorRef::PrimaryColor => &self.primary_color,
            ColorRef::AccentColor => &self.accent_color,
            ColorRef::ShopNameColor => &self.shop_name_color,
            ColorRef::QuantityColor => &self.quantity_color,
            ColorRef::ExtraInfoColor => &self.extra_info_color,
            ColorRef::BorderColor => &self.border_color,
        }
    }

    /// Copy of this palette with one color replaced.
    pub fn with(&self, key: ColorRef, color: Color) -> Self {
        let mut palette = self.clone();
        let slot = match key {
            ColorRef::PrimaryColor => &mut palette.primary_color,
            ColorRef::AccentColor => &mut palette.accent_color,
            ColorRef::ShopNameColor => &mut palette.shop_name_color,
            ColorRef::QuantityColor => &mut palette.quantity_color,
            ColorRef::ExtraInfoColor => &mut palette.extra_info_color,
            ColorRef::BorderColor => &mut palette.border_color,
        };
        *slot = color;
        palette
    }
}

impl Default for Palette {
    fn default() -> Self {
        ThemePreset::default().palette()
    }
}

/// Built-in palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// Gold on black
    Gold,
    /// Black and greys
    Classic,
    /// Pinks
    Rose,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 3] = [ThemePreset::Gold, ThemePreset::Classic, ThemePreset::Rose];

    pub fn palette(&self) -> Palette {
        match self {
            Self::Gold => Palette {
                primary_color: c("#D4AF37"),
                accent_color: c("#F59E0B"),
                shop_name_color: c("#FCD34D"),
                quantity_color: c("#FDE68A"),
                extra_info_color: c("#D1D5DB"),
                border_color: c("#B8860B"),
            },
            Self::Classic => Palette {
                primary_color: c("#111111"),
                accent_color: c("#444444"),
                shop_name_color: c("#333333"),
                quantity_color: c("#555555"),
                extra_info_color: c("#777777"),
                border_color: c("#000000"),
            },
            Self::Rose => Palette {
                primary_color: c("#9D174D"),
                accent_color: c("#DB2777"),
                shop_name_color: c("#BE185D"),
                quantity_color: c("#F472B6"),
                extra_info_color: c("#831843"),
                border_color: c("#F9A8D4"),
            },
        }
    }
}

impl Default for ThemePreset {
    fn default() -> Self {
        Self::Gold
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gold => write!(f, "gold"),
            Self::Classic => write!(f, "classic"),
            Self::Rose => write!(f, "rose"),
        }
    }
}

impl FromStr for ThemePreset {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gold" => Ok(Self::Gold),
            "classic" => Ok(Self::Classic),
            "rose" => Ok(Self::Rose),
            _ => Err(SettingsError::invalid("theme", format!("unknown preset '{s}'"))),
        }
    }
}

/// Theme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Theme {
    /// Palette comes from a built-in preset
    Preset { name: ThemePreset },
    /// Palette was edited by the user
    Custom,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Preset {
            name: ThemePreset::default(),
        }
    }
}

/// Symbolic font key carried by text elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontRole {
    PerfumeName,
    ShopName,
    Price,
    ExtraInfo,
}

impl FontRole {
    pub const ALL: [FontRole; 4] = [
        FontRole::PerfumeName,
        FontRole::ShopName,
        FontRole::Price,
        FontRole::ExtraInfo,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::PerfumeName => "perfumeName",
            Self::ShopName => "shopName",
            Self::Price => "price",
            Self::ExtraInfo => "extraInfo",
        }
    }
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FontRole {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace(['_', '-'], "").to_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.key().to_lowercase() == normalized)
            .ok_or_else(|| SettingsError::invalid("font", format!("unknown font role '{s}'")))
    }
}

/// Font family and global size for one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontChoice {
    pub family: String,
    pub size: f64,
}

impl FontChoice {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Selected fonts, one per role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSettings {
    pub perfume_name: FontChoice,
    pub shop_name: FontChoice,
    pub price: FontChoice,
    pub extra_info: FontChoice,
}

impl FontSettings {
    pub fn get(&self, role: FontRole) -> &FontChoice {
        match role {
            FontRole::PerfumeName => &self.perfume_name,
            FontRole::ShopName => &self.shop_name,
            FontRole::Price => &self.price,
            FontRole::ExtraInfo => &self.extra_info,
        }
    }

    fn get_mut(&mut self, role: FontRole) -> &mut FontChoice {
        match role {
            FontRole::PerfumeName => &mut self.perfume_name,
            FontRole::ShopName => &mut self.shop_name,
            FontRole::Price => &mut self.price,
            FontRole::ExtraInfo => &mut self.extra_info,
        }
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            perfume_name: FontChoice::new("Helvetica-Bold", 14.0),
            shop_name: FontChoice::new("Times-Italic", 10.0),
            price: FontChoice::new("Helvetica", 10.0),
            extra_info: FontChoice::new("Helvetica-Oblique", 9.0),
        }
    }
}

/// Palette, theme and fonts for the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StyleSettings {
    pub theme: Theme,
    pub palette: Palette,
    pub fonts: FontSettings,
}

impl StyleSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a preset. The whole palette is replaced.
    pub fn apply_preset(&mut self, preset: ThemePreset) {
        self.palette = preset.palette();
        self.theme = Theme::Preset { name: preset };
    }

    /// Replace the whole palette with user-chosen colors.
    pub fn set_custom_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.theme = Theme::Custom;
    }

    /// Change one color. The theme becomes `Custom`; the palette is swapped
    /// in one assignment so it is never observed half-updated.
    pub fn set_color(&mut self, key: ColorRef, value: &str) -> SettingsResult<()> {
        let color = Color::parse(value)?;
        let palette = self.palette.with(key, color);
        self.set_custom_palette(palette);
        Ok(())
    }

    pub fn set_font_family(&mut self, role: FontRole, family: &str) -> SettingsResult<()> {
        let family = family.trim();
        if family.is_empty() {
            return Err(SettingsError::invalid(
                format!("font.{role}"),
                "family must not be empty",
            ));
        }
        self.fonts.get_mut(role).family = family.to_string();
        Ok(())
    }

    /// Set the global size for a role, clamped to the supported range.
    pub fn set_font_size(&mut self, role: FontRole, size: f64) -> f64 {
        let size = clamp_font_size(size);
        self.fonts.get_mut(role).size = size;
        size
    }

    pub fn color(&self, key: ColorRef) -> &Color {
        self.palette.get(key)
    }

    pub fn font(&self, role: FontRole) -> &FontChoice {
        self.fonts.get(role)
    }

    /// Check values that may have been edited outside this API.
    pub fn validate(&self) -> SettingsResult<()> {
        for role in FontRole::ALL {
            let font = self.fonts.get(role);
            if font.family.trim().is_empty() {
                return Err(SettingsError::invalid(
                    format!("font.{role}"),
                    "family must not be empty",
                ));
            }
            if !(font.size.is_finite() && font.size > 0.0) {
                return Err(SettingsError::invalid(
                    format!("font.{role}"),
                    format!("size must be > 0, got {}", font.size),
                ));
            }
        }
        Ok(())
    }
}
