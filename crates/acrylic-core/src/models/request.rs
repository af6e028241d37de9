//! 窗口样式请求数据模型

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default accent opacity (~80%).
pub const DEFAULT_OPACITY: u8 = 204;

/// 透明模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurMode {
    Blur,
    Acrylic,
}

impl BlurMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlurMode::Blur => "blur",
            BlurMode::Acrylic => "acrylic",
        }
    }

    /// Case-insensitive lookup of a `-type` value.
    pub fn from_name(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("blur") {
            Some(BlurMode::Blur)
        } else if value.eq_ignore_ascii_case("acrylic") {
            Some(BlurMode::Acrylic)
        } else {
            None
        }
    }
}

impl fmt::Display for BlurMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 圆角样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerStyle {
    None,
    Round,
    RoundSmall,
}

impl CornerStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CornerStyle::None => "none",
            CornerStyle::Round => "round",
            CornerStyle::RoundSmall => "roundsmall",
        }
    }

    /// Case-insensitive lookup of a `-corner` value.
    pub fn from_name(value: &str) -> Option<Self> {
        [CornerStyle::None, CornerStyle::Round, CornerStyle::RoundSmall]
            .into_iter()
            .find(|style| value.eq_ignore_ascii_case(style.as_str()))
    }
}

impl fmt::Display for CornerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 24-bit RGB colour, stored as `0x00RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct RgbColor(u32);

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor(0x00FF_FFFF);

    /// Builds a colour from a packed value. Returns `None` above `0xFFFFFF`.
    pub fn new(rgb: u32) -> Option<Self> {
        (rgb <= 0x00FF_FFFF).then_some(RgbColor(rgb))
    }

    pub fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        RgbColor((red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Parses `RRGGBB` style hex: one to six base-16 digits, no prefix.
    pub fn parse_hex(value: &str) -> Option<Self> {
        if value.is_empty() || value.len() > 6 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(value, 16).ok().and_then(Self::new)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(&self) -> u8 {
        self.0 as u8
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        RgbColor::WHITE
    }
}

/// Lower-case, zero-padded to six digits.
impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_string()
    }
}

/// Validated window style configuration.
///
/// Only [`crate::args::parse_args`] builds one, after every field has been checked.
/// Fields are read-only from the outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStyleRequest {
    mode: BlurMode,
    corner_style: CornerStyle,
    window_title: String,
    opacity: u8,
    tint_color: RgbColor,
    border_visible: bool,
    border_color: RgbColor,
}

impl WindowStyleRequest {
    /// Request with the optional fields at their defaults.
    pub(crate) fn with_defaults(mode: BlurMode, corner_style: CornerStyle, window_title: String) -> Self {
        Self {
            mode,
            corner_style,
            window_title,
            opacity: DEFAULT_OPACITY,
            tint_color: RgbColor::WHITE,
            border_visible: true,
            border_color: RgbColor::WHITE,
        }
    }

    pub(crate) fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity;
    }

    pub(crate) fn set_tint_color(&mut self, color: RgbColor) {
        self.tint_color = color;
    }

    pub(crate) fn set_border_visible(&mut self, visible: bool) {
        self.border_visible = visible;
    }

    pub(crate) fn set_border_color(&mut self, color: RgbColor) {
        self.border_color = color;
    }

    pub fn mode(&self) -> BlurMode {
        self.mode
    }

    pub fn corner_style(&self) -> CornerStyle {
        self.corner_style
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    pub fn tint_color(&self) -> RgbColor {
        self.tint_color
    }

    pub fn border_visible(&self) -> bool {
        self.border_visible
    }

    pub fn border_color(&self) -> RgbColor {
        self.border_color
    }
}
