//! Attribute translator.
//!
//! Pure mappings from a validated [`WindowStyleRequest`] to the exact payloads the
//! compositor calls take. Every function is total and deterministic.

use crate::models::{BlurMode, CornerStyle, RgbColor, WindowStyleRequest};

/// `WCA_ACCENT_POLICY` composition attribute tag.
pub const WCA_ACCENT_POLICY: u32 = 19;

/// Accent states used by the tool (`ACCENT_STATE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AccentState {
    EnableBlurBehind = 3,
    EnableAcrylicBlurBehind = 4,
}

/// `ACCENT_POLICY` as laid out in memory by the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct AccentPolicy {
    pub accent_state: u32,
    pub accent_flags: u32,
    /// Opacity in bits 31-24, RGB below.
    pub gradient_color: u32,
    pub animation_id: u32,
}

/// DWM window attributes this tool sets (`DWMWINDOWATTRIBUTE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DwmAttribute {
    WindowCornerPreference = 33,
    BorderColor = 34,
}

impl DwmAttribute {
    pub fn id(&self) -> u32 {
        *self as u32
    }
}

/// `DWM_WINDOW_CORNER_PREFERENCE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CornerPreference {
    DoNotRound = 1,
    Round = 2,
    RoundSmall = 3,
}

impl CornerPreference {
    pub fn code(&self) -> u32 {
        *self as u32
    }
}

/// Border colour in `0xAABBGGRR` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderColorValue(u32);

impl BorderColorValue {
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Recovers the RGB colour that was packed.
    pub fn rgb(&self) -> RgbColor {
        RgbColor::from_channels(self.0 as u8, (self.0 >> 8) as u8, (self.0 >> 16) as u8)
    }
}

pub fn accent_state(mode: BlurMode) -> AccentState {
    match mode {
        BlurMode::Blur => AccentState::EnableBlurBehind,
        BlurMode::Acrylic => AccentState::EnableAcrylicBlurBehind,
    }
}

/// Opacity in the high byte, tint RGB unchanged below it.
pub fn gradient_color(opacity: u8, tint: RgbColor) -> u32 {
    (opacity as u32) << 24 | tint.value()
}

pub fn accent_policy(request: &WindowStyleRequest) -> AccentPolicy {
    AccentPolicy {
        accent_state: accent_state(request.mode()) as u32,
        accent_flags: 0,
        gradient_color: gradient_color(request.opacity(), request.tint_color()),
        animation_id: 0,
    }
}

pub fn corner_preference(style: CornerStyle) -> CornerPreference {
    match style {
        CornerStyle::None => CornerPreference::DoNotRound,
        CornerStyle::Round => CornerPreference::Round,
        CornerStyle::RoundSmall => CornerPreference::RoundSmall,
    }
}

/// Alpha is `0xFF` when visible, `0x00` otherwise. RGB bytes are reversed into BGR.
pub fn border_color_value(visible: bool, color: RgbColor) -> BorderColorValue {
    let alpha: u32 = if visible { 0xFF } else { 0x00 };
    BorderColorValue(
        alpha << 24 | (color.blue() as u32) << 16 | (color.green() as u32) << 8 | color.red() as u32,
    )
}
