//! acrylic-window 业务逻辑服务
//!
//! 包含能力探测、属性转换和应用流程

pub mod capability;
pub mod pipeline;
pub mod translator;

pub use capability::{probe, Capabilities, BORDER_COLOR_MIN_BUILD};
pub use pipeline::{apply_style, ApplyReport, AttributeOutcome, Warning};
pub use translator::{
    AccentPolicy, AccentState, BorderColorValue, CornerPreference, DwmAttribute, WCA_ACCENT_POLICY,
};
