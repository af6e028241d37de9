//! acrylic-window 命令模块

pub mod window_effects;

pub use window_effects::*;
