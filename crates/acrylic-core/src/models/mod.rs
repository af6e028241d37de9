//! acrylic-window 数据模型模块

pub mod request;

// 重新导出常用类型
pub use request::{BlurMode, CornerStyle, RgbColor, WindowStyleRequest, DEFAULT_OPACITY};
