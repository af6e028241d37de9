//! acrylic-window 工具模块

pub mod error;

pub use error::*;
