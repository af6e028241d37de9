//! acrylic-window 错误处理模块
//!
//! 定义应用程序错误类型

use thiserror::Error;

/// Failure reported by a [`crate::host::WindowHost`] call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The API is missing on this system (unresolved symbol, unsupported platform).
    #[error("{0} not available")]
    Unsupported(String),

    /// The OS call ran and reported failure.
    #[error("{call} failed: {detail}")]
    CallFailed { call: &'static str, detail: String },
}

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// Wrong token count, unknown flag, missing value or missing required flag.
    #[error("{0}")]
    Usage(String),

    /// A recognised flag carried a bad value.
    #[error("-{flag} {expected}")]
    Validation { flag: &'static str, expected: String },

    /// No top-level window has the requested title.
    #[error("Could not find window titled \"{0}\"")]
    WindowNotFound(String),

    /// The accent policy (primary attribute) could not be applied.
    #[error("Failed to apply accent policy: {0}")]
    Application(#[source] HostError),

    /// Host failure outside the application pipeline (e.g. window lookup).
    #[error(transparent)]
    Host(#[from] HostError),
}

impl AppError {
    /// Stable code used in log records.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Usage(_) => "E_USAGE",
            AppError::Validation { .. } => "E_VALIDATION",
            AppError::WindowNotFound(_) => "E_WINDOW_NOT_FOUND",
            AppError::Application(_) => "E_APPLY_FAILED",
            AppError::Host(_) => "E_HOST",
        }
    }

    /// Usage errors are followed by the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::Usage(_))
    }

    /// Process exit code. Every error exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// 应用程序结果类型别名
pub type AppResult<T> = Result<T, AppError>;
