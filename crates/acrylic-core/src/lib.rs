//! acrylic-window Core Library
//!
//! Platform-independent logic for styling a running top-level window with the
//! compositor's blur/acrylic accent, corner rounding and border colour.
//!
//! # Architecture
//!
//! - `args`: command-line argument model producing a [`WindowStyleRequest`]
//! - `models`: request data types (mode, corner style, colours)
//! - `host`: [`WindowHost`] trait for the OS collaborators, plus [`ScriptedHost`]
//! - `services`: capability probe, attribute translator and application pipeline
//! - `utils`: error handling
//!
//! # Example
//!
//! ```
//! use acrylic_core::{args::parse_args, host::{ScriptedHost, WindowHandle, WindowHost}, services};
//!
//! let request = parse_args(&["-type", "acrylic", "-corner", "round", "-title", "Notepad"]).unwrap();
//! let host = ScriptedHost::new()
//!     .with_window("Notepad", WindowHandle::from_raw(1))
//!     .with_build_number(22631);
//!
//! let window = host.find_window(request.window_title()).unwrap().unwrap();
//! let caps = services::probe(&host);
//! let report = services::apply_style(&host, window, &request, caps).unwrap();
//! assert!(report.warnings.is_empty());
//! ```

pub mod args;
pub mod host;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use args::parse_args;
pub use host::{HostCall, ScriptedHost, WindowHandle, WindowHost};
pub use models::{BlurMode, CornerStyle, RgbColor, WindowStyleRequest};
pub use services::{apply_style, probe, ApplyReport, AttributeOutcome, Capabilities, Warning};
pub use utils::{AppError, AppResult, HostError};
