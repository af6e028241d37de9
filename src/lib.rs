//! acrylic-window - Windows 窗口透明/圆角/边框样式工具
//!
//! Finds a top-level window by title and applies blur/acrylic, corner rounding
//! and border colour through the desktop compositor.

pub mod commands;
pub mod window_effects;

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Initialises diagnostics on stderr. `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    tracing::debug!(?args, "acrylic-window starting");

    let host = window_effects::PlatformHost::new();
    let code = commands::run_cli(args.as_slice(), &host, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}
