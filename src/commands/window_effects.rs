//! Window appearance command (native window effects)

use std::io::Write;

use acrylic_core::host::WindowHost;
use acrylic_core::services::{apply_style, probe, ApplyReport};
use acrylic_core::{parse_args, AppError, AppResult};

/// Usage text printed to stdout on a usage error.
pub const USAGE: &str = "\
Usage:
  acrylic-window -type \"blur|acrylic\"
                 -corner \"none|round|roundsmall\"
                 -title \"Window Title\"
                 [-opacity 0-255]
                 [-tintColor RRGGBB]
                 [-borderVisible true|false|1|0]
                 [-borderColor RRGGBB]

Examples:
  acrylic-window -type blur -corner none -title \"Notepad\" -opacity 128
  acrylic-window -type acrylic -corner roundsmall -title \"MyApp\" -tintColor 202020
  acrylic-window -type acrylic -corner round -title \"MyApp\" -borderColor FF8800 -borderVisible true
";

/// Validates the arguments, resolves the window and runs the pipeline.
///
/// Validation and lookup failures return before any attribute is touched.
pub fn apply_window_style<S: AsRef<str>>(
    args: &[S],
    host: &(impl WindowHost + ?Sized),
) -> AppResult<ApplyReport> {
    let request = parse_args(args)?;
    let title = request.window_title();

    let window = host
        .find_window(title)?
        .ok_or_else(|| AppError::WindowNotFound(title.to_string()))?;
    tracing::info!(title, hwnd = window.raw(), "window resolved");

    let caps = probe(host);
    apply_style(host, window, &request, caps)
}

/// Runs one invocation and returns the process exit code.
///
/// Errors and warnings go to `err`; usage text and the summary go to `out`.
pub fn run_cli<S: AsRef<str>>(
    args: &[S],
    host: &(impl WindowHost + ?Sized),
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    match apply_window_style(args, host) {
        Ok(report) => {
            for warning in &report.warnings {
                let _ = writeln!(err, "Warning: {}", warning);
            }
            let _ = writeln!(out, "{}", report.summary());
            0
        }
        Err(e) => {
            tracing::debug!(code = e.code(), "{}", e);
            let _ = writeln!(err, "Error: {}", e);
            if e.is_usage() {
                let _ = write!(out, "{}", USAGE);
            }
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acrylic_core::host::{HostCall, ScriptedHost, WindowHandle};
    use acrylic_core::services::DwmAttribute;
    use acrylic_core::HostError;

    const TITLE: &str = "Untitled - Notepad";

    fn host() -> ScriptedHost {
        ScriptedHost::new()
            .with_window(TITLE, WindowHandle::from_raw(42))
            .with_build_number(22631)
    }

    fn run(args: &[&str], host: &ScriptedHost) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_cli(args, host, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_success_prints_summary() {
        let host = host();
        let (code, out, err) = run(
            &["-type", "acrylic", "-corner", "round", "-title", TITLE, "-tintColor", "1E1E1E"],
            &host,
        );
        assert_eq!(code, 0);
        assert_eq!(
            out,
            "Applied acrylic (opacity=204, tint=1e1e1e), corner=round, border=visible color=ffffff to \"Untitled - Notepad\"\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_usage_error_prints_usage_and_skips_host() {
        let host = host();
        let (code, out, err) = run(&["-type", "blur", "-corner", "none"], &host);
        assert_eq!(code, 1);
        assert!(out.starts_with("Usage:"));
        assert!(err.starts_with("Error:"));
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_validation_error_has_no_usage() {
        let host = host();
        let (code, out, err) = run(
            &["-type", "blur", "-corner", "none", "-title", TITLE, "-opacity", "256"],
            &host,
        );
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "Error: -opacity must be between 0 and 255\n");
        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_window_not_found() {
        let host = host();
        let (code, out, err) = run(&["-type", "blur", "-corner", "none", "-title", "Missing"], &host);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "Error: Could not find window titled \"Missing\"\n");
        assert_eq!(host.calls(), vec![HostCall::FindWindow("Missing".into())]);
    }

    #[test]
    fn test_primary_failure_exits_one_without_summary() {
        let host = host().failing_accent(HostError::CallFailed {
            call: "SetWindowCompositionAttribute",
            detail: "Access is denied.".into(),
        });
        let (code, out, err) = run(&["-type", "blur", "-corner", "round", "-title", TITLE], &host);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.starts_with("Error: Failed to apply accent policy"));
        assert!(!host
            .calls()
            .iter()
            .any(|c| matches!(c, HostCall::SetDwmAttribute(..))));
    }

    #[test]
    fn test_corner_failure_is_warning_with_exit_zero() {
        let host = host().failing_attribute(
            DwmAttribute::WindowCornerPreference,
            HostError::CallFailed { call: "DwmSetWindowAttribute", detail: "E_INVALIDARG".into() },
        );
        let (code, out, err) = run(&["-type", "blur", "-corner", "round", "-title", TITLE], &host);
        assert_eq!(code, 0);
        assert!(err.starts_with("Warning: Corner style not supported on this OS"));
        assert!(out.contains("corner=round (not applied)"));
    }

    #[test]
    fn test_old_build_warns_about_border() {
        let host = ScriptedHost::new()
            .with_window(TITLE, WindowHandle::from_raw(42))
            .with_build_number(19045);
        let (code, out, err) = run(&["-type", "blur", "-corner", "none", "-title", TITLE], &host);
        assert_eq!(code, 0);
        assert!(err.contains("Warning: Border color requires Windows 11"));
        assert!(out.contains("border=visible color=ffffff (unsupported)"));
    }

    #[test]
    fn test_lookup_host_failure() {
        struct NoDesktop;
        impl WindowHost for NoDesktop {
            fn find_window(&self, _: &str) -> Result<Option<WindowHandle>, HostError> {
                Err(HostError::Unsupported("window styling on this platform".into()))
            }
            fn os_build_number(&self) -> Option<u32> {
                None
            }
            fn set_accent_policy(
                &self,
                _: WindowHandle,
                _: &acrylic_core::services::AccentPolicy,
            ) -> Result<(), HostError> {
                unreachable!()
            }
            fn set_dwm_attribute(&self, _: WindowHandle, _: DwmAttribute, _: u32) -> Result<(), HostError> {
                unreachable!()
            }
        }

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_cli(&["-type", "blur", "-corner", "none", "-title", TITLE], &NoDesktop, &mut out, &mut err);
        assert_eq!(code, 1);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: window styling on this platform not available\n"
        );
    }
}
