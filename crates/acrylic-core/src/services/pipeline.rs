//! Application pipeline.
//!
//! Runs the attribute calls against one resolved window, in order:
//!
//! 1. accent policy (blur / acrylic + opacity + tint). Failure is fatal.
//! 2. corner preference. Failure is a warning unless the style is `none`.
//! 3. border colour, when the probe reports support. Failure is a warning.
//!
//! Nothing is retried or rolled back. A window styled by step 1 stays styled
//! even if a later step fails.

use std::fmt;

use serde::Serialize;

use crate::host::{WindowHandle, WindowHost};
use crate::models::{CornerStyle, WindowStyleRequest};
use crate::services::capability::{Capabilities, BORDER_COLOR_MIN_BUILD};
use crate::services::translator::{self, DwmAttribute};
use crate::utils::error::{AppError, AppResult};

/// Result of one enhancement attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeOutcome {
    Applied,
    Failed,
    Unsupported,
}

impl AttributeOutcome {
    fn suffix(&self) -> &'static str {
        match self {
            AttributeOutcome::Applied => "",
            AttributeOutcome::Failed => " (not applied)",
            AttributeOutcome::Unsupported => " (unsupported)",
        }
    }
}

/// Non-fatal problem with an enhancement attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub attribute: &'static str,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What the pipeline did to the window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyReport {
    pub request: WindowStyleRequest,
    pub capabilities: Capabilities,
    pub corner: AttributeOutcome,
    pub border: AttributeOutcome,
    pub warnings: Vec<Warning>,
}

impl ApplyReport {
    /// One-line summary of the requested attributes and their resolved values.
    pub fn summary(&self) -> String {
        let req = &self.request;
        let border = if req.border_visible() { "visible" } else { "hidden" };
        format!(
            "Applied {} (opacity={}, tint={}), corner={}{}, border={} color={}{} to \"{}\"",
            req.mode(),
            req.opacity(),
            req.tint_color(),
            req.corner_style(),
            self.corner.suffix(),
            border,
            req.border_color(),
            self.border.suffix(),
            req.window_title(),
        )
    }
}

fn apply_corner(
    host: &(impl WindowHost + ?Sized),
    window: WindowHandle,
    style: CornerStyle,
    caps: &Capabilities,
    warnings: &mut Vec<Warning>,
) -> AttributeOutcome {
    if !caps.corner_supported {
        if style != CornerStyle::None {
            warnings.push(Warning {
                attribute: "corner",
                message: "Corner style not supported on this OS".to_string(),
            });
        }
        return AttributeOutcome::Unsupported;
    }

    let pref = translator::corner_preference(style);
    match host.set_dwm_attribute(window, DwmAttribute::WindowCornerPreference, pref.code()) {
        Ok(()) => AttributeOutcome::Applied,
        Err(e) => {
            // Some builds reject DWMWCP_DONOTROUND harmlessly; only complain about real styles.
            if style != CornerStyle::None {
                warnings.push(Warning {
                    attribute: "corner",
                    message: format!("Corner style not supported on this OS ({e})"),
                });
            } else {
                tracing::debug!(error = %e, "corner preference \"none\" rejected");
            }
            AttributeOutcome::Failed
        }
    }
}

fn apply_border(
    host: &(impl WindowHost + ?Sized),
    window: WindowHandle,
    request: &WindowStyleRequest,
    caps: &Capabilities,
    warnings: &mut Vec<Warning>,
) -> AttributeOutcome {
    if !caps.border_color_supported {
        warnings.push(Warning {
            attribute: "border",
            message: format!(
                "Border color requires Windows 11 (build {BORDER_COLOR_MIN_BUILD}) or later; skipped"
            ),
        });
        return AttributeOutcome::Unsupported;
    }

    let packed = translator::border_color_value(request.border_visible(), request.border_color());
    match host.set_dwm_attribute(window, DwmAttribute::BorderColor, packed.value()) {
        Ok(()) => AttributeOutcome::Applied,
        Err(e) => {
            warnings.push(Warning {
                attribute: "border",
                message: format!("Failed to apply border color ({e})"),
            });
            AttributeOutcome::Failed
        }
    }
}

/// Applies every requested attribute to `window`.
///
/// Only a failed accent policy is returned as an error; later failures end up
/// as warnings in the report.
pub fn apply_style(
    host: &(impl WindowHost + ?Sized),
    window: WindowHandle,
    request: &WindowStyleRequest,
    caps: Capabilities,
) -> AppResult<ApplyReport> {
    let policy = translator::accent_policy(request);
    host.set_accent_policy(window, &policy).map_err(|e| {
        tracing::debug!(error = %e, "accent policy rejected");
        AppError::Application(e)
    })?;
    tracing::info!(
        state = policy.accent_state,
        gradient = %format!("{:#010x}", policy.gradient_color),
        "accent policy applied"
    );

    let mut warnings = Vec::new();
    let corner = apply_corner(host, window, request.corner_style(), &caps, &mut warnings);
    let border = apply_border(host, window, request, &caps, &mut warnings);

    for warning in &warnings {
        tracing::debug!(attribute = warning.attribute, "{}", warning.message);
    }

    let report = ApplyReport {
        request: request.clone(),
        capabilities: caps,
        corner,
        border,
        warnings,
    };

    match serde_json::to_string(&report) {
        Ok(json) => tracing::debug!(report = %json, "pipeline finished"),
        Err(e) => tracing::error!("Failed to serialize apply report: {}", e),
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::parse_args;
    use crate::host::{HostCall, ScriptedHost};
    use crate::services::translator::AccentPolicy;
    use crate::utils::error::HostError;

    const HWND: WindowHandle = WindowHandle::from_raw(0x1234);

    fn request(extra: &[&str]) -> WindowStyleRequest {
        let mut tokens = vec!["-type", "acrylic", "-corner", "round", "-title", "Target"];
        tokens.extend_from_slice(extra);
        parse_args(tokens.as_slice()).unwrap()
    }

    fn full_caps() -> Capabilities {
        Capabilities { corner_supported: true, border_color_supported: true }
    }

    fn failure(call: &'static str) -> HostError {
        HostError::CallFailed { call, detail: "0x80070057".to_string() }
    }

    #[test]
    fn test_all_attributes_applied_in_order() {
        let host = ScriptedHost::new();
        let req = request(&["-tintColor", "FF0000", "-opacity", "128", "-borderColor", "00FF88"]);
        let report = apply_style(&host, HWND, &req, full_caps()).unwrap();

        assert_eq!(report.corner, AttributeOutcome::Applied);
        assert_eq!(report.border, AttributeOutcome::Applied);
        assert!(report.warnings.is_empty());
        assert_eq!(
            host.calls(),
            vec![
                HostCall::SetAccentPolicy(
                    HWND,
                    AccentPolicy {
                        accent_state: 4,
                        accent_flags: 0,
                        gradient_color: 0x80FF_0000,
                        animation_id: 0,
                    }
                ),
                HostCall::SetDwmAttribute(HWND, DwmAttribute::WindowCornerPreference, 2),
                HostCall::SetDwmAttribute(HWND, DwmAttribute::BorderColor, 0xFF88_FF00),
            ]
        );
    }

    #[test]
    fn test_accent_failure_is_fatal_and_stops() {
        let host = ScriptedHost::new().failing_accent(failure("SetWindowCompositionAttribute"));
        let err = apply_style(&host, HWND, &request(&[]), full_caps()).unwrap_err();

        assert!(matches!(err, AppError::Application(_)));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(host.calls().len(), 1);
    }

    #[test]
    fn test_missing_symbol_is_fatal() {
        let host = ScriptedHost::new()
            .failing_accent(HostError::Unsupported("SetWindowCompositionAttribute".into()));
        let err = apply_style(&host, HWND, &request(&[]), full_caps()).unwrap_err();
        assert!(err.to_string().contains("not available"));
    }

    #[test]
    fn test_corner_failure_is_warning() {
        let host = ScriptedHost::new()
            .failing_attribute(DwmAttribute::WindowCornerPreference, failure("DwmSetWindowAttribute"));
        let report = apply_style(&host, HWND, &request(&[]), full_caps()).unwrap();

        assert_eq!(report.corner, AttributeOutcome::Failed);
        assert_eq!(report.border, AttributeOutcome::Applied);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].attribute, "corner");
        assert!(report.summary().contains("corner=round (not applied)"));
    }

    #[test]
    fn test_corner_none_failure_is_silent() {
        let host = ScriptedHost::new()
            .failing_attribute(DwmAttribute::WindowCornerPreference, failure("DwmSetWindowAttribute"));
        let req = parse_args(&["-type", "blur", "-corner", "none", "-title", "Target"]).unwrap();
        let report = apply_style(&host, HWND, &req, full_caps()).unwrap();

        assert_eq!(report.corner, AttributeOutcome::Failed);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_corner_still_attempted_for_none() {
        let host = ScriptedHost::new();
        let req = parse_args(&["-type", "blur", "-corner", "none", "-title", "Target"]).unwrap();
        apply_style(&host, HWND, &req, full_caps()).unwrap();
        assert!(host
            .calls()
            .contains(&HostCall::SetDwmAttribute(HWND, DwmAttribute::WindowCornerPreference, 1)));
    }

    #[test]
    fn test_border_skipped_when_unsupported() {
        let host = ScriptedHost::new();
        let caps = Capabilities { corner_supported: true, border_color_supported: false };
        let report = apply_style(&host, HWND, &request(&[]), caps).unwrap();

        assert_eq!(report.border, AttributeOutcome::Unsupported);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].attribute, "border");
        assert!(!host
            .calls()
            .iter()
            .any(|c| matches!(c, HostCall::SetDwmAttribute(_, DwmAttribute::BorderColor, _))));
    }

    #[test]
    fn test_border_failure_is_warning() {
        let host = ScriptedHost::new()
            .failing_attribute(DwmAttribute::BorderColor, failure("DwmSetWindowAttribute"));
        let report = apply_style(&host, HWND, &request(&[]), full_caps()).unwrap();

        assert_eq!(report.corner, AttributeOutcome::Applied);
        assert_eq!(report.border, AttributeOutcome::Failed);
        assert!(report.warnings[0].message.starts_with("Failed to apply border color"));
    }

    #[test]
    fn test_corner_unsupported_capability() {
        let host = ScriptedHost::new();
        let caps = Capabilities { corner_supported: false, border_color_supported: true };
        let report = apply_style(&host, HWND, &request(&[]), caps).unwrap();

        assert_eq!(report.corner, AttributeOutcome::Unsupported);
        assert!(!host.calls().iter().any(|c| matches!(
            c,
            HostCall::SetDwmAttribute(_, DwmAttribute::WindowCornerPreference, _)
        )));
    }

    #[test]
    fn test_summary_format() {
        let host = ScriptedHost::new();
        let req = request(&["-opacity", "10", "-tintColor", "0a0B0c", "-borderVisible", "0", "-borderColor", "FF"]);
        let report = apply_style(&host, HWND, &req, full_caps()).unwrap();
        assert_eq!(
            report.summary(),
            "Applied acrylic (opacity=10, tint=0a0b0c), corner=round, border=hidden color=0000ff to \"Target\""
        );
    }
}
