//! Capability probe
//!
//! 运行时判断当前系统支持哪些窗口属性

use serde::Serialize;

use crate::host::WindowHost;

/// First build shipping `DWMWA_BORDER_COLOR` (Windows 11 21H2).
pub const BORDER_COLOR_MIN_BUILD: u32 = 22000;

/// Which enhancement attributes the running OS accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub corner_supported: bool,
    pub border_color_supported: bool,
}

impl Capabilities {
    /// Classifies a build number. An unknown build gets no border colour.
    ///
    /// Corner preference is always attempted; older systems reject the call itself.
    pub fn from_build(build: Option<u32>) -> Self {
        Self {
            corner_supported: true,
            border_color_supported: build.is_some_and(|b| b >= BORDER_COLOR_MIN_BUILD),
        }
    }
}

/// Queries the host once. Not cached; every run probes again.
pub fn probe(host: &(impl WindowHost + ?Sized)) -> Capabilities {
    let build = host.os_build_number();
    let caps = Capabilities::from_build(build);
    tracing::debug!(
        build = ?build,
        corner = caps.corner_supported,
        border_color = caps.border_color_supported,
        "capability probe"
    );
    caps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCall, ScriptedHost};

    #[test]
    fn test_border_threshold() {
        assert!(!Capabilities::from_build(Some(19045)).border_color_supported);
        assert!(!Capabilities::from_build(Some(21999)).border_color_supported);
        assert!(Capabilities::from_build(Some(22000)).border_color_supported);
        assert!(Capabilities::from_build(Some(26100)).border_color_supported);
    }

    #[test]
    fn test_unknown_build_is_unsupported() {
        let caps = Capabilities::from_build(None);
        assert!(!caps.border_color_supported);
        assert!(caps.corner_supported);
    }

    #[test]
    fn test_probe_queries_host_every_time() {
        let host = ScriptedHost::new().with_build_number(22631);
        assert!(probe(&host).border_color_supported);
        assert!(probe(&host).border_color_supported);
        assert_eq!(host.calls(), vec![HostCall::OsBuildNumber, HostCall::OsBuildNumber]);
    }
}
