//! Window host abstraction for decoupling from the OS.
//!
//! The pipeline only talks to a [`WindowHost`]. The Win32 implementation lives in
//! the binary crate; [`ScriptedHost`] stands in for it in tests.

use std::cell::RefCell;

use crate::services::translator::{AccentPolicy, DwmAttribute};
use crate::utils::error::HostError;

/// Opaque identifier of a live top-level window.
///
/// Borrowed for the duration of one pipeline run; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub const fn from_raw(raw: isize) -> Self {
        WindowHandle(raw)
    }

    pub fn raw(&self) -> isize {
        self.0
    }
}

/// External collaborators consumed by the tool.
pub trait WindowHost {
    /// Looks up a top-level window by exact title.
    fn find_window(&self, title: &str) -> Result<Option<WindowHandle>, HostError>;

    /// OS build number, or `None` when it cannot be read.
    fn os_build_number(&self) -> Option<u32>;

    /// Applies the accent policy composition attribute.
    fn set_accent_policy(&self, window: WindowHandle, policy: &AccentPolicy) -> Result<(), HostError>;

    /// Sets a 32-bit DWM window attribute.
    fn set_dwm_attribute(&self, window: WindowHandle, attribute: DwmAttribute, value: u32) -> Result<(), HostError>;
}

/// A recorded host call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    FindWindow(String),
    OsBuildNumber,
    SetAccentPolicy(WindowHandle, AccentPolicy),
    SetDwmAttribute(WindowHandle, DwmAttribute, u32),
}

/// In-memory host with scripted answers. Records every call it receives.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    windows: Vec<(String, WindowHandle)>,
    build_number: Option<u32>,
    accent_error: Option<HostError>,
    attribute_errors: Vec<(DwmAttribute, HostError)>,
    calls: RefCell<Vec<HostCall>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, title: &str, handle: WindowHandle) -> Self {
        self.windows.push((title.to_string(), handle));
        self
    }

    pub fn with_build_number(mut self, build: u32) -> Self {
        self.build_number = Some(build);
        self
    }

    pub fn failing_accent(mut self, error: HostError) -> Self {
        self.accent_error = Some(error);
        self
    }

    pub fn failing_attribute(mut self, attribute: DwmAttribute, error: HostError) -> Self {
        self.attribute_errors.push((attribute, error));
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: HostCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl WindowHost for ScriptedHost {
    fn find_window(&self, title: &str) -> Result<Option<WindowHandle>, HostError> {
        self.record(HostCall::FindWindow(title.to_string()));
        Ok(self
            .windows
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, handle)| *handle))
    }

    fn os_build_number(&self) -> Option<u32> {
        self.record(HostCall::OsBuildNumber);
        self.build_number
    }

    fn set_accent_policy(&self, window: WindowHandle, policy: &AccentPolicy) -> Result<(), HostError> {
        self.record(HostCall::SetAccentPolicy(window, *policy));
        match &self.accent_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn set_dwm_attribute(&self, window: WindowHandle, attribute: DwmAttribute, value: u32) -> Result<(), HostError> {
        self.record(HostCall::SetDwmAttribute(window, attribute, value));
        match self.attribute_errors.iter().find(|(a, _)| *a == attribute) {
            Some((_, err)) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
