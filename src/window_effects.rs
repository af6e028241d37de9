//! Native window effects
//!
//! [`PlatformHost`] is the [`WindowHost`] used at runtime. On Windows it calls
//! `FindWindowW`, `SetWindowCompositionAttribute` (resolved from user32.dll at
//! runtime) and `DwmSetWindowAttribute`. Everywhere else every call reports
//! "unsupported".

#[cfg(target_os = "windows")]
pub use win32::Win32Host as PlatformHost;

#[cfg(not(target_os = "windows"))]
pub use unsupported::UnsupportedHost as PlatformHost;

#[cfg(target_os = "windows")]
mod win32 {
    use std::ffi::c_void;
    use std::mem::size_of;

    use acrylic_core::host::{WindowHandle, WindowHost};
    use acrylic_core::services::{AccentPolicy, DwmAttribute, WCA_ACCENT_POLICY};
    use acrylic_core::HostError;
    use anyhow::Context;
    use windows::core::{w, PCWSTR};
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};
    use windows::Win32::System::Registry::{RegGetValueW, HKEY_LOCAL_MACHINE, RRF_RT_REG_SZ};
    use windows::Win32::UI::WindowsAndMessaging::FindWindowW;

    const SET_WCA_SYMBOL: &str = "SetWindowCompositionAttribute";

    /// `WINDOWCOMPOSITIONATTRIBDATA`
    #[repr(C)]
    struct WindowCompositionAttribData {
        attrib: u32,
        pv_data: *mut c_void,
        cb_data: usize,
    }

    type SetWindowCompositionAttribute =
        unsafe extern "system" fn(hwnd: *mut c_void, data: *mut WindowCompositionAttribData) -> i32;

    /// user32.dll 句柄和未公开的合成 API
    struct CompositionApi {
        _lib: libloading::Library,
        set_window_composition_attribute: SetWindowCompositionAttribute,
    }

    /// Loads user32.dll and resolves the undocumented composition entry point.
    fn load_composition_api() -> Result<CompositionApi, String> {
        let lib = unsafe { libloading::Library::new("user32.dll") }
            .map_err(|e| format!("user32.dll: {}", e))?;
        let set_window_composition_attribute: SetWindowCompositionAttribute = unsafe {
            *lib.get(b"SetWindowCompositionAttribute\0")
                .map_err(|e| format!("{}: {}", SET_WCA_SYMBOL, e))?
        };
        Ok(CompositionApi {
            _lib: lib,
            set_window_composition_attribute,
        })
    }

    fn hwnd(window: WindowHandle) -> HWND {
        HWND(window.raw() as *mut c_void)
    }

    fn read_build_number() -> anyhow::Result<u32> {
        let mut buf = [0u16; 32];
        let mut size = (buf.len() * size_of::<u16>()) as u32;
        unsafe {
            RegGetValueW(
                HKEY_LOCAL_MACHINE,
                w!("SOFTWARE\\Microsoft\\Windows NT\\CurrentVersion"),
                w!("CurrentBuildNumber"),
                RRF_RT_REG_SZ,
                None,
                Some(buf.as_mut_ptr() as *mut c_void),
                Some(&mut size as *mut u32),
            )
        }
        .ok()
        .context("failed to read CurrentBuildNumber from the registry")?;

        let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
        let text = String::from_utf16(&buf[..len]).context("CurrentBuildNumber is not valid UTF-16")?;
        text.trim()
            .parse()
            .with_context(|| format!("unexpected CurrentBuildNumber {:?}", text))
    }

    /// Win32 window host. The composition symbol is resolved once, on construction.
    pub struct Win32Host {
        composition: Option<CompositionApi>,
    }

    impl Win32Host {
        pub fn new() -> Self {
            let composition = match load_composition_api() {
                Ok(api) => {
                    tracing::debug!("{} resolved", SET_WCA_SYMBOL);
                    Some(api)
                }
                Err(e) => {
                    tracing::debug!("composition API unavailable: {}", e);
                    None
                }
            };
            Self { composition }
        }
    }

    impl WindowHost for Win32Host {
        fn find_window(&self, title: &str) -> Result<Option<WindowHandle>, HostError> {
            let mut title_wide: Vec<u16> = title.encode_utf16().collect();
            title_wide.push(0);

            match unsafe { FindWindowW(PCWSTR::null(), PCWSTR(title_wide.as_ptr())) } {
                Ok(found) if !found.is_invalid() => Ok(Some(WindowHandle::from_raw(found.0 as isize))),
                Ok(_) => Ok(None),
                Err(e) => {
                    tracing::debug!(title, error = %e, "FindWindowW returned no window");
                    Ok(None)
                }
            }
        }

        fn os_build_number(&self) -> Option<u32> {
            match read_build_number() {
                Ok(build) => Some(build),
                Err(e) => {
                    tracing::warn!("{:#}", e);
                    None
                }
            }
        }

        fn set_accent_policy(&self, window: WindowHandle, policy: &AccentPolicy) -> Result<(), HostError> {
            let api = self
                .composition
                .as_ref()
                .ok_or_else(|| HostError::Unsupported(SET_WCA_SYMBOL.to_string()))?;

            let mut policy = *policy;
            let mut data = WindowCompositionAttribData {
                attrib: WCA_ACCENT_POLICY,
                pv_data: &mut policy as *mut AccentPolicy as *mut c_void,
                cb_data: size_of::<AccentPolicy>(),
            };

            let ok = unsafe { (api.set_window_composition_attribute)(hwnd(window).0, &mut data) };
            if ok == 0 {
                return Err(HostError::CallFailed {
                    call: "SetWindowCompositionAttribute",
                    detail: std::io::Error::last_os_error().to_string(),
                });
            }
            Ok(())
        }

        fn set_dwm_attribute(&self, window: WindowHandle, attribute: DwmAttribute, value: u32) -> Result<(), HostError> {
            unsafe {
                DwmSetWindowAttribute(
                    hwnd(window),
                    DWMWINDOWATTRIBUTE(attribute.id() as i32),
                    &value as *const u32 as *const c_void,
                    size_of::<u32>() as u32,
                )
            }
            .map_err(|e| HostError::CallFailed {
                call: "DwmSetWindowAttribute",
                detail: e.to_string(),
            })
        }
    }
}

#[cfg(not(target_os = "windows"))]
mod unsupported {
    use acrylic_core::host::{WindowHandle, WindowHost};
    use acrylic_core::services::{AccentPolicy, DwmAttribute};
    use acrylic_core::HostError;

    fn unsupported() -> HostError {
        HostError::Unsupported("window styling on this platform".to_string())
    }

    /// Host for platforms without a desktop compositor API.
    pub struct UnsupportedHost;

    impl UnsupportedHost {
        pub fn new() -> Self {
            UnsupportedHost
        }
    }

    impl WindowHost for UnsupportedHost {
        fn find_window(&self, _title: &str) -> Result<Option<WindowHandle>, HostError> {
            Err(unsupported())
        }

        fn os_build_number(&self) -> Option<u32> {
            None
        }

        fn set_accent_policy(&self, _window: WindowHandle, _policy: &AccentPolicy) -> Result<(), HostError> {
            Err(unsupported())
        }

        fn set_dwm_attribute(&self, _window: WindowHandle, _attribute: DwmAttribute, _value: u32) -> Result<(), HostError> {
            Err(unsupported())
        }
    }

}
