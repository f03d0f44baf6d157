#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::*;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use linux::*;

use anyhow::Result;

/// Reads the active text selection out of whatever application has focus.
pub trait TextSelector: Send + Sync {
    /// Returns `Ok(None)` when nothing is selected or the selection cannot
    /// be read on this platform; that is not an error.
    fn get_selected_text(&self) -> Result<Option<String>>;
    fn is_supported(&self) -> bool;
}

pub fn get_text_selector() -> Box<dyn TextSelector> {
    #[cfg(target_os = "macos")]
    {
        Box::new(MacOsTextSelector::new())
    }
    #[cfg(target_os = "linux")]
    {
        Box::new(LinuxTextSelector::new())
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        Box::new(UnsupportedTextSelector)
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub struct UnsupportedTextSelector;

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
impl TextSelector for UnsupportedTextSelector {
    fn get_selected_text(&self) -> Result<Option<String>> {
        tracing::warn!("Selection reading not supported on this platform");
        Ok(None)
    }

    fn is_supported(&self) -> bool {
        false
    }
}
