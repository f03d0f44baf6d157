use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Result;

use super::TextSelector;

type CGEventRef = *mut std::ffi::c_void;

extern "C" {
    fn AXIsProcessTrusted() -> bool;
    fn CGEventCreateKeyboardEvent(
        source: *const std::ffi::c_void,
        virtual_key: u16,
        key_down: bool,
    ) -> CGEventRef;
    fn CGEventSetFlags(event: CGEventRef, flags: u64);
    fn CGEventPost(tap: u32, event: CGEventRef);
    fn CFRelease(cf: *const std::ffi::c_void);
}

const K_VK_C: u16 = 8;
const K_CG_EVENT_FLAG_MASK_COMMAND: u64 = 1 << 20;
const K_CG_HID_EVENT_TAP: u32 = 0;

fn simulate_cmd_c() -> Result<()> {
    unsafe {
        let key_down = CGEventCreateKeyboardEvent(std::ptr::null(), K_VK_C, true);
        if key_down.is_null() {
            anyhow::bail!("Failed to create CGEvent for Cmd+C — grant Accessibility permission");
        }
        CGEventSetFlags(key_down, K_CG_EVENT_FLAG_MASK_COMMAND);
        CGEventPost(K_CG_HID_EVENT_TAP, key_down);

        let key_up = CGEventCreateKeyboardEvent(std::ptr::null(), K_VK_C, false);
        if !key_up.is_null() {
            CGEventSetFlags(key_up, K_CG_EVENT_FLAG_MASK_COMMAND);
            CGEventPost(K_CG_HID_EVENT_TAP, key_up);
            CFRelease(key_up as *const _);
        }

        CFRelease(key_down as *const _);
    }
    Ok(())
}

fn read_clipboard() -> Result<String> {
    let output = Command::new("pbpaste").env("LANG", "en_US.UTF-8").output()?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn write_clipboard(text: &str) -> Result<()> {
    let mut child = Command::new("pbcopy")
        .env("LANG", "en_US.UTF-8")
        .stdin(Stdio::piped())
        .spawn()?;
    if let Some(ref mut stdin) = child.stdin {
        stdin.write_all(text.as_bytes())?;
    }
    child.wait()?;
    Ok(())
}

pub struct MacOsTextSelector;

impl MacOsTextSelector {
    pub fn new() -> Self {
        Self
    }
}

impl TextSelector for MacOsTextSelector {
    /// Copies the frontmost app's selection through the clipboard: save the
    /// clipboard, simulate Cmd+C, read the result, restore the clipboard.
    fn get_selected_text(&self) -> Result<Option<String>> {
        if !unsafe { AXIsProcessTrusted() } {
            tracing::warn!(
                "Accessibility not granted — cannot read the selection. Grant permission in \
                 System Settings > Privacy & Security > Accessibility."
            );
            return Ok(None);
        }

        let previous = read_clipboard().unwrap_or_default();
        simulate_cmd_c()?;
        // Give the frontmost app time to service the copy event.
        std::thread::sleep(std::time::Duration::from_millis(80));
        let selection = read_clipboard()?;

        if let Err(e) = write_clipboard(&previous) {
            tracing::warn!("Failed to restore clipboard: {}", e);
        }

        if selection.is_empty() || selection == previous {
            return Ok(None);
        }
        Ok(Some(selection))
    }

    fn is_supported(&self) -> bool {
        true
    }
}
