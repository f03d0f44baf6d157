use std::process::Command;

use anyhow::Result;

use super::TextSelector;

/// Reads the PRIMARY selection, which X11 and Wayland keep updated with the
/// most recent highlight; no key simulation is needed.
pub struct LinuxTextSelector;

/// Selection readers to try, in order. Wayland first, then X11.
const READERS: &[(&str, &[&str])] = &[
    ("wl-paste", &["--primary", "--no-newline"]),
    ("xclip", &["-selection", "primary", "-o"]),
    ("xsel", &["--primary", "--output"]),
];

impl LinuxTextSelector {
    pub fn new() -> Self {
        Self
    }
}

impl TextSelector for LinuxTextSelector {
    fn get_selected_text(&self) -> Result<Option<String>> {
        for (program, args) in READERS {
            match Command::new(program).args(*args).output() {
                Ok(output) if output.status.success() => {
                    let text = String::from_utf8_lossy(&output.stdout).into_owned();
                    if text.is_empty() {
                        return Ok(None);
                    }
                    return Ok(Some(text));
                }
                Ok(_) => continue,
                Err(_) => continue, // tool not installed, try the next one
            }
        }
        tracing::warn!("No selection reader available (tried wl-paste, xclip, xsel)");
        Ok(None)
    }

    fn is_supported(&self) -> bool {
        true
    }
}
