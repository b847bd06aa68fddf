// Console code page and color setup
use tracing::{debug, warn};

use benzene_launcher_core::domain::ConsoleConfig;
use benzene_launcher_core::port::ConsoleSetup;

/// Switches the attached console to the requested code page
///
/// Windows: runs `chcp` in the shared console and enables virtual terminal
/// processing so ANSI colors render. Other platforms: terminals already take
/// their encoding from the locale and understand ANSI, so both are accepted as-is.
pub struct ConsoleCodePage {
    vt_switch: fn() -> bool,
}

impl ConsoleCodePage {
    pub fn new() -> Self {
        Self {
            vt_switch: enable_virtual_terminal,
        }
    }

    /// Use `vt_switch` instead of the platform call for enabling ANSI sequences
    pub fn with_vt_switch(vt_switch: fn() -> bool) -> Self {
        Self { vt_switch }
    }

    fn apply_code_page(&self, requested: ConsoleConfig) -> ConsoleConfig {
        let Some(code_page) = requested.encoding.code_page() else {
            return requested;
        };

        #[cfg(windows)]
        {
            use std::process::{Command, Stdio};

            // chcp acts on the console this process is attached to
            let code_page_arg = code_page.to_string();
            let status = Command::new("cmd")
                .args(["/C", "chcp", code_page_arg.as_str()])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();

            match status {
                Ok(s) if s.success() => {
                    debug!(code_page, "Console code page switched");
                    requested
                }
                Ok(s) => {
                    warn!(code_page, exit_code = ?s.code(), "chcp failed, keeping native code page");
                    native(requested)
                }
                Err(e) => {
                    warn!(code_page, error = %e, "chcp unavailable, keeping native code page");
                    native(requested)
                }
            }
        }

        #[cfg(not(windows))]
        {
            debug!(code_page, "Console encoding follows the terminal locale");
            requested
        }
    }

    fn apply_color(&self, config: ConsoleConfig) -> ConsoleConfig {
        if !config.color || (self.vt_switch)() {
            return config;
        }
        warn!("ANSI sequences unsupported by this console, disabling color");
        ConsoleConfig {
            color: false,
            ..config
        }
    }
}

impl Default for ConsoleCodePage {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSetup for ConsoleCodePage {
    fn apply(&self, requested: ConsoleConfig) -> ConsoleConfig {
        let config = self.apply_code_page(requested);
        self.apply_color(config)
    }
}

#[cfg(windows)]
fn enable_virtual_terminal() -> bool {
    colored::control::set_virtual_terminal(true).is_ok()
}

#[cfg(not(windows))]
fn enable_virtual_terminal() -> bool {
    true
}

#[cfg(windows)]
fn native(requested: ConsoleConfig) -> ConsoleConfig {
    ConsoleConfig {
        encoding: benzene_launcher_core::domain::ConsoleEncoding::Native,
        ..requested
    }
}
