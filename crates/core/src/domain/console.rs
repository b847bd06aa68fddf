// Console configuration value (passed explicitly to the writer, never global)

/// Console text encoding requested before any output is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEncoding {
    /// UTF-8 (Windows code page 65001)
    Utf8,
    /// Leave the console code page untouched
    Native,
}

impl ConsoleEncoding {
    /// Windows code page number, if the encoding maps to one
    pub fn code_page(&self) -> Option<u32> {
        match self {
            ConsoleEncoding::Utf8 => Some(65001),
            ConsoleEncoding::Native => None,
        }
    }
}

/// Effective console settings for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub encoding: ConsoleEncoding,
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            encoding: ConsoleEncoding::Utf8,
            color: true,
        }
    }
}

impl ConsoleConfig {
    /// Whether non-ASCII text can be written as-is
    ///
    /// `Native` consoles may be on a legacy code page, so callers fall back to ASCII text.
    pub fn supports_unicode(&self) -> bool {
        matches!(self.encoding, ConsoleEncoding::Utf8)
    }
}
