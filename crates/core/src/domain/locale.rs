// Operator-facing text (Japanese default, English fallback)

use crate::domain::console::ConsoleConfig;
use crate::domain::error::DomainError;
use std::str::FromStr;

/// Application name shown in every banner
pub const APP_NAME: &str = "Benzene Oxidation Activity Analysis";

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Japanese,
    English,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Japanese => "ja",
            Locale::English => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Ok(Locale::Japanese),
            "en" | "english" => Ok(Locale::English),
            other => Err(DomainError::UnknownLocale(other.to_string())),
        }
    }
}

/// Fixed operator text for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub starting: &'static str,
    pub failure: &'static str,
    pub acknowledge_prompt: &'static str,
}

const JA: Messages = Messages {
    title: "ベンゼン酸化活性試験 自動解析システム",
    subtitle: Some(APP_NAME),
    starting: "アプリケーションを起動しています...",
    failure: "エラーが発生しました。",
    acknowledge_prompt: "続行するには何かキーを押してください...",
};

const EN: Messages = Messages {
    title: APP_NAME,
    subtitle: None,
    starting: "Starting application...",
    failure: "An error occurred.",
    acknowledge_prompt: "Press any key to continue...",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Japanese => JA,
            Locale::English => EN,
        }
    }

    /// Messages that the configured console can render
    ///
    /// Japanese text needs a UTF-8 console; otherwise English is used.
    pub fn for_console(locale: Locale, console: &ConsoleConfig) -> Self {
        if console.supports_unicode() {
            Self::for_locale(locale)
        } else {
            EN
        }
    }
}
