// Operator console writer
// All operator-facing output goes through here, in order, on one thread.

use crate::application::constants::BANNER_RULE_WIDTH;
use crate::domain::{ConsoleConfig, Messages};
use colored::Colorize;
use std::io::{self, Write};

/// Console bound to one output stream and one effective `ConsoleConfig`
pub struct Console<W: Write> {
    out: W,
    config: ConsoleConfig,
    messages: Messages,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, config: ConsoleConfig, messages: Messages) -> Self {
        Self {
            out,
            config,
            messages,
        }
    }

    /// Fixed header plus the "starting" status line
    pub fn banner(&mut self) -> io::Result<()> {
        let rule = "=".repeat(BANNER_RULE_WIDTH);
        let title = self.styled_title(self.messages.title);

        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "{}", title)?;
        if let Some(subtitle) = self.messages.subtitle {
            writeln!(self.out, "{}", subtitle)?;
        }
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.messages.starting)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Generic failure message (same text for every failure cause)
    pub fn failure(&mut self) -> io::Result<()> {
        let text = if self.config.color {
            self.messages.failure.red().bold().to_string()
        } else {
            self.messages.failure.to_string()
        };

        writeln!(self.out)?;
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Acknowledgment prompt, left on the current line
    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", self.messages.acknowledge_prompt)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled_title(&self, title: &str) -> String {
        if self.config.color {
            title.cyan().bold().to_string()
        } else {
            title.to_string()
        }
    }
}
