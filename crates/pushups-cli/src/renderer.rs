//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const FENCE: &str = "```";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.render_to(&mut stdout, markdown)?;
        stdout.flush()?;
        Ok(())
    }

    /// Render markdown text to any writer.
    ///
    /// In rich mode headers keep their hash symbols and code blocks (the
    /// progress chart) are printed verbatim without their fences.
    pub fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return write!(out, "{markdown}");
        }

        let mut in_code_block = false;
        for line in markdown.lines() {
            if line.trim_start().starts_with(FENCE) {
                in_code_block = !in_code_block;
                continue;
            }

            if in_code_block {
                writeln!(out, "{line}")?;
            } else if line.starts_with('#') {
                writeln!(out, "\x1b[34m{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
