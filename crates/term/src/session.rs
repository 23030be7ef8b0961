//! Terminal session: raw mode plus the alternate screen for the lifetime of a run.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalSession {
    stdout: io::Stdout,
    active: bool,
}

impl TerminalSession {
    /// Switch to raw mode and the alternate screen, and set the window title.
    pub fn enter(title: &str) -> Result<Self> {
        let mut session = Self {
            stdout: io::stdout(),
            active: false,
        };
        terminal::enable_raw_mode()?;
        session.active = true;

        session.stdout.queue(terminal::EnterAlternateScreen)?;
        session.stdout.queue(terminal::SetTitle(title))?;
        session.stdout.queue(cursor::Hide)?;
        session.stdout.queue(terminal::DisableLineWrap)?;
        session.stdout.flush()?;
        Ok(session)
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = self.exit();
    }
}
