//! Terminal lifecycle on top of ratatui's default crossterm terminal.

use color_eyre::eyre::Result;
use ratatui::{DefaultTerminal, Frame};

/// Raw mode and the alternate screen are active for as long as this
/// value lives. Dropping it restores the terminal.
pub struct Tui {
    terminal: DefaultTerminal,
}

impl Tui {
    pub fn enter() -> Result<Self> {
        let terminal = ratatui::try_init()?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Terminal size as (cols, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

/// Install color-eyre report and panic hooks. Must run before
/// [`Tui::enter`]: ratatui chains a terminal-restoring panic hook in
/// front of whatever hook is installed at that point.
pub fn install_hooks() -> Result<()> {
    color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install()
}
