//! Chart-surface lifetime management.
//!
//! Every chart render allocates a terminal drawing surface (a ratatui
//! inline viewport over stdout). Surfaces must be released right after
//! display so repeated renders within one session never accumulate
//! terminal state; `with_surface` enforces the scoped acquire/release.

use std::io::{self, Stdout};

use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal, TerminalOptions, Viewport};

use glimpse_core::error::Result;

/// A single-use drawing surface anchored below the current prompt.
pub struct ChartSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl ChartSurface {
    /// Acquires an inline viewport of the given height.
    pub fn acquire(height: u16) -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        Ok(Self { terminal })
    }

    /// Draws one frame onto the surface.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Releases the surface, leaving the drawn frame in the scrollback
    /// and the cursor on a fresh line below it.
    pub fn release(mut self) -> Result<()> {
        self.terminal.show_cursor()?;
        println!();
        Ok(())
    }
}

/// Acquires a surface, draws one frame, and releases it.
pub fn with_surface(height: u16, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
    let mut surface = ChartSurface::acquire(height)?;
    surface.draw(render)?;
    surface.release()
}
