//! Terminal session and frame drawing for the gallery

use crate::app::state::AppState;
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub mod swatch;
pub mod theme;
pub mod widgets;

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus alternate screen for as long as the gallery runs.
///
/// Mouse capture is on so the wheel scrolls the list.
pub struct GallerySession {
    terminal: TuiTerminal,
}

impl GallerySession {
    pub fn start() -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
            restore();
            return Err(e).context("enter alt screen + mouse capture");
        }

        let mut terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(t) => t,
            Err(e) => {
                restore();
                return Err(e).context("create terminal");
            }
        };
        terminal.clear().context("clear terminal")?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }
}

impl Drop for GallerySession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore();
    }
}

/// Leave the alternate screen and raw mode. Errors are ignored.
fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

pub fn draw(terminal: &mut TuiTerminal, state: &mut AppState) -> anyhow::Result<()> {
    state.expire_toast();
    terminal
        .draw(|f| widgets::root::render(f, state))
        .context("draw gallery")?;
    Ok(())
}
