//! Root layout widget
//!
//! ┌──────────────────────────────────────────────┐
//! │ Gradients  endpoint            12 selected   │
//! ├──────────────────────────────────────────────┤
//! │ > [x] ████████  Warm Flame     warm-flame    │
//! │   [ ] ████████  Night Fade     night-fade    │
//! ├──────────────────────────────────────────────┤
//! │ [ Save Gradients ]  status              toast│
//! └──────────────────────────────────────────────┘

use crate::app::state::{AppState, ToastKind};
use crate::selection::SaveState;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{gallery, help};

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Gallery
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, state, rows[0]);
    gallery::render(frame, state, rows[1]);
    render_footer(frame, state, rows[2]);

    if state.show_help {
        let area = centered(frame.area(), 64, 20);
        frame.render_widget(Clear, area);
        help::render(frame, area);
    }
}

fn render_header(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            " Gradients ",
            Style::default()
                .fg(theme.palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(state.endpoint.as_str(), Style::default().fg(theme.palette.fg_secondary)),
    ]);
    frame.render_widget(Paragraph::new(title), cols[0]);

    let count = format!(
        "{}/{} selected ",
        state.selection.checked_count(),
        state.selection.len()
    );
    frame.render_widget(
        Paragraph::new(count)
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.palette.fg_secondary)),
        cols[1],
    );
}

fn render_footer(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let save = state.selection.save_state();
    let button_style = match save {
        SaveState::Idle => Style::default()
            .fg(theme.palette.fg_primary)
            .bg(theme.palette.accent),
        SaveState::Saving => Style::default()
            .fg(theme.palette.fg_secondary)
            .bg(theme.palette.bg_highlight),
        SaveState::Saved => Style::default()
            .fg(theme.palette.fg_primary)
            .bg(theme.palette.success),
        SaveState::Failed(_) => Style::default()
            .fg(theme.palette.fg_primary)
            .bg(theme.palette.error),
    }
    .add_modifier(Modifier::BOLD);

    let button = format!(" {} ", save.label());
    let button_width = button.chars().count() as u16;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(button_width + 2),
            Constraint::Min(10),
            Constraint::Length(32),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(Span::styled(button, button_style)), cols[0]);

    let status = if state.loading {
        "Loading..."
    } else {
        state.status.as_str()
    };
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(theme.palette.fg_secondary)),
        cols[1],
    );

    let (text, style) = match &state.toast {
        Some(t) => {
            let color = match t.kind {
                ToastKind::Success => theme.palette.success,
                ToastKind::Error => theme.palette.error,
            };
            (t.message.as_str(), Style::default().fg(color).add_modifier(Modifier::BOLD))
        }
        None => ("? help  q quit", Style::default().fg(theme.palette.fg_secondary)),
    };
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Right).style(style),
        cols[2],
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
