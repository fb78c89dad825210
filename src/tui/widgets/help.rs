//! Keybinding overlay

use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.accent))
        .title(" Keybinds ")
        .title_style(Style::default().fg(theme.palette.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left = vec![
        section_header("Navigation", &theme),
        keybind("j / Down", "Move down", &theme),
        keybind("k / Up", "Move up", &theme),
        keybind("g / Home", "Go to top", &theme),
        keybind("G / End", "Go to bottom", &theme),
        keybind("Ctrl+d", "Page down", &theme),
        keybind("Ctrl+u", "Page up", &theme),
    ];
    frame.render_widget(Paragraph::new(left).wrap(Wrap { trim: false }), cols[0]);

    let right = vec![
        section_header("Gallery", &theme),
        keybind("Space", "Toggle gradient", &theme),
        keybind("a", "Select all", &theme),
        keybind("A / d", "Deselect all", &theme),
        keybind("s", "Save selection", &theme),
        keybind("r / F5", "Reload", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("?", "Close help", &theme),
        keybind("q / Esc", "Quit", &theme),
    ];
    frame.render_widget(Paragraph::new(right).wrap(Wrap { trim: false }), cols[1]);
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.palette.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:10}", key),
            Style::default()
                .fg(theme.palette.fg_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.palette.fg_secondary)),
    ])
}
