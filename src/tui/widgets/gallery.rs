//! Gradient list with swatches, rendered with virtual scrolling

use crate::app::state::AppState;
use crate::tui::swatch;
use crate::tui::theme::get_theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const SWATCH_WIDTH: usize = 16;

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();

    let title = if state.selection.save_state().in_flight() {
        " Gradients (locked while saving) "
    } else {
        " Gradients "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.palette.border))
        .title(title)
        .title_style(Style::default().fg(theme.palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible_height = inner.height as usize;
    if state.viewport_height != visible_height {
        state.viewport_height = visible_height;
        state.update_scroll();
    }

    if state.selection.is_empty() {
        let msg = if state.loading {
            "Loading gallery..."
        } else if state.loaded {
            "The catalog is empty"
        } else {
            "Gallery not loaded. Press r to retry."
        };
        frame.render_widget(
            Paragraph::new(Line::from(msg)).style(Style::default().fg(theme.palette.fg_secondary)),
            inner,
        );
        return;
    }

    let controls = state.selection.controls();
    let name_width = controls.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
    let scroll_offset = state.scroll_offset;

    let items: Vec<ListItem> = controls
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(i, control)| {
            let is_selected = i == state.selected;
            let text_style = if is_selected {
                Style::default()
                    .fg(theme.palette.fg_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.palette.fg_primary)
            };
            let mark = if control.checked {
                Span::styled(theme.marks.checked, Style::default().fg(theme.palette.success))
            } else {
                Span::styled(theme.marks.unchecked, Style::default().fg(theme.palette.fg_secondary))
            };

            let mut spans = vec![mark, Span::raw(" ")];
            spans.extend(swatch::spans(&control.gradient, SWATCH_WIDTH));
            spans.push(Span::styled(
                format!("  {:name_width$}  ", control.name),
                text_style,
            ));
            spans.push(Span::styled(
                control.slug.as_str(),
                Style::default().fg(theme.palette.fg_secondary),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.saturating_sub(scroll_offset)));

    let list = List::new(items)
        .highlight_style(Style::default().bg(theme.palette.bg_highlight))
        .highlight_symbol(theme.marks.cursor);

    frame.render_stateful_widget(list, inner, &mut list_state);

    if controls.len() > visible_height {
        let pos_text = format!("{}/{}", state.selected + 1, controls.len());
        let pos_len = pos_text.len() as u16;
        let pos_x = inner.x + inner.width.saturating_sub(pos_len);
        if pos_x > inner.x {
            frame.render_widget(
                Paragraph::new(pos_text).style(Style::default().fg(theme.palette.fg_secondary)),
                Rect::new(pos_x, inner.y, pos_len, 1),
            );
        }
    }
}
