use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::AppState;
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Mouse(m)) => InputEvent::Mouse(m),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    _ => continue,
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ListUp),
            MouseEventKind::ScrollDown => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) if state.show_help => match k.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
            _ => None,
        },
        InputEvent::Key(k) => handle_gallery(k),
    }
}

fn handle_gallery(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),

        // Navigation - vim style
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::GoTop),
        KeyCode::Char('G') | KeyCode::End => Some(Action::GoBottom),
        KeyCode::Char('d') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::PageDown),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('a') => Some(Action::SelectAll),
        KeyCode::Char('A') | KeyCode::Char('d') => Some(Action::DeselectAll),
        KeyCode::Char('s') => Some(Action::Save),
        KeyCode::Char('r') | KeyCode::F(5) => Some(Action::Reload),

        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_gallery_keys() {
        let state = AppState::new("http://localhost");
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char(' '))), Some(Action::Toggle));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('a'))), Some(Action::SelectAll));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('d'))), Some(Action::DeselectAll));
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char('s'))), Some(Action::Save));
        assert_eq!(
            map_input_to_action(
                &state,
                InputEvent::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL))
            ),
            Some(Action::PageDown)
        );
    }

    #[test]
    fn test_help_swallows_gallery_keys() {
        let mut state = AppState::new("http://localhost");
        state.show_help = true;
        assert_eq!(map_input_to_action(&state, key(KeyCode::Char(' '))), None);
        assert_eq!(map_input_to_action(&state, key(KeyCode::Esc)), Some(Action::ToggleHelp));
    }
}
