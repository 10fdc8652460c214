use crossterm::event::{self, KeyEvent};

use crate::app::AppState;
use crate::config;
use crate::wifi::ViewId;

/// Handle keyboard events for the network list, returns true to quit
pub fn handle_main_view(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        event::KeyCode::Char('q') | event::KeyCode::Esc => return true,
        event::KeyCode::Char('j') | event::KeyCode::Down => state.next(),
        event::KeyCode::Char('k') | event::KeyCode::Up => state.previous(),
        event::KeyCode::Char('g') | event::KeyCode::Home => state.go_to_top(),
        event::KeyCode::Char('G') | event::KeyCode::End => state.go_to_bottom(),
        event::KeyCode::Char('?') | event::KeyCode::Enter => {
            if let Some(row) = state.selected_row_mut() {
                // Only a visible help button takes clicks.
                if row.shows_help_button() {
                    row.on_click(ViewId::HelpButton);
                }
            }
        }
        event::KeyCode::Char('t') => state.push_toast(
            "Wi-Fi will turn on automatically near saved networks",
            config::SETTINGS_APP_ID,
            0,
        ),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconSet;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let mut state = AppState::new(IconSet::Ascii, false, None, false);
        assert!(handle_main_view(key(KeyCode::Char('q')), &mut state));
        assert!(!handle_main_view(key(KeyCode::Char('j')), &mut state));
    }

    #[test]
    fn t_raises_a_toast() {
        let mut state = AppState::new(IconSet::Ascii, false, None, false);
        handle_main_view(key(KeyCode::Char('t')), &mut state);
        assert_eq!(state.toasts.len(), 1);
    }
}
