//! Key mapping from terminal events to game actions.

use crate::types::{Hue, RecallAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<RecallAction> {
    match key.code {
        // Pads: number row follows the palette order
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Hue::from_index(index).map(RecallAction::Pad)
        }

        // Session controls
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(RecallAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(RecallAction::Reset),

        // Audio toggles
        KeyCode::Char('v') | KeyCode::Char('V') => Some(RecallAction::ToggleVoice),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(RecallAction::ToggleTones),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
