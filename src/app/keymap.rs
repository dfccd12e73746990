use super::action::Action;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub browse: HashMap<KeyEvent, Action>,
    pub full_preview: HashMap<KeyEvent, Action>,
    // Available while the catalog is loading or failed
    pub global: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut browse = HashMap::new();
        let mut full_preview = HashMap::new();

        // --- Global ---
        global.insert(ch('q'), Action::Quit);
        global.insert(ctrl('c'), Action::Quit);

        // --- Browse Mode ---
        browse.insert(ch('j'), Action::CursorNext);
        browse.insert(key(KeyCode::Down), Action::CursorNext);
        browse.insert(ch('k'), Action::CursorPrev);
        browse.insert(key(KeyCode::Up), Action::CursorPrev);
        browse.insert(key(KeyCode::Enter), Action::SelectAtCursor);
        browse.insert(ch(' '), Action::SelectAtCursor);
        browse.insert(ch('l'), Action::NextPage);
        browse.insert(key(KeyCode::Right), Action::NextPage);
        browse.insert(key(KeyCode::Tab), Action::NextPage);
        browse.insert(ch('h'), Action::PrevPage);
        browse.insert(key(KeyCode::Left), Action::PrevPage);
        browse.insert(ch('a'), Action::ApplyRequested);
        browse.insert(ch('e'), Action::EditFromCover);
        browse.insert(ch('f'), Action::OpenFullPreview);

        // --- Full Preview Overrides ---
        full_preview.insert(ch('a'), Action::CloseFullPreview { apply: true });
        full_preview.insert(key(KeyCode::Enter), Action::CloseFullPreview { apply: true });
        full_preview.insert(key(KeyCode::Esc), Action::CloseFullPreview { apply: false });
        full_preview.insert(ch('f'), Action::CloseFullPreview { apply: false });

        Self {
            browse,
            full_preview,
            global,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        let overrides = match mode {
            AppMode::Browse => Some(&self.browse),
            AppMode::FullPreview => Some(&self.full_preview),
            AppMode::Loading | AppMode::Error => None,
        };
        if let Some(action) = overrides.and_then(|map| map.get(&event)) {
            return Some(action.clone());
        }
        self.global.get(&event).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_specific_bindings() {
        let keymap = KeyMap::default();
        assert_eq!(
            keymap.get_action(ch('a'), AppMode::Browse),
            Some(Action::ApplyRequested)
        );
        assert_eq!(
            keymap.get_action(ch('a'), AppMode::FullPreview),
            Some(Action::CloseFullPreview { apply: true })
        );
        assert_eq!(keymap.get_action(ch('a'), AppMode::Loading), None);
        assert_eq!(keymap.get_action(ch('q'), AppMode::Error), Some(Action::Quit));
    }
}
