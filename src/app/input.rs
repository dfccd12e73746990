use crate::app::{
    action::Action,
    state::{AppMode, AppState},
};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};

pub fn map_event_to_action(event: Event, app_state: &AppState) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            app_state.keymap.get_action(key, app_state.mode)
        }
        Event::FocusGained => Some(Action::Resume),
        Event::FocusLost => Some(Action::Pause),
        Event::Mouse(mouse) if app_state.mode == AppMode::Browse => match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::CursorNext),
            MouseEventKind::ScrollUp => Some(Action::CursorPrev),
            MouseEventKind::Down(MouseButton::Left) => app_state
                .layout
                .option_row_at(mouse.column, mouse.row)
                .filter(|&index| index < app_state.options.len())
                .map(Action::SelectIndex),
            _ => None,
        },
        // Layout is re-measured on every draw
        Event::Resize(_, _) => Some(Action::Tick),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::test_support::preset;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_keys_follow_mode() {
        let mut state = AppState {
            mode: AppMode::Browse,
            ..Default::default()
        };
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('j')), &state),
            Some(Action::CursorNext)
        );
        state.mode = AppMode::FullPreview;
        assert_eq!(
            map_event_to_action(press(KeyCode::Esc), &state),
            Some(Action::CloseFullPreview { apply: false })
        );
    }

    #[test]
    fn test_focus_maps_to_lifecycle() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(Event::FocusGained, &state),
            Some(Action::Resume)
        );
        assert_eq!(
            map_event_to_action(Event::FocusLost, &state),
            Some(Action::Pause)
        );
    }

    #[test]
    fn test_click_on_list_row() {
        let mut state = AppState {
            mode: AppMode::Browse,
            options: vec![preset("a", "A", false), preset("b", "B", false), preset("c", "C", false)],
            ..Default::default()
        };
        state.layout.options_area = Some(Rect::new(1, 1, 20, 10));
        let click = |column, row| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::empty(),
            })
        };
        assert_eq!(
            map_event_to_action(click(5, 3), &state),
            Some(Action::SelectIndex(2))
        );
        // Below the last option
        assert_eq!(map_event_to_action(click(5, 6), &state), None);
        // Outside the list
        assert_eq!(map_event_to_action(click(30, 3), &state), None);
    }
}
