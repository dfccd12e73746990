use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Loading | AppMode::Error => vec![FooterGroup {
            name: "APP",
            items: vec![FooterItem::new("q", "quit")],
        }],
        AppMode::Browse => {
            let can_apply = state.apply_action.visible && state.apply_action.enabled;
            let can_edit = state
                .current_page()
                .and_then(|page| page.edit_request())
                .is_some();
            vec![
                FooterGroup {
                    name: "NAV",
                    items: vec![
                        FooterItem::new("j/k", "move"),
                        FooterItem::new("Enter", "preview"),
                        FooterItem::new("h/l", "page").enabled_if(state.page_count() > 1),
                    ],
                },
                FooterGroup {
                    name: "THEME",
                    items: vec![
                        FooterItem::new("a", "apply").enabled_if(can_apply),
                        FooterItem::new("e", "edit").enabled_if(can_edit),
                        FooterItem::new("f", "full")
                            .enabled_if(state.selected_option().is_some()),
                    ],
                },
                FooterGroup {
                    name: "APP",
                    items: vec![FooterItem::new("q", "quit")],
                },
            ]
        }
        AppMode::FullPreview => vec![FooterGroup {
            name: "PREVIEW",
            items: vec![
                FooterItem::new("a/Enter", "apply"),
                FooterItem::new("Esc", "close"),
            ],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item<'a>(groups: &'a [FooterGroup], key: &str) -> &'a FooterItem {
        groups
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|i| i.key == key)
            .unwrap()
    }

    #[test]
    fn test_apply_item_follows_action_state() {
        let mut state = AppState {
            mode: AppMode::Browse,
            ..Default::default()
        };
        assert!(!item(&get_groups(&state), "a").enabled);

        state.apply_action.visible = true;
        assert!(item(&get_groups(&state), "a").enabled);

        state.apply_action.enabled = false;
        assert!(!item(&get_groups(&state), "a").enabled);
    }

    #[test]
    fn test_loading_only_offers_quit() {
        let groups = get_groups(&AppState::default());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items[0].key, "q");
    }
}
