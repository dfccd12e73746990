use crate::domain::error::PickerError;
use crate::domain::models::{CustomThemeRequest, ThemeOption, ThemeOptionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Uninitialized,
    Resolving,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    pub selected: Option<ThemeOption>,
    /// Checkmark target: the option currently applied to the environment.
    pub applied: Option<ThemeOptionId>,
    pub use_device_wallpaper_override: bool,
}

/// Result of a user picking an option from the list.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    Selected,
    /// The option is an empty custom placeholder; nothing was selected.
    EditRequested(CustomThemeRequest),
}

/// Owns which option is selected and which one is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionController {
    state: SelectionState,
    phase: SelectionPhase,
    default_title: String,
    use_device_wallpaper: bool,
}

impl SelectionController {
    pub fn new(default_title: impl Into<String>, use_device_wallpaper: bool) -> Self {
        Self {
            state: SelectionState::default(),
            phase: SelectionPhase::Uninitialized,
            default_title: default_title.into(),
            use_device_wallpaper,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn selected(&self) -> Option<&ThemeOption> {
        self.state.selected.as_ref()
    }

    pub fn applied(&self) -> Option<&ThemeOptionId> {
        self.state.applied.as_ref()
    }

    pub fn begin_resolving(&mut self) {
        self.phase = SelectionPhase::Resolving;
    }

    /// Picks the option to show first: the persisted one, then the active
    /// one, then the one carrying the default title.
    ///
    /// Does not touch `selected`; the caller selects the returned option.
    pub fn resolve_initial_selection(
        &mut self,
        options: &[ThemeOption],
        persisted_id: Option<&str>,
    ) -> Result<ThemeOption, PickerError> {
        let active = options.iter().find(|o| o.is_active());
        self.state.applied = active.map(|o| o.id.clone());
        self.phase = SelectionPhase::Ready;

        let persisted = persisted_id
            .filter(|id| !id.is_empty())
            .and_then(|id| options.iter().find(|o| o.id.as_str() == id));
        persisted
            .or(active)
            .or_else(|| options.iter().find(|o| o.title == self.default_title))
            .cloned()
            .ok_or_else(|| PickerError::MissingDefaultOption {
                default_title: self.default_title.clone(),
            })
    }

    pub fn select(&mut self, option: &ThemeOption) -> SelectOutcome {
        if option.is_undefined_custom() {
            if let Some(request) = option.edit_request() {
                return SelectOutcome::EditRequested(request);
            }
        }
        self.state.use_device_wallpaper_override = self.use_device_wallpaper || option.is_custom();
        self.state.selected = Some(option.clone());
        tracing::info!(
            target: "themepick::events",
            event = "theme_selected",
            id = %option.id,
            title = %option.title,
            custom = option.is_custom(),
        );
        SelectOutcome::Selected
    }

    pub fn mark_applied(&mut self, option: &ThemeOption) {
        self.state.applied = Some(option.id.clone());
    }

    /// Identity of an uncommitted choice, `None` when the selection is the
    /// applied option.
    pub fn serialize_for_persistence(&self) -> Option<String> {
        let selected = self.state.selected.as_ref()?;
        if self.state.applied.as_ref() == Some(&selected.id) {
            return None;
        }
        Some(selected.id.as_str().to_string())
    }

    pub fn clear_selection(&mut self) {
        self.state.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{PreviewInfo, ThemeKind};

    fn opt(id: &str, title: &str, active: bool) -> ThemeOption {
        ThemeOption {
            id: ThemeOptionId(id.to_string()),
            title: title.to_string(),
            preview: PreviewInfo::default(),
            active,
            kind: ThemeKind::Preset,
        }
    }

    fn controller() -> SelectionController {
        let mut c = SelectionController::new("Default", false);
        c.begin_resolving();
        c
    }

    #[test]
    fn test_active_option_wins_without_persisted_id() {
        let options = vec![
            opt("A", "Default", false),
            opt("B", "Ocean", true),
            opt("C", "Forest", false),
        ];
        let mut c = controller();
        let resolved = c.resolve_initial_selection(&options, None).unwrap();
        assert_eq!(resolved.id.as_str(), "B");
        assert_eq!(c.phase(), SelectionPhase::Ready);
    }

    #[test]
    fn test_persisted_id_beats_active() {
        let options = vec![opt("A", "Default", false), opt("B", "Ocean", true)];
        let mut c = controller();
        let resolved = c.resolve_initial_selection(&options, Some("A")).unwrap();
        assert_eq!(resolved.id.as_str(), "A");
        assert_eq!(c.applied().map(ThemeOptionId::as_str), Some("B"));
    }

    #[test]
    fn test_unknown_persisted_id_falls_through() {
        let options = vec![opt("A", "Default", false), opt("B", "Ocean", true)];
        let mut c = controller();
        let resolved = c.resolve_initial_selection(&options, Some("Z")).unwrap();
        assert_eq!(resolved.id.as_str(), "B");
    }

    #[test]
    fn test_applied_cleared_when_nothing_is_active() {
        let mut c = controller();
        c.resolve_initial_selection(&[opt("A", "Default", false), opt("B", "Ocean", true)], None)
            .unwrap();
        assert_eq!(c.applied().map(ThemeOptionId::as_str), Some("B"));

        // Re-fetch after the applied theme went away
        let resolved = c
            .resolve_initial_selection(&[opt("A", "Default", false)], None)
            .unwrap();
        assert!(c.applied().is_none());
        c.select(&resolved);
        assert_eq!(c.serialize_for_persistence().as_deref(), Some("A"));
    }

    #[test]
    fn test_default_title_fallback() {
        let options = vec![opt("A", "Ocean", false), opt("B", "Default", false)];
        let mut c = controller();
        let resolved = c.resolve_initial_selection(&options, None).unwrap();
        assert_eq!(resolved.id.as_str(), "B");
        assert!(c.applied().is_none());
    }

    #[test]
    fn test_missing_default_is_reported() {
        let options = vec![opt("A", "Ocean", false)];
        let mut c = controller();
        let err = c.resolve_initial_selection(&options, None).unwrap_err();
        assert!(matches!(err, PickerError::MissingDefaultOption { .. }));
        assert!(c.selected().is_none());
    }

    #[test]
    fn test_serialize_only_uncommitted_choice() {
        let a = opt("A", "Default", true);
        let b = opt("B", "Ocean", false);
        let mut c = controller();
        c.resolve_initial_selection(&[a.clone(), b.clone()], None)
            .unwrap();
        c.select(&a);
        assert_eq!(c.serialize_for_persistence(), None);
        c.select(&b);
        assert_eq!(c.serialize_for_persistence().as_deref(), Some("B"));
        c.mark_applied(&b);
        assert_eq!(c.serialize_for_persistence(), None);
    }

    #[test]
    fn test_undefined_custom_requests_edit() {
        let a = opt("A", "Default", true);
        let mut placeholder = opt("custom:new", "My theme", false);
        placeholder.kind = ThemeKind::Custom {
            id: "new".to_string(),
            defined: false,
        };
        let mut c = controller();
        c.select(&a);
        match c.select(&placeholder) {
            SelectOutcome::EditRequested(request) => assert_eq!(request.id, "new"),
            other => panic!("expected edit request, got {other:?}"),
        }
        assert_eq!(c.selected().map(|o| o.id.as_str()), Some("A"));
    }

    #[test]
    fn test_wallpaper_override_follows_custom_kind() {
        let mut custom = opt("X", "Mine", false);
        custom.kind = ThemeKind::Custom {
            id: "x".to_string(),
            defined: true,
        };
        let mut c = controller();
        c.select(&custom);
        assert!(c.state().use_device_wallpaper_override);
        c.select(&opt("A", "Default", false));
        assert!(!c.state().use_device_wallpaper_override);

        let mut forced = SelectionController::new("Default", true);
        forced.select(&opt("A", "Default", false));
        assert!(forced.state().use_device_wallpaper_override);
    }
}
