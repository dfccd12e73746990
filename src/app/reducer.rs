use super::{
    action::Action,
    command::Command,
    selection::SelectOutcome,
    state::{AppMode, AppState, FullPreviewState, NoticeKind},
};
use crate::domain::error::PickerError;
use crate::domain::models::{SubflowResult, ThemeOption, ThemeOptionId};
use crate::preview::binding::{BindRequest, BindTarget};
use chrono::Local;

pub const APPLY_SUCCESS_NOTICE: &str = "Theme applied";
pub const APPLY_FAILURE_NOTICE: &str = "Couldn't apply theme, please try again";

pub fn update(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        // --- Lifecycle ---
        Action::Start => {
            state.mode = AppMode::Loading;
            state.last_error = None;
            state.selection.begin_resolving();
            return vec![Command::FetchOptions {
                force_reload: false,
            }];
        }
        Action::Resume => {
            let mut commands = Vec::new();
            if !state.clock_registered {
                state.clock_registered = true;
                commands.push(Command::StartClock);
            }
            // The wallpaper may have changed while we were away
            commands.push(Command::LoadWallpaper);
            return commands;
        }
        Action::Pause => {
            if state.clock_registered {
                state.clock_registered = false;
                return vec![Command::StopClock];
            }
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .notice
                .as_ref()
                .is_some_and(|notice| notice.is_expired(Local::now()))
            {
                state.notice = None;
            }
        }
        Action::Quit => {
            state.should_quit = true;
            let mut commands = Vec::new();
            if state.clock_registered {
                state.clock_registered = false;
                commands.push(Command::StopClock);
            }
            commands.push(Command::SaveSession(
                state.selection.serialize_for_persistence(),
            ));
            return commands;
        }

        // --- Navigation ---
        Action::CursorNext => {
            if !state.options.is_empty() {
                state.cursor = (state.cursor + 1) % state.options.len();
            }
        }
        Action::CursorPrev => {
            if !state.options.is_empty() {
                state.cursor = state
                    .cursor
                    .checked_sub(1)
                    .unwrap_or(state.options.len() - 1);
            }
        }
        Action::SelectAtCursor => {
            if let Some(option) = state.option_at_cursor().cloned() {
                return select_by_user(state, &option);
            }
        }
        Action::SelectIndex(index) => {
            if let Some(option) = state.options.get(index).cloned() {
                state.cursor = index;
                return select_by_user(state, &option);
            }
        }
        Action::NextPage => {
            let count = state.page_count();
            if count > 0 {
                state.page_index = (state.page_index + 1).min(count - 1);
            }
        }
        Action::PrevPage => {
            state.page_index = state.page_index.saturating_sub(1);
        }

        // --- Theme Intents ---
        Action::ApplyRequested => {
            if state.apply_action.visible {
                return start_apply(state);
            }
        }
        Action::EditFromCover => {
            let request = state
                .composer
                .current()
                .and_then(|set| set.page(0))
                .and_then(|cover| cover.edit_request())
                .cloned();
            if let Some(request) = request {
                return vec![Command::EditCustomTheme(request)];
            }
        }
        Action::OpenFullPreview => {
            if state.mode != AppMode::Browse {
                return Vec::new();
            }
            if let Some(option) = state.selection.selected() {
                state.full_preview_sessions += 1;
                let preview = FullPreviewState::new(
                    state.full_preview_sessions,
                    option.title.clone(),
                    option.serialized_packages().to_string(),
                    state.wallpaper.as_ref().map(|w| w.home.thumb.clone()),
                    option
                        .preview
                        .resolve_accent_color(state.composer.dark_mode()),
                    option.preview.accent_light,
                );
                tracing::debug!(session = preview.session, title = %preview.title, "opening full preview");
                state.full_preview = Some(preview);
                state.mode = AppMode::FullPreview;
            }
        }
        Action::CloseFullPreview { apply } => {
            if state.mode != AppMode::FullPreview {
                return Vec::new();
            }
            state.full_preview = None;
            state.mode = AppMode::Browse;
            if apply {
                return start_apply(state);
            }
        }

        // --- Layout ---
        Action::PreviewResized(width, height) => {
            return bind_commands(state.composer.on_surface_resized(width, height));
        }
        Action::FullPreviewResized(width, height) => {
            if let Some(preview) = state.full_preview.as_mut() {
                let target = preview.target();
                let handle = preview.wallpaper.clone();
                return bind_commands(
                    preview
                        .binding
                        .on_resize(width, height, handle.as_ref(), target),
                );
            }
        }

        // --- Async Results ---
        Action::OptionsLoaded { options, forced } => {
            state.options = options;
            clamp_cursor(state);
            state.mode = AppMode::Browse;
            state.last_error = None;

            // The restored id only counts for the first, unforced load
            let persisted = if forced {
                None
            } else {
                state.persisted_selection.take()
            };
            match state
                .selection
                .resolve_initial_selection(&state.options, persisted.as_deref())
            {
                Ok(option) => return select_programmatically(state, &option),
                Err(e) => {
                    tracing::error!(error = %e, options = state.options.len(), "initial selection");
                    state.selection.clear_selection();
                    state.apply_action.visible = false;
                }
            }
        }
        Action::OptionsFailed(message) => {
            let err = PickerError::CatalogFetch(message);
            tracing::error!(error = %err, "fetch_options");
            state.mode = AppMode::Error;
            state.last_error = Some(err.to_string());
        }
        Action::OptionsRefreshed(options) => {
            state.options = options;
            clamp_cursor(state);
            let fresh = state.selection.selected().and_then(|current| {
                state
                    .options
                    .iter()
                    .find(|o| o.is_same_theme(current))
                    .filter(|o| *o != current)
                    .cloned()
            });
            if let Some(fresh) = fresh {
                return select_programmatically(state, &fresh);
            }
        }
        Action::WallpaperLoaded(infos) => {
            let handle = infos.home.thumb.clone();
            tracing::debug!(source = %handle.source_name(), "wallpaper loaded");
            state.wallpaper = Some(*infos);
            state.composer.set_wallpaper_asset(handle);
            if state.selection.selected().is_some() {
                return bind_commands(state.composer.rebind_wallpaper_if_available());
            }
        }
        Action::WallpaperFailed(message) => {
            tracing::warn!(error = %message, "current_wallpaper_infos");
        }
        Action::WallpaperChanged => {
            return vec![Command::LoadWallpaper];
        }
        Action::BackgroundBound {
            target,
            token,
            result,
        } => match target {
            BindTarget::Cover { generation } => {
                state.composer.accept_background(generation, token, result);
            }
            BindTarget::FullPreview { session } => {
                let Some(preview) = state
                    .full_preview
                    .as_mut()
                    .filter(|preview| preview.session == session)
                else {
                    tracing::debug!(session, "dropping background for closed full preview");
                    return Vec::new();
                };
                match result {
                    Ok(background) => {
                        if preview.binding.accept(token, background) {
                            preview.refresh_header();
                        }
                    }
                    Err(e) => {
                        let err = PickerError::from(e);
                        tracing::warn!(error = %err, title = %preview.title, "full preview wallpaper");
                    }
                }
            }
        },
        Action::ApplyCompleted { id, result } => {
            // Since the control was disabled when apply was requested
            state.apply_action.enabled = true;
            state.apply_action.visible = false;
            match result {
                Ok(()) => {
                    if let Some(option) = find_option(state, &id) {
                        state.selection.mark_applied(&option);
                    }
                    tracing::info!(target: "themepick::events", event = "theme_applied", id = %id);
                    state.set_notice(NoticeKind::Success, APPLY_SUCCESS_NOTICE);
                }
                Err(message) => {
                    let err = PickerError::Apply {
                        id: id.to_string(),
                        message,
                    };
                    tracing::error!(error = %err, "apply");
                    state.set_notice(NoticeKind::Error, APPLY_FAILURE_NOTICE);
                }
            }
        }
        Action::SubflowReturned(result) => {
            tracing::debug!(?result, "custom theme editor returned");
            return match result {
                SubflowResult::Deleted => {
                    state.selection.clear_selection();
                    state.selection.begin_resolving();
                    vec![Command::FetchOptions { force_reload: true }]
                }
                SubflowResult::Applied => {
                    // Committed from the editor, nothing left to restore
                    state.should_quit = true;
                    vec![Command::SaveSession(None)]
                }
                SubflowResult::Other => match state.selection.selected().cloned() {
                    Some(option) => {
                        let mut commands = select_programmatically(state, &option);
                        commands.push(Command::RefreshOptions);
                        commands
                    }
                    None => {
                        state.selection.begin_resolving();
                        vec![Command::FetchOptions { force_reload: true }]
                    }
                },
            };
        }
        Action::ClockTicked(tick) => {
            state.composer.broadcast_time_update(&tick);
        }
    }

    Vec::new()
}

fn bind_commands(requests: impl IntoIterator<Item = BindRequest>) -> Vec<Command> {
    requests.into_iter().map(Command::BindBackground).collect()
}

fn clamp_cursor(state: &mut AppState) {
    if state.cursor >= state.options.len() {
        state.cursor = 0;
    }
}

fn find_option(state: &AppState, id: &ThemeOptionId) -> Option<ThemeOption> {
    state
        .options
        .iter()
        .find(|o| &o.id == id)
        .or_else(|| state.selection.selected().filter(|o| &o.id == id))
        .cloned()
}

/// Selection made by the user: custom placeholders open the editor, anything
/// else is previewed and reveals the apply action.
fn select_by_user(state: &mut AppState, option: &ThemeOption) -> Vec<Command> {
    match state.selection.select(option) {
        SelectOutcome::EditRequested(request) => vec![Command::EditCustomTheme(request)],
        SelectOutcome::Selected => {
            let commands = recompose(state);
            state.apply_action.visible = true;
            commands
        }
    }
}

/// Selection made on the user's behalf. The apply action stays hidden.
fn select_programmatically(state: &mut AppState, option: &ThemeOption) -> Vec<Command> {
    let commands = match state.selection.select(option) {
        SelectOutcome::Selected => recompose(state),
        SelectOutcome::EditRequested(request) => {
            tracing::debug!(id = %request.id, "not restoring an undefined custom theme");
            Vec::new()
        }
    };
    state.apply_action.visible = false;
    commands
}

fn recompose(state: &mut AppState) -> Vec<Command> {
    let Some(option) = state.selection.selected().cloned() else {
        return Vec::new();
    };
    let handle = state.wallpaper.as_ref().map(|w| w.home.thumb.clone());
    state.composer.compose(&option, handle, option.edit_request());
    state.page_index = 0;
    if let Some(index) = state.options.iter().position(|o| o.id == option.id) {
        state.cursor = index;
    }
    bind_commands(state.composer.replay_layout())
}

/// Disables the control and hands the selection to the apply workflow.
fn start_apply(state: &mut AppState) -> Vec<Command> {
    if !state.apply_action.enabled {
        return Vec::new();
    }
    let Some(option) = state.selection.selected().cloned() else {
        // No resolvable default: there is nothing to commit
        tracing::warn!("apply requested without a selection");
        state.set_notice(NoticeKind::Info, "No theme selected");
        return Vec::new();
    };
    state.apply_action.enabled = false;
    let wallpaper = state.override_wallpaper();
    vec![Command::Apply { option, wallpaper }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::test_support::{custom, preset};
    use crate::domain::models::{ColorInt, PresentationMode, WallpaperInfo, WallpaperInfos};
    use crate::preview::image::{ImageHandle, ImagePipelineError};
    use crate::preview::page::{ClockTick, PreviewPage};
    use image::{DynamicImage, ImageBuffer, Rgba};

    fn started(persisted: Option<&str>) -> AppState {
        let mut state = AppState {
            persisted_selection: persisted.map(str::to_string),
            ..Default::default()
        };
        let commands = update(&mut state, Action::Start);
        assert_eq!(
            commands,
            vec![Command::FetchOptions {
                force_reload: false
            }]
        );
        state
    }

    fn loaded(state: &mut AppState, options: Vec<ThemeOption>) -> Vec<Command> {
        update(
            state,
            Action::OptionsLoaded {
                options,
                forced: false,
            },
        )
    }

    fn wallpaper_infos() -> WallpaperInfos {
        WallpaperInfos {
            home: WallpaperInfo {
                title: "Home".to_string(),
                thumb: ImageHandle::in_memory(DynamicImage::ImageRgba8(ImageBuffer::from_pixel(
                    8,
                    8,
                    Rgba([200, 200, 200, 255]),
                ))),
            },
            lock: None,
            presentation_mode: PresentationMode::Static,
        }
    }

    fn selected_id(state: &AppState) -> Option<&str> {
        state.selected_option().map(|o| o.id.as_str())
    }

    #[test]
    fn test_single_active_default_is_selected_and_applied() {
        let mut state = started(None);
        loaded(&mut state, vec![preset("A", "Default", true)]);
        assert_eq!(state.mode, AppMode::Browse);
        assert_eq!(selected_id(&state), Some("A"));
        assert_eq!(state.selection.applied().map(ThemeOptionId::as_str), Some("A"));
        assert!(!state.apply_action.visible);
    }

    #[test]
    fn test_persisted_wins_over_active() {
        let mut state = started(Some("A"));
        loaded(
            &mut state,
            vec![preset("A", "Default", false), preset("B", "Ocean", true)],
        );
        assert_eq!(selected_id(&state), Some("A"));
        assert_eq!(state.selection.applied().map(ThemeOptionId::as_str), Some("B"));
        assert_eq!(state.cursor, 0);
        // Consumed by the first load
        assert!(state.persisted_selection.is_none());
    }

    #[test]
    fn test_selecting_undefined_custom_opens_editor() {
        let mut state = started(None);
        loaded(
            &mut state,
            vec![preset("A", "Default", true), custom("c", "Custom", false)],
        );
        state.cursor = 1;
        let commands = update(&mut state, Action::SelectAtCursor);
        assert!(matches!(
            commands.as_slice(),
            [Command::EditCustomTheme(request)] if request.id == "c"
        ));
        assert_eq!(selected_id(&state), Some("A"));
        assert!(!state.apply_action.visible);
    }

    #[test]
    fn test_user_selection_reveals_apply_and_recomposes() {
        let mut state = started(None);
        loaded(
            &mut state,
            vec![preset("A", "Default", true), preset("B", "Ocean", false)],
        );
        let before = state.composer.generation();
        update(&mut state, Action::CursorNext);
        update(&mut state, Action::SelectAtCursor);
        assert_eq!(selected_id(&state), Some("B"));
        assert!(state.apply_action.visible);
        assert!(state.composer.generation() > before);
        assert_eq!(
            state.composer.current().map(|set| set.option_id.as_str()),
            Some("B")
        );
    }

    #[test]
    fn test_apply_round_trip() {
        let mut state = started(None);
        loaded(
            &mut state,
            vec![preset("A", "Default", true), preset("B", "Ocean", false)],
        );
        // Hidden after the programmatic selection
        assert!(update(&mut state, Action::ApplyRequested).is_empty());

        update(&mut state, Action::SelectIndex(1));
        let commands = update(&mut state, Action::ApplyRequested);
        assert!(matches!(
            commands.as_slice(),
            [Command::Apply { option, wallpaper: None }] if option.id.as_str() == "B"
        ));
        assert!(!state.apply_action.enabled);
        // No duplicate submit while in flight
        assert!(update(&mut state, Action::ApplyRequested).is_empty());

        update(
            &mut state,
            Action::ApplyCompleted {
                id: ThemeOptionId("B".to_string()),
                result: Ok(()),
            },
        );
        assert!(state.apply_action.enabled);
        assert!(!state.apply_action.visible);
        assert_eq!(state.selection.applied().map(ThemeOptionId::as_str), Some("B"));
        assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Success);
        assert_eq!(state.selection.serialize_for_persistence(), None);
    }

    #[test]
    fn test_apply_failure_shows_generic_notice() {
        let mut state = started(None);
        loaded(&mut state, vec![preset("A", "Default", true), preset("B", "Ocean", false)]);
        update(&mut state, Action::SelectIndex(1));
        update(&mut state, Action::ApplyRequested);
        update(
            &mut state,
            Action::ApplyCompleted {
                id: ThemeOptionId("B".to_string()),
                result: Err("permission denied: /etc/theme".to_string()),
            },
        );
        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, APPLY_FAILURE_NOTICE);
        assert!(state.apply_action.enabled);
        assert!(!state.apply_action.visible);
        assert_eq!(state.selection.applied().map(ThemeOptionId::as_str), Some("A"));
    }

    #[test]
    fn test_custom_selection_carries_wallpaper_override() {
        let mut state = started(None);
        update(&mut state, Action::WallpaperLoaded(Box::new(wallpaper_infos())));
        loaded(
            &mut state,
            vec![preset("A", "Default", true), custom("c", "Mine", true)],
        );
        update(&mut state, Action::SelectIndex(1));
        let commands = update(&mut state, Action::ApplyRequested);
        assert!(matches!(
            commands.as_slice(),
            [Command::Apply { wallpaper: Some(w), .. }] if w.title == "Home"
        ));
    }

    #[test]
    fn test_missing_default_blocks_apply() {
        let mut state = started(None);
        loaded(&mut state, vec![preset("A", "Ocean", false)]);
        assert_eq!(state.mode, AppMode::Browse);
        assert!(state.selected_option().is_none());
        assert!(state.composer.current().is_none());

        state.apply_action.visible = true;
        assert!(update(&mut state, Action::ApplyRequested).is_empty());
        assert!(update(&mut state, Action::OpenFullPreview).is_empty());
        assert_eq!(state.mode, AppMode::Browse);
    }

    #[test]
    fn test_fetch_failure_shows_error_state() {
        let mut state = started(None);
        update(&mut state, Action::OptionsFailed("disk on fire".to_string()));
        assert_eq!(state.mode, AppMode::Error);
        assert!(state.last_error.as_deref().unwrap().contains("disk on fire"));
    }

    #[test]
    fn test_subflow_outcomes() {
        let options = vec![preset("A", "Default", true), preset("B", "Ocean", false)];

        let mut deleted = started(None);
        loaded(&mut deleted, options.clone());
        let commands = update(&mut deleted, Action::SubflowReturned(SubflowResult::Deleted));
        assert_eq!(commands, vec![Command::FetchOptions { force_reload: true }]);
        assert!(deleted.selected_option().is_none());

        let mut applied = started(None);
        loaded(&mut applied, options.clone());
        let commands = update(&mut applied, Action::SubflowReturned(SubflowResult::Applied));
        assert!(applied.should_quit);
        assert_eq!(commands, vec![Command::SaveSession(None)]);

        let mut other = started(None);
        loaded(&mut other, options.clone());
        update(&mut other, Action::SelectIndex(1));
        assert!(other.apply_action.visible);
        let commands = update(&mut other, Action::SubflowReturned(SubflowResult::Other));
        assert_eq!(selected_id(&other), Some("B"));
        assert!(!other.apply_action.visible);
        assert_eq!(commands.last(), Some(&Command::RefreshOptions));

        let mut empty = started(None);
        loaded(&mut empty, vec![preset("A", "Ocean", false)]);
        let commands = update(&mut empty, Action::SubflowReturned(SubflowResult::Other));
        assert_eq!(commands, vec![Command::FetchOptions { force_reload: true }]);
    }

    #[test]
    fn test_forced_reload_ignores_persisted_id() {
        let mut state = started(None);
        state.persisted_selection = Some("B".to_string());
        update(
            &mut state,
            Action::OptionsLoaded {
                options: vec![preset("A", "Default", true), preset("B", "Ocean", false)],
                forced: true,
            },
        );
        assert_eq!(selected_id(&state), Some("A"));
    }

    #[test]
    fn test_refresh_picks_up_edited_custom_theme() {
        let mut state = started(None);
        let mine = custom("c", "Mine", true);
        loaded(&mut state, vec![preset("A", "Default", true), mine.clone()]);
        update(&mut state, Action::SelectIndex(1));

        let mut edited = mine;
        edited.id = ThemeOptionId(r#"{"color":"red"}"#.to_string());
        edited.preview.accent_light = ColorInt::rgb(255, 0, 0);
        update(
            &mut state,
            Action::OptionsRefreshed(vec![preset("A", "Default", true), edited.clone()]),
        );
        assert_eq!(state.selected_option(), Some(&edited));
        assert_eq!(
            state.composer.current().map(|set| set.option_id.clone()),
            Some(edited.id)
        );
    }

    #[test]
    fn test_resume_pause_are_paired() {
        let mut state = started(None);
        assert_eq!(
            update(&mut state, Action::Resume),
            vec![Command::StartClock, Command::LoadWallpaper]
        );
        // Second resume must not register another ticker
        assert_eq!(update(&mut state, Action::Resume), vec![Command::LoadWallpaper]);
        assert_eq!(update(&mut state, Action::Pause), vec![Command::StopClock]);
        assert!(update(&mut state, Action::Pause).is_empty());
        assert_eq!(
            update(&mut state, Action::Resume),
            vec![Command::StartClock, Command::LoadWallpaper]
        );
    }

    #[test]
    fn test_quit_persists_uncommitted_selection() {
        let mut state = started(None);
        loaded(&mut state, vec![preset("A", "Default", true), preset("B", "Ocean", false)]);
        update(&mut state, Action::SelectIndex(1));
        let commands = update(&mut state, Action::Quit);
        assert!(state.should_quit);
        assert_eq!(commands, vec![Command::SaveSession(Some("B".to_string()))]);
    }

    #[test]
    fn test_wallpaper_then_layout_issues_one_bind() {
        let mut state = started(None);
        loaded(&mut state, vec![preset("A", "Default", true)]);
        // No size yet: nothing to decode
        assert!(update(&mut state, Action::WallpaperLoaded(Box::new(wallpaper_infos()))).is_empty());

        let commands = update(&mut state, Action::PreviewResized(20, 10));
        assert!(matches!(
            commands.as_slice(),
            [Command::BindBackground(request)] if (request.width, request.height) == (20, 10)
        ));
        assert!(update(&mut state, Action::PreviewResized(20, 10)).is_empty());
        assert!(update(&mut state, Action::PreviewResized(0, 10)).is_empty());
    }

    #[test]
    fn test_stale_cover_background_is_ignored_after_reselect() {
        let mut state = started(None);
        update(&mut state, Action::WallpaperLoaded(Box::new(wallpaper_infos())));
        loaded(&mut state, vec![preset("A", "Default", true), preset("B", "Ocean", false)]);
        let stale = match update(&mut state, Action::PreviewResized(20, 10)).pop() {
            Some(Command::BindBackground(request)) => request,
            other => panic!("expected bind request, got {other:?}"),
        };

        update(&mut state, Action::SelectIndex(1));
        update(
            &mut state,
            Action::BackgroundBound {
                target: stale.target,
                token: stale.token,
                result: Err(ImagePipelineError::Task("late".to_string())),
            },
        );
        match state.current_page() {
            Some(PreviewPage::Cover(cover)) => assert!(cover.background.is_none()),
            other => panic!("unexpected page {other:?}"),
        }
    }

    #[test]
    fn test_full_preview_session_lifecycle() {
        let mut state = started(None);
        update(&mut state, Action::WallpaperLoaded(Box::new(wallpaper_infos())));
        loaded(&mut state, vec![preset("A", "Default", true)]);

        update(&mut state, Action::OpenFullPreview);
        assert_eq!(state.mode, AppMode::FullPreview);
        let first = match update(&mut state, Action::FullPreviewResized(40, 24)).pop() {
            Some(Command::BindBackground(request)) => request,
            other => panic!("expected bind request, got {other:?}"),
        };
        assert!(first.layers.wants_contrast_hint());

        // Closing without apply does nothing else
        assert!(update(&mut state, Action::CloseFullPreview { apply: false }).is_empty());
        assert_eq!(state.mode, AppMode::Browse);

        // A completion for the closed session is dropped
        update(&mut state, Action::OpenFullPreview);
        let session = state.full_preview.as_ref().unwrap().session;
        assert_ne!(BindTarget::FullPreview { session }, first.target);

        // Apply from the full preview bypasses the hidden action
        let commands = update(&mut state, Action::CloseFullPreview { apply: true });
        assert!(matches!(commands.as_slice(), [Command::Apply { .. }]));
    }

    #[test]
    fn test_clock_ticks_reach_the_cover() {
        let mut state = started(None);
        loaded(&mut state, vec![preset("A", "Default", true)]);
        update(&mut state, Action::ClockTicked(ClockTick { hour: 7, minute: 45 }));
        match state.current_page() {
            Some(PreviewPage::Cover(cover)) => assert_eq!(cover.clock.as_deref(), Some("07:45")),
            other => panic!("unexpected page {other:?}"),
        }
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut state = started(None);
        let mut full = preset("A", "Default", true);
        full.preview.headline_font = Some("Serif".to_string());
        loaded(&mut state, vec![full]);
        assert_eq!(state.page_count(), 2);
        update(&mut state, Action::NextPage);
        update(&mut state, Action::NextPage);
        assert_eq!(state.page_index, 1);
        update(&mut state, Action::PrevPage);
        update(&mut state, Action::PrevPage);
        assert_eq!(state.page_index, 0);
    }
}
