use crate::app::{
    action::Action, clock::Clock, command::Command, external, input::map_event_to_action,
    persistence, reducer, services::Services, state::AppState, state::NoticeKind, ui,
};
use crate::domain::models::SubflowResult;

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const WATCH_DEBOUNCE: Duration = Duration::from_millis(500);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    services: Services,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, services, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    services: Services,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    let mut clock = Clock::default();

    // Wallpaper Watcher
    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if res.is_ok() {
            let _ = notify_tx.try_send(());
        }
    })?;
    for path in services.wallpapers.watch_paths() {
        if path.exists() {
            if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
                tracing::warn!(path = %path.display(), error = %e, "cannot watch wallpaper");
            }
        }
    }

    let action_tx_clone = action_tx.clone();
    tokio::spawn(async move {
        let mut pending = false;
        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(WATCH_DEBOUNCE) => {
                        let _ = action_tx_clone.send(Action::WallpaperChanged).await;
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    // Initial Load
    for action in [Action::Start, Action::Resume] {
        let commands = reducer::update(&mut app_state, action);
        run_commands(terminal, &mut app_state, &services, &mut clock, &action_tx, commands)
            .await?;
    }

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // Surfaces measured by the draw above
        for action in app_state.layout.take_resizes() {
            let commands = reducer::update(&mut app_state, action);
            run_commands(terminal, &mut app_state, &services, &mut clock, &action_tx, commands)
                .await?;
        }

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let commands = reducer::update(&mut app_state, action);
            run_commands(terminal, &mut app_state, &services, &mut clock, &action_tx, commands)
                .await?;

            if app_state.should_quit {
                break;
            }
        }
    }

    clock.stop();
    Ok(())
}

async fn run_commands<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    services: &Services,
    clock: &mut Clock,
    action_tx: &mpsc::Sender<Action>,
    commands: Vec<Command>,
) -> Result<()> {
    for command in commands {
        match command {
            Command::StartClock => clock.start(action_tx.clone()),
            Command::StopClock => clock.stop(),
            Command::SaveSession(selected) => {
                persistence::save_selected_theme(&services.session_path, selected);
            }
            Command::EditCustomTheme(request) => {
                let wallpaper = app_state.wallpaper.as_ref().map(|w| w.home.clone());
                let result =
                    match external::edit_custom_theme(services, &request, wallpaper).await {
                        Ok(result) => result,
                        Err(e) => {
                            tracing::warn!(id = %request.id, error = %format!("{e:#}"), "edit_custom_theme");
                            app_state.set_notice(
                                NoticeKind::Error,
                                format!("Could not edit {}", request.title),
                            );
                            SubflowResult::Other
                        }
                    };

                // Clear the terminal to remove any leftover output from the editor
                terminal.clear()?;

                let _ = action_tx.send(Action::SubflowReturned(result)).await;
            }
            other => handle_command(other, services, action_tx.clone())?,
        }
    }
    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    services: &Services,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    crate::app::features::picker::handle_command(command, services, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
