use crate::app::{action::Action, command::Command, services::Services};
use crate::preview::binding::run_bind;
use anyhow::Result;
use tokio::sync::mpsc;

/// Starts the async work behind `command`. Results come back as actions on `tx`.
pub fn handle_command(command: Command, services: &Services, tx: mpsc::Sender<Action>) -> Result<()> {
    match command {
        Command::FetchOptions { force_reload } => {
            let themes = services.themes.clone();
            tokio::spawn(async move {
                match themes.fetch_options(force_reload).await {
                    Ok(options) => {
                        let _ = tx
                            .send(Action::OptionsLoaded {
                                options,
                                forced: force_reload,
                            })
                            .await;
                    }
                    Err(e) => {
                        let _ = tx.send(Action::OptionsFailed(format!("{e:#}"))).await;
                    }
                }
            });
        }
        Command::RefreshOptions => {
            let themes = services.themes.clone();
            tokio::spawn(async move {
                match themes.fetch_options(true).await {
                    Ok(options) => {
                        let _ = tx.send(Action::OptionsRefreshed(options)).await;
                    }
                    // The current list stays usable
                    Err(e) => tracing::warn!(error = %format!("{e:#}"), "refresh_options"),
                }
            });
        }
        Command::LoadWallpaper => {
            let wallpapers = services.wallpapers.clone();
            tokio::spawn(async move {
                match wallpapers.current_wallpaper_infos().await {
                    Ok(infos) => {
                        let _ = tx.send(Action::WallpaperLoaded(Box::new(infos))).await;
                    }
                    Err(e) => {
                        let _ = tx.send(Action::WallpaperFailed(format!("{e:#}"))).await;
                    }
                }
            });
        }
        Command::BindBackground(request) => {
            tokio::spawn(async move {
                let result = run_bind(&request).await;
                let _ = tx
                    .send(Action::BackgroundBound {
                        target: request.target,
                        token: request.token,
                        result,
                    })
                    .await;
            });
        }
        Command::Apply { option, wallpaper } => {
            let themes = services.themes.clone();
            tokio::spawn(async move {
                let result = themes
                    .apply(&option, wallpaper)
                    .await
                    .map_err(|e| format!("{e:#}"));
                let _ = tx
                    .send(Action::ApplyCompleted {
                        id: option.id,
                        result,
                    })
                    .await;
            });
        }
        Command::EditCustomTheme(_)
        | Command::StartClock
        | Command::StopClock
        | Command::SaveSession(_) => {
            // Handled directly in run_loop because they need the terminal or loop-owned state
        }
    }
    Ok(())
}
