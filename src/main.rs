use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use themepick::app::{persistence, r#loop::run_loop, services::Services, state::AppState};
use themepick::config::{self, Config};
use themepick::infrastructure::{
    editor::ExternalEditor, theme_store::FileThemeManager, wallpaper::FileWallpaperSource,
};
use themepick::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        );
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything that can fail happens BEFORE terminal setup so we don't
    // leave the terminal in raw mode.
    if let Err(e) = logging::init(&config::state_path("themepick.log")) {
        eprintln!("logging disabled: {e:#}");
    }
    let config = Config::load();
    let services = Services {
        themes: Arc::new(FileThemeManager::new(
            config.catalog_path(),
            config.applied_path(),
        )),
        wallpapers: Arc::new(FileWallpaperSource::new(&config.wallpaper)),
        editor: Arc::new(ExternalEditor::new(&config.editor_command())),
        session_path: persistence::get_session_path(),
    };
    let persisted = persistence::load_selected_theme(&services.session_path);
    let app_state = AppState::new(&config, persisted);
    tracing::info!(palette = ?config.palette, dark_mode = config.dark_mode, "starting themepick");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %format!("{err:#}"), "run_loop");
        println!("{err:?}");
    }

    Ok(())
}
