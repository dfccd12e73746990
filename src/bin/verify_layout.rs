use anyhow::Result;
use ratatui::{backend::TestBackend, Terminal};
use themepick::app::action::Action;
use themepick::app::state::AppState;
use themepick::app::{reducer, ui};
use themepick::domain::catalog::ThemeManager;
use themepick::infrastructure::theme_store::FileThemeManager;

fn draw_all_sizes(app_state: &mut AppState) -> Result<()> {
    for width in 0..100 {
        for height in 0..50 {
            let mut terminal = Terminal::new(TestBackend::new(width, height))?;
            terminal.draw(|f| ui::draw(f, app_state))?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Nothing is read from here besides the built-in presets
    let scratch = std::env::temp_dir().join("themepick-verify-layout");
    let store = FileThemeManager::new(scratch.join("custom.toml"), scratch.join("applied.toml"));
    let options = store.fetch_options(true).await?;

    let mut app_state = AppState::default();
    println!("Loading screen...");
    draw_all_sizes(&mut app_state)?;

    reducer::update(
        &mut app_state,
        Action::OptionsLoaded {
            options: options.clone(),
            forced: false,
        },
    );
    for index in 0..options.len() {
        reducer::update(&mut app_state, Action::SelectIndex(index));
        for _ in 0..5 {
            println!("Browsing {} page {}...", options[index].title, app_state.page_index);
            draw_all_sizes(&mut app_state)?;
            reducer::update(&mut app_state, Action::NextPage);
        }
    }

    reducer::update(&mut app_state, Action::OpenFullPreview);
    println!("Full preview...");
    draw_all_sizes(&mut app_state)?;

    // Also test with an error message
    reducer::update(&mut app_state, Action::CloseFullPreview { apply: false });
    reducer::update(
        &mut app_state,
        Action::OptionsFailed(
            "Test error message that might be long and cause issues if not handled correctly by the layout engine.".to_string(),
        ),
    );
    draw_all_sizes(&mut app_state)?;

    println!("Layout verification completed successfully!");
    Ok(())
}
