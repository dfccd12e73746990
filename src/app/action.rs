use crate::domain::models::{SubflowResult, ThemeOption, ThemeOptionId, WallpaperInfos};
use crate::preview::binding::{BindTarget, BoundBackground};
use crate::preview::image::ImagePipelineError;
use crate::preview::page::ClockTick;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- Lifecycle ---
    Start,  // First frame: fetch catalog and wallpaper
    Resume, // Terminal focus gained (and once after start)
    Pause,  // Terminal focus lost
    Tick,
    Quit,

    // --- Navigation ---
    CursorNext,
    CursorPrev,
    SelectAtCursor,    // Select the option under the cursor
    SelectIndex(usize), // Mouse click on a list row
    NextPage,
    PrevPage,

    // --- Theme Intents ---
    ApplyRequested,
    EditFromCover,                   // Edit action on a custom option's cover
    OpenFullPreview,                 // Full-screen opaque preview of the selection
    CloseFullPreview { apply: bool }, // Result of the full preview

    // --- Layout ---
    PreviewResized(u32, u32),     // Pixel size of the cover surface
    FullPreviewResized(u32, u32), // Pixel size of the full preview surface

    // --- Async Results (The "Callback") ---
    OptionsLoaded {
        options: Vec<ThemeOption>,
        forced: bool,
    },
    OptionsFailed(String),
    OptionsRefreshed(Vec<ThemeOption>), // Re-fetch that keeps the selection
    WallpaperLoaded(Box<WallpaperInfos>),
    WallpaperFailed(String),
    WallpaperChanged, // Watched wallpaper file changed on disk
    BackgroundBound {
        target: BindTarget,
        token: u64,
        result: Result<BoundBackground, ImagePipelineError>,
    },
    ApplyCompleted {
        id: ThemeOptionId,
        result: Result<(), String>,
    },
    SubflowReturned(SubflowResult),
    ClockTicked(ClockTick),
}
