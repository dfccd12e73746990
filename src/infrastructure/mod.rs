pub mod editor;
pub mod theme_store;
pub mod wallpaper;
