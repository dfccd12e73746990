pub mod catalog;
pub mod editor;
pub mod error;
pub mod models;
pub mod wallpaper;
