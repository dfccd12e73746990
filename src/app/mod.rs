pub mod action;
pub mod clock;
pub mod command;
pub mod external;
pub mod features;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod persistence;
pub mod reducer;
pub mod selection;
pub mod services;
pub mod state;
pub mod ui;
