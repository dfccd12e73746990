pub mod backdrop;
pub mod footer;
pub mod full_preview;
pub mod header;
pub mod option_list;
pub mod preview_card;
pub mod splash;
