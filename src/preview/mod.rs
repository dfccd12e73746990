pub mod binding;
pub mod composer;
pub mod image;
pub mod page;
