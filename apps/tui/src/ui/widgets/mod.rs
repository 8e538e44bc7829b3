pub mod field;
pub mod popup;
pub mod tables;
