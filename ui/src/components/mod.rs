pub mod button;
pub mod card;
pub mod field;
pub mod footer;
pub mod navbar;
pub mod scroll;
pub mod status;
