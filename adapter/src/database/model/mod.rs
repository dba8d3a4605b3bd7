pub mod booking;
pub mod package;
pub mod room;
