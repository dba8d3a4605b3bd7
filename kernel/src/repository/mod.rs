pub mod booking;
pub mod health;
pub mod package;
pub mod room;
