pub mod booking;
pub mod interval;
pub mod room;
