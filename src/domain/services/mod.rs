pub mod availability;
pub mod blocked_set;
pub mod reservation;
