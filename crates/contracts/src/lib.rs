pub mod booking;
pub mod domain;
pub mod shared;
