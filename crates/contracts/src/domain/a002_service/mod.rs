pub mod aggregate;

pub use aggregate::{Offering, Service};
