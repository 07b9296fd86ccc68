pub mod order;
pub mod vehicle;

pub use order::{Assignment, Order};
pub use vehicle::Vehicle;
