mod focus_ring;
pub use focus_ring::*;

pub mod input;
