//! Theme system for the Mixologist components.
//!
//! A theme carries layout scales and the concrete values of a fixed set of
//! colour tokens. Visual modes decide which token each semantic colour role
//! maps to, so a subtree can flip its contrast without a second theme.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod mode;
pub use mode::*;
