//! Cocktail browsing components for GPUI.
//!
//! Every styled component reads its colours through the [`context::ModeContext`]
//! handed down by the nearest [`components::PageSession`]. The concrete colour
//! values come from the global [`mixologist_theme::Theme`].

pub mod primitives;

pub mod components;

pub mod context;

pub mod models;

mod utils;
pub use utils::ElementIdExt;

mod init;
pub use init::*;

pub use mixologist_theme as theme;
