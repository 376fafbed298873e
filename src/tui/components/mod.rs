//! Reusable UI Components
//!
//! Widgets shared by the converter and settings screens.

pub mod header;
pub mod radio_group;
pub mod status_bar;

pub use header::*;
pub use radio_group::*;
pub use status_bar::*;
