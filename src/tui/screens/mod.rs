//! Screen Implementations
//!
//! Full-screen views: the converter and its settings.

pub mod converter;
pub mod settings;

pub use converter::*;
pub use settings::*;
