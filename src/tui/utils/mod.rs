//! TUI Utility Modules

pub mod logger;

pub use logger::*;
