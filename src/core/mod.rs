//! Core types and constants for the photo-trigger engine

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
