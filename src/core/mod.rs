//! Core utilities shared by every layer (logging macros, randomness).

#[macro_use]
pub mod utils;
