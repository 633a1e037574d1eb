pub mod elements;
pub mod particle;
pub mod tuning;
pub mod content;
