//! Physics - free flight of particles thrown by blasts and pushes

pub mod ballistic;
