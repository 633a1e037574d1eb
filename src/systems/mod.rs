pub mod behaviors;
pub mod physics;
pub mod explosion;
