//! Grid - fixed-size row-major array of optional particles
//!
//! The grid is the only store of simulation state. One instance is the
//! authoritative world between ticks; during a tick it is read-only and a
//! `TickBuffer` collects the next state.

use crate::domain::particle::Particle;

mod tick_buffer;
pub use tick_buffer::TickBuffer;

mod indexing;
mod accessors;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<Option<Particle>>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![None; size],
        }
    }
}
