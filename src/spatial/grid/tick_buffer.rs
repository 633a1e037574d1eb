//! TickBuffer - the next-state grid being built during one tick
//!
//! Besides the cells themselves it carries two per-tick side channels:
//! - `processed`: current-grid cells whose occupant was already dispatched,
//!   moved away or destroyed. Together with a written cell this is what the
//!   driver's "already claimed" check looks at.
//! - `heat`: fire exposure pushed onto wood that has not been processed yet.

use super::Grid;
use crate::domain::particle::Particle;

pub struct TickBuffer {
    cells: Grid,
    processed: Vec<bool>,
    heat: Vec<u16>,
}

impl TickBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let cells = Grid::new(width, height);
        let size = cells.size();
        Self {
            cells,
            processed: vec![false; size],
            heat: vec![0; size],
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    /// Consume the buffer; the cells become the authoritative grid.
    pub fn into_grid(self) -> Grid {
        self.cells
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Particle> {
        self.cells.get(x, y)
    }

    #[inline]
    pub fn is_written(&self, x: i32, y: i32) -> bool {
        self.cells.get(x, y).is_some()
    }

    /// Written, or its current occupant already handled this tick.
    #[inline]
    pub fn is_claimed_idx(&self, idx: usize) -> bool {
        self.cells.get_idx(idx).is_some() || self.processed[idx]
    }

    #[inline]
    pub fn is_processed_idx(&self, idx: usize) -> bool {
        self.processed[idx]
    }

    #[inline]
    pub fn mark_processed_idx(&mut self, idx: usize) {
        self.processed[idx] = true;
    }

    #[inline]
    pub fn write(&mut self, x: u32, y: u32, particle: Particle) {
        self.cells.set_particle(x, y, particle);
    }

    /// Overwrite a cell and mark its current occupant as handled.
    #[inline]
    pub fn replace_idx(&mut self, idx: usize, cell: Option<Particle>) {
        self.cells.set_idx(idx, cell);
        self.processed[idx] = true;
    }

    #[inline]
    pub fn add_heat_idx(&mut self, idx: usize, amount: u16) {
        self.heat[idx] = self.heat[idx].saturating_add(amount);
    }

    /// Heat pushed onto this cell so far this tick; resets it.
    #[inline]
    pub fn take_heat_idx(&mut self, idx: usize) -> u16 {
        std::mem::take(&mut self.heat[idx])
    }
}
