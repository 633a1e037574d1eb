use super::super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    /// In bounds and unoccupied.
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        match self.index_of(x, y) {
            Some(idx) => self.cells[idx].is_none(),
            None => false,
        }
    }

    /// Count of occupied cells.
    /// Parallel scan with Rayon when the feature is enabled.
    pub fn particle_count(&self) -> u32 {
        #[cfg(feature = "parallel")]
        {
            self.cells.par_iter().filter(|c| c.is_some()).count() as u32
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.cells.iter().filter(|c| c.is_some()).count() as u32
        }
    }
}
