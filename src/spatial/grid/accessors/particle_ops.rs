use super::super::*;

impl Grid {
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Particle> {
        self.index_of(x, y).and_then(|idx| self.cells[idx])
    }

    #[inline]
    pub fn get_idx(&self, idx: usize) -> Option<Particle> {
        self.cells[idx]
    }

    #[inline]
    pub fn set_particle(&mut self, x: u32, y: u32, particle: Particle) {
        let idx = self.index(x, y);
        self.cells[idx] = Some(particle);
    }

    #[inline]
    pub fn set_idx(&mut self, idx: usize, cell: Option<Particle>) {
        self.cells[idx] = cell;
    }

    #[inline]
    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.cells[idx] = None;
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Row-major view of every cell (render feed, tests).
    #[inline]
    pub fn cells(&self) -> &[Option<Particle>] {
        &self.cells
    }

    /// Occupied cells as `(x, y, particle)`.
    pub fn particles(&self) -> impl Iterator<Item = (u32, u32, Particle)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.map(|p| {
                let (x, y) = self.coords(idx);
                (x, y, p)
            }))
    }
}
