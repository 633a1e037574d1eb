use crate::domain::particle::Particle;
use crate::grid::Grid;

/// The 8 Moore neighbours, row by row.
pub const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// True if any Moore neighbour of (x, y) in `grid` matches.
#[inline]
pub fn any_neighbor(grid: &Grid, x: i32, y: i32, pred: impl Fn(&Particle) -> bool) -> bool {
    NEIGHBORS_8
        .iter()
        .any(|&(dx, dy)| grid.get(x + dx, y + dy).map_or(false, |p| pred(&p)))
}
