//! WaterBehavior - liquid
//!
//! At rest: fall > diagonal fall > sideways flow > pressure rise > hold.
//! Sand resting directly on top widens the flow and allows rising into
//! an empty cell above.

use super::{Behavior, UpdateContext};
use crate::core::utils::random::{shuffled_pair, shuffled_triple};
use crate::domain::particle::Particle;
use crate::physics::ballistic;

pub struct WaterBehavior;

impl WaterBehavior {
    /// Sideways target at `range` cells. Beyond the first cell the path
    /// must be open or liquid, so pressure never pushes water through walls.
    fn flow_target(ctx: &UpdateContext, xi: i32, yi: i32, dir: i32, range: i32) -> Option<i32> {
        for step in 1..range {
            let px = xi + dir * step;
            let passable = ctx.is_free(px, yi) || ctx.current.get(px, yi).map_or(false, |p| p.is_water());
            if !passable {
                return None;
            }
        }
        let nx = xi + dir * range;
        ctx.is_free(nx, yi).then_some(nx)
    }
}

impl Behavior for WaterBehavior {
    fn update(&self, ctx: &mut UpdateContext, particle: Particle) {
        let Particle::Water { motion } = particle else {
            return;
        };
        let tuning = ctx.tuning.water;

        if let Some(v) = motion {
            if v.exceeds(tuning.flight.moving_threshold) {
                ballistic::fly(ctx, particle, v, &tuning.flight);
                return;
            }
        }

        let at_rest = Particle::WATER;
        let xi = ctx.xi();
        let yi = ctx.yi();
        let pressured = ctx.current.get(xi, yi - 1).map_or(false, |p| p.is_sand());

        if ctx.is_free(xi, yi + 1) {
            ctx.move_to(xi, yi + 1, at_rest);
            return;
        }

        for dx in shuffled_pair(ctx.rng) {
            if ctx.is_free(xi + dx, yi + 1) {
                ctx.move_to(xi + dx, yi + 1, at_rest);
                return;
            }
        }

        let range = (if pressured { tuning.pressured_flow_range } else { tuning.flow_range }) as i32;
        for r in 1..=range {
            for dir in shuffled_pair(ctx.rng) {
                if let Some(nx) = Self::flow_target(ctx, xi, yi, dir, r) {
                    ctx.move_to(nx, yi, at_rest);
                    return;
                }
            }
        }

        if pressured {
            for dx in shuffled_triple(ctx.rng) {
                if ctx.is_free(xi + dx, yi - 1) {
                    ctx.move_to(xi + dx, yi - 1, at_rest);
                    return;
                }
            }
        }

        ctx.keep(at_rest);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::run_cell;
    use crate::domain::particle::Particle;
    use crate::domain::tuning::Tuning;
    use crate::grid::Grid;

    /// 7x5 with a stone floor; water at (2, 3) has stone to its right and
    /// more water to its left, so only a two-cell flow reaches open space.
    fn channel(pressured: bool) -> Grid {
        let mut grid = Grid::new(7, 5);
        for x in 0..7 {
            grid.set_particle(x, 4, Particle::Stone);
        }
        grid.set_particle(1, 3, Particle::WATER);
        grid.set_particle(2, 3, Particle::WATER);
        grid.set_particle(3, 3, Particle::Stone);
        if pressured {
            grid.set_particle(2, 2, Particle::SAND);
        }
        grid
    }

    #[test]
    fn falls_then_slides_diagonally() {
        let mut grid = Grid::new(5, 5);
        grid.set_particle(2, 2, Particle::WATER);
        let (next, _) = run_cell(&grid, 2, 2, &Tuning::default(), 1);
        assert_eq!(next.get(2, 3), Some(Particle::WATER));

        grid.set_particle(2, 3, Particle::Stone);
        let (next, _) = run_cell(&grid, 2, 2, &Tuning::default(), 1);
        assert!(next.get(1, 3) == Some(Particle::WATER) || next.get(3, 3) == Some(Particle::WATER));
    }

    #[test]
    fn sand_on_top_pushes_water_two_cells() {
        for seed in 0..8 {
            let (next, _) = run_cell(&channel(true), 2, 3, &Tuning::default(), seed);
            assert_eq!(next.get(0, 3), Some(Particle::WATER), "seed {}", seed);
            assert_eq!(next.get(2, 3), None);
        }
    }

    #[test]
    fn unpressured_water_flows_one_cell_only() {
        for seed in 0..8 {
            let (next, _) = run_cell(&channel(false), 2, 3, &Tuning::default(), seed);
            assert_eq!(next.get(2, 3), Some(Particle::WATER), "seed {}", seed);
            assert_eq!(next.get(0, 3), None);
        }
    }

    #[test]
    fn pressured_flow_does_not_tunnel_through_stone() {
        let mut grid = channel(true);
        grid.set_particle(1, 3, Particle::Stone);
        for seed in 0..8 {
            let (next, _) = run_cell(&grid, 2, 3, &Tuning::default(), seed);
            assert_eq!(next.get(0, 3), None, "seed {}", seed);
        }
    }

    #[test]
    fn rises_beside_sand_when_boxed_in() {
        let mut grid = channel(true);
        grid.set_particle(1, 3, Particle::Stone);
        for seed in 0..8 {
            let (next, _) = run_cell(&grid, 2, 3, &Tuning::default(), seed);
            let rose = next.get(1, 2) == Some(Particle::WATER) || next.get(3, 2) == Some(Particle::WATER);
            assert!(rose, "seed {}", seed);
            assert_eq!(next.get(2, 3), None);
            assert_eq!(next.get(2, 2), None);
        }
    }

    #[test]
    fn boxed_in_without_sand_holds() {
        let mut grid = channel(false);
        grid.set_particle(1, 3, Particle::Stone);
        let (next, _) = run_cell(&grid, 2, 3, &Tuning::default(), 6);
        assert_eq!(next.get(2, 3), Some(Particle::WATER));
        assert_eq!(next.grid().particle_count(), 1);
    }
}
