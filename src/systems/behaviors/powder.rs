//! SandBehavior - granular solid
//!
//! Priority: free flight (after a blast) > fall > sink through water below >
//! diagonal slide or diagonal sink > hold.

use super::{Behavior, UpdateContext};
use crate::core::utils::random::shuffled_pair;
use crate::domain::particle::Particle;
use crate::physics::ballistic;

pub struct SandBehavior;

impl Behavior for SandBehavior {
    fn update(&self, ctx: &mut UpdateContext, particle: Particle) {
        let Particle::Sand { motion } = particle else {
            return;
        };
        let tuning = ctx.tuning.sand;

        if let Some(v) = motion {
            if v.exceeds(tuning.flight.moving_threshold) {
                ballistic::fly(ctx, particle, v, &tuning.flight);
                return;
            }
        }

        let at_rest = Particle::SAND;
        let xi = ctx.xi();
        let yi = ctx.yi();

        if ctx.is_free(xi, yi + 1) {
            ctx.move_to(xi, yi + 1, at_rest);
            return;
        }

        if let Some(water) = ctx.untouched_water(xi, yi + 1) {
            if ctx.chance(tuning.sink_chance) {
                ctx.swap_with(xi, yi + 1, at_rest, water);
                return;
            }
        }

        for dx in shuffled_pair(ctx.rng) {
            let nx = xi + dx;
            let ny = yi + 1;
            if ctx.is_free(nx, ny) {
                ctx.move_to(nx, ny, at_rest);
                return;
            }
            if let Some(water) = ctx.untouched_water(nx, ny) {
                if ctx.chance(tuning.diagonal_sink_chance) {
                    ctx.swap_with(nx, ny, at_rest, water);
                    return;
                }
            }
        }

        ctx.keep(at_rest);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{bottom_up, count, row_major, run_cell, run_cells};
    use crate::domain::particle::Particle;
    use crate::domain::tuning::Tuning;
    use crate::grid::Grid;

    /// 5x5 with a stone floor and (2, 3) walled in left and right.
    fn water_pocket() -> Grid {
        let mut grid = Grid::new(5, 5);
        for x in 0..5 {
            grid.set_particle(x, 4, Particle::Stone);
        }
        grid.set_particle(1, 3, Particle::Stone);
        grid.set_particle(3, 3, Particle::Stone);
        grid.set_particle(2, 3, Particle::WATER);
        grid.set_particle(2, 2, Particle::SAND);
        grid
    }

    fn sinking() -> Tuning {
        let mut tuning = Tuning::default();
        tuning.sand.sink_chance = 1.0;
        tuning.sand.diagonal_sink_chance = 1.0;
        tuning
    }

    #[test]
    fn falls_into_empty_cell_below() {
        let mut grid = Grid::new(5, 5);
        grid.set_particle(2, 1, Particle::SAND);
        let (next, _) = run_cell(&grid, 2, 1, &Tuning::default(), 1);
        assert_eq!(next.get(2, 2), Some(Particle::SAND));
        assert_eq!(next.get(2, 1), None);
    }

    #[test]
    fn sinks_through_water_below() {
        let grid = water_pocket();
        let (next, _) = run_cell(&grid, 2, 2, &sinking(), 3);
        assert_eq!(next.get(2, 3), Some(Particle::SAND));
        assert_eq!(next.get(2, 2), Some(Particle::WATER));
    }

    #[test]
    fn sinks_diagonally_when_straight_down_is_solid() {
        let mut grid = Grid::new(5, 5);
        for x in 0..5 {
            grid.set_particle(x, 4, Particle::Stone);
        }
        grid.set_particle(2, 3, Particle::Stone);
        grid.set_particle(1, 3, Particle::WATER);
        grid.set_particle(3, 3, Particle::WATER);
        grid.set_particle(2, 2, Particle::SAND);

        for seed in 0..8 {
            let (next, _) = run_cell(&grid, 2, 2, &sinking(), seed);
            let landed = [(1, 3), (3, 3)].into_iter().filter(|&(x, y)| next.get(x, y) == Some(Particle::SAND)).count();
            assert_eq!(landed, 1, "seed {}", seed);
            assert_eq!(next.get(2, 2), Some(Particle::WATER));
        }
    }

    #[test]
    fn holds_on_water_when_the_draw_fails() {
        let mut tuning = Tuning::default();
        tuning.sand.sink_chance = 0.0;
        tuning.sand.diagonal_sink_chance = 0.0;
        let (next, _) = run_cell(&water_pocket(), 2, 2, &tuning, 4);
        assert_eq!(next.get(2, 2), Some(Particle::SAND));
        assert_eq!(next.get(2, 3), None);
    }

    #[test]
    fn swap_never_duplicates_water() {
        let grid = water_pocket();
        for order in [row_major(&grid), bottom_up(&grid)] {
            for seed in 0..8 {
                let (next, _) = run_cells(&grid, &order, &sinking(), seed);
                let out = next.into_grid();
                assert_eq!(count(&out, Particle::is_water), 1);
                assert_eq!(count(&out, Particle::is_sand), 1);
                assert_eq!(out.particle_count(), grid.particle_count());
            }
        }
    }

    #[test]
    fn sand_in_flight_lands_at_rest() {
        let mut grid = Grid::new(5, 5);
        let slow = Particle::SAND.with_motion(Some(crate::domain::particle::Velocity::new(0.05, 0.05)));
        grid.set_particle(2, 1, slow);
        let (next, _) = run_cell(&grid, 2, 1, &Tuning::default(), 2);
        assert_eq!(next.get(2, 2), Some(Particle::SAND));
    }
}
