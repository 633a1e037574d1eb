//! SmokeBehavior - rising combustion byproduct
//!
//! Smoke climbs up to round(rise_speed) empty cells per tick and speeds up
//! after every successful climb, up to a cap. Blocked overhead it slips
//! diagonally up, then sideways; fully boxed in it waits with its speed
//! intact.

use super::{Behavior, UpdateContext};
use crate::core::utils::random::shuffled_pair;
use crate::domain::particle::Particle;

pub struct SmokeBehavior;

impl Behavior for SmokeBehavior {
    fn update(&self, ctx: &mut UpdateContext, particle: Particle) {
        let Particle::Smoke { rise_speed, lifetime } = particle else {
            return;
        };
        let remaining = lifetime.saturating_sub(1);
        if remaining == 0 {
            return;
        }
        let tuning = ctx.tuning.smoke;
        let xi = ctx.xi();
        let yi = ctx.yi();

        let steps = rise_speed.round().max(1.0) as i32;
        let mut climbed = 0;
        while climbed < steps && ctx.is_free(xi, yi - climbed - 1) {
            climbed += 1;
        }
        if climbed > 0 {
            let faster = (rise_speed + tuning.acceleration).min(tuning.max_speed);
            ctx.move_to(xi, yi - climbed, Particle::Smoke { rise_speed: faster, lifetime: remaining });
            return;
        }

        let drifting = Particle::Smoke { rise_speed, lifetime: remaining };
        for dy in [-1, 0] {
            for dx in shuffled_pair(ctx.rng) {
                if ctx.is_free(xi + dx, yi + dy) {
                    ctx.move_to(xi + dx, yi + dy, drifting);
                    return;
                }
            }
        }

        ctx.keep(drifting);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::run_cell;
    use crate::domain::particle::Particle;
    use crate::domain::tuning::Tuning;
    use crate::grid::Grid;

    fn smoke(rise_speed: f32, lifetime: u16) -> Particle {
        Particle::Smoke { rise_speed, lifetime }
    }

    #[test]
    fn climbs_and_speeds_up() {
        let mut grid = Grid::new(3, 12);
        grid.set_particle(1, 11, smoke(1.0, 50));
        let (next, _) = run_cell(&grid, 1, 11, &Tuning::default(), 1);
        assert_eq!(next.get(1, 10), Some(smoke(1.25, 49)));
    }

    #[test]
    fn speed_caps_at_max() {
        let tuning = Tuning::default();
        let max = tuning.smoke.max_speed;
        let mut grid = Grid::new(3, 12);
        grid.set_particle(1, 11, smoke(max - 0.1, 50));
        let (next, _) = run_cell(&grid, 1, 11, &tuning, 1);
        assert_eq!(next.get(1, 8), Some(smoke(max, 49)));

        let mut grid = Grid::new(3, 12);
        grid.set_particle(1, 11, smoke(max, 50));
        let (next, _) = run_cell(&grid, 1, 11, &tuning, 1);
        assert_eq!(next.get(1, 8), Some(smoke(max, 49)));
    }

    #[test]
    fn fast_smoke_stops_under_a_ceiling() {
        let mut grid = Grid::new(3, 12);
        grid.set_particle(1, 9, Particle::Stone);
        grid.set_particle(1, 11, smoke(3.0, 50));
        let (next, _) = run_cell(&grid, 1, 11, &Tuning::default(), 1);
        assert_eq!(next.get(1, 10), Some(smoke(3.0, 49)));
    }

    #[test]
    fn slides_sideways_when_boxed_overhead() {
        let mut grid = Grid::new(5, 5);
        for x in 1..4 {
            grid.set_particle(x, 1, Particle::Stone);
        }
        grid.set_particle(2, 2, smoke(2.0, 30));
        for seed in 0..8 {
            let (next, _) = run_cell(&grid, 2, 2, &Tuning::default(), seed);
            let slid = next.get(1, 2) == Some(smoke(2.0, 29)) || next.get(3, 2) == Some(smoke(2.0, 29));
            assert!(slid, "seed {}", seed);
        }
    }

    #[test]
    fn boxed_in_keeps_its_speed() {
        let mut grid = Grid::new(3, 3);
        for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)] {
            grid.set_particle(x, y, Particle::Stone);
        }
        grid.set_particle(1, 1, smoke(2.5, 30));
        let (next, _) = run_cell(&grid, 1, 1, &Tuning::default(), 3);
        assert_eq!(next.get(1, 1), Some(smoke(2.5, 29)));
    }

    #[test]
    fn expires_when_lifetime_runs_out() {
        let mut grid = Grid::new(3, 3);
        grid.set_particle(1, 2, smoke(1.0, 1));
        let (next, _) = run_cell(&grid, 1, 2, &Tuning::default(), 1);
        assert_eq!(next.grid().particle_count(), 0);
    }
}
