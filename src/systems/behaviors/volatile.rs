//! ExplosiveBehavior - TNT
//!
//! The fuse is armed on the first tick and burns down by one every tick,
//! moving or not. At zero the particle is removed and the blast goes off at
//! its cell. Until then it sinks like a heavy liquid: down into empty space,
//! through water, or diagonally.

use super::{Behavior, UpdateContext};
use crate::core::utils::random::shuffled_pair;
use crate::domain::particle::Particle;
use crate::engine_debug;
use crate::explosion::{self, TickView};

pub struct ExplosiveBehavior;

impl ExplosiveBehavior {
    fn detonate(ctx: &mut UpdateContext) {
        let (xi, yi) = (ctx.xi(), ctx.yi());
        let tuning = ctx.tuning;
        let mut view = TickView {
            current: ctx.current,
            next: &mut *ctx.next,
        };
        let report = explosion::detonate(&mut view, xi, yi, tuning.explosion.radius, tuning, &mut *ctx.rng);
        ctx.counters.detonations += 1;
        ctx.counters.spawned += report.effects;
        ctx.counters.scattered += report.scattered;
        ctx.counters.scatter_dropped += report.dropped;
        engine_debug!("detonation at ({}, {}): {:?}", ctx.x, ctx.y, report);
    }
}

impl Behavior for ExplosiveBehavior {
    fn update(&self, ctx: &mut UpdateContext, particle: Particle) {
        let Particle::Explosive { fuse } = particle else {
            return;
        };
        let tuning = ctx.tuning.explosive;

        let remaining = fuse.unwrap_or(tuning.fuse_ticks).saturating_sub(1);
        if remaining == 0 {
            Self::detonate(ctx);
            return;
        }

        let lit = Particle::Explosive { fuse: Some(remaining) };
        let xi = ctx.xi();
        let yi = ctx.yi();

        if ctx.is_free(xi, yi + 1) {
            ctx.move_to(xi, yi + 1, lit);
            return;
        }

        if let Some(water) = ctx.untouched_water(xi, yi + 1) {
            if ctx.chance(tuning.sink_chance) {
                ctx.swap_with(xi, yi + 1, lit, water);
                return;
            }
        }

        for dx in shuffled_pair(ctx.rng) {
            let nx = xi + dx;
            let ny = yi + 1;
            if ctx.is_free(nx, ny) {
                ctx.move_to(nx, ny, lit);
                return;
            }
            if let Some(water) = ctx.untouched_water(nx, ny) {
                if ctx.chance(tuning.sink_chance) {
                    ctx.swap_with(nx, ny, lit, water);
                    return;
                }
            }
        }

        ctx.keep(lit);
    }
}
