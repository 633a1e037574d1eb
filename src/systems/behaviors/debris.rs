//! DebrisBehavior - explosion effect particles (white, yellow, red)
//!
//! Purely visual: they drift with a little horizontal jitter and a mild
//! upward bias until their lifetime runs out.

use super::{Behavior, UpdateContext};
use crate::core::utils::random::{range_u16, shuffled_pair};
use crate::domain::particle::Particle;

pub struct DebrisBehavior;

impl Behavior for DebrisBehavior {
    fn update(&self, ctx: &mut UpdateContext, particle: Particle) {
        let Particle::Debris { kind, lifetime } = particle else {
            return;
        };
        let tuning = ctx.tuning.debris;

        let armed = match lifetime {
            Some(ticks) => ticks,
            None => range_u16(ctx.rng, tuning.lifetime_min, tuning.lifetime_max),
        };
        let remaining = armed.saturating_sub(1);
        if remaining == 0 {
            return;
        }

        let ember = Particle::Debris { kind, lifetime: Some(remaining) };
        let dx = if ctx.chance(tuning.drift_chance) { shuffled_pair(ctx.rng)[0] } else { 0 };
        let dy = if ctx.chance(tuning.rise_chance) { -1 } else { 0 };
        let tx = ctx.xi() + dx;
        let ty = ctx.yi() + dy;

        if (dx, dy) != (0, 0) && ctx.is_free(tx, ty) {
            ctx.move_to(tx, ty, ember);
        } else {
            ctx.keep(ember);
        }
    }
}
