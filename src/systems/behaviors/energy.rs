//! FireBehavior - short-lived flame
//!
//! Burns down its lifetime, rises most of the time and flickers sideways
//! otherwise. Ignition of wood is wood's business: it looks at its
//! neighbours, fire never reaches out.

use super::{Behavior, UpdateContext};
use crate::core::utils::random::shuffled_pair;
use crate::domain::particle::Particle;

pub struct FireBehavior;

impl Behavior for FireBehavior {
    fn update(&self, ctx: &mut UpdateContext, particle: Particle) {
        let Particle::Fire { lifetime } = particle else {
            return;
        };
        let remaining = lifetime.saturating_sub(1);
        if remaining == 0 {
            return;
        }

        let flame = Particle::Fire { lifetime: remaining };
        let xi = ctx.xi();
        let yi = ctx.yi();

        if ctx.chance(ctx.tuning.fire.rise_chance) && ctx.is_free(xi, yi - 1) {
            ctx.move_to(xi, yi - 1, flame);
            return;
        }

        for dx in shuffled_pair(ctx.rng) {
            if ctx.is_free(xi + dx, yi) {
                ctx.move_to(xi + dx, yi, flame);
                return;
            }
        }

        ctx.keep(flame);
    }
}
