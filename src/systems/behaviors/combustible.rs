//! WoodBehavior - combustible solid
//!
//! Unlit -> Exposed -> Burning -> gone. Exposure grows each tick a flame
//! (fire or burning wood) touches the particle and decays otherwise; only
//! wood that was already Exposed when the tick began may ignite. Wood never
//! moves, burning or not.

use rand::Rng;

use super::common::{any_neighbor, NEIGHBORS_8};
use super::{Behavior, UpdateContext};
use crate::core::utils::random::range_u16;
use crate::domain::particle::{Combustion, Particle};
use crate::domain::tuning::WoodTuning;

pub struct WoodBehavior;

impl WoodBehavior {
    fn smoulder(ctx: &mut UpdateContext, state: Combustion, tuning: &WoodTuning) {
        let idx = ctx.idx();
        let heat = ctx.next.take_heat_idx(idx);
        let near_flame = any_neighbor(ctx.current, ctx.xi(), ctx.yi(), Particle::is_flame_source);

        let mut exposure = state.exposure();
        exposure = if near_flame {
            exposure.saturating_add(tuning.exposure_gain)
        } else {
            exposure.saturating_sub(tuning.exposure_decay)
        };
        exposure = exposure.saturating_add(heat);

        let was_exposed = matches!(state, Combustion::Exposed { .. });
        let next_state = if was_exposed && exposure > tuning.ignition_threshold {
            Combustion::Burning {
                burn_time: range_u16(ctx.rng, tuning.burn_time_min, tuning.burn_time_max),
            }
        } else {
            Combustion::from_exposure(exposure)
        };
        ctx.keep(Particle::Wood { state: next_state });
    }

    fn burn(ctx: &mut UpdateContext, burn_time: u16, tuning: &WoodTuning) {
        let remaining = burn_time.saturating_sub(1);
        if remaining == 0 {
            return;
        }
        let xi = ctx.xi();
        let yi = ctx.yi();

        if ctx.chance(tuning.fire_spawn_chance) {
            let (dx, dy) = NEIGHBORS_8[ctx.rng.gen_range(0..NEIGHBORS_8.len())];
            if ctx.is_free(xi + dx, yi + dy) {
                let fire = Particle::fire(ctx.tuning, ctx.rng);
                ctx.spawn_at(xi + dx, yi + dy, fire);
            }
        }

        if ctx.chance(tuning.heat_spread_chance) {
            for (dx, dy) in NEIGHBORS_8 {
                Self::heat_neighbor(ctx, xi + dx, yi + dy, tuning.heat_spread_amount);
            }
        }

        if ctx.chance(tuning.smoke_chance) && ctx.is_free(xi, yi - 1) {
            let smoke = Particle::smoke(ctx.tuning, ctx.rng);
            ctx.spawn_at(xi, yi - 1, smoke);
        }

        ctx.keep(Particle::Wood { state: Combustion::Burning { burn_time: remaining } });
    }

    /// Raise the exposure of non-burning wood at (x, y). Wood already written
    /// this tick is bumped in place; wood still waiting gets it as heat.
    fn heat_neighbor(ctx: &mut UpdateContext, x: i32, y: i32, amount: u16) {
        let Some(idx) = ctx.current.index_of(x, y) else {
            return;
        };

        if let Some(written) = ctx.next.grid().get_idx(idx) {
            if let Particle::Wood { state } = written {
                if !state.is_burning() {
                    let exposure = state.exposure().saturating_add(amount);
                    ctx.next.replace_idx(idx, Some(Particle::Wood { state: Combustion::from_exposure(exposure) }));
                }
            }
            return;
        }

        if ctx.next.is_processed_idx(idx) {
            return;
        }
        if let Some(Particle::Wood { state }) = ctx.current.get_idx(idx) {
            if !state.is_burning() {
                ctx.next.add_heat_idx(idx, amount);
            }
        }
    }
}

impl Behavior for WoodBehavior {
    fn update(&self, ctx: &mut UpdateContext, particle: Particle) {
        let Particle::Wood { state } = particle else {
            return;
        };
        let tuning = ctx.tuning.wood;
        match state {
            Combustion::Burning { burn_time } => Self::burn(ctx, burn_time, &tuning),
            Combustion::Unlit | Combustion::Exposed { .. } => Self::smoulder(ctx, state, &tuning),
        }
    }
}
