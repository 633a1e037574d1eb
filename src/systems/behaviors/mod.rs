//! Behaviors - per-material transition rules
//!
//! Each behavior handles one material family. A rule reads the current grid
//! (immutable for the tick) and writes the tick buffer; it must either write
//! its particle forward somewhere or deliberately drop it.
//!
//! "Free" always means empty in BOTH the current grid and the tick buffer.

mod common;
mod solid;
mod powder;
mod liquid;
mod combustible;
mod volatile;
mod energy;
mod gas;
mod debris;

pub use common::NEIGHBORS_8;
pub use solid::StoneBehavior;
pub use powder::SandBehavior;
pub use liquid::WaterBehavior;
pub use combustible::WoodBehavior;
pub use volatile::ExplosiveBehavior;
pub use energy::FireBehavior;
pub use gas::SmokeBehavior;
pub use debris::DebrisBehavior;

use crate::core::utils::random::{chance, EngineRng};
use crate::domain::particle::Particle;
use crate::domain::tuning::Tuning;
use crate::grid::{Grid, TickBuffer};

/// Per-tick counters collected by the rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickCounters {
    pub processed: u32,
    pub detonations: u32,
    pub spawned: u32,
    pub scattered: u32,
    pub scatter_dropped: u32,
}

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub current: &'a Grid,
    pub next: &'a mut TickBuffer,
    pub tuning: &'a Tuning,
    pub rng: &'a mut EngineRng,
    pub counters: &'a mut TickCounters,
    pub x: u32,
    pub y: u32,
}

impl<'a> UpdateContext<'a> {
    #[inline]
    pub fn xi(&self) -> i32 {
        self.x as i32
    }

    #[inline]
    pub fn yi(&self) -> i32 {
        self.y as i32
    }

    #[inline]
    pub fn idx(&self) -> usize {
        self.current.index(self.x, self.y)
    }

    #[inline]
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.current.is_empty(x, y) && !self.next.is_written(x, y)
    }

    #[inline]
    pub fn chance(&mut self, probability: f32) -> bool {
        chance(self.rng, probability)
    }

    /// Write the particle back into its own cell.
    #[inline]
    pub fn keep(&mut self, particle: Particle) {
        self.next.write(self.x, self.y, particle);
    }

    /// Write the particle into another cell. Caller checked `is_free`.
    #[inline]
    pub fn move_to(&mut self, x: i32, y: i32, particle: Particle) {
        debug_assert!(self.current.in_bounds(x, y));
        self.next.write(x as u32, y as u32, particle);
    }

    /// Write a newly created particle into a free cell.
    #[inline]
    pub fn spawn_at(&mut self, x: i32, y: i32, particle: Particle) {
        self.move_to(x, y, particle);
        self.counters.spawned += 1;
    }

    /// Water at (x, y) that nobody has touched yet this tick.
    pub fn untouched_water(&self, x: i32, y: i32) -> Option<Particle> {
        let idx = self.current.index_of(x, y)?;
        if self.next.is_claimed_idx(idx) {
            return None;
        }
        self.current.get_idx(idx).filter(|p| p.is_water())
    }

    /// Trade places: `particle` goes to (x, y), `displaced` takes our cell.
    pub fn swap_with(&mut self, x: i32, y: i32, particle: Particle, displaced: Particle) {
        let idx = self.current.index(x as u32, y as u32);
        self.next.replace_idx(idx, Some(particle));
        self.next.write(self.x, self.y, displaced);
    }
}

/// Behavior trait - each material family implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext, particle: Particle);
}

/// Behavior registry - dispatch by particle variant
pub struct BehaviorRegistry {
    stone: StoneBehavior,
    sand: SandBehavior,
    water: WaterBehavior,
    wood: WoodBehavior,
    explosive: ExplosiveBehavior,
    fire: FireBehavior,
    smoke: SmokeBehavior,
    debris: DebrisBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            stone: StoneBehavior,
            sand: SandBehavior,
            water: WaterBehavior,
            wood: WoodBehavior,
            explosive: ExplosiveBehavior,
            fire: FireBehavior,
            smoke: SmokeBehavior,
            debris: DebrisBehavior,
        }
    }

    pub fn update(&self, ctx: &mut UpdateContext, particle: Particle) {
        match particle {
            Particle::Stone => self.stone.update(ctx, particle),
            Particle::Sand { .. } => self.sand.update(ctx, particle),
            Particle::Water { .. } => self.water.update(ctx, particle),
            Particle::Wood { .. } => self.wood.update(ctx, particle),
            Particle::Explosive { .. } => self.explosive.update(ctx, particle),
            Particle::Fire { .. } => self.fire.update(ctx, particle),
            Particle::Smoke { .. } => self.smoke.update(ctx, particle),
            Particle::Debris { .. } => self.debris.update(ctx, particle),
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
