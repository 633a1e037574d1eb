//! Explosion - radius-based area rewrite
//!
//! A blast does not go through rule dispatch: it rewrites every cell within
//! the radius at once, weighted by `intensity = 1 - distance / radius`.
//! Tougher materials need a higher intensity to be affected. Sand and water
//! are lifted out and thrown; after the sweep each thrown particle lands on
//! its target cell, or on the nearest free cell around where it started, or
//! is lost if the area is packed solid.
//!
//! Blasts run against a `BlastTarget`: the authoritative grid between ticks
//! (external trigger) or the in-flight tick (a fuse running out mid-step).

mod scatter;

use rand::Rng;

use crate::core::utils::random::{chance, range_u16, EngineRng};
use crate::domain::particle::{Combustion, DebrisKind, Particle, Velocity};
use crate::domain::tuning::Tuning;
use crate::grid::{Grid, TickBuffer};

/// Cell access needed by a blast.
pub trait BlastTarget {
    fn in_bounds(&self, x: i32, y: i32) -> bool;

    /// The particle a blast would hit at (x, y).
    fn occupant(&self, x: i32, y: i32) -> Option<Particle>;

    /// Overwrite (x, y). Caller checked `in_bounds`.
    fn set(&mut self, x: i32, y: i32, cell: Option<Particle>);

    #[inline]
    fn is_free(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.occupant(x, y).is_none()
    }
}

impl BlastTarget for Grid {
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        Grid::in_bounds(self, x, y)
    }

    #[inline]
    fn occupant(&self, x: i32, y: i32) -> Option<Particle> {
        self.get(x, y)
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, cell: Option<Particle>) {
        let idx = self.index(x as u32, y as u32);
        self.set_idx(idx, cell);
    }
}

/// The world as seen halfway through a tick: a cell's occupant is what the
/// buffer already holds, nothing if the current particle was handled, and
/// the current-grid particle otherwise.
pub struct TickView<'a> {
    pub current: &'a Grid,
    pub next: &'a mut TickBuffer,
}

impl BlastTarget for TickView<'_> {
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.current.in_bounds(x, y)
    }

    fn occupant(&self, x: i32, y: i32) -> Option<Particle> {
        let idx = self.current.index_of(x, y)?;
        if let Some(written) = self.next.grid().get_idx(idx) {
            return Some(written);
        }
        if self.next.is_processed_idx(idx) {
            return None;
        }
        self.current.get_idx(idx)
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, cell: Option<Particle>) {
        let idx = self.current.index(x as u32, y as u32);
        self.next.replace_idx(idx, cell);
    }
}

/// What a blast did, for perf counters and logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlastReport {
    pub destroyed: u32,
    pub scattered: u32,
    pub dropped: u32,
    pub chained: u32,
    pub ignited: u32,
    pub effects: u32,
}

/// Falloff in [0, 1]: 1 at the centre, 0 at `radius` and beyond.
#[inline]
pub fn blast_intensity(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / radius).clamp(0.0, 1.0)
}

pub fn detonate<T: BlastTarget>(
    target: &mut T,
    cx: i32,
    cy: i32,
    radius: u32,
    tuning: &Tuning,
    rng: &mut EngineRng,
) -> BlastReport {
    let t = &tuning.explosion;
    let mut report = BlastReport::default();
    let mut thrown: Vec<(i32, i32, Particle)> = Vec::new();
    let r = radius as i32;

    for dy in -r..=r {
        for dx in -r..=r {
            let x = cx + dx;
            let y = cy + dy;
            if !target.in_bounds(x, y) {
                continue;
            }
            let distance = ((dx * dx + dy * dy) as f32).sqrt();
            if distance > radius as f32 {
                continue;
            }
            let intensity = blast_intensity(distance, radius as f32);

            match target.occupant(x, y) {
                Some(p @ Particle::Sand { .. }) if intensity > t.sand_threshold => {
                    target.set(x, y, None);
                    if chance(rng, t.sand_evaporation_chance) {
                        report.destroyed += 1;
                    } else {
                        thrown.push((x, y, p.with_motion(Some(launch_velocity(dx, dy, distance, intensity, tuning, rng)))));
                    }
                }
                Some(p @ Particle::Water { .. }) if intensity > t.water_threshold => {
                    target.set(x, y, None);
                    if chance(rng, t.water_evaporation_chance) {
                        report.destroyed += 1;
                    } else {
                        thrown.push((x, y, p.with_motion(Some(launch_velocity(dx, dy, distance, intensity, tuning, rng)))));
                    }
                }
                Some(Particle::Stone) if intensity > t.stone_threshold => {
                    target.set(x, y, None);
                    report.destroyed += 1;
                }
                Some(Particle::Explosive { fuse }) if intensity > t.explosive_threshold => {
                    let shortened = fuse.map_or(t.chain_fuse, |f| f.min(t.chain_fuse));
                    target.set(x, y, Some(Particle::Explosive { fuse: Some(shortened) }));
                    report.chained += 1;
                }
                Some(Particle::Wood { state }) if !state.is_burning() && intensity > t.wood_threshold => {
                    let burn_time = range_u16(rng, tuning.wood.burn_time_min, tuning.wood.burn_time_max);
                    target.set(x, y, Some(Particle::Wood { state: Combustion::Burning { burn_time } }));
                    report.ignited += 1;
                }
                Some(_) => {}
                None => {
                    if chance(rng, intensity * t.effect_chance) {
                        let kind = DebrisKind::ALL[rng.gen_range(0..DebrisKind::ALL.len())];
                        let lifetime = range_u16(rng, t.effect_lifetime_min, t.effect_lifetime_max);
                        target.set(x, y, Some(Particle::Debris { kind, lifetime: Some(lifetime) }));
                        report.effects += 1;
                    }
                }
            }
        }
    }

    let (placed, dropped) = scatter::place_thrown(target, thrown, t);
    report.scattered = placed;
    report.dropped = dropped;
    report
}

/// Outward radial velocity scaled by intensity, plus an upward kick.
/// The centre cell has no direction of its own and gets a random one.
fn launch_velocity(dx: i32, dy: i32, distance: f32, intensity: f32, tuning: &Tuning, rng: &mut EngineRng) -> Velocity {
    let t = &tuning.explosion;
    let (ux, uy) = if distance > 0.0 {
        (dx as f32 / distance, dy as f32 / distance)
    } else {
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        (angle.cos(), angle.sin())
    };
    let speed = t.blast_force * intensity;
    Velocity::new(ux * speed, uy * speed - t.upward_bias * intensity)
}

/// Manual push gesture: give every resting sand/water particle within
/// `radius` an outward velocity of `(1 - d / radius) * force`. Particles
/// already in flight keep their velocity. Returns how many moved.
pub fn push<T: BlastTarget>(target: &mut T, cx: i32, cy: i32, radius: u32, force: f32) -> u32 {
    if radius == 0 {
        return 0;
    }
    let r = radius as i32;
    let mut pushed = 0;
    for dy in -r..=r {
        for dx in -r..=r {
            let x = cx + dx;
            let y = cy + dy;
            if !target.in_bounds(x, y) {
                continue;
            }
            let distance = ((dx * dx + dy * dy) as f32).sqrt();
            if distance > radius as f32 {
                continue;
            }
            let Some(p) = target.occupant(x, y) else {
                continue;
            };
            if !p.material().is_ballistic() || p.motion().is_some() {
                continue;
            }
            let angle = (dy as f32).atan2(dx as f32);
            let magnitude = blast_intensity(distance, radius as f32) * force;
            let v = Velocity::new(angle.cos() * magnitude, angle.sin() * magnitude);
            target.set(x, y, Some(p.with_motion(Some(v))));
            pushed += 1;
        }
    }
    pushed
}
