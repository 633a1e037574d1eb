//! Particle - one unit of material with its material-specific state
//!
//! Each variant carries only the state its rules use, so a fuse on water or a
//! burn timer on sand cannot exist.

use crate::core::utils::random::{range_u16, EngineRng};
use crate::domain::elements::Material;
use crate::domain::tuning::Tuning;

/// Free-flight velocity in cells per tick (+y is down).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Velocity {
    pub const fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy }
    }

    /// True when either component exceeds `threshold`.
    #[inline]
    pub fn exceeds(&self, threshold: f32) -> bool {
        self.vx.abs() > threshold || self.vy.abs() > threshold
    }

    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}

/// Combustion state machine of a wood particle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Combustion {
    Unlit,
    Exposed { exposure: u16 },
    Burning { burn_time: u16 },
}

impl Combustion {
    #[inline]
    pub fn is_burning(&self) -> bool {
        matches!(self, Combustion::Burning { .. })
    }

    #[inline]
    pub fn exposure(&self) -> u16 {
        match *self {
            Combustion::Exposed { exposure } => exposure,
            _ => 0,
        }
    }

    /// Unlit/Exposed from a raw exposure value.
    #[inline]
    pub fn from_exposure(exposure: u16) -> Self {
        if exposure == 0 {
            Combustion::Unlit
        } else {
            Combustion::Exposed { exposure }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DebrisKind {
    White,
    Yellow,
    Red,
}

impl DebrisKind {
    pub const ALL: [DebrisKind; 3] = [DebrisKind::White, DebrisKind::Yellow, DebrisKind::Red];

    pub fn material(self) -> Material {
        match self {
            DebrisKind::White => Material::ExplosionWhite,
            DebrisKind::Yellow => Material::ExplosionYellow,
            DebrisKind::Red => Material::ExplosionRed,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Particle {
    Stone,
    Sand { motion: Option<Velocity> },
    Water { motion: Option<Velocity> },
    Wood { state: Combustion },
    /// `None` until the first tick arms the fuse.
    Explosive { fuse: Option<u16> },
    Fire { lifetime: u16 },
    /// `rise_speed` is in cells per tick, always positive (upward).
    Smoke { rise_speed: f32, lifetime: u16 },
    /// `None` until the first tick picks a lifetime.
    Debris { kind: DebrisKind, lifetime: Option<u16> },
}

impl Particle {
    pub const SAND: Particle = Particle::Sand { motion: None };
    pub const WATER: Particle = Particle::Water { motion: None };
    pub const WOOD: Particle = Particle::Wood { state: Combustion::Unlit };
    pub const EXPLOSIVE: Particle = Particle::Explosive { fuse: None };

    pub fn material(&self) -> Material {
        match *self {
            Particle::Stone => Material::Stone,
            Particle::Sand { .. } => Material::Sand,
            Particle::Water { .. } => Material::Water,
            Particle::Wood { .. } => Material::Wood,
            Particle::Explosive { .. } => Material::Explosive,
            Particle::Fire { .. } => Material::Fire,
            Particle::Smoke { .. } => Material::Smoke,
            Particle::Debris { kind, .. } => kind.material(),
        }
    }

    /// Fresh particle of `material`, as placed by the user.
    pub fn spawn(material: Material, tuning: &Tuning, rng: &mut EngineRng) -> Particle {
        match material {
            Material::Stone => Particle::Stone,
            Material::Sand => Particle::SAND,
            Material::Water => Particle::WATER,
            Material::Wood => Particle::WOOD,
            Material::Explosive => Particle::EXPLOSIVE,
            Material::Fire => Particle::fire(tuning, rng),
            Material::Smoke => Particle::smoke(tuning, rng),
            Material::ExplosionWhite => Particle::Debris { kind: DebrisKind::White, lifetime: None },
            Material::ExplosionYellow => Particle::Debris { kind: DebrisKind::Yellow, lifetime: None },
            Material::ExplosionRed => Particle::Debris { kind: DebrisKind::Red, lifetime: None },
        }
    }

    pub fn fire(tuning: &Tuning, rng: &mut EngineRng) -> Particle {
        Particle::Fire {
            lifetime: range_u16(rng, tuning.fire.lifetime_min, tuning.fire.lifetime_max),
        }
    }

    pub fn smoke(tuning: &Tuning, rng: &mut EngineRng) -> Particle {
        Particle::Smoke {
            rise_speed: tuning.smoke.initial_speed,
            lifetime: range_u16(rng, tuning.smoke.lifetime_min, tuning.smoke.lifetime_max),
        }
    }

    /// Velocity if this particle is in free flight.
    pub fn motion(&self) -> Option<Velocity> {
        match *self {
            Particle::Sand { motion } | Particle::Water { motion } => motion,
            _ => None,
        }
    }

    /// Same particle with a new free-flight state; no-op for materials
    /// that never fly.
    pub fn with_motion(self, motion: Option<Velocity>) -> Particle {
        match self {
            Particle::Sand { .. } => Particle::Sand { motion },
            Particle::Water { .. } => Particle::Water { motion },
            other => other,
        }
    }

    #[inline]
    pub fn is_water(&self) -> bool {
        matches!(self, Particle::Water { .. })
    }

    #[inline]
    pub fn is_sand(&self) -> bool {
        matches!(self, Particle::Sand { .. })
    }

    /// Fire or burning wood: what raises a wood particle's exposure.
    #[inline]
    pub fn is_flame_source(&self) -> bool {
        match self {
            Particle::Fire { .. } => true,
            Particle::Wood { state } => state.is_burning(),
            _ => false,
        }
    }

    /// 16-bit visual-state value for the render feed.
    pub fn visual_state(&self) -> u16 {
        match *self {
            Particle::Explosive { fuse } => fuse.unwrap_or(0),
            Particle::Wood { state } => match state {
                Combustion::Unlit => 0,
                Combustion::Exposed { exposure } => exposure,
                Combustion::Burning { burn_time } => burn_time,
            },
            Particle::Fire { lifetime } => lifetime,
            Particle::Smoke { lifetime, .. } => lifetime,
            Particle::Debris { lifetime, .. } => lifetime.unwrap_or(0),
            Particle::Stone | Particle::Sand { .. } | Particle::Water { .. } => 0,
        }
    }
}
