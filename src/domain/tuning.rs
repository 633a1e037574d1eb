//! Tuning - every empirically tuned constant of the rule set
//!
//! Kept separate from grid dimensions and runtime settings. Defaults
//! reproduce the reference feel; a JSON document can override any subset of
//! fields (`#[serde(default)]` everywhere, flight objects merge over their
//! material's preset) and is validated before use.

use serde::{Deserialize, Deserializer, Serialize};

/// Free-flight behaviour of sand and water after a blast or push.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallisticTuning {
    /// A component above this (cells/tick) keeps the particle in flight.
    pub moving_threshold: f32,
    /// Both components below this after a move: back to rest.
    pub rest_threshold: f32,
    /// Both components below this after a bounce: back to rest.
    pub bounce_rest_threshold: f32,
    /// Fraction of velocity lost per tick of flight.
    pub air_resistance: f32,
    /// Downward velocity gained per tick of flight.
    pub gravity: f32,
    pub bounce_x: f32,
    pub bounce_y: f32,
    /// Half-width of the random horizontal kick on a bounce.
    pub bounce_jitter: f32,
    /// Bounce scale against each surface material.
    pub stone_scale: f32,
    pub sand_scale: f32,
    pub water_scale: f32,
}

impl BallisticTuning {
    pub fn sand() -> Self {
        Self {
            moving_threshold: 0.1,
            rest_threshold: 0.03,
            bounce_rest_threshold: 0.0,
            air_resistance: 0.02,
            gravity: 0.08,
            bounce_x: 0.4,
            bounce_y: 0.3,
            bounce_jitter: 0.05,
            stone_scale: 1.2,
            sand_scale: 1.0,
            water_scale: 0.5,
        }
    }

    pub fn water() -> Self {
        Self {
            moving_threshold: 0.05,
            rest_threshold: 0.03,
            bounce_rest_threshold: 0.05,
            air_resistance: 0.03,
            gravity: 0.06,
            bounce_x: 0.3,
            bounce_y: 0.2,
            bounce_jitter: 0.025,
            stone_scale: 1.2,
            sand_scale: 0.5,
            water_scale: 0.2,
        }
    }
}

impl Default for BallisticTuning {
    fn default() -> Self {
        Self::sand()
    }
}

/// A `flight` object from JSON: any subset of fields, applied over the
/// owning material's preset.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FlightOverride {
    moving_threshold: Option<f32>,
    rest_threshold: Option<f32>,
    bounce_rest_threshold: Option<f32>,
    air_resistance: Option<f32>,
    gravity: Option<f32>,
    bounce_x: Option<f32>,
    bounce_y: Option<f32>,
    bounce_jitter: Option<f32>,
    stone_scale: Option<f32>,
    sand_scale: Option<f32>,
    water_scale: Option<f32>,
}

impl FlightOverride {
    fn over(self, base: BallisticTuning) -> BallisticTuning {
        BallisticTuning {
            moving_threshold: self.moving_threshold.unwrap_or(base.moving_threshold),
            rest_threshold: self.rest_threshold.unwrap_or(base.rest_threshold),
            bounce_rest_threshold: self.bounce_rest_threshold.unwrap_or(base.bounce_rest_threshold),
            air_resistance: self.air_resistance.unwrap_or(base.air_resistance),
            gravity: self.gravity.unwrap_or(base.gravity),
            bounce_x: self.bounce_x.unwrap_or(base.bounce_x),
            bounce_y: self.bounce_y.unwrap_or(base.bounce_y),
            bounce_jitter: self.bounce_jitter.unwrap_or(base.bounce_jitter),
            stone_scale: self.stone_scale.unwrap_or(base.stone_scale),
            sand_scale: self.sand_scale.unwrap_or(base.sand_scale),
            water_scale: self.water_scale.unwrap_or(base.water_scale),
        }
    }
}

fn sand_flight<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BallisticTuning, D::Error> {
    Ok(FlightOverride::deserialize(deserializer)?.over(BallisticTuning::sand()))
}

fn water_flight<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BallisticTuning, D::Error> {
    Ok(FlightOverride::deserialize(deserializer)?.over(BallisticTuning::water()))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandTuning {
    #[serde(deserialize_with = "sand_flight")]
    pub flight: BallisticTuning,
    /// Chance per tick to sink through water directly below.
    pub sink_chance: f32,
    /// Chance per tick to sink through water diagonally below.
    pub diagonal_sink_chance: f32,
}

impl Default for SandTuning {
    fn default() -> Self {
        Self {
            flight: BallisticTuning::sand(),
            sink_chance: 0.3,
            diagonal_sink_chance: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterTuning {
    #[serde(deserialize_with = "water_flight")]
    pub flight: BallisticTuning,
    /// Sideways reach when nothing presses from above.
    pub flow_range: u32,
    /// Sideways reach with sand resting on top.
    pub pressured_flow_range: u32,
}

impl Default for WaterTuning {
    fn default() -> Self {
        Self {
            flight: BallisticTuning::water(),
            flow_range: 1,
            pressured_flow_range: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WoodTuning {
    /// Exposure above this ignites (checked only on already-exposed wood).
    pub ignition_threshold: u16,
    /// Exposure gained per tick next to a flame.
    pub exposure_gain: u16,
    /// Exposure lost per tick away from flames.
    pub exposure_decay: u16,
    pub burn_time_min: u16,
    pub burn_time_max: u16,
    /// Chance per tick to light one empty neighbour.
    pub fire_spawn_chance: f32,
    /// Chance per tick to heat neighbouring unlit wood.
    pub heat_spread_chance: f32,
    pub heat_spread_amount: u16,
    /// Chance per tick to emit smoke upward.
    pub smoke_chance: f32,
}

impl Default for WoodTuning {
    fn default() -> Self {
        Self {
            ignition_threshold: 12,
            exposure_gain: 1,
            exposure_decay: 1,
            burn_time_min: 90,
            burn_time_max: 180,
            fire_spawn_chance: 0.08,
            heat_spread_chance: 0.1,
            heat_spread_amount: 2,
            smoke_chance: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosiveTuning {
    /// Fuse armed on the first tick (~3 s at 60 fps).
    pub fuse_ticks: u16,
    /// Chance per tick to sink through water.
    pub sink_chance: f32,
}

impl Default for ExplosiveTuning {
    fn default() -> Self {
        Self {
            fuse_ticks: 180,
            sink_chance: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireTuning {
    pub lifetime_min: u16,
    pub lifetime_max: u16,
    /// Chance to try rising before trying sideways.
    pub rise_chance: f32,
}

impl Default for FireTuning {
    fn default() -> Self {
        Self {
            lifetime_min: 20,
            lifetime_max: 50,
            rise_chance: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeTuning {
    /// Rise speed at emission (cells/tick).
    pub initial_speed: f32,
    /// Speed gained after each successful rise.
    pub acceleration: f32,
    pub max_speed: f32,
    pub lifetime_min: u16,
    pub lifetime_max: u16,
}

impl Default for SmokeTuning {
    fn default() -> Self {
        Self {
            initial_speed: 1.0,
            acceleration: 0.25,
            max_speed: 3.0,
            lifetime_min: 60,
            lifetime_max: 120,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebrisTuning {
    /// Lifetime range for effects spawned without one.
    pub lifetime_min: u16,
    pub lifetime_max: u16,
    /// Chance per tick of a one-cell horizontal drift.
    pub drift_chance: f32,
    /// Chance per tick of a one-cell rise.
    pub rise_chance: f32,
}

impl Default for DebrisTuning {
    fn default() -> Self {
        Self {
            lifetime_min: 30,
            lifetime_max: 60,
            drift_chance: 0.3,
            rise_chance: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionTuning {
    pub radius: u32,
    /// Minimum intensity that affects each material.
    pub sand_threshold: f32,
    pub water_threshold: f32,
    pub stone_threshold: f32,
    pub explosive_threshold: f32,
    pub wood_threshold: f32,
    pub sand_evaporation_chance: f32,
    pub water_evaporation_chance: f32,
    /// Outward speed of scattered particles at intensity 1.
    pub blast_force: f32,
    /// Extra upward speed at intensity 1.
    pub upward_bias: f32,
    /// Velocity multiplier used to pick the landing cell.
    pub scatter_scale: f32,
    /// Largest ring searched for a free landing cell.
    pub scatter_search_radius: u32,
    /// Fuse given to explosives caught in the blast.
    pub chain_fuse: u16,
    /// Effect spawn chance on empty cells at intensity 1.
    pub effect_chance: f32,
    pub effect_lifetime_min: u16,
    pub effect_lifetime_max: u16,
}

impl Default for ExplosionTuning {
    fn default() -> Self {
        Self {
            radius: 8,
            sand_threshold: 0.3,
            water_threshold: 0.2,
            stone_threshold: 0.7,
            explosive_threshold: 0.5,
            wood_threshold: 0.4,
            sand_evaporation_chance: 0.1,
            water_evaporation_chance: 0.3,
            blast_force: 4.0,
            upward_bias: 1.0,
            scatter_scale: 1.0,
            scatter_search_radius: 6,
            chain_fuse: 10,
            effect_chance: 0.8,
            effect_lifetime_min: 20,
            effect_lifetime_max: 60,
        }
    }
}

/// Defaults for the manual push gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushTuning {
    pub radius: u32,
    pub force: f32,
}

impl Default for PushTuning {
    fn default() -> Self {
        Self { radius: 12, force: 5.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub sand: SandTuning,
    pub water: WaterTuning,
    pub wood: WoodTuning,
    pub explosive: ExplosiveTuning,
    pub fire: FireTuning,
    pub smoke: SmokeTuning,
    pub debris: DebrisTuning,
    pub explosion: ExplosionTuning,
    pub push: PushTuning,
}

/// Upper bound for blast, push and smoke speeds (cells/tick).
const MAX_BLAST_SPEED: f32 = 64.0;
const MAX_SCATTER_SCALE: f32 = 16.0;
/// Upper bound for every radius and reach, in cells.
const MAX_RADIUS: u32 = 256;

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|e| e.to_string())?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let probabilities = [
            ("sand.sink_chance", self.sand.sink_chance),
            ("sand.diagonal_sink_chance", self.sand.diagonal_sink_chance),
            ("wood.fire_spawn_chance", self.wood.fire_spawn_chance),
            ("wood.heat_spread_chance", self.wood.heat_spread_chance),
            ("wood.smoke_chance", self.wood.smoke_chance),
            ("explosive.sink_chance", self.explosive.sink_chance),
            ("fire.rise_chance", self.fire.rise_chance),
            ("debris.drift_chance", self.debris.drift_chance),
            ("debris.rise_chance", self.debris.rise_chance),
            ("explosion.sand_evaporation_chance", self.explosion.sand_evaporation_chance),
            ("explosion.water_evaporation_chance", self.explosion.water_evaporation_chance),
            ("explosion.effect_chance", self.explosion.effect_chance),
            ("sand.flight.air_resistance", self.sand.flight.air_resistance),
            ("water.flight.air_resistance", self.water.flight.air_resistance),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{} must be within [0, 1], got {}", name, p));
            }
        }

        let ranges = [
            ("wood.burn_time", self.wood.burn_time_min, self.wood.burn_time_max),
            ("fire.lifetime", self.fire.lifetime_min, self.fire.lifetime_max),
            ("smoke.lifetime", self.smoke.lifetime_min, self.smoke.lifetime_max),
            ("debris.lifetime", self.debris.lifetime_min, self.debris.lifetime_max),
            (
                "explosion.effect_lifetime",
                self.explosion.effect_lifetime_min,
                self.explosion.effect_lifetime_max,
            ),
        ];
        for (name, min, max) in ranges {
            if min == 0 || min > max {
                return Err(format!("{} range must satisfy 0 < min <= max, got {}..={}", name, min, max));
            }
        }

        let bounded = [
            ("explosion.blast_force", self.explosion.blast_force, MAX_BLAST_SPEED),
            ("explosion.upward_bias", self.explosion.upward_bias, MAX_BLAST_SPEED),
            ("explosion.scatter_scale", self.explosion.scatter_scale, MAX_SCATTER_SCALE),
            ("push.force", self.push.force, MAX_BLAST_SPEED),
            ("smoke.max_speed", self.smoke.max_speed, MAX_BLAST_SPEED),
        ];
        for (name, value, max) in bounded {
            if !(0.0..=max).contains(&value) {
                return Err(format!("{} must be within [0, {}], got {}", name, max, value));
            }
        }

        let radii = [
            ("explosion.radius", self.explosion.radius),
            ("explosion.scatter_search_radius", self.explosion.scatter_search_radius),
            ("push.radius", self.push.radius),
            ("water.flow_range", self.water.flow_range),
            ("water.pressured_flow_range", self.water.pressured_flow_range),
        ];
        for (name, value) in radii {
            if value > MAX_RADIUS {
                return Err(format!("{} must be at most {}, got {}", name, MAX_RADIUS, value));
            }
        }

        if self.explosion.radius == 0 {
            return Err("explosion.radius must be positive".to_string());
        }
        if self.explosive.fuse_ticks == 0 || self.explosion.chain_fuse == 0 {
            return Err("fuse lengths must be positive".to_string());
        }
        if self.wood.exposure_gain == 0 {
            return Err("wood.exposure_gain must be positive".to_string());
        }
        if self.smoke.initial_speed <= 0.0 || self.smoke.max_speed < self.smoke.initial_speed {
            return Err("smoke speeds must satisfy 0 < initial_speed <= max_speed".to_string());
        }
        Ok(())
    }
}
