//! Sandburst Engine - falling-material sandbox in WASM
//!
//! Sand, water, wood, fire and TNT on a fixed cell grid. Every tick each
//! occupied cell runs its material rule against the current grid and writes
//! into a fresh buffer; explosions rewrite a whole radius at once.
//!
//! Architecture:
//! - core/          - logging and random helpers
//! - spatial/       - grid storage and the per-tick buffer
//! - domain/        - materials, particle states, tuning, manifest
//! - systems/       - material rules, ballistic flight, explosions
//! - simulation/    - tick driver, commands, render feed, wasm facade

// Macros first so every module below can use them
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use spatial::grid;
pub use domain::elements;
pub use systems::behaviors;
pub use systems::physics;
pub use systems::explosion;

#[doc(hidden)]
pub use web_sys as __web_sys;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Thread pool for the rayon passes (render feed, counting)
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

/// Default grid size in cells
pub const DEFAULT_GRID_WIDTH: u32 = 120;
pub const DEFAULT_GRID_HEIGHT: u32 = 90;
/// Pixels per cell the host is expected to draw
pub const CELL_SIZE_PX: u32 = 4;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("sandburst engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Materials for the picker UI as JSON
#[wasm_bindgen]
pub fn materials_manifest_json() -> String {
    domain::content::material_manifest_json()
}

#[wasm_bindgen]
pub fn default_grid_width() -> u32 { DEFAULT_GRID_WIDTH }
#[wasm_bindgen]
pub fn default_grid_height() -> u32 { DEFAULT_GRID_HEIGHT }
#[wasm_bindgen]
pub fn cell_size_px() -> u32 { CELL_SIZE_PX }

// Re-export main types
pub use simulation::{PerfStats, World, WorldCore};
pub use domain::elements::Material;
pub use domain::particle::Particle;
pub use domain::tuning::Tuning;

// Export material ids for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { domain::elements::EL_EMPTY }
#[wasm_bindgen]
pub fn el_stone() -> u8 { domain::elements::EL_STONE }
#[wasm_bindgen]
pub fn el_sand() -> u8 { domain::elements::EL_SAND }
#[wasm_bindgen]
pub fn el_water() -> u8 { domain::elements::EL_WATER }
#[wasm_bindgen]
pub fn el_wood() -> u8 { domain::elements::EL_WOOD }
#[wasm_bindgen]
pub fn el_explosive() -> u8 { domain::elements::EL_EXPLOSIVE }
#[wasm_bindgen]
pub fn el_fire() -> u8 { domain::elements::EL_FIRE }
#[wasm_bindgen]
pub fn el_smoke() -> u8 { domain::elements::EL_SMOKE }
#[wasm_bindgen]
pub fn el_explosion_white() -> u8 { domain::elements::EL_EXPLOSION_WHITE }
#[wasm_bindgen]
pub fn el_explosion_yellow() -> u8 { domain::elements::EL_EXPLOSION_YELLOW }
#[wasm_bindgen]
pub fn el_explosion_red() -> u8 { domain::elements::EL_EXPLOSION_RED }
