//! World - tick driver and host-facing state
//!
//! `WorldCore` owns the authoritative grid and everything a tick needs. It
//! only orchestrates: material rules live in `behaviors/`, blasts in
//! `explosion/`. Each step reshuffles the scan order, runs every occupied
//! cell through its rule into a fresh buffer, swaps the buffer in and
//! rebuilds the render feed.

use crate::behaviors::BehaviorRegistry;
use crate::core::utils::random::EngineRng;
use crate::domain::elements::Material;
use crate::domain::particle::Particle;
use crate::domain::tuning::Tuning;
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;
use render_extract::RenderBuffers;

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    tuning: Tuning,
    behaviors: BehaviorRegistry,
    scan_order: Vec<u32>,
    rng: EngineRng,

    // State
    particle_count: u32,
    frame: u64,
    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world with given dimensions, seeded from entropy
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height)
    }

    /// Deterministic world for tests and replays
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        init::create_world_core_with_seed(width, height, seed)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn particle_count(&self) -> u32 { self.particle_count }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn particle_at(&self, x: i32, y: i32) -> Option<Particle> {
        self.grid.get(x, y)
    }

    pub fn tuning(&self) -> &Tuning { &self.tuning }

    /// Replace the tuning from JSON. Missing fields keep their defaults;
    /// invalid values leave the current tuning untouched.
    pub fn load_tuning_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_tuning_json(self, json)
    }

    pub fn tuning_json(&self) -> String {
        settings::tuning_json(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Place `material` with its brush footprint anchored at (x, y).
    /// Returns how many cells were filled.
    pub fn place(&mut self, x: u32, y: u32, material: Material) -> u32 {
        commands::place(self, x, y, material)
    }

    /// Add a single particle of material id `element` at position
    pub fn add_particle(&mut self, x: u32, y: u32, element: u8) -> bool {
        commands::add_particle(self, x, y, element)
    }

    /// Overwrite one cell with an exact particle state
    pub fn set_particle(&mut self, x: u32, y: u32, cell: Option<Particle>) -> bool {
        commands::set_particle(self, x, y, cell)
    }

    /// Remove particle at position
    pub fn remove_particle(&mut self, x: u32, y: u32) -> bool {
        commands::remove_particle(self, x, y)
    }

    /// Remove particles in radius
    pub fn remove_particles_in_radius(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        commands::remove_particles_in_radius(self, cx, cy, radius)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Throw sand and water outward from (cx, cy). Returns how many moved.
    pub fn push(&mut self, cx: i32, cy: i32, radius: u32, force: f32) -> u32 {
        commands::push(self, cx, cy, radius, force)
    }

    /// Push with the configured gesture radius and force
    pub fn push_default(&mut self, cx: i32, cy: i32) -> u32 {
        let push = self.tuning.push;
        commands::push(self, cx, cy, push.radius, push.force)
    }

    /// Blast at (cx, cy) with the configured radius
    pub fn detonate(&mut self, cx: i32, cy: i32) -> bool {
        let radius = self.tuning.explosion.radius;
        commands::detonate(self, cx, cy, radius)
    }

    pub fn detonate_with_radius(&mut self, cx: i32, cy: i32, radius: u32) -> bool {
        commands::detonate(self, cx, cy, radius)
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Rebuild the render feed if anything changed since the last rebuild
    pub fn refresh_render(&mut self) {
        render_extract::refresh_render(self);
    }

    /// Material ids, one byte per cell
    pub fn types(&mut self) -> &[u8] {
        self.refresh_render();
        &self.render.types
    }

    /// ABGR colours, one per cell
    pub fn colors(&mut self) -> &[u32] {
        self.refresh_render();
        &self.render.colors
    }

    /// Visual state (fuse, burn time, exposure or lifetime), one per cell
    pub fn states(&mut self) -> &[u16] {
        self.refresh_render();
        &self.render.state
    }

    /// Get pointer to types array (for JS rendering)
    pub fn types_ptr(&mut self) -> *const u8 {
        self.types().as_ptr()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&mut self) -> *const u32 {
        self.colors().as_ptr()
    }

    pub fn states_ptr(&mut self) -> *const u16 {
        self.states().as_ptr()
    }

    /// Cells per render buffer
    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
