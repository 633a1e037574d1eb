use wasm_bindgen::prelude::*;

/// Snapshot of the last step. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) shuffle_ms: f64,
    pub(super) rules_ms: f64,
    pub(super) render_ms: f64,
    pub(super) particles_processed: u32,
    pub(super) detonations: u32,
    pub(super) spawned: u32,
    pub(super) scattered: u32,
    pub(super) scatter_dropped: u32,
    pub(super) particle_count: u32,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn shuffle_ms(&self) -> f64 { self.shuffle_ms }
    #[wasm_bindgen(getter)]
    pub fn rules_ms(&self) -> f64 { self.rules_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn detonations(&self) -> u32 { self.detonations }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn scattered(&self) -> u32 { self.scattered }
    #[wasm_bindgen(getter)]
    pub fn scatter_dropped(&self) -> u32 { self.scatter_dropped }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
