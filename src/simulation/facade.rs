use wasm_bindgen::prelude::*;

use crate::domain::elements::Material;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Where the render feed lives in wasm memory. Pointers move when buffers
/// are reallocated, so hosts re-read this after `clear` or a resize.
#[wasm_bindgen]
pub struct RenderLayout {
    types_ptr: u32,
    colors_ptr: u32,
    states_ptr: u32,
    cells: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn types_ptr(&self) -> u32 { self.types_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn states_ptr(&self) -> u32 { self.states_ptr }
    #[wasm_bindgen(getter)]
    pub fn cells(&self) -> u32 { self.cells }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.cells * 4 }
    #[wasm_bindgen(getter)]
    pub fn states_len_bytes(&self) -> u32 { self.cells * 2 }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self {
            core: WorldCore::with_seed(width, height, seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn load_tuning(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_tuning_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_tuning_json(&self) -> String {
        self.core.tuning_json()
    }

    /// Place a material with its brush footprint; returns cells filled
    pub fn place(&mut self, x: u32, y: u32, element: u8) -> u32 {
        match Material::from_id(element) {
            Some(material) => self.core.place(x, y, material),
            None => 0,
        }
    }

    /// Add a single particle at position
    pub fn add_particle(&mut self, x: u32, y: u32, element: u8) -> bool {
        self.core.add_particle(x, y, element)
    }

    /// Remove particle at position
    pub fn remove_particle(&mut self, x: u32, y: u32) -> bool {
        self.core.remove_particle(x, y)
    }

    /// Remove particles in radius
    pub fn remove_particles_in_radius(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        self.core.remove_particles_in_radius(cx, cy, radius)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Push gesture with the configured radius and force
    pub fn push(&mut self, x: i32, y: i32) -> u32 {
        self.core.push_default(x, y)
    }

    pub fn push_with(&mut self, x: i32, y: i32, radius: u32, force: f32) -> u32 {
        self.core.push(x, y, radius, force)
    }

    pub fn detonate(&mut self, x: i32, y: i32) -> bool {
        self.core.detonate(x, y)
    }

    pub fn detonate_with_radius(&mut self, x: i32, y: i32, radius: u32) -> bool {
        self.core.detonate_with_radius(x, y, radius)
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Get pointer to types array (for JS rendering)
    pub fn types_ptr(&mut self) -> *const u8 {
        self.core.types_ptr()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&mut self) -> *const u32 {
        self.core.colors_ptr()
    }

    /// Get pointer to visual state array (for JS rendering)
    pub fn states_ptr(&mut self) -> *const u16 {
        self.core.states_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    pub fn render_layout(&mut self) -> RenderLayout {
        RenderLayout {
            types_ptr: self.core.types_ptr() as u32,
            colors_ptr: self.core.colors_ptr() as u32,
            states_ptr: self.core.states_ptr() as u32,
            cells: self.core.cells_len() as u32,
        }
    }

    /// Copy of the colour buffer, for hosts that cannot view wasm memory
    pub fn colors_snapshot(&mut self) -> Vec<u32> {
        self.core.colors().to_vec()
    }
}
