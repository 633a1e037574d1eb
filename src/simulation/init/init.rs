use crate::behaviors::BehaviorRegistry;
use crate::core::utils::random::{entropy_rng, seeded_rng, EngineRng};
use crate::domain::tuning::Tuning;
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::RenderBuffers;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32) -> WorldCore {
    build(width, height, entropy_rng())
}

pub(super) fn create_world_core_with_seed(width: u32, height: u32, seed: u64) -> WorldCore {
    build(width, height, seeded_rng(seed))
}

fn build(width: u32, height: u32, rng: EngineRng) -> WorldCore {
    let grid = Grid::new(width, height);
    let size = grid.size();
    crate::engine_debug!("world {}x{} ({} cells)", width, height, size);
    WorldCore {
        grid,
        tuning: Tuning::default(),
        behaviors: BehaviorRegistry::new(),
        scan_order: (0..size as u32).collect(),
        rng,
        particle_count: 0,
        frame: 0,
        render: RenderBuffers::new(size),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
