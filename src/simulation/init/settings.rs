use crate::domain::tuning::Tuning;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn load_tuning_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let tuning = Tuning::from_json(json)?;
    world.tuning = tuning;
    world.render.dirty = true;
    crate::engine_log!("tuning loaded");
    Ok(())
}

pub(super) fn tuning_json(world: &WorldCore) -> String {
    world.tuning.to_json()
}
