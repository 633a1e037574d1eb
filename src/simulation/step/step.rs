use rand::seq::SliceRandom;

use crate::behaviors::{BehaviorRegistry, TickCounters, UpdateContext};
use crate::core::utils::random::EngineRng;
use crate::domain::tuning::Tuning;
use crate::grid::{Grid, TickBuffer};

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    let step_start = perf_on.then(PerfTimer::start);

    // Fresh order every tick so no direction is favoured when two particles
    // want the same cell.
    let t0 = perf_on.then(PerfTimer::start);
    world.scan_order.shuffle(&mut world.rng);
    let shuffle_ms = t0.map_or(0.0, |t| t.elapsed_ms());

    let t0 = perf_on.then(PerfTimer::start);
    let (next, counters) = run_rules(
        &world.grid,
        &world.behaviors,
        &world.scan_order,
        &world.tuning,
        &mut world.rng,
    );
    let rules_ms = t0.map_or(0.0, |t| t.elapsed_ms());

    world.grid = next;
    world.particle_count = world.grid.particle_count();
    world.frame += 1;
    world.render.dirty = true;

    if counters.scatter_dropped > 0 {
        crate::engine_warn!(
            "frame {}: {} blasted particles found no free cell",
            world.frame,
            counters.scatter_dropped
        );
    }

    let t0 = perf_on.then(PerfTimer::start);
    world.refresh_render();
    let render_ms = t0.map_or(0.0, |t| t.elapsed_ms());

    if let Some(start) = step_start {
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.shuffle_ms = shuffle_ms;
        stats.rules_ms = rules_ms;
        stats.render_ms = render_ms;
        stats.particles_processed = counters.processed;
        stats.detonations = counters.detonations;
        stats.spawned = counters.spawned;
        stats.scattered = counters.scattered;
        stats.scatter_dropped = counters.scatter_dropped;
        stats.particle_count = world.particle_count;
        stats.grid_size = world.grid.size() as u32;
        // cells + render feed (types 1, colors 4, state 2) + scan order 4
        let per_cell = std::mem::size_of::<Option<crate::domain::particle::Particle>>() + 1 + 4 + 2 + 4;
        stats.memory_bytes = (world.grid.size() as u32).saturating_mul(per_cell as u32);
        stats.step_ms = start.elapsed_ms();
    }
}

/// One full pass of the rules over `current` in `order`.
///
/// A cell is skipped when it is empty or the buffer already claimed it: a
/// swap or a mid-tick blast handled that particle before its turn came.
pub(super) fn run_rules(
    current: &Grid,
    behaviors: &BehaviorRegistry,
    order: &[u32],
    tuning: &Tuning,
    rng: &mut EngineRng,
) -> (Grid, TickCounters) {
    let mut next = TickBuffer::new(current.width(), current.height());
    let mut counters = TickCounters::default();

    for &idx in order {
        let idx = idx as usize;
        let Some(particle) = current.get_idx(idx) else {
            continue;
        };
        if next.is_claimed_idx(idx) {
            continue;
        }
        next.mark_processed_idx(idx);
        let (x, y) = current.coords(idx);

        let mut ctx = UpdateContext {
            current,
            next: &mut next,
            tuning,
            rng: &mut *rng,
            counters: &mut counters,
            x,
            y,
        };
        behaviors.update(&mut ctx, particle);
        counters.processed += 1;
    }

    (next.into_grid(), counters)
}
