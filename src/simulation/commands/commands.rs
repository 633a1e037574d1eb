use crate::domain::elements::Material;
use crate::domain::particle::Particle;
use crate::explosion;

use super::WorldCore;

/// Fill the material's square footprint anchored at (x, y). Only empty cells
/// are filled and the footprint is clipped to the grid.
pub(super) fn place(world: &mut WorldCore, x: u32, y: u32, material: Material) -> u32 {
    if x >= world.grid.width() || y >= world.grid.height() {
        return 0;
    }
    let size = material.footprint();
    let mut placed = 0;
    for py in y..(y + size).min(world.grid.height()) {
        for px in x..(x + size).min(world.grid.width()) {
            if !world.grid.is_empty(px as i32, py as i32) {
                continue;
            }
            let particle = Particle::spawn(material, &world.tuning, &mut world.rng);
            world.grid.set_particle(px, py, particle);
            placed += 1;
        }
    }
    if placed > 0 {
        world.particle_count += placed;
        world.render.dirty = true;
    }
    placed
}

pub(super) fn add_particle(world: &mut WorldCore, x: u32, y: u32, element: u8) -> bool {
    if x >= world.grid.width() || y >= world.grid.height() {
        return false;
    }
    let Some(material) = Material::from_id(element) else {
        return false;
    };
    if !world.grid.is_empty(x as i32, y as i32) {
        return false;
    }
    let particle = Particle::spawn(material, &world.tuning, &mut world.rng);
    world.grid.set_particle(x, y, particle);
    world.particle_count += 1;
    world.render.dirty = true;
    true
}

pub(super) fn set_particle(world: &mut WorldCore, x: u32, y: u32, cell: Option<Particle>) -> bool {
    if x >= world.grid.width() || y >= world.grid.height() {
        return false;
    }
    let idx = world.grid.index(x, y);
    world.grid.set_idx(idx, cell);
    world.particle_count = world.grid.particle_count();
    world.render.dirty = true;
    true
}

pub(super) fn remove_particle(world: &mut WorldCore, x: u32, y: u32) -> bool {
    if x >= world.grid.width() || y >= world.grid.height() {
        return false;
    }

    if world.grid.is_empty(x as i32, y as i32) {
        return false;
    }

    world.grid.clear_cell(x, y);
    world.particle_count = world.particle_count.saturating_sub(1);
    world.render.dirty = true;
    true
}

/// Any radius past this reaches every cell from any in-bounds centre.
fn reach_limit(world: &WorldCore) -> u32 {
    world.grid.width() + world.grid.height()
}

pub(super) fn remove_particles_in_radius(world: &mut WorldCore, cx: i32, cy: i32, radius: i32) -> u32 {
    if radius < 0 {
        return 0;
    }
    let radius = radius.min(reach_limit(world) as i32);
    let r2 = radius * radius;
    let mut removed = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && y >= 0 && remove_particle(world, x as u32, y as u32) {
                    removed += 1;
                }
            }
        }
    }
    removed
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.particle_count = 0;
    world.frame = 0;
    world.render.dirty = true;
    world.perf_stats.reset();
}

pub(super) fn push(world: &mut WorldCore, cx: i32, cy: i32, radius: u32, force: f32) -> u32 {
    if !world.grid.in_bounds(cx, cy) {
        return 0;
    }
    let radius = radius.min(reach_limit(world));
    let pushed = explosion::push(&mut world.grid, cx, cy, radius, force);
    if pushed > 0 {
        world.render.dirty = true;
    }
    pushed
}

pub(super) fn detonate(world: &mut WorldCore, cx: i32, cy: i32, radius: u32) -> bool {
    if !world.grid.in_bounds(cx, cy) {
        return false;
    }
    let radius = radius.min(reach_limit(world));
    let report = explosion::detonate(&mut world.grid, cx, cy, radius, &world.tuning, &mut world.rng);
    crate::engine_debug!("detonate at ({}, {}) r={}: {:?}", cx, cy, radius, report);
    if report.dropped > 0 {
        crate::engine_warn!("blast at ({}, {}) lost {} particles: no free cell nearby", cx, cy, report.dropped);
    }
    world.particle_count = world.grid.particle_count();
    world.render.dirty = true;
    true
}
