use crate::domain::elements::{rgb_to_abgr, Material, EL_EMPTY};
use crate::domain::particle::{Combustion, Particle};

use super::WorldCore;

pub(crate) const BACKGROUND_ABGR: u32 = 0xFF22_2222;

const TNT_DARK: u32 = 0x000000;
const TNT_FLASH: u32 = 0xffffff;
const TNT_BLINK_BELOW: u16 = 60;
const EMBER_HOT: u32 = 0xff5500;
const EMBER_DARK: u32 = 0x5a2d0c;
const FIRE_BRIGHT: u32 = 0xffcc33;

/// Host-facing per-cell buffers, rebuilt lazily after any mutation.
pub(crate) struct RenderBuffers {
    pub(crate) types: Vec<u8>,
    pub(crate) colors: Vec<u32>,
    pub(crate) state: Vec<u16>,
    pub(crate) dirty: bool,
}

impl RenderBuffers {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            types: vec![EL_EMPTY; size],
            colors: vec![BACKGROUND_ABGR; size],
            state: vec![0; size],
            dirty: true,
        }
    }
}

pub(super) fn refresh_render(world: &mut WorldCore) {
    if !world.render.dirty {
        return;
    }
    let grid = &world.grid;
    let width = grid.width() as usize;
    let frame = world.frame;
    let ignition = world.tuning.wood.ignition_threshold;
    let render = &mut world.render;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        render
            .types
            .par_iter_mut()
            .zip(render.colors.par_iter_mut())
            .zip(render.state.par_iter_mut())
            .zip(grid.cells().par_iter())
            .enumerate()
            .for_each(|(idx, (((t, c), s), cell))| {
                *t = cell.map_or(EL_EMPTY, |p| p.material().id());
                *c = cell_color(*cell, idx % width, idx / width, frame, ignition);
                *s = cell.map_or(0, |p| p.visual_state());
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (idx, cell) in grid.cells().iter().enumerate() {
            render.types[idx] = cell.map_or(EL_EMPTY, |p| p.material().id());
            render.colors[idx] = cell_color(*cell, idx % width, idx / width, frame, ignition);
            render.state[idx] = cell.map_or(0, |p| p.visual_state());
        }
    }

    render.dirty = false;
}

/// ABGR colour of one cell, including fuse blink and burn tints.
pub(crate) fn cell_color(cell: Option<Particle>, x: usize, y: usize, frame: u64, ignition_threshold: u16) -> u32 {
    let Some(particle) = cell else {
        return BACKGROUND_ABGR;
    };
    let phase = (x + y) as u64 + frame;
    let rgb = match particle {
        Particle::Explosive { fuse } => {
            let blinking = matches!(fuse, Some(f) if f < TNT_BLINK_BELOW && (f / 5) % 2 == 0);
            if blinking {
                TNT_FLASH
            } else if (x + y) % 2 == 0 {
                Material::Explosive.base_rgb()
            } else {
                TNT_DARK
            }
        }
        Particle::Wood { state: Combustion::Exposed { exposure } } => {
            let t = (exposure as f32 / ignition_threshold.max(1) as f32).min(1.0) * 0.5;
            lerp_rgb(Material::Wood.base_rgb(), EMBER_HOT, t)
        }
        Particle::Wood { state: Combustion::Burning { .. } } => {
            if phase % 4 < 2 { EMBER_HOT } else { EMBER_DARK }
        }
        Particle::Fire { .. } => {
            if phase % 3 == 0 { FIRE_BRIGHT } else { Material::Fire.base_rgb() }
        }
        other => other.material().base_rgb(),
    };
    rgb_to_abgr(rgb)
}

fn lerp_rgb(from: u32, to: u32, t: f32) -> u32 {
    let channel = |shift: u32| {
        let a = ((from >> shift) & 0xff) as f32;
        let b = ((to >> shift) & 0xff) as f32;
        ((a + (b - a) * t).round() as u32) << shift
    };
    channel(16) | channel(8) | channel(0)
}
