//! Landing thrown particles after the blast sweep.

use super::BlastTarget;
use crate::domain::particle::Particle;
use crate::domain::tuning::ExplosionTuning;

/// Place each thrown particle at `origin + velocity * scatter_scale`; when
/// that cell is taken, at the nearest free cell in rings around the origin.
/// Returns (placed, dropped).
pub(super) fn place_thrown<T: BlastTarget>(
    target: &mut T,
    thrown: Vec<(i32, i32, Particle)>,
    tuning: &ExplosionTuning,
) -> (u32, u32) {
    let mut placed = 0;
    let mut dropped = 0;
    for (ox, oy, particle) in thrown {
        let (tx, ty) = match particle.motion() {
            Some(v) => (
                landing_coord(ox, v.vx * tuning.scatter_scale),
                landing_coord(oy, v.vy * tuning.scatter_scale),
            ),
            None => (ox, oy),
        };
        let spot = if target.is_free(tx, ty) {
            Some((tx, ty))
        } else {
            nearest_free(target, ox, oy, tuning.scatter_search_radius)
        };
        match spot {
            Some((x, y)) => {
                target.set(x, y, Some(particle));
                placed += 1;
            }
            None => dropped += 1,
        }
    }
    (placed, dropped)
}

/// `origin + offset` rounded; float-to-int casts saturate, so huge offsets
/// land far out of bounds instead of wrapping.
fn landing_coord(origin: i32, offset: f32) -> i32 {
    if !offset.is_finite() {
        return origin;
    }
    (origin as f32 + offset).round() as i32
}

/// Square rings of growing radius around (x, y); ring 0 is the cell itself.
fn nearest_free<T: BlastTarget>(target: &T, x: i32, y: i32, max_radius: u32) -> Option<(i32, i32)> {
    let max = max_radius.min(i32::MAX as u32) as i32;
    for r in 0..=max {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx.abs() != r && dy.abs() != r {
                    continue;
                }
                let (cx, cy) = (x.saturating_add(dx), y.saturating_add(dy));
                if target.is_free(cx, cy) {
                    return Some((cx, cy));
                }
            }
        }
    }
    None
}
