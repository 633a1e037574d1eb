//! Ballistic step shared by sand and water
//!
//! One tick of flight: aim at round(position + velocity). A free target gets
//! the particle with drag and gravity applied; anything else (occupied, out
//! of bounds) reflects the velocity and the particle stays put.

use crate::behaviors::UpdateContext;
use crate::core::utils::random::jitter;
use crate::domain::particle::{Particle, Velocity};
use crate::domain::tuning::BallisticTuning;

pub fn fly(ctx: &mut UpdateContext, particle: Particle, v: Velocity, flight: &BallisticTuning) {
    let tx = (ctx.x as f32 + v.vx).round() as i32;
    let ty = (ctx.y as f32 + v.vy).round() as i32;

    if ctx.is_free(tx, ty) {
        let drag = 1.0 - flight.air_resistance;
        let vx = v.vx * drag;
        let vy = v.vy * drag + flight.gravity;
        let motion = if vx.abs() < flight.rest_threshold && vy.abs() < flight.rest_threshold {
            None
        } else {
            Some(Velocity::new(vx, vy))
        };
        ctx.move_to(tx, ty, particle.with_motion(motion));
        return;
    }

    let scale = surface_scale(ctx.current.get(tx, ty), flight);
    let vx = -v.vx * flight.bounce_x * scale + jitter(ctx.rng, flight.bounce_jitter);
    // Reflection always points up, whatever was hit.
    let vy = -v.vy.abs() * flight.bounce_y * scale;
    let motion = if vx.abs() < flight.bounce_rest_threshold && vy.abs() < flight.bounce_rest_threshold {
        None
    } else {
        Some(Velocity::new(vx, vy))
    };
    ctx.keep(particle.with_motion(motion));
}

#[inline]
fn surface_scale(surface: Option<Particle>, flight: &BallisticTuning) -> f32 {
    match surface {
        Some(Particle::Stone) => flight.stone_scale,
        Some(Particle::Sand { .. }) => flight.sand_scale,
        Some(Particle::Water { .. }) => flight.water_scale,
        _ => 1.0,
    }
}
