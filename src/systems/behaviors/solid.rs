//! StoneBehavior - immovable obstacle, copied forward unchanged

use super::{Behavior, UpdateContext};
use crate::domain::particle::Particle;

pub struct StoneBehavior;

impl Behavior for StoneBehavior {
    fn update(&self, ctx: &mut UpdateContext, particle: Particle) {
        ctx.keep(particle);
    }
}
