//! One simulation tick
//!
//! Runs the passes in a fixed order: collisions, removal, forces, integration.
//! Every collision is resolved before any force is computed, and every
//! force is accumulated before any body moves

use crate::error::{Result, SimError};
use crate::simulation::collision::resolve_collisions;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyId, System};

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub removed: Vec<BodyId>, // bodies absorbed during the collision pass
    pub survivors: usize, // population after the tick
}

/// Advance `sys` by `dt`. A negative or NaN `dt` is rejected before anything is touched
pub fn step(sys: &mut System, forces: &AccelSet, params: &Parameters, dt: f64) -> Result<StepReport> {
    if !(dt >= 0.0) {
        return Err(SimError::NegativeTimeStep(dt));
    }

    let removed = resolve_collisions(sys, params);

    forces.apply(sys, params);

    euler_integrator(sys, dt);

    Ok(StepReport {
        removed,
        survivors: sys.bodies.len(),
    })
}
