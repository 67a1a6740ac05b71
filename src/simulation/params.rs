//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds every tunable constant the core reads:
//! - gravity strength, mass-per-radius and minimum body size,
//! - the central restoring pull on the largest body (center, scale, dead zone),
//! - gesture scaling (hold time per radius unit, velocity scale),
//! - color ramp saturation and the distance epsilon

use crate::error::{Result, SimError};
use crate::simulation::states::NVec2;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub mass_multiplier: f64, // mass = radius * mass_multiplier
    pub min_radius: f64, // smallest radius any body may have
    pub center: NVec2, // point the largest body is pulled toward
    pub center_scale: f64, // fraction of G used for the center pull
    pub center_threshold: f64, // dead zone radius around the center
    pub velocity_scale: f64, // aim vector -> launch velocity
    pub color_saturation_radius: f64, // radius at which the color ramp tops out
    pub eps: f64, // added to distances to avoid the singularity
    pub dt: f64, // time step used by `Scenario::step`
    pub radius_growth_ms: f64, // hold time per radius unit while sizing
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 5.0,
            mass_multiplier: 1.0,
            min_radius: 5.0,
            center: NVec2::new(500.0, 500.0),
            center_scale: 0.5,
            center_threshold: 10.0,
            velocity_scale: 0.05,
            color_saturation_radius: 200.0,
            eps: 1e-2,
            dt: 1.0,
            radius_growth_ms: 100.0,
        }
    }
}

impl Parameters {
    /// Reject parameter sets that would break the body invariants
    /// (non-positive mass or radius, division by zero in the color ramp or sizing)
    /// or feed a non-finite value into the force and gesture math
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("mass_multiplier", self.mass_multiplier),
            ("min_radius", self.min_radius),
            ("radius_growth_ms", self.radius_growth_ms),
            ("color_saturation_radius", self.color_saturation_radius),
        ];
        for (name, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SimError::InvalidParameter(format!("{name} must be positive, got {value}")));
            }
        }

        if !(self.eps >= 0.0) {
            return Err(SimError::InvalidParameter(format!("eps must be non-negative, got {}", self.eps)));
        }
        if !(self.dt >= 0.0) {
            return Err(SimError::NegativeTimeStep(self.dt));
        }

        // an infinite value here turns every position into NaN after one tick
        let finite = [
            ("G", self.G),
            ("center.x", self.center.x),
            ("center.y", self.center.y),
            ("center_scale", self.center_scale),
            ("center_threshold", self.center_threshold),
            ("velocity_scale", self.velocity_scale),
            ("eps", self.eps),
            ("dt", self.dt),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimError::InvalidParameter(format!("{name} must be finite, got {value}")));
            }
        }

        Ok(())
    }
}
