//! Force / acceleration contributors for the planet simulation
//!
//! Defines the per-body gravity rules and the acceleration terms the
//! step driver sums each tick: mutual pairwise gravity and the central
//! pull on the largest body

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

impl Body {
    /// Acceleration this body would receive from `other`.
    /// Zero when this body's gravity policy ignores `other`'s kind
    pub fn gravity_from(&self, other: &Body, params: &Parameters) -> NVec2 {
        if !self.kind.feels_gravity_from(other.kind) {
            return NVec2::zeros();
        }

        // d points from self to other, eps keeps the distance away from zero
        let d = other.x - self.x;
        let distance = d.norm() + params.eps;

        // F = G m_self m_other / distance^2
        let force = params.G * self.m * other.m / (distance * distance);

        // a = F/m along the unit vector d/distance
        d * (force / (distance * self.m))
    }

    /// Add the pull of `other` into the acceleration accumulator.
    ///
    /// Per-body form of [`MutualGravity`]: the step driver sums the same
    /// [`Body::gravity_from`] terms through an out buffer instead
    pub fn apply_gravity(&mut self, other: &Body, params: &Parameters) {
        self.a += self.gravity_from(other, params);
    }

    /// Acceleration toward `params.center` at half strength, zero inside the dead zone
    pub fn center_pull(&self, params: &Parameters) -> NVec2 {
        let d = params.center - self.x;
        let distance = d.norm() + params.eps;

        if distance < params.center_threshold {
            return NVec2::zeros();
        }

        let force = params.center_scale * params.G * self.m * self.m / (distance * distance);
        d * (force / (distance * self.m))
    }

    /// Add the central pull into the accumulator; no-op unless `is_largest`.
    ///
    /// Per-body form of [`CenterGravity`], which the step driver runs
    pub fn apply_gravity_to_center(&mut self, is_largest: bool, params: &Parameters) {
        if is_largest {
            self.a += self.center_pull(params);
        }
    }
}

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Mutual gravity plus the central pull
    pub fn planetary() -> Self {
        Self::new().with(MutualGravity).with(CenterGravity)
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, params, out);
        }
    }

    /// Accumulate every term straight into the bodies' accumulators
    pub fn apply(&self, sys: &mut System, params: &Parameters) {
        let mut accels = vec![NVec2::zeros(); sys.bodies.len()];
        self.accumulate_accels(sys, params, &mut accels);

        for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
            b.a += *a;
        }
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, params: &Parameters, out: &mut [NVec2]);
}

/// Brute-force gravity over every ordered pair.
///
/// Gravity policies are not symmetric (a Ghost feels Standard bodies but
/// not the reverse) so each ordered pair is evaluated separately instead
/// of using the equal-and-opposite shortcut
pub struct MutualGravity;

impl Acceleration for MutualGravity {
    fn acceleration(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) {
        for (i, body) in sys.bodies.iter().enumerate() {
            for (j, other) in sys.bodies.iter().enumerate() {
                if i != j {
                    out[i] += body.gravity_from(other, params);
                }
            }
        }
    }
}

/// Central restoring pull, applied only to the largest body
pub struct CenterGravity;

impl Acceleration for CenterGravity {
    fn acceleration(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) {
        let Some(largest) = sys.largest() else {
            return;
        };
        if let Some(i) = sys.index_of(largest.id) {
            out[i] += sys.bodies[i].center_pull(params);
        }
    }
}
