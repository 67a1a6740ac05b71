//! Fixed-step time integrator for the planet system
//!
//! Semi-implicit Euler: velocity first, then position with the new
//! velocity, then the acceleration accumulator is cleared

use super::states::{Body, NVec2, System};

impl Body {
    /// v += a dt, x += v dt, a = 0
    pub fn integrate(&mut self, dt: f64) {
        self.v += self.a * dt;
        self.x += self.v * dt;
        self.a = NVec2::zeros();
    }
}

/// Advance every body by `dt` and move the system clock
pub fn euler_integrator(sys: &mut System, dt: f64) {
    for b in sys.bodies.iter_mut() {
        b.integrate(dt);
    }
    sys.t += dt;
}
