//! Overlap detection and merging.
//!
//! Overlapping collidable bodies merge pairwise: the earlier body in
//! population order absorbs the later one, and the absorbed body is removed
//! once the whole pass is done.

use log::debug;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, System};

impl Body {
    /// Centers closer than the sum of the radii
    pub fn overlaps(&self, other: &Body) -> bool {
        (other.x - self.x).norm() < self.radius + other.radius
    }

    /// Test for a collision with `other` and, on a hit, absorb it.
    ///
    /// Both bodies must be collidable. The caller is responsible for
    /// removing `other` when this returns true.
    pub fn collides_with(&mut self, other: &Body, params: &Parameters) -> bool {
        if !self.is_collidable() || !other.is_collidable() {
            return false;
        }
        if !self.overlaps(other) {
            return false;
        }

        self.merge_with(other, params);
        true
    }

    /// Absorb `other`: area-conserving integer radius, summed mass and a
    /// mass-weighted velocity.
    ///
    /// The velocity weights use the already-summed mass for `self` and the
    /// original mass for `other`, so merging A into B differs from B into A.
    pub fn merge_with(&mut self, other: &Body, params: &Parameters) {
        let new_radius = (self.radius * self.radius + other.radius * other.radius).sqrt().floor();
        let new_mass = self.m + other.m;

        self.radius = new_radius.max(params.min_radius);
        self.m = new_mass;
        self.color = self.kind.color(self.radius, params);

        self.v = (self.v * self.m + other.v * other.m) / new_mass;
    }
}

/// Run the collision pass over every unordered pair `(i < j)` and drop the
/// absorbed bodies. Returns the ids that were removed, in population order.
///
/// A body marked for removal keeps taking part in later pairs of the same pass.
pub fn resolve_collisions(sys: &mut System, params: &Parameters) -> Vec<BodyId> {
    let n = sys.bodies.len();
    let mut doomed = vec![false; n];

    for i in 0..n {
        for j in (i + 1)..n {
            // i < j, so body i lives in `head` and body j is tail[0]
            let (head, tail) = sys.bodies.split_at_mut(j);
            let (absorber, absorbed) = (&mut head[i], &tail[0]);

            if absorber.collides_with(absorbed, params) {
                debug!(
                    "body {:?} absorbed {:?}, radius now {}",
                    absorber.id, absorbed.id, absorber.radius
                );
                doomed[j] = true;
            }
        }
    }

    let removed: Vec<BodyId> = sys.bodies.iter()
        .zip(doomed.iter())
        .filter(|(_, d)| **d)
        .map(|(b, _)| b.id)
        .collect();

    if !removed.is_empty() {
        sys.remove_flagged(&doomed);
    }
    removed
}
