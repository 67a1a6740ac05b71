//! Core state types for the planet simulation.
//!
//! Defines the body population:
//! - `Body`     a circular mass with position, velocity and an acceleration accumulator
//! - `BodyKind` the Standard / Non-Colliding / Ghost capability set
//! - `System`   the ordered population, the simulation time `t` and the largest-body record

use log::info;
use nalgebra::Vector2;

use crate::simulation::color::{color_from_radius, Rgb};
use crate::simulation::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// Stable identifier of a body, assigned by [`System::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

/// How a body decides which other bodies pull on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityPolicy {
    /// Pulled by every body that emits gravity
    AnyEmitter,
    /// Pulled only by collidable bodies
    CollidableOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Standard,
    NonColliding,
    Ghost,
}

impl BodyKind {
    pub fn is_collidable(self) -> bool {
        matches!(self, BodyKind::Standard)
    }

    /// Whether this body pulls on others
    pub fn emits_gravity(self) -> bool {
        !matches!(self, BodyKind::Ghost)
    }

    pub fn gravity_policy(self) -> GravityPolicy {
        match self {
            BodyKind::Standard | BodyKind::NonColliding => GravityPolicy::AnyEmitter,
            BodyKind::Ghost => GravityPolicy::CollidableOnly,
        }
    }

    /// Whether a body of this kind is pulled by a body of kind `source`
    pub fn feels_gravity_from(self, source: BodyKind) -> bool {
        match self.gravity_policy() {
            GravityPolicy::AnyEmitter => source.emits_gravity(),
            GravityPolicy::CollidableOnly => source.is_collidable(),
        }
    }

    /// Standard bodies follow the radius color ramp, the others are drawn white
    pub fn color(self, radius: f64, params: &Parameters) -> Rgb {
        match self {
            BodyKind::Standard => color_from_radius(radius, params.color_saturation_radius),
            BodyKind::NonColliding | BodyKind::Ghost => Rgb::WHITE,
        }
    }
}

/// Kinds that can be spawned directly, bypassing the sizing gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    NonColliding,
    Ghost,
}

impl From<Variant> for BodyKind {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::NonColliding => BodyKind::NonColliding,
            Variant::Ghost => BodyKind::Ghost,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration accumulator, zero outside a tick
    pub radius: f64,
    pub m: f64, // mass
    pub color: Rgb,
}

impl Body {
    /// Build a body at rest acceleration-wise. The radius is clamped up to
    /// `params.min_radius` and the mass derived from it
    pub fn new(id: BodyId, kind: BodyKind, x: NVec2, v: NVec2, radius: f64, params: &Parameters) -> Self {
        let radius = radius.max(params.min_radius);
        Self {
            id,
            kind,
            x,
            v,
            a: NVec2::zeros(),
            radius,
            m: radius * params.mass_multiplier,
            color: kind.color(radius, params),
        }
    }

    pub fn is_collidable(&self) -> bool {
        self.kind.is_collidable()
    }
}

/// The body that currently receives the central pull.
///
/// `radius` is refreshed whenever the holder is absorbed, so a removed
/// holder still has to be out-grown before the flag moves on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LargestBody {
    pub id: BodyId,
    pub radius: f64,
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // population in creation order
    pub t: f64, // time
    next_id: u64,
    largest: Option<LargestBody>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new body and return its id
    pub fn insert(&mut self, kind: BodyKind, x: NVec2, v: NVec2, radius: f64, params: &Parameters) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, kind, x, v, radius, params));
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn largest(&self) -> Option<LargestBody> {
        self.largest
    }

    /// True if `id` is the live holder of the largest flag
    pub fn is_largest(&self, id: BodyId) -> bool {
        self.largest.map_or(false, |l| l.id == id)
    }

    /// Hand the largest flag to `id` if its radius strictly exceeds the
    /// current holder's. Returns whether the flag moved.
    pub fn claim_largest(&mut self, id: BodyId) -> bool {
        let Some(candidate) = self.get(id).map(|b| b.radius) else {
            return false;
        };

        let holder_radius = self.largest.map(|l| self.get(l.id).map_or(l.radius, |b| b.radius));
        if holder_radius.map_or(true, |r| candidate > r) {
            info!("body {:?} (radius {}) is now the largest", id, candidate);
            self.largest = Some(LargestBody { id, radius: candidate });
            true
        } else {
            false
        }
    }

    // The record outlives its holder, so pin the holder's final radius first
    fn refresh_largest_radius(&mut self) {
        if let Some(largest) = self.largest.as_mut() {
            let id = largest.id;
            if let Some(holder) = self.bodies.iter().find(|b| b.id == id) {
                largest.radius = holder.radius;
            }
        }
    }

    /// Drop every body whose index is flagged in `doomed`, preserving order
    pub(crate) fn remove_flagged(&mut self, doomed: &[bool]) {
        self.refresh_largest_radius();

        let mut flags = doomed.iter();
        self.bodies.retain(|_| !flags.next().copied().unwrap_or(false));
    }

    /// Remove every body. The largest-body record is kept, so a later body
    /// still has to outgrow the cleared holder to take the flag
    pub fn clear(&mut self) {
        self.refresh_largest_radius();
        self.bodies.clear();
    }
}
