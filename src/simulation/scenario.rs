//! Simulation driver and input surface
//!
//! `Scenario` is the runtime bundle the viewer holds as a Bevy `Resource`:
//! - numerical parameters (`Parameters`)
//! - the body population (`System`) including the largest-body record
//! - active force set (`AccelSet`)
//! - the creation gesture (`Gesture`)
//!
//! The viewer forwards input events to it and calls `step` once per fixed frame

use bevy::prelude::Resource;
use log::{debug, info};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::Result;
use crate::interaction::gesture::Gesture;
use crate::simulation::color::Rgb;
use crate::simulation::engine::{step, StepReport};
use crate::simulation::forces::AccelSet;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyId, BodyKind, NVec2, System, Variant};

/// Read-only view of one body for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub kind: BodyKind,
    pub position: NVec2,
    pub radius: f64,
    pub color: Rgb,
    pub is_largest: bool,
}

#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub gesture: Gesture,
}

impl Scenario {
    /// Empty sandbox with the given parameters
    pub fn new(parameters: Parameters) -> Result<Self> {
        parameters.validate()?;
        Ok(Self {
            parameters,
            system: System::new(),
            forces: AccelSet::planetary(),
            gesture: Gesture::new(),
        })
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let mut scenario = Self::new(cfg.parameters.into())?;

        // Seeded Standard bodies compete for the largest flag in file order,
        // the same way gesture-created ones do
        for bc in &cfg.bodies {
            scenario.seed_body(bc);
        }

        info!("scenario built with {} bodies", scenario.system.bodies.len());
        Ok(scenario)
    }

    fn seed_body(&mut self, bc: &BodyConfig) -> BodyId {
        let kind = BodyKind::from(bc.kind);
        let id = self.system.insert(
            kind,
            NVec2::new(bc.x[0], bc.x[1]),
            NVec2::new(bc.v[0], bc.v[1]),
            bc.radius,
            &self.parameters,
        );
        if kind == BodyKind::Standard {
            self.system.claim_largest(id);
        }
        id
    }

    /// Advance the physics by `dt`
    pub fn tick(&mut self, dt: f64) -> Result<StepReport> {
        step(&mut self.system, &self.forces, &self.parameters, dt)
    }

    /// Advance the physics by the configured `dt`
    pub fn step(&mut self) -> Result<StepReport> {
        self.tick(self.parameters.dt)
    }

    pub fn begin_gesture(&mut self, pos: NVec2, timestamp_ms: u64) -> bool {
        self.gesture.begin(pos, timestamp_ms)
    }

    pub fn commit_size(&mut self, timestamp_ms: u64) -> Option<f64> {
        self.gesture.commit_size(timestamp_ms, &self.parameters)
    }

    /// Finish the gesture and insert the new Standard body
    pub fn commit_velocity(&mut self, pos: NVec2) -> Option<BodyId> {
        let pending = self.gesture.commit_velocity(pos, &self.parameters)?;

        let id = self.system.insert(BodyKind::Standard, pending.x, pending.v, pending.radius, &self.parameters);
        info!(
            "created planet {:?} at ({:.1}, {:.1}) radius {} velocity ({:.2}, {:.2})",
            id, pending.x.x, pending.x.y, pending.radius, pending.v.x, pending.v.y
        );
        self.system.claim_largest(id);
        Some(id)
    }

    /// Drop a minimum-size, motionless variant body at `pos`. Only accepted
    /// while no gesture is in progress
    pub fn spawn_variant(&mut self, variant: Variant, pos: NVec2) -> Option<BodyId> {
        if !self.gesture.is_idle() {
            debug!("spawn of {:?} ignored during gesture {:?}", variant, self.gesture.state());
            return None;
        }

        let id = self.system.insert(variant.into(), pos, NVec2::zeros(), self.parameters.min_radius, &self.parameters);
        info!("spawned {:?} body {:?} at ({:.1}, {:.1})", variant, id, pos.x, pos.y);
        Some(id)
    }

    /// Remove every body and abandon the gesture in progress
    pub fn clear_all(&mut self) {
        info!("clearing {} bodies", self.system.bodies.len());
        self.system.clear();
        self.gesture.reset();
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.system.bodies.iter().map(|b| BodySnapshot {
            id: b.id,
            kind: b.kind,
            position: b.x,
            radius: b.radius,
            color: b.color,
            is_largest: self.system.is_largest(b.id),
        }).collect()
    }
}
