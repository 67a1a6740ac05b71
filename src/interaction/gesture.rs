//! Press / release / click gesture that sizes and launches a new planet.
//!
//! `Idle --begin--> Sizing --commit_size--> Aiming --commit_velocity--> Idle`
//!
//! Every transition takes its timestamp from the caller, so replaying the
//! same events always produces the same body.

use log::debug;

use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    Sizing { start: NVec2, started_ms: u64 },
    Aiming { start: NVec2, radius: f64 },
}

/// A fully sized and aimed Standard body, ready to be inserted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingBody {
    pub x: NVec2,
    pub v: NVec2,
    pub radius: f64,
}

/// Radius grown by holding the button for `held_ms`: one unit per
/// `radius_growth_ms`, floored, never below the minimum
pub fn radius_for_hold(held_ms: u64, params: &Parameters) -> f64 {
    (held_ms as f64 / params.radius_growth_ms).floor().max(params.min_radius)
}

#[derive(Debug, Clone)]
pub struct Gesture {
    state: GestureState,
}

impl Default for Gesture {
    fn default() -> Self {
        Self { state: GestureState::Idle }
    }
}

impl Gesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    /// Press: start sizing at `pos`. Ignored unless idle
    pub fn begin(&mut self, pos: NVec2, now_ms: u64) -> bool {
        if !self.is_idle() {
            debug!("begin ignored in state {:?}", self.state);
            return false;
        }
        self.state = GestureState::Sizing { start: pos, started_ms: now_ms };
        true
    }

    /// Release: fix the radius from the hold time and start aiming
    pub fn commit_size(&mut self, now_ms: u64, params: &Parameters) -> Option<f64> {
        let GestureState::Sizing { start, started_ms } = self.state else {
            debug!("commit_size ignored in state {:?}", self.state);
            return None;
        };

        let radius = radius_for_hold(now_ms.saturating_sub(started_ms), params);
        self.state = GestureState::Aiming { start, radius };
        Some(radius)
    }

    /// Click: the launch velocity is the offset from the start point to `target`, scaled
    pub fn commit_velocity(&mut self, target: NVec2, params: &Parameters) -> Option<PendingBody> {
        let GestureState::Aiming { start, radius } = self.state else {
            debug!("commit_velocity ignored in state {:?}", self.state);
            return None;
        };

        self.state = GestureState::Idle;
        Some(PendingBody {
            x: start,
            v: (target - start) * params.velocity_scale,
            radius,
        })
    }

    /// Abandon whatever gesture is in progress
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Radius the body would get if released at `now_ms`, while sizing
    pub fn preview_radius(&self, now_ms: u64, params: &Parameters) -> Option<f64> {
        match self.state {
            GestureState::Sizing { started_ms, .. } => {
                Some(radius_for_hold(now_ms.saturating_sub(started_ms), params))
            }
            _ => None,
        }
    }

    /// Where the pending body sits, while sizing or aiming
    pub fn anchor(&self) -> Option<NVec2> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Sizing { start, .. } | GestureState::Aiming { start, .. } => Some(start),
        }
    }
}
