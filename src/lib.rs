pub mod error;
pub mod simulation;
pub mod interaction;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Body, BodyId, BodyKind, GravityPolicy, LargestBody, System, Variant, NVec2};
pub use simulation::params::Parameters;
pub use simulation::color::{color_from_radius, Rgb};
pub use simulation::forces::{Acceleration, AccelSet, MutualGravity, CenterGravity};
pub use simulation::collision::resolve_collisions;
pub use simulation::integrator::euler_integrator;
pub use simulation::engine::{step, StepReport};
pub use simulation::scenario::{Scenario, BodySnapshot};

pub use interaction::gesture::{Gesture, GestureState, PendingBody, radius_for_hold};

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, BodyKindConfig, ScenarioConfig};

pub use visualization::planets_vis2d::run_2d;

pub use benchmark::benchmark::bench_tick;
