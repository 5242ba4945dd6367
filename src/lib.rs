pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::vector::NVec2;
pub use simulation::shapes::Shape;
pub use simulation::states::{DynamicObject, ObjectId, SimulationState};
pub use simulation::params::{Config, Parameters};
pub use simulation::error::SimulationError;
pub use simulation::forces::{CenterSpring, Force, ForceSet, Gravity, LinearDrag, Thrust};
pub use simulation::integrator::{euler_step, integrate, verlet_step, Step};
pub use simulation::engine::advance;
pub use simulation::picking::{hit_test, resolve_hit, LINE_PICK_TOLERANCE};
pub use simulation::selection::SelectionSet;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    IntegratorConfig, ObjectConfig, ParametersConfig, ScenarioConfig, SettingsConfig, ShapeConfig,
};

pub use benchmark::benchmark::{bench_advance, bench_resolve_hit};
