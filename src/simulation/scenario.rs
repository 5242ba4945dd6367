//! Build fully-initialized sandbox scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle (`Scenario`) containing:
//! - the physics `Config` snapshot
//! - run-loop `Parameters`
//! - a `SimulationState` with every initial object spawned at t = 0
//!
//! Construction fails fast on invalid settings or object parameters, so
//! a built scenario is always safe to step.

use crate::configuration::config::{ScenarioConfig, ShapeConfig};

use super::error::SimulationError;
use super::params::{Config, Parameters};
use super::shapes::Shape;
use super::states::SimulationState;
use super::vector::NVec2;

/// Runtime bundle for one sandbox run
pub struct Scenario {
    pub config: Config,
    pub parameters: Parameters,
    pub state: SimulationState,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        // Config (runtime) from SettingsConfig, validated up front
        let s = cfg.settings;
        let config = Config {
            integrator: s.integrator,
            gravity: s.gravity,
            enable_gravity: s.enable_gravity,
            mu_ground: s.mu_ground,
            enable_friction: s.enable_friction,
            spring_k: s.spring_k,
            rest_length: s.rest_length,
            enable_spring: s.enable_spring,
            width: s.width,
            height: s.height,
        };
        config.validate()?;

        // Parameters (runtime) from ParametersConfig
        let p = cfg.parameters;
        let parameters = Parameters {
            t_end: p.t_end,
            h0: p.h0,
            time_scale: p.time_scale.unwrap_or(1.0),
        };

        // Objects: spawn each ObjectConfig in order, so ids follow the
        // file order and picking's topmost rule matches it
        let mut state = SimulationState::new();
        for oc in &cfg.objects {
            state.spawn(
                shape_from_config(&oc.shape),
                NVec2::new(oc.position[0], oc.position[1]),
                oc.mass,
                oc.thrust,
            )?;
        }

        Ok(Self {
            config,
            parameters,
            state,
        })
    }
}

/// Map a YAML shape template to the runtime descriptor
fn shape_from_config(shape: &ShapeConfig) -> Shape {
    match *shape {
        ShapeConfig::Circle { radius } => Shape::Circle { radius },
        ShapeConfig::Box { w, h } => Shape::Box { w, h },
        ShapeConfig::Line { length, angle } => Shape::Line { length, angle },
        ShapeConfig::Triangle { w, h } => Shape::Triangle { w, h },
    }
}
