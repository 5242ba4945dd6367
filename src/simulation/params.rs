//! Runtime physics configuration for the sandbox
//!
//! `Config` is the per-frame snapshot read by the force model and the
//! integrator dispatch:
//! - integrator selection (euler or verlet),
//! - force toggles and their constants (gravity, friction, spring),
//! - canvas extents, which double as the culling bounds
//!
//! `Parameters` holds the run-loop settings for headless stepping.

use crate::configuration::config::IntegratorConfig;

use super::error::SimulationError;
use super::vector::NVec2;

#[derive(Debug, Clone)]
pub struct Config {
    pub integrator: IntegratorConfig, // euler or verlet
    pub gravity: f64, // downward acceleration scale, force = gravity * mass
    pub enable_gravity: bool,
    pub mu_ground: f64, // linear drag coefficient
    pub enable_friction: bool,
    pub spring_k: f64, // spring constant toward the canvas center
    pub rest_length: f64, // natural spring length
    pub enable_spring: bool,
    pub width: f64, // canvas extents, also the culling bounds
    pub height: f64,
}

impl Config {
    /// Canvas center, the spring anchor point
    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Reject non-finite numeric fields and degenerate canvas extents
    pub fn validate(&self) -> Result<(), SimulationError> {
        let fields = [
            ("gravity", self.gravity),
            ("mu_ground", self.mu_ground),
            ("spring_k", self.spring_k),
            ("rest_length", self.rest_length),
            ("width", self.width),
            ("height", self.height),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimulationError::InvalidConfig(format!(
                    "{name} is not finite: {value}"
                )));
            }
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "canvas extents must be positive, got {} x {}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::Euler,
            gravity: 1.0,
            enable_gravity: false,
            mu_ground: 0.8,
            enable_friction: false,
            spring_k: 0.1,
            rest_length: 100.0,
            enable_spring: false,
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Run-loop parameters for headless stepping
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // total simulated time
    pub h0: f64, // fixed step size
    pub time_scale: f64, // multiplier applied to the raw frame dt
}
