//! Configuration types for loading sandbox scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! a sandbox scenario. A scenario consists of:
//!
//! - [`SettingsConfig`]   – global physics settings and canvas extents
//! - [`ParametersConfig`] – run-loop parameters for headless stepping
//! - [`ObjectConfig`]     – initial state for each object
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! settings:
//!   integrator: "euler"     # or "verlet"
//!   gravity: 1.0            # force = gravity * mass, +y is down
//!   enable_gravity: true
//!   mu_ground: 0.8          # linear drag coefficient
//!   enable_friction: false
//!   spring_k: 0.1           # spring constant toward the canvas center
//!   rest_length: 100.0      # natural spring length
//!   enable_spring: false
//!   width: 800.0            # canvas extents, also the culling bounds
//!   height: 600.0
//!
//! parameters:
//!   t_end: 10.0             # total simulated time
//!   h0: 0.016               # fixed step size
//!   time_scale: 1.0         # optional dt multiplier
//!
//! objects:
//!   - shape:
//!       circle: { radius: 50.0 }
//!     position: [ 400.0, 300.0 ]
//!     mass: 100.0
//!     thrust: 0.0
//!   - shape:
//!       line: { length: 100.0, angle: 0.0 }
//!     position: [ 200.0, 150.0 ]
//!     mass: 10.0
//!     thrust: 300.0
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation; see `simulation::scenario`.

use serde::Deserialize;

/// Which integrator advances object state
/// `integrator: "euler"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler: the new velocity feeds the position update
    Euler,

    #[serde(rename = "verlet")] // Position Verlet: velocity derived from the position history
    Verlet,
}

/// Global physics settings and canvas extents
#[derive(Deserialize, Debug, Clone)]
pub struct SettingsConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing object state
    pub gravity: f64, // downward acceleration scale
    pub enable_gravity: bool,
    pub mu_ground: f64, // linear drag coefficient
    pub enable_friction: bool,
    pub spring_k: f64, // spring constant toward the canvas center
    pub rest_length: f64, // natural spring length
    pub enable_spring: bool,
    pub width: f64, // canvas extents, also the culling bounds
    pub height: f64,
}

/// Run-loop parameters for headless stepping
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total simulated time
    pub h0: f64, // fixed step size
    pub time_scale: Option<f64>, // dt multiplier, defaults to 1.0
}

/// Shape template for a single object
#[derive(Deserialize, Debug, Clone, Copy)]
pub enum ShapeConfig {
    #[serde(rename = "circle")]
    Circle { radius: f64 },

    #[serde(rename = "box")] // covers rect and square, a square is w == h
    Box { w: f64, h: f64 },

    #[serde(rename = "line")] // angle in radians
    Line { length: f64, angle: f64 },

    #[serde(rename = "triangle")]
    Triangle { w: f64, h: f64 },
}

/// Configuration for a single object's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct ObjectConfig {
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub shape: ShapeConfig,
    pub position: [f64; 2], // spawn anchor point
    pub mass: f64, // must be positive
    pub thrust: f64, // horizontal drive, also sets v0 = (thrust / mass, 0)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub settings: SettingsConfig, // global physics settings
    pub parameters: ParametersConfig, // run-loop parameters
    pub objects: Vec<ObjectConfig>, // initial objects in spawn order
}
