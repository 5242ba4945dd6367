//! Error types for the sandbox engine
//!
//! The engine fails fast at exactly two gates: object construction and
//! the per-frame `advance` boundary. Inside those gates the numeric
//! pipeline runs unguarded; the step functions assume their
//! preconditions hold.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("object mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
