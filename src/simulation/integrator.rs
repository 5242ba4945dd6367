//! Fixed-step integrators for sandbox objects
//!
//! Two interchangeable one-step schemes, selected per frame by
//! `Config.integrator`:
//! - semi-implicit Euler, where the position update uses the new velocity
//! - position Verlet, where velocity is derived from the position history
//!
//! Both take the already-computed acceleration a = F / m. `dt > 0` is a
//! caller precondition; the step functions do not guard it.

use crate::configuration::config::IntegratorConfig;

use super::vector::NVec2;

/// Result of one integrator step
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub position: NVec2,
    pub velocity: NVec2,
}

/// One semi-implicit Euler step
/// v_n+1 = v_n + a_n * dt
/// x_n+1 = x_n + v_n+1 * dt
///
/// The position update uses the *new* velocity. The ordering is what
/// makes the scheme semi-implicit and must not be swapped for forward
/// Euler
pub fn euler_step(position: NVec2, velocity: NVec2, acceleration: NVec2, dt: f64) -> Step {
    // v_n+1 = v_n + a_n * dt
    let velocity_new = velocity + acceleration * dt;
    // x_n+1 = x_n + v_n+1 * dt
    let position_new = position + velocity_new * dt;
    Step {
        position: position_new,
        velocity: velocity_new,
    }
}

/// One position-Verlet step
/// x_n+1 = 2 x_n - x_n-1 + a_n * dt^2
/// v_n+1 = (x_n+1 - x_n-1) / (2 dt)
///
/// The derived velocity is not part of the canonical recurrence, but it
/// is returned so velocity-dependent forces (drag) see it on the next
/// frame
pub fn verlet_step(prev_position: NVec2, position: NVec2, acceleration: NVec2, dt: f64) -> Step {
    // x_n+1 = 2 x_n - x_n-1 + a_n * dt^2
    let position_new = position * 2.0 - prev_position + acceleration * (dt * dt);
    // v_n+1 = (x_n+1 - x_n-1) / (2 dt)
    let velocity_new = (position_new - prev_position) / (2.0 * dt);
    Step {
        position: position_new,
        velocity: velocity_new,
    }
}

/// Dispatch one step to the integrator selected in the config
pub fn integrate(
    mode: IntegratorConfig,
    prev_position: NVec2,
    position: NVec2,
    velocity: NVec2,
    acceleration: NVec2,
    dt: f64,
) -> Step {
    match mode {
        IntegratorConfig::Euler => euler_step(position, velocity, acceleration, dt),
        IntegratorConfig::Verlet => verlet_step(prev_position, position, acceleration, dt),
    }
}
