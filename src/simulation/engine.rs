//! Per-frame dynamics pipeline
//!
//! `advance` drives one frame over the live collection: update every
//! object under the frame's config snapshot, cull whatever left the
//! canvas, and cascade each removal into the selection set. Survivors
//! replace the collection wholesale; the vector being iterated is never
//! spliced in place.

use super::error::SimulationError;
use super::params::Config;
use super::selection::SelectionSet;
use super::states::SimulationState;

/// Advance the whole simulation by one frame of length `dt`
///
/// Validates the step size and the config snapshot, then for each
/// object in insertion order: update, bounds-test, keep or cull. A
/// culled object is removed from `selection` exactly once; survivors
/// keep their relative order. Returns the number of objects culled this
/// frame. An empty collection is a no-op.
///
/// Switching the integrator between frames is treated as an explicit
/// reset point: every object's position history collapses to its
/// current position before the first step under the new mode.
pub fn advance(
    state: &mut SimulationState,
    dt: f64,
    config: &Config,
    selection: &mut SelectionSet,
) -> Result<usize, SimulationError> {
    if !(dt > 0.0) || !dt.is_finite() {
        return Err(SimulationError::InvalidTimeStep(dt));
    }
    config.validate()?;

    // Integrator switch: collapse the verlet history rather than carry
    // a prev_position recorded under the other scheme
    if state.last_integrator != Some(config.integrator) {
        if state.last_integrator.is_some() {
            for obj in state.objects.iter_mut() {
                obj.prev_position = obj.position;
            }
        }
        state.last_integrator = Some(config.integrator);
    }

    // Functional replace: take the collection, rebuild the survivor
    // sequence, hand it back
    let objects = std::mem::take(&mut state.objects);
    let mut survivors = Vec::with_capacity(objects.len());
    let mut culled = 0;

    for mut obj in objects {
        obj.update(dt, config);
        if obj.is_out_of_bounds(config.width, config.height) {
            // destruction cascades into deselection
            selection.remove(obj.id);
            culled += 1;
        } else {
            survivors.push(obj);
        }
    }

    state.objects = survivors;
    state.t += dt;

    Ok(culled)
}
