//! Core state types for the sandbox simulation
//!
//! - `DynamicObject`: one simulated shape with its kinematic state
//! - `SimulationState`: the live collection and the owner of object
//!   lifetimes
//!
//! Objects are addressed by a stable `ObjectId` so the externally owned
//! selection set can refer to them across frames without sharing
//! ownership of the collection.

use crate::configuration::config::IntegratorConfig;

use super::error::SimulationError;
use super::forces::ForceSet;
use super::integrator::integrate;
use super::params::Config;
use super::shapes::Shape;
use super::vector::NVec2;

/// Stable handle for one object, unique for the lifetime of the state
pub type ObjectId = u64;

#[derive(Debug, Clone)]
pub struct DynamicObject {
    pub id: ObjectId,
    pub shape: Shape,
    pub position: NVec2, // anchor point, see the shape conventions
    pub prev_position: NVec2, // previous position, verlet history
    pub velocity: NVec2,
    pub force: NVec2, // per-frame accumulated force
    pub mass: f64, // > 0, validated at construction
    pub thrust: f64, // constant horizontal drive force
}

impl DynamicObject {
    /// Construct a new object at `position`
    ///
    /// The per-object thrust doubles as an initial horizontal velocity,
    /// v0 = (thrust / mass, 0), on top of being applied as a force every
    /// frame. Rejects non-positive or non-finite mass.
    pub fn new(
        id: ObjectId,
        shape: Shape,
        position: NVec2,
        mass: f64,
        thrust: f64,
    ) -> Result<Self, SimulationError> {
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(SimulationError::InvalidMass(mass));
        }
        Ok(Self {
            id,
            shape,
            position,
            prev_position: position,
            velocity: NVec2::new(thrust / mass, 0.0),
            force: NVec2::zeros(),
            mass,
            thrust,
        })
    }

    /// Advance this object by one frame:
    /// 1. reset the accumulated force
    /// 2. sum the contributions active under `config`
    /// 3. a = F / m
    /// 4. one step of the configured integrator
    /// 5. write back prev position, position, velocity
    ///
    /// `dt > 0` is a caller precondition, enforced at the `advance`
    /// boundary rather than here
    pub fn update(&mut self, dt: f64, config: &Config) {
        // 1-2. reset, then re-accumulate under this frame's snapshot
        let mut force = NVec2::zeros();
        ForceSet::from_config(config).accumulate(self, &mut force);
        self.force = force;

        // 3. a = F / m
        let acceleration = self.force / self.mass;

        // 4. integrate one step
        let step = integrate(
            config.integrator,
            self.prev_position,
            self.position,
            self.velocity,
            acceleration,
            dt,
        );

        // 5. prev_position keeps the pre-step position
        self.prev_position = self.position;
        self.position = step.position;
        self.velocity = step.velocity;
    }

    /// True once the anchor point has left the canvas bounds
    pub fn is_out_of_bounds(&self, width: f64, height: f64) -> bool {
        let x = self.position.x;
        let y = self.position.y;
        x < 0.0 || x > width || y < 0.0 || y > height
    }
}

/// The live object collection and the simulation clock
///
/// Membership is owned exclusively here: objects enter through `spawn`
/// and leave through `remove` or the engine's bounds cull. Iteration
/// order is insertion order, which picking relies on for its topmost
/// rule.
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    pub objects: Vec<DynamicObject>, // insertion order
    pub t: f64, // simulation clock
    next_id: ObjectId,
    pub(crate) last_integrator: Option<IntegratorConfig>,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a new object and return its id
    /// Fails fast on invalid mass; see [`DynamicObject::new`]
    pub fn spawn(
        &mut self,
        shape: Shape,
        position: NVec2,
        mass: f64,
        thrust: f64,
    ) -> Result<ObjectId, SimulationError> {
        let obj = DynamicObject::new(self.next_id, shape, position, mass, thrust)?;
        let id = obj.id;
        self.next_id += 1;
        self.objects.push(obj);
        Ok(id)
    }

    /// Remove an object by id (the explicit delete flow)
    /// The caller is responsible for dropping `id` from any selection
    pub fn remove(&mut self, id: ObjectId) -> Option<DynamicObject> {
        let i = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(i))
    }

    pub fn get(&self, id: ObjectId) -> Option<&DynamicObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Mutable lookup, used by the host to override mass or thrust on
    /// selected objects
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut DynamicObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
