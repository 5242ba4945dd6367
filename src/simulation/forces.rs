//! Force contributors for sandbox objects
//!
//! Each term implements [`Force`] and adds its contribution to a
//! per-object force vector; [`ForceSet`] sums the active terms. The set
//! is rebuilt from the `Config` snapshot every frame, so toggling a
//! force between frames takes effect without any retained state.

use super::params::Config;
use super::states::DynamicObject;
use super::vector::{unit_or_zero, NVec2};

/// Collection of force terms (thrust, gravity, drag, spring)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per object
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Assemble the active terms for one frame's config snapshot
    /// Thrust is always evaluated; the others are gated by their flags
    pub fn from_config(config: &Config) -> Self {
        let mut forces = ForceSet::new().with(Thrust);
        if config.enable_gravity {
            forces = forces.with(Gravity { g: config.gravity });
        }
        if config.enable_friction {
            forces = forces.with(LinearDrag {
                mu: config.mu_ground,
            });
        }
        if config.enable_spring {
            forces = forces.with(CenterSpring {
                k: config.spring_k,
                rest_length: config.rest_length,
                anchor: config.center(),
            });
        }
        forces
    }

    /// Sum all contributions for `obj` into `out`
    /// - `out` is zeroed first; forces never persist across frames
    pub fn accumulate(&self, obj: &DynamicObject, out: &mut NVec2) {
        *out = NVec2::zeros();
        // Iterate over all force contributors
        for term in &self.terms {
            term.contribute(obj, out);
        }
    }
}

/// Trait for force sources acting on a single [`DynamicObject`]
/// Implementations add their contribution into `out`
pub trait Force {
    fn contribute(&self, obj: &DynamicObject, out: &mut NVec2);
}

/// Per-object horizontal drive: (thrust, 0), applied every frame, not
/// only at spawn
pub struct Thrust;

impl Force for Thrust {
    fn contribute(&self, obj: &DynamicObject, out: &mut NVec2) {
        if obj.thrust != 0.0 {
            *out += NVec2::new(obj.thrust, 0.0);
        }
    }
}

/// Uniform gravity: (0, g * m); +y points down the canvas
pub struct Gravity {
    pub g: f64,
}

impl Force for Gravity {
    fn contribute(&self, obj: &DynamicObject, out: &mut NVec2) {
        *out += NVec2::new(0.0, self.g * obj.mass);
    }
}

/// Viscous drag: F = -mu * v
/// Proportional to the current speed and opposing it; not Coulomb
/// friction
pub struct LinearDrag {
    pub mu: f64,
}

impl Force for LinearDrag {
    fn contribute(&self, obj: &DynamicObject, out: &mut NVec2) {
        *out += obj.velocity * -self.mu;
    }
}

/// Hooke spring tying every object to a fixed anchor, the canvas center
///
/// With d = anchor - position and extension = |d| - rest_length, the
/// force on the object is k * extension * unit(d): stretched past the
/// rest length it pulls back toward the anchor, compressed inside it
/// pushes out. At the exact anchor point unit(d) is the zero vector, so
/// the force vanishes there regardless of extension.
pub struct CenterSpring {
    pub k: f64,
    pub rest_length: f64,
    pub anchor: NVec2,
}

impl Force for CenterSpring {
    fn contribute(&self, obj: &DynamicObject, out: &mut NVec2) {
        // d points from the object toward the anchor
        let d = self.anchor - obj.position;
        let extension = d.norm() - self.rest_length;
        *out += unit_or_zero(d) * (self.k * extension);
    }
}
