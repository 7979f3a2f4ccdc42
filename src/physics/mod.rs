pub mod body;
pub mod bounds;
pub mod trajectory;

pub use body::Body;
pub use bounds::{Bounds, EdgeContacts};
pub use trajectory::Trajectory;

use serde::{Deserialize, Serialize};

/// Below this centre-to-centre distance the direction between two bodies is
/// undefined and no gravity impulse is applied.
pub const MIN_SEPARATION: f64 = 1e-9;

/// Constants of the two-body model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Stand-in for the gravitational constant. Masses are not part of the
    /// magnitude; they only scale the impulse each body receives.
    pub gravity: f64,
    pub delta_t: f64,
    /// Velocity factor applied on every wall bounce. Values above 1 make
    /// bounces gain energy.
    pub dampening: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: 100.0,
            delta_t: 0.1,
            dampening: 1.001,
        }
    }
}

/// Scalar gravity magnitude between two bodies whose centres are `distance`
/// apart. Overlapping bodies are treated as touching so the force stays
/// bounded at contact.
pub fn gravity_magnitude(gravity: f64, distance: f64, radius_sum: f64) -> f64 {
    let effective = if distance <= radius_sum {
        radius_sum
    } else {
        distance
    };
    gravity / (effective * effective)
}

/// Outcome of one [`step`], mostly useful for logging and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub distance: f64,
    pub magnitude: f64,
    pub clamped: bool,
    pub contacts: [EdgeContacts; 2],
}

/// Advances the pair by one tick: positions first, then the mutual gravity
/// impulse from the post-move distance, then wall handling for `a` and `b`.
pub fn step(a: &mut Body, b: &mut Body, params: &PhysicsParams, bounds: &Bounds) -> StepReport {
    a.advance(params.delta_t);
    b.advance(params.delta_t);

    let offset = b.position - a.position;
    let distance = offset.length();
    let radius_sum = a.radius + b.radius;

    let mut report = StepReport {
        distance,
        clamped: distance <= radius_sum,
        ..StepReport::default()
    };

    if distance > MIN_SEPARATION {
        let direction = offset / distance;
        let magnitude = gravity_magnitude(params.gravity, distance, radius_sum);
        let accel = direction * magnitude;

        a.velocity += accel * b.mass;
        b.velocity -= accel * a.mass;
        report.magnitude = magnitude;
    } else {
        tracing::debug!(target: "physics", distance, "centres coincide, skipping gravity");
    }

    report.contacts = [
        bounds.resolve(a, params.dampening),
        bounds.resolve(b, params.dampening),
    ];
    report
}
