use glam::DVec2;

/// A circular point-mass moving in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub mass: f64,
}

impl Body {
    pub fn new(position: DVec2, velocity: DVec2, radius: f64, mass: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
            mass,
        }
    }

    /// Explicit Euler position update.
    pub fn advance(&mut self, delta_t: f64) {
        self.position += self.velocity * delta_t;
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}
