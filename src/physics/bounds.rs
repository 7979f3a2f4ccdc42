use serde::{Deserialize, Serialize};

use super::body::Body;

/// The rectangle bodies are confined to, in pixels, with the origin at the
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Which walls a body touched during one [`Bounds::resolve`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EdgeContacts {
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
    pub left: bool,
}

impl EdgeContacts {
    pub fn any(&self) -> bool {
        self.right || self.bottom || self.top || self.left
    }

    pub fn count(&self) -> usize {
        [self.right, self.bottom, self.top, self.left]
            .into_iter()
            .filter(|hit| *hit)
            .count()
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamps `body` back inside the bounds and reflects the velocity
    /// component normal to every wall it crossed, scaled by `dampening`.
    ///
    /// Walls are checked right, bottom, top, left. Each check sees the result
    /// of the previous one, so a body wider than the bounds ends up against
    /// the left/top wall.
    pub fn resolve(&self, body: &mut Body, dampening: f64) -> EdgeContacts {
        let mut contacts = EdgeContacts::default();
        let r = body.radius;

        if body.position.x + r > self.width {
            body.position.x = self.width - r;
            body.velocity.x = -body.velocity.x * dampening;
            contacts.right = true;
        }

        if body.position.y + r > self.height {
            body.position.y = self.height - r;
            body.velocity.y = -body.velocity.y * dampening;
            contacts.bottom = true;
        }

        if body.position.y - r < 0.0 {
            body.position.y = r;
            body.velocity.y = -body.velocity.y * dampening;
            contacts.top = true;
        }

        if body.position.x - r < 0.0 {
            body.position.x = r;
            body.velocity.x = -body.velocity.x * dampening;
            contacts.left = true;
        }

        if contacts.any() {
            tracing::trace!(
                target: "physics",
                ?contacts,
                x = body.position.x,
                y = body.position.y,
                "edge bounce"
            );
        }

        contacts
    }
}
