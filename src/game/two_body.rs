use crate::config::{Config, Palette, TrailConfig};
use crate::engine::canvas::Canvas;
use crate::game::{Game, GameWindowDescriptor};
use crate::physics::{self, Body, Bounds, PhysicsParams, Trajectory};

/// Two mutually attracting bodies bouncing inside the window, each leaving a
/// trail of its recent positions.
#[derive(Debug)]
pub struct TwoBodyGame {
    title: String,
    bodies: [Body; 2],
    trails: [Trajectory; 2],
    params: PhysicsParams,
    bounds: Bounds,
    trail: TrailConfig,
    palette: Palette,
    frames: u64,
}

impl TwoBodyGame {
    pub fn new(config: &Config) -> Self {
        let bounds = config.bounds();
        let mut rng = config.scene.rng();
        let bodies = config.scene.build(&bounds, &mut rng);
        Self::with_bodies(config, bodies)
    }

    /// Starts from explicit bodies instead of the configured scene.
    pub fn with_bodies(config: &Config, bodies: [Body; 2]) -> Self {
        tracing::info!(
            target: "game",
            a = ?bodies[0].position,
            a_velocity = ?bodies[0].velocity,
            b = ?bodies[1].position,
            b_velocity = ?bodies[1].velocity,
            "scene created"
        );
        Self {
            title: config.engine.app_name.clone(),
            bodies,
            trails: [
                Trajectory::with_capacity(config.trail.length),
                Trajectory::with_capacity(config.trail.length),
            ],
            params: config.physics,
            bounds: config.bounds(),
            trail: config.trail,
            palette: config.colors,
            frames: 0,
        }
    }

    pub fn bodies(&self) -> &[Body; 2] {
        &self.bodies
    }

    pub fn trails(&self) -> &[Trajectory; 2] {
        &self.trails
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn draw_trail(&self, canvas: &mut Canvas, trail: &Trajectory) {
        for sample in trail.iter() {
            canvas.fill_circle(sample.position, self.trail.width, self.palette.trail);
        }
    }
}

impl Game for TwoBodyGame {
    fn name(&self) -> &str {
        "Two Body"
    }

    /// Bodies are drawn before the physics step and the trails are drawn
    /// before this tick's positions are appended, so what ends up on screen
    /// lags the simulation by one tick.
    fn frame(&mut self, canvas: &mut Canvas) {
        canvas.clear(self.palette.background);
        for body in &self.bodies {
            canvas.fill_circle(body.position, body.radius, self.palette.body);
        }

        let [a, b] = &mut self.bodies;
        let report = physics::step(a, b, &self.params, &self.bounds);

        for trail in &self.trails {
            self.draw_trail(canvas, trail);
        }
        for (trail, body) in self.trails.iter_mut().zip(self.bodies.iter()) {
            trail.push(*body);
        }

        self.frames += 1;
        tracing::debug!(
            target: "game",
            frame = self.frames,
            distance = report.distance,
            magnitude = report.magnitude,
            clamped = report.clamped,
            "frame"
        );
    }

    fn window_descriptor(&self) -> GameWindowDescriptor {
        GameWindowDescriptor {
            title: Some(self.title.clone()),
            width: Some(self.bounds.width as u32),
            height: Some(self.bounds.height as u32),
            resizable: false,
        }
    }
}
