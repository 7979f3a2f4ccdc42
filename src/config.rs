use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::canvas::Color;
use crate::engine::core::EngineConfig;
use crate::game::scene::{BodyConfig, SceneConfig};
use crate::physics::{Bounds, PhysicsParams};

/// File looked up in the working directory at startup.
pub const DEFAULT_CONFIG_FILE: &str = "planetsim.ron";

/// Upper bound on samples kept per trail.
pub const MAX_TRAIL_LENGTH: usize = 100_000;

/// Upper bound on either window dimension, in pixels.
pub const MAX_WINDOW_SIZE: u32 = 16_384;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub physics: PhysicsParams,
    pub trail: TrailConfig,
    pub colors: Palette,
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub length: usize,
    pub width: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            length: 300,
            width: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub body: Color,
    pub trail: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::LIGHT,
            body: Color::DARK,
            trail: Color::DARK,
        }
    }
}

impl Config {
    pub fn from_ron_str(source: &str) -> Result<Self> {
        let config: Self = ron::from_str(source).context("failed to parse RON config")?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        let engine = &self.engine;
        ensure!(
            engine.window_width > 0 && engine.window_height > 0,
            "window size must be non-zero, got {}x{}",
            engine.window_width,
            engine.window_height
        );
        ensure!(
            engine.window_width <= MAX_WINDOW_SIZE && engine.window_height <= MAX_WINDOW_SIZE,
            "window size {}x{} exceeds {MAX_WINDOW_SIZE}",
            engine.window_width,
            engine.window_height
        );

        let physics = &self.physics;
        ensure!(physics.gravity.is_finite(), "physics.gravity must be finite");
        ensure!(
            physics.delta_t.is_finite() && physics.delta_t > 0.0,
            "physics.delta_t must be positive, got {}",
            physics.delta_t
        );
        ensure!(
            physics.dampening.is_finite() && physics.dampening > 0.0,
            "physics.dampening must be positive, got {}",
            physics.dampening
        );

        ensure!(
            self.trail.length <= MAX_TRAIL_LENGTH,
            "trail.length {} exceeds {MAX_TRAIL_LENGTH}",
            self.trail.length
        );
        ensure!(
            self.trail.width.is_finite() && self.trail.width > 0.0,
            "trail.width must be positive, got {}",
            self.trail.width
        );

        check_body("scene.primary", &self.scene.primary)?;
        check_body("scene.secondary", &self.scene.secondary)?;
        if let Some(jitter) = &self.scene.jitter_vx {
            ensure!(
                jitter.min.is_finite() && jitter.max.is_finite(),
                "scene.jitter_vx bounds must be finite"
            );
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_ron_str(&source).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Loads `path` when it exists, otherwise returns the built-in defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            tracing::info!(path = %path.display(), "loading config");
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.engine.window_width as f64,
            self.engine.window_height as f64,
        )
    }
}

fn check_body(name: &str, body: &BodyConfig) -> Result<()> {
    ensure!(
        body.radius.is_finite() && body.radius > 0.0,
        "{name}.radius must be positive, got {}",
        body.radius
    );
    ensure!(
        body.mass.is_finite() && body.mass > 0.0,
        "{name}.mass must be positive, got {}",
        body.mass
    );
    ensure!(
        body.offset.is_finite() && body.velocity.is_finite(),
        "{name} offset and velocity must be finite"
    );
    Ok(())
}
