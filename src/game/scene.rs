use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::physics::{Body, Bounds};

/// Initial state of one body, placed relative to the window centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub offset: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub mass: f64,
}

/// Half-open range `[min, max)` the horizontal launch speed is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterRange {
    pub min: f64,
    pub max: f64,
}

impl JitterRange {
    fn sample(&self, rng: &mut impl Rng) -> f64 {
        if self.min < self.max {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub primary: BodyConfig,
    pub secondary: BodyConfig,
    /// Replaces each body's configured `velocity.x` when set.
    pub jitter_vx: Option<JitterRange>,
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            primary: BodyConfig {
                offset: DVec2::new(-100.0, -100.0),
                velocity: DVec2::new(0.0, 25.0),
                radius: 18.0,
                mass: 100.0,
            },
            secondary: BodyConfig {
                offset: DVec2::new(100.0, 100.0),
                velocity: DVec2::new(0.0, -25.0),
                radius: 8.0,
                mass: 10.0,
            },
            jitter_vx: Some(JitterRange {
                min: -15.0,
                max: 25.0,
            }),
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Places both bodies around the centre of `bounds`.
    pub fn build(&self, bounds: &Bounds, rng: &mut impl Rng) -> [Body; 2] {
        let center = bounds.center();
        [self.primary, self.secondary].map(|cfg| {
            let mut velocity = cfg.velocity;
            if let Some(jitter) = &self.jitter_vx {
                velocity.x = jitter.sample(&mut *rng);
            }
            Body::new(center + cfg.offset, velocity, cfg.radius, cfg.mass)
        })
    }
}
