use serde::Deserialize;

use crate::{ObstacleKind, Params};

/// A [`Config`] value the simulation cannot run with
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("spikeChance must be within 0..=1, got {0}")]
    SpikeChance(f64),
    #[error("spawnGap must be positive, got {0}")]
    SpawnGap(f32),
    #[error("baseSpeed must be positive, got {0}")]
    BaseSpeed(f32),
}

/// Game configuration
///
/// Every field falls back to its [`Params`] value, so hosts can override a
/// single knob with a partial object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub ground_height: f32,
    pub runner_x: f32,
    pub runner_radius: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub base_speed: f32,
    pub speed_increment: f32,
    pub speed_up_score: u32,
    pub spawn_gap: f32,
    pub wall_width: f32,
    pub wall_height: f32,
    pub spike_width: f32,
    pub spike_height: f32,
    pub spike_chance: f64,
    pub spike_unlock_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ground_height: Params::GROUND_HEIGHT,
            runner_x: Params::RUNNER_X,
            runner_radius: Params::RUNNER_RADIUS,
            gravity: Params::GRAVITY,
            jump_impulse: Params::JUMP_IMPULSE,
            base_speed: Params::BASE_SPEED,
            speed_increment: Params::SPEED_INCREMENT,
            speed_up_score: Params::SPEED_UP_SCORE,
            spawn_gap: Params::SPAWN_GAP,
            wall_width: Params::WALL_WIDTH,
            wall_height: Params::WALL_HEIGHT,
            spike_width: Params::SPIKE_WIDTH,
            spike_height: Params::SPIKE_HEIGHT,
            spike_chance: Params::SPIKE_CHANCE,
            spike_unlock_score: Params::SPIKE_UNLOCK_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width and height of an obstacle of the given kind
    pub fn obstacle_size(&self, kind: ObstacleKind) -> (f32, f32) {
        match kind {
            ObstacleKind::Wall => (self.wall_width, self.wall_height),
            ObstacleKind::Spike => (self.spike_width, self.spike_height),
        }
    }

    /// Reject values that would stall the spawner or panic the RNG
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.spike_chance) {
            return Err(ConfigError::SpikeChance(self.spike_chance));
        }
        if !self.spawn_gap.is_finite() || self.spawn_gap <= 0.0 {
            return Err(ConfigError::SpawnGap(self.spawn_gap));
        }
        if !self.base_speed.is_finite() || self.base_speed <= 0.0 {
            return Err(ConfigError::BaseSpeed(self.base_speed));
        }
        Ok(())
    }

    /// Y of the runner's centre when it rests on the ground line
    pub fn rest_y(&self, ground_y: f32) -> f32 {
        ground_y - self.runner_radius
    }
}
