use glam::Vec2;

use crate::map::Arena;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub cannon_width: f32,
    pub cannon_height: f32,
    pub cannon_max_speed: f32,
    pub pipe_length: f32,
    pub pipe_angle: f32,
    pub aim_step: f32,
    pub turret_radius: f32,
    pub projectile_radius: f32,
    pub launch_factor: f32,
    pub target_radius: f32,
    pub target_speed: f32,
    pub target_respawn_y: f32,
    pub secondary_threshold: u32,
    pub proximity: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            cannon_width: Params::CANNON_WIDTH,
            cannon_height: Params::CANNON_HEIGHT,
            cannon_max_speed: Params::CANNON_MAX_SPEED,
            pipe_length: Params::PIPE_LENGTH,
            pipe_angle: Params::PIPE_ANGLE_INITIAL,
            aim_step: Params::AIM_STEP,
            turret_radius: Params::TURRET_RADIUS,
            projectile_radius: Params::PROJECTILE_RADIUS,
            launch_factor: Params::LAUNCH_FACTOR,
            target_radius: Params::TARGET_RADIUS,
            target_speed: Params::TARGET_SPEED,
            target_respawn_y: Params::TARGET_RESPAWN_Y,
            secondary_threshold: Params::SECONDARY_THRESHOLD,
            proximity: Params::PROXIMITY,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    pub fn cannon_size(&self) -> Vec2 {
        Vec2::new(self.cannon_width, self.cannon_height)
    }

    /// Cannon spawns in the bottom-left corner
    pub fn cannon_spawn(&self) -> Vec2 {
        Vec2::new(0.0, self.arena_height - self.cannon_height)
    }

    /// Top-left entry for the primary target, heading down-right
    pub fn primary_spawn(&self) -> (Vec2, Vec2) {
        let offset = Params::TARGET_SPAWN_OFFSET;
        (
            Vec2::new(offset, offset),
            Vec2::new(self.target_speed, self.target_speed),
        )
    }

    /// Top-right entry for the secondary target, heading down-left
    pub fn secondary_spawn(&self) -> (Vec2, Vec2) {
        let offset = Params::TARGET_SPAWN_OFFSET;
        (
            Vec2::new(self.arena_width - offset, offset),
            Vec2::new(-self.target_speed, self.target_speed),
        )
    }

    pub fn launch_speed(&self) -> f32 {
        self.launch_factor * self.pipe_length
    }
}
