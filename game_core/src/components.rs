use glam::Vec2;

use crate::params::Params;
use crate::Config;

/// Position and velocity shared by every moving entity.
///
/// Velocity is measured in units per frame; `integrate` adds it once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// Cannon component - the player's launcher. `Body::pos` is its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cannon {
    pub size: Vec2,
    pub max_speed: f32,
    pub pipe_length: f32,
    pub pipe_angle: f32, // radians, kept within [PI, 2*PI]
}

impl Cannon {
    pub fn new(config: &Config) -> Self {
        Self {
            size: config.cannon_size(),
            max_speed: config.cannon_max_speed,
            pipe_length: config.pipe_length,
            pipe_angle: config
                .pipe_angle
                .clamp(Params::PIPE_ANGLE_MIN, Params::PIPE_ANGLE_MAX),
        }
    }

    /// Pivot of the pipe on top of the hull. Docked projectiles sit here.
    pub fn firing_point(&self, body: &Body) -> Vec2 {
        Vec2::new(body.pos.x + self.size.x / 2.0, body.pos.y)
    }

    pub fn pipe_end(&self, body: &Body) -> Vec2 {
        self.firing_point(body) + Vec2::from_angle(self.pipe_angle) * self.pipe_length
    }

    pub fn aim_up(&mut self, step: f32) {
        self.pipe_angle = (self.pipe_angle - step).max(Params::PIPE_ANGLE_MIN);
    }

    pub fn aim_down(&mut self, step: f32) {
        self.pipe_angle = (self.pipe_angle + step).min(Params::PIPE_ANGLE_MAX);
    }

    pub fn launch_velocity(&self, factor: f32) -> Vec2 {
        Vec2::from_angle(self.pipe_angle) * (factor * self.pipe_length)
    }
}

/// Projectile component - rides the cannon until launched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub radius: f32,
    pub launched: bool,
}

impl Projectile {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            launched: false,
        }
    }
}

/// Target component - a bouncing ball the player must hit and dodge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub radius: f32,
    pub speed: f32,
    /// `None` for the primary target. The secondary target only
    /// updates and draws while points exceed this threshold.
    pub wakes_after: Option<u32>,
}

impl Target {
    pub fn primary(config: &Config) -> Self {
        Self {
            radius: config.target_radius,
            speed: config.target_speed,
            wakes_after: None,
        }
    }

    pub fn secondary(config: &Config) -> Self {
        Self {
            wakes_after: Some(config.secondary_threshold),
            ..Self::primary(config)
        }
    }

    pub fn is_active(&self, points: u32) -> bool {
        match self.wakes_after {
            Some(threshold) => points > threshold,
            None => true,
        }
    }
}
