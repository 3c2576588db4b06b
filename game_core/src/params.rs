use std::f32::consts::PI;

/// Game tuning parameters for the cannon arcade
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 700.0;

    // Cannon
    pub const CANNON_WIDTH: f32 = 150.0;
    pub const CANNON_HEIGHT: f32 = 50.0;
    pub const CANNON_MAX_SPEED: f32 = 6.0; // units per frame, not per second
    pub const PIPE_LENGTH: f32 = 100.0;
    pub const PIPE_ANGLE_INITIAL: f32 = PI * 1.5; // straight up
    pub const PIPE_ANGLE_MIN: f32 = PI;
    pub const PIPE_ANGLE_MAX: f32 = PI * 2.0;
    pub const AIM_STEP: f32 = 0.1;
    pub const TURRET_RADIUS: f32 = 50.0;
    pub const PIPE_LINE_WIDTH: f32 = 15.0;

    // Projectile
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const LAUNCH_FACTOR: f32 = 0.6; // launch speed = factor * pipe length

    // Targets
    pub const TARGET_RADIUS: f32 = 50.0;
    pub const TARGET_SPEED: f32 = 7.0;
    pub const TARGET_SPAWN_OFFSET: f32 = 51.0;
    pub const TARGET_RESPAWN_Y: f32 = 50.0;
    pub const SECONDARY_THRESHOLD: u32 = 19;

    // Rendering hints
    pub const PROXIMITY: f32 = 50.0;
}
