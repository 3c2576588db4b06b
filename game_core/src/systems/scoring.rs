use glam::Vec2;

use crate::{Body, Config, GameRng};

/// Drop a hit target back in at a random x near the top of the arena,
/// heading down with a random horizontal direction.
pub fn respawn_target(body: &mut Body, speed: f32, config: &Config, rng: &mut GameRng) {
    let x = rng.unit() * config.arena_width;
    let dir = if rng.coin() { 1.0 } else { -1.0 };

    body.pos = Vec2::new(x, config.target_respawn_y);
    body.vel = Vec2::new(dir * speed, speed);
}
