use glam::Vec2;

use crate::{Arena, Body, Wall};

/// Axis-aligned reach test: both |dx| and |dy| strictly below `reach`
pub fn within_reach(a: Vec2, b: Vec2, reach: f32) -> bool {
    let delta = (a - b).abs();
    delta.x < reach && delta.y < reach
}

/// Negate the velocity component of every wall the circle overlaps.
/// No position correction and no damping.
pub fn reflect_off_walls(body: &mut Body, radius: f32, arena: &Arena) {
    for wall in arena.walls_touched(body.pos, radius) {
        match wall {
            Wall::Left | Wall::Right => body.vel.x = -body.vel.x,
            Wall::Top | Wall::Bottom => body.vel.y = -body.vel.y,
        }
    }
}
