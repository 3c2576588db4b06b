use hecs::{Entity, World};

use super::{read, reflect_off_walls, respawn_target, within_reach};
use crate::{is_live_frame, Body, Cannon, Config, GameRng, Projectile, Target};

/// What happened to a target during its update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetOutcome {
    pub struck_cannon: bool,
    pub hit: bool,
}

/// Advance one target by a frame.
///
/// Both collision checks use the position from before the move; wall
/// reflection uses the position after it. A hit respawns the target
/// before it moves, so the respawned target is integrated this frame.
pub fn update_target(
    world: &mut World,
    target: Entity,
    cannon: Entity,
    projectile: Entity,
    config: &Config,
    rng: &mut GameRng,
    dt: f32,
) -> TargetOutcome {
    let mut outcome = TargetOutcome::default();
    if !is_live_frame(dt) {
        return outcome;
    }

    let (Some(cannon_body), Some(rig)) = (read::<Body>(world, cannon), read::<Cannon>(world, cannon))
    else {
        return outcome;
    };
    let (Some(shot_body), Some(shot)) = (
        read::<Body>(world, projectile),
        read::<Projectile>(world, projectile),
    ) else {
        return outcome;
    };
    let firing_point = rig.firing_point(&cannon_body);
    let arena = config.arena();

    let Ok((body, ball)) = world.query_one_mut::<(&mut Body, &Target)>(target) else {
        return outcome;
    };

    if within_reach(firing_point, body.pos, ball.radius + config.turret_radius) {
        outcome.struck_cannon = true;
    }

    if within_reach(body.pos, shot_body.pos, ball.radius + shot.radius) {
        respawn_target(body, ball.speed, config, rng);
        outcome.hit = true;
    }

    body.integrate();
    reflect_off_walls(body, ball.radius, &arena);

    outcome
}
