use hecs::{Entity, World};

use super::read;
use crate::{is_live_frame, Arena, Body, Cannon, Projectile};

/// Apply cannon velocity and keep the hull inside the arena.
/// Hitting a side wall stops horizontal motion.
pub fn move_cannon(world: &mut World, cannon: Entity, arena: &Arena, dt: f32) {
    if !is_live_frame(dt) {
        return;
    }
    let Ok((body, rig)) = world.query_one_mut::<(&mut Body, &Cannon)>(cannon) else {
        return;
    };

    body.integrate();

    let (pos, wall) = arena.clamp_box(body.pos, rig.size);
    body.pos = pos;
    if wall.is_some() {
        body.vel.x = 0.0;
    }
}

/// Move the projectile for one frame. Returns true if it re-docked.
///
/// A docked projectile is pinned to the firing point and shares the cannon's
/// velocity. A launched one that has left the arena re-docks and is then
/// integrated once with the cannon's velocity.
pub fn move_projectile(
    world: &mut World,
    projectile: Entity,
    cannon: Entity,
    arena: &Arena,
    dt: f32,
) -> bool {
    if !is_live_frame(dt) {
        return false;
    }
    let (Some(cannon_body), Some(rig)) = (read::<Body>(world, cannon), read::<Cannon>(world, cannon))
    else {
        return false;
    };
    let dock = rig.firing_point(&cannon_body);

    let Ok((body, shot)) = world.query_one_mut::<(&mut Body, &mut Projectile)>(projectile) else {
        return false;
    };

    if !shot.launched {
        body.pos = dock;
        body.vel = cannon_body.vel;
        return false;
    }

    let mut docked = false;
    if !arena.contains(body.pos) {
        shot.launched = false;
        body.pos = dock;
        body.vel = cannon_body.vel;
        docked = true;
        log::debug!("projectile left the arena, re-docked at {dock}");
    }

    body.integrate();
    docked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_cannon, spawn_projectile, Config};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Arena, Entity, Entity) {
        let mut world = World::new();
        let config = Config::new();
        let arena = config.arena();
        let cannon = spawn_cannon(&mut world, &config);
        let projectile = spawn_projectile(&mut world, &config, cannon);
        (world, config, arena, cannon, projectile)
    }

    fn body(world: &World, entity: Entity) -> Body {
        *world.get::<&Body>(entity).unwrap()
    }

    #[test]
    fn test_cannon_moves_one_velocity_per_frame() {
        let (mut world, _config, arena, cannon, _) = setup_world();
        world.get::<&mut Body>(cannon).unwrap().vel.x = 6.0;

        move_cannon(&mut world, cannon, &arena, 16.0);
        assert_eq!(body(&world, cannon).pos.x, 6.0);

        // Magnitude of dt is ignored
        move_cannon(&mut world, cannon, &arena, 1000.0);
        assert_eq!(body(&world, cannon).pos.x, 12.0);
    }

    #[test]
    fn test_cannon_skips_zero_and_nan_frames() {
        let (mut world, _config, arena, cannon, _) = setup_world();
        world.get::<&mut Body>(cannon).unwrap().vel.x = 6.0;

        move_cannon(&mut world, cannon, &arena, 0.0);
        move_cannon(&mut world, cannon, &arena, f32::NAN);
        assert_eq!(body(&world, cannon).pos.x, 0.0);
    }

    #[test]
    fn test_cannon_stops_at_side_walls() {
        let (mut world, _config, arena, cannon, _) = setup_world();
        world.get::<&mut Body>(cannon).unwrap().vel.x = -6.0;

        move_cannon(&mut world, cannon, &arena, 16.0);
        let b = body(&world, cannon);
        assert_eq!(b.pos.x, 0.0);
        assert_eq!(b.vel.x, 0.0, "Left wall should zero horizontal velocity");

        {
            let mut b = world.get::<&mut Body>(cannon).unwrap();
            b.pos.x = 848.0;
            b.vel.x = 6.0;
        }
        move_cannon(&mut world, cannon, &arena, 16.0);
        let b = body(&world, cannon);
        assert_eq!(b.pos.x, 850.0);
        assert_eq!(b.vel.x, 0.0, "Right wall should zero horizontal velocity");
    }

    #[test]
    fn test_cannon_vertical_clamp_keeps_velocity() {
        let (mut world, _config, arena, cannon, _) = setup_world();
        world.get::<&mut Body>(cannon).unwrap().vel = Vec2::new(0.0, 5.0);

        move_cannon(&mut world, cannon, &arena, 16.0);
        let b = body(&world, cannon);
        assert_eq!(b.pos.y, 650.0);
        assert_eq!(b.vel.y, 5.0);
    }

    #[test]
    fn test_docked_projectile_rides_cannon() {
        let (mut world, _config, arena, cannon, projectile) = setup_world();
        world.get::<&mut Body>(cannon).unwrap().vel.x = 6.0;

        move_cannon(&mut world, cannon, &arena, 16.0);
        let docked = move_projectile(&mut world, projectile, cannon, &arena, 16.0);

        assert!(!docked);
        let shot = body(&world, projectile);
        assert_eq!(shot.vel, Vec2::new(6.0, 0.0));
        assert_eq!(shot.pos, Vec2::new(81.0, 650.0), "Pinned to the firing point");
    }

    #[test]
    fn test_launched_projectile_flies() {
        let (mut world, _config, arena, cannon, projectile) = setup_world();
        {
            let (b, p) = world
                .query_one_mut::<(&mut Body, &mut Projectile)>(projectile)
                .unwrap();
            b.pos = Vec2::new(500.0, 300.0);
            b.vel = Vec2::new(0.0, -60.0);
            p.launched = true;
        }

        let docked = move_projectile(&mut world, projectile, cannon, &arena, 16.0);

        assert!(!docked);
        assert_eq!(body(&world, projectile).pos, Vec2::new(500.0, 240.0));
    }

    #[test]
    fn test_projectile_redocks_after_leaving_arena() {
        let (mut world, _config, arena, cannon, projectile) = setup_world();
        world.get::<&mut Body>(cannon).unwrap().vel.x = 6.0;
        {
            let (b, p) = world
                .query_one_mut::<(&mut Body, &mut Projectile)>(projectile)
                .unwrap();
            b.pos = Vec2::new(500.0, -10.0);
            b.vel = Vec2::new(0.0, -60.0);
            p.launched = true;
        }

        let docked = move_projectile(&mut world, projectile, cannon, &arena, 16.0);

        assert!(docked);
        let shot = body(&world, projectile);
        assert_eq!(shot.vel, Vec2::new(6.0, 0.0), "Takes the cannon's velocity");
        assert_eq!(
            shot.pos,
            Vec2::new(81.0, 650.0),
            "Re-docked and integrated once"
        );
        assert!(!world.get::<&Projectile>(projectile).unwrap().launched);
    }
}
