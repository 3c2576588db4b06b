use hecs::{Entity, World};

use super::read;
use crate::{Body, Cannon, Projectile};

/// Set horizontal cannon velocity to `dir * max_speed` (dir is -1 or 1)
pub fn steer_cannon(world: &mut World, cannon: Entity, dir: f32) {
    if let Ok((body, rig)) = world.query_one_mut::<(&mut Body, &Cannon)>(cannon) {
        body.vel.x = dir * rig.max_speed;
    }
}

pub fn stop_cannon(world: &mut World, cannon: Entity) {
    if let Ok(body) = world.query_one_mut::<&mut Body>(cannon) {
        body.vel.x = 0.0;
    }
}

/// Rotate the pipe by `delta` radians; negative raises it. Always clamped.
pub fn aim_cannon(world: &mut World, cannon: Entity, delta: f32) {
    if let Ok(rig) = world.query_one_mut::<&mut Cannon>(cannon) {
        if delta < 0.0 {
            rig.aim_up(-delta);
        } else {
            rig.aim_down(delta);
        }
    }
}

/// Fire along the current pipe angle. Firing again mid-flight re-aims the shot.
pub fn launch_projectile(world: &mut World, projectile: Entity, cannon: Entity, factor: f32) {
    let Some(rig) = read::<Cannon>(world, cannon) else {
        return;
    };
    if let Ok((body, shot)) = world.query_one_mut::<(&mut Body, &mut Projectile)>(projectile) {
        shot.launched = true;
        body.vel = rig.launch_velocity(factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_cannon, spawn_projectile, Config};
    use std::f32::consts::PI;

    fn setup_world() -> (World, Entity, Entity) {
        let mut world = World::new();
        let config = Config::new();
        let cannon = spawn_cannon(&mut world, &config);
        let projectile = spawn_projectile(&mut world, &config, cannon);
        (world, cannon, projectile)
    }

    #[test]
    fn test_steer_and_stop() {
        let (mut world, cannon, _) = setup_world();
        steer_cannon(&mut world, cannon, -1.0);
        assert_eq!(world.get::<&Body>(cannon).unwrap().vel.x, -6.0);
        steer_cannon(&mut world, cannon, 1.0);
        assert_eq!(world.get::<&Body>(cannon).unwrap().vel.x, 6.0);
        stop_cannon(&mut world, cannon);
        assert_eq!(world.get::<&Body>(cannon).unwrap().vel.x, 0.0);
    }

    #[test]
    fn test_aim_stays_in_range() {
        let (mut world, cannon, _) = setup_world();
        for _ in 0..50 {
            aim_cannon(&mut world, cannon, -0.1);
        }
        assert_eq!(world.get::<&Cannon>(cannon).unwrap().pipe_angle, PI);
        for _ in 0..50 {
            aim_cannon(&mut world, cannon, 0.1);
        }
        assert_eq!(world.get::<&Cannon>(cannon).unwrap().pipe_angle, 2.0 * PI);
    }

    #[test]
    fn test_launch_sets_velocity_from_pipe() {
        let (mut world, cannon, projectile) = setup_world();
        launch_projectile(&mut world, projectile, cannon, 0.6);

        assert!(world.get::<&Projectile>(projectile).unwrap().launched);
        let vel = world.get::<&Body>(projectile).unwrap().vel;
        assert!(vel.x.abs() < 1e-3);
        assert!((vel.y + 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_relaunch_reaims_flying_shot() {
        let (mut world, cannon, projectile) = setup_world();
        launch_projectile(&mut world, projectile, cannon, 0.6);
        world.get::<&mut Cannon>(cannon).unwrap().pipe_angle = 2.0 * PI;
        launch_projectile(&mut world, projectile, cannon, 0.6);

        let vel = world.get::<&Body>(projectile).unwrap().vel;
        assert!((vel.x - 60.0).abs() < 1e-3, "Second launch re-aims to the right");
        assert!(vel.y.abs() < 1e-3);
    }
}
