pub mod components;
pub mod config;
pub mod fsm;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod scene;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use scene::*;
pub use session::*;

use glam::Vec2;
use hecs::{Entity, World};

/// Helper to create the cannon entity at its spawn point, at rest
pub fn spawn_cannon(world: &mut World, config: &Config) -> Entity {
    world.spawn((
        Body::new(config.cannon_spawn(), Vec2::ZERO),
        Cannon::new(config),
    ))
}

/// Helper to create a projectile docked on `cannon`
pub fn spawn_projectile(world: &mut World, config: &Config, cannon: Entity) -> Entity {
    let body = systems::read::<Body>(world, cannon)
        .zip(systems::read::<Cannon>(world, cannon))
        .map(|(body, rig)| Body::new(rig.firing_point(&body), body.vel))
        .unwrap_or_default();
    world.spawn((body, Projectile::new(config.projectile_radius)))
}

/// Helper to create a target entity
pub fn spawn_target(world: &mut World, target: Target, body: Body) -> Entity {
    world.spawn((body, target))
}
