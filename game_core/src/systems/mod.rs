pub mod collision;
pub mod input;
pub mod movement;
pub mod scoring;
pub mod targets;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
pub use targets::*;

use hecs::{Component, Entity, World};

/// Copy a component out of the world so peers can be read
/// before another entity is borrowed mutably.
pub fn read<T: Component + Copy>(world: &World, entity: Entity) -> Option<T> {
    world.get::<&T>(entity).ok().map(|component| *component)
}
