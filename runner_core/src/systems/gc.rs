use hecs::World;

use crate::components::*;

/// Garbage collection: despawn obstacles that have fully left the screen
pub fn prune_obstacles(world: &mut World) {
    let to_remove: Vec<hecs::Entity> = world
        .query::<&Obstacle>()
        .iter()
        .filter(|(_e, obstacle)| obstacle.trailing_edge() <= 0.0)
        .map(|(e, _)| e)
        .collect();

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}
