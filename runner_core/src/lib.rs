pub mod components;
pub mod config;
pub mod game;
pub mod music;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use music::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the runner simulation by one frame.
/// Returns true if the runner hit an obstacle.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    viewport: &Viewport,
    config: &Config,
    score: &mut Score,
    speed: &mut Speed,
    events: &mut Events,
    rng: &mut GameRng,
    counter: &mut SpawnCounter,
) -> bool {
    let ground_y = viewport.ground_y(config.ground_height);

    // 1. Physics and scroll
    ramp_speed(speed, score, config);
    move_runner(world, ground_y, config);
    scroll_obstacles(world, speed);

    // 2. Spawn at the right edge
    spawn_obstacles(world, viewport, config, score, rng, counter);

    // 3. Score before pruning so nothing leaves unscored
    check_scoring(world, score, events);

    // 4. Drop what has left the screen
    prune_obstacles(world);

    // 5. Collide
    check_collisions(world, ground_y, events)
}

/// Helper to create the runner entity, resting on the ground
pub fn create_runner(world: &mut World, config: &Config, ground_y: f32) -> hecs::Entity {
    world.spawn((Runner::new(
        config.runner_x,
        config.rest_y(ground_y),
        config.runner_radius,
    ),))
}

/// Helper to create an obstacle entity with its kind's geometry
pub fn create_obstacle(
    world: &mut World,
    config: &Config,
    kind: ObstacleKind,
    x: f32,
    seq: u64,
) -> hecs::Entity {
    let (width, height) = config.obstacle_size(kind);
    world.spawn((Obstacle::new(kind, x, width, height), SpawnOrder(seq)))
}

/// Obstacles sorted oldest first
pub fn obstacles_in_spawn_order(world: &World) -> Vec<Obstacle> {
    let mut obstacles: Vec<(SpawnOrder, Obstacle)> = world
        .query::<(&Obstacle, &SpawnOrder)>()
        .iter()
        .map(|(_e, (obstacle, order))| (*order, *obstacle))
        .collect();
    obstacles.sort_by_key(|(order, _)| *order);
    obstacles.into_iter().map(|(_, obstacle)| obstacle).collect()
}
