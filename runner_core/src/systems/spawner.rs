use crate::{
    create_obstacle, Config, GameRng, Obstacle, ObstacleKind, Score, SpawnCounter,
    SpawnOrder, Viewport,
};
use hecs::World;
use rand::Rng;

/// Append one obstacle at the right edge once the newest one has moved far
/// enough left
pub fn spawn_obstacles(
    world: &mut World,
    viewport: &Viewport,
    config: &Config,
    score: &Score,
    rng: &mut GameRng,
    counter: &mut SpawnCounter,
) {
    let newest_x = world
        .query::<(&Obstacle, &SpawnOrder)>()
        .iter()
        .max_by_key(|(_e, (_o, order))| **order)
        .map(|(_e, (o, _order))| o.x);

    let due = match newest_x {
        None => true,
        Some(x) => x < viewport.width - config.spawn_gap,
    };
    if !due {
        return;
    }

    let kind = choose_kind(score, config, rng);
    create_obstacle(world, config, kind, viewport.width, counter.next());
    log::debug!("spawned {:?} at x={}", kind, viewport.width);
}

/// Walls only until spikes unlock, then a coin flip
pub fn choose_kind(score: &Score, config: &Config, rng: &mut GameRng) -> ObstacleKind {
    if score.value() >= config.spike_unlock_score && rng.0.gen_bool(config.spike_chance) {
        ObstacleKind::Spike
    } else {
        ObstacleKind::Wall
    }
}
