use crate::{Events, Obstacle, ObstacleKind, Runner};
use hecs::World;

/// Box test between the runner's circle and one obstacle
pub fn hits(runner: &Runner, obstacle: &Obstacle, ground_y: f32) -> bool {
    let overlaps_x = runner.right() > obstacle.x && runner.left() < obstacle.trailing_edge();
    if !overlaps_x {
        return false;
    }

    match obstacle.kind {
        ObstacleKind::Wall => runner.bottom() > obstacle.top(ground_y),
        // Touching the ground next to a spike is lethal
        ObstacleKind::Spike => runner.bottom() >= ground_y,
    }
}

/// Check the runner against every obstacle. Returns true on any hit.
pub fn check_collisions(world: &World, ground_y: f32, events: &mut Events) -> bool {
    let runner = match world.query::<&Runner>().iter().next() {
        Some((_e, runner)) => *runner,
        None => return false, // No runner in world
    };

    let hit = world
        .query::<&Obstacle>()
        .iter()
        .any(|(_e, obstacle)| hits(&runner, obstacle, ground_y));

    events.game_over |= hit;
    hit
}
