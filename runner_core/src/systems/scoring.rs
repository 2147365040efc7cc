use crate::{Events, Obstacle, Runner, Score};
use hecs::World;

/// Award one point per obstacle whose trailing edge has passed the runner.
/// The `scored` flag makes this fire once per obstacle.
pub fn check_scoring(world: &mut World, score: &mut Score, events: &mut Events) {
    let runner_x = match world.query::<&Runner>().iter().next() {
        Some((_e, runner)) => runner.x,
        None => return, // No runner in world
    };

    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        if !obstacle.scored && obstacle.trailing_edge() < runner_x {
            obstacle.scored = true;
            score.increment();
            events.scored = true;
        }
    }
}
