use crate::{Config, GameStatus, Runner};
use hecs::World;

/// Launch the runner if it is on the ground and the game is still running.
/// Returns true when the jump took effect.
pub fn apply_jump(world: &mut World, status: GameStatus, config: &Config) -> bool {
    if status.is_over() {
        return false;
    }

    let mut jumped = false;
    for (_entity, runner) in world.query_mut::<&mut Runner>() {
        if runner.grounded {
            runner.vel_y = -config.jump_impulse;
            runner.grounded = false;
            jumped = true;
        }
    }

    jumped
}
