use crate::{Config, Obstacle, Runner, Score, Speed};
use hecs::World;

/// Raise the scroll speed once the score passes the threshold. Uncapped.
pub fn ramp_speed(speed: &mut Speed, score: &Score, config: &Config) {
    if score.value() >= config.speed_up_score {
        speed.0 += config.speed_increment;
    }
}

/// Integrate gravity and land the runner on the ground line
pub fn move_runner(world: &mut World, ground_y: f32, config: &Config) {
    let rest_y = config.rest_y(ground_y);
    for (_entity, runner) in world.query_mut::<&mut Runner>() {
        runner.vel_y += config.gravity;
        runner.y += runner.vel_y;

        if runner.y >= rest_y {
            runner.y = rest_y;
            runner.vel_y = 0.0;
            runner.grounded = true;
        }
    }
}

/// Scroll every obstacle left by the current speed
pub fn scroll_obstacles(world: &mut World, speed: &Speed) {
    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        obstacle.x -= speed.value();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_obstacle, create_runner, ObstacleKind};

    const GROUND_Y: f32 = 250.0;

    fn setup_world() -> (World, Config) {
        (World::new(), Config::new())
    }

    #[test]
    fn test_speed_constant_below_threshold() {
        let config = Config::new();
        let mut speed = Speed::new(config.base_speed);
        ramp_speed(&mut speed, &Score(9), &config);
        assert_eq!(speed.value(), config.base_speed);
    }

    #[test]
    fn test_speed_ramps_at_threshold() {
        let config = Config::new();
        let mut speed = Speed::new(config.base_speed);
        ramp_speed(&mut speed, &Score(10), &config);
        ramp_speed(&mut speed, &Score(10), &config);
        assert!(
            (speed.value() - (config.base_speed + 2.0 * config.speed_increment)).abs() < 1e-6,
            "Speed should grow by the increment each frame, got {}",
            speed.value()
        );
    }

    #[test]
    fn test_grounded_runner_stays_on_ground() {
        let (mut world, config) = setup_world();
        let entity = create_runner(&mut world, &config, GROUND_Y);

        move_runner(&mut world, GROUND_Y, &config);

        let runner = *world.get::<&Runner>(entity).unwrap();
        assert_eq!(runner.y, config.rest_y(GROUND_Y));
        assert_eq!(runner.vel_y, 0.0, "Gravity is cancelled by the ground");
        assert!(runner.grounded);
    }

    #[test]
    fn test_airborne_runner_rises_then_lands() {
        let (mut world, config) = setup_world();
        let entity = create_runner(&mut world, &config, GROUND_Y);
        {
            let mut runner = world.get::<&mut Runner>(entity).unwrap();
            runner.vel_y = -config.jump_impulse;
            runner.grounded = false;
        }

        move_runner(&mut world, GROUND_Y, &config);
        let after_one = *world.get::<&Runner>(entity).unwrap();
        assert!(after_one.y < config.rest_y(GROUND_Y), "Runner should rise");
        assert_eq!(after_one.vel_y, -config.jump_impulse + config.gravity);
        assert!(!after_one.grounded);

        let mut frames = 1;
        while !world.get::<&Runner>(entity).unwrap().grounded {
            move_runner(&mut world, GROUND_Y, &config);
            frames += 1;
            assert!(frames < 200, "Runner never landed");
        }

        let landed = *world.get::<&Runner>(entity).unwrap();
        assert_eq!(landed.y, config.rest_y(GROUND_Y));
        assert_eq!(landed.vel_y, 0.0);
    }

    #[test]
    fn test_obstacles_scroll_by_speed() {
        let (mut world, config) = setup_world();
        create_obstacle(&mut world, &config, ObstacleKind::Wall, 500.0, 0);
        create_obstacle(&mut world, &config, ObstacleKind::Spike, 820.0, 1);

        scroll_obstacles(&mut world, &Speed(5.0));

        let mut xs: Vec<f32> = world
            .query::<&Obstacle>()
            .iter()
            .map(|(_e, o)| o.x)
            .collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(xs, vec![495.0, 815.0]);
    }
}
