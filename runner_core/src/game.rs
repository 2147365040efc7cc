//! Lifecycle controller
//!
//! Owns the whole session and is the single writer of its state. Hosts call
//! [`Game::handle`] from input callbacks and [`Game::frame`] from their
//! animation callback, never concurrently.

use hecs::World;

use crate::systems::apply_jump;
use crate::{
    create_runner, draw_frame, obstacles_in_spawn_order, step, Command, Config, Events,
    GameRng, GameStatus, Music, MusicPlayer, Obstacle, Runner, Score, ScoreBoard,
    SpawnCounter, Speed, Surface, Viewport,
};

/// Whether the host should request another animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

pub struct Game {
    pub world: World,
    pub viewport: Viewport,
    pub config: Config,
    pub score: Score,
    pub speed: Speed,
    pub status: GameStatus,
    pub events: Events,
    pub rng: GameRng,
    pub counter: SpawnCounter,
    pub music: Music,
}

impl Game {
    pub fn new(config: Config, viewport: Viewport, seed: u64) -> Self {
        let mut world = World::new();
        create_runner(
            &mut world,
            &config,
            viewport.ground_y(config.ground_height),
        );

        Self {
            world,
            viewport,
            speed: Speed::new(config.base_speed),
            config,
            score: Score::new(),
            status: GameStatus::Running,
            events: Events::new(),
            rng: GameRng::new(seed),
            counter: SpawnCounter::default(),
            music: Music::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn runner(&self) -> Option<Runner> {
        self.world
            .query::<&Runner>()
            .iter()
            .next()
            .map(|(_e, runner)| *runner)
    }

    /// Obstacles oldest first
    pub fn obstacles(&self) -> Vec<Obstacle> {
        obstacles_in_spawn_order(&self.world)
    }

    /// Apply one host command
    pub fn handle(&mut self, command: Command, player: &mut dyn MusicPlayer) {
        match command {
            Command::JumpRequested => {
                if apply_jump(&mut self.world, self.status, &self.config) {
                    // Runs inside the user gesture, so the host allows playback
                    self.music.ensure_playing(player);
                }
            }
            Command::AudioUnlockRequested => {
                self.music.ensure_playing(player);
            }
            Command::MusicStarted => self.music.on_started(player),
            Command::MusicBlocked => self.music.on_blocked(),
        }
    }

    /// Run one frame: simulate, then draw. A session that is already over
    /// is left untouched.
    pub fn frame(
        &mut self,
        surface: &mut dyn Surface,
        player: &mut dyn MusicPlayer,
        scoreboard: &mut dyn ScoreBoard,
    ) -> LoopControl {
        if self.is_over() {
            return LoopControl::Stop;
        }

        self.events.clear();

        let hit = step(
            &mut self.world,
            &self.viewport,
            &self.config,
            &mut self.score,
            &mut self.speed,
            &mut self.events,
            &mut self.rng,
            &mut self.counter,
        );

        if self.events.scored {
            scoreboard.show_score(self.score.value());
        }

        if hit {
            self.end(player);
        }

        draw_frame(
            &self.world,
            &self.viewport,
            &self.config,
            self.status,
            surface,
        );

        if self.is_over() {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    fn end(&mut self, player: &mut dyn MusicPlayer) {
        self.status = GameStatus::Over;
        self.music.stop(player);
        log::info!(
            "game over: score={} speed={:.3}",
            self.score.value(),
            self.speed.value()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_obstacle, MusicState, ObstacleKind};
    use glam::Vec2;

    struct NullSurface;

    impl Surface for NullSurface {
        fn clear(&mut self, _width: f32, _height: f32) {}
        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: &str) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: &str) {}
        fn fill_triangle(&mut self, _a: Vec2, _b: Vec2, _c: Vec2, _color: &str) {}
        fn fill_text(&mut self, _text: &str, _pos: Vec2, _font: &str, _color: &str) {}
    }

    #[derive(Default)]
    struct MockPlayer {
        plays: usize,
        pauses: usize,
    }

    impl MusicPlayer for MockPlayer {
        fn play_from_start(&mut self) {
            self.plays += 1;
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }
    }

    #[derive(Default)]
    struct MockScoreBoard {
        shown: Vec<u32>,
    }

    impl ScoreBoard for MockScoreBoard {
        fn show_score(&mut self, score: u32) {
            self.shown.push(score);
        }
    }

    fn setup_game() -> Game {
        Game::new(Config::new(), Viewport::new(800.0, 300.0), 12345)
    }

    #[test]
    fn test_initial_state() {
        let game = setup_game();
        let runner = game.runner().unwrap();

        assert_eq!(game.score.value(), 0);
        assert_eq!(game.speed.value(), Config::new().base_speed);
        assert!(game.obstacles().is_empty());
        assert!(runner.grounded);
        assert_eq!(runner.y, 235.0);
        assert_eq!(game.status, GameStatus::Running);
    }

    #[test]
    fn test_jump_starts_music_once() {
        let mut game = setup_game();
        let mut player = MockPlayer::default();

        game.handle(Command::JumpRequested, &mut player);
        game.handle(Command::JumpRequested, &mut player); // Airborne now

        assert_eq!(player.plays, 1);
        assert_eq!(game.music.state(), MusicState::Starting);
        assert!(!game.runner().unwrap().grounded);
    }

    #[test]
    fn test_unlock_then_jump_shares_music_request() {
        let mut game = setup_game();
        let mut player = MockPlayer::default();

        game.handle(Command::AudioUnlockRequested, &mut player);
        game.handle(Command::MusicStarted, &mut player);
        game.handle(Command::JumpRequested, &mut player);

        assert_eq!(player.plays, 1, "Music already unlocked");
        assert!(game.music.is_unlocked());
    }

    #[test]
    fn test_blocked_unlock_retried_by_jump() {
        let mut game = setup_game();
        let mut player = MockPlayer::default();

        game.handle(Command::AudioUnlockRequested, &mut player);
        game.handle(Command::MusicBlocked, &mut player);
        game.handle(Command::JumpRequested, &mut player);

        assert_eq!(player.plays, 2);
    }

    #[test]
    fn test_collision_ends_game() {
        let mut game = setup_game();
        let mut player = MockPlayer::default();
        let mut scoreboard = MockScoreBoard::default();
        create_obstacle(
            &mut game.world,
            &game.config,
            ObstacleKind::Wall,
            90.0,
            game.counter.next(),
        );

        let control = game.frame(&mut NullSurface, &mut player, &mut scoreboard);

        assert_eq!(control, LoopControl::Stop);
        assert!(game.is_over());
        assert!(game.events.game_over);
        assert_eq!(player.pauses, 1, "Music paused on game over");
        assert_eq!(game.music.state(), MusicState::Paused);
    }

    #[test]
    fn test_frame_after_game_over_changes_nothing() {
        let mut game = setup_game();
        let mut player = MockPlayer::default();
        let mut scoreboard = MockScoreBoard::default();
        game.status = GameStatus::Over;
        create_obstacle(
            &mut game.world,
            &game.config,
            ObstacleKind::Wall,
            400.0,
            game.counter.next(),
        );

        let control = game.frame(&mut NullSurface, &mut player, &mut scoreboard);

        assert_eq!(control, LoopControl::Stop);
        assert_eq!(game.obstacles()[0].x, 400.0, "No scrolling once over");
        assert_eq!(game.obstacles().len(), 1, "No spawning once over");
        assert_eq!(game.speed.value(), game.config.base_speed);
    }

    #[test]
    fn test_scoreboard_updated_on_score() {
        let mut game = setup_game();
        let mut player = MockPlayer::default();
        let mut scoreboard = MockScoreBoard::default();
        // Just behind the runner after one frame of scrolling
        create_obstacle(
            &mut game.world,
            &game.config,
            ObstacleKind::Wall,
            48.0,
            game.counter.next(),
        );
        for (_e, runner) in game.world.query_mut::<&mut Runner>() {
            runner.y = 100.0;
            runner.grounded = false;
        }

        game.frame(&mut NullSurface, &mut player, &mut scoreboard);

        assert_eq!(game.score.value(), 1);
        assert_eq!(scoreboard.shown, vec![1]);
    }
}
