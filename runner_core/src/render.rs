//! Frame drawing against a host surface
//!
//! The core never touches a canvas directly. Hosts implement [`Surface`] on
//! top of whatever 2D API they have; tests implement it with a recorder.

use glam::Vec2;
use hecs::World;

use crate::{obstacles_in_spawn_order, Config, GameStatus, ObstacleKind, Runner, Viewport};

pub const GROUND_COLOR: &str = "#3b3b3b";
pub const RUNNER_COLOR: &str = "#f5d142";
pub const WALL_COLOR: &str = "#8b5a2b";
pub const SPIKE_COLOR: &str = "#d64545";
pub const OVERLAY_COLOR: &str = "#ffffff";
pub const OVERLAY_FONT: &str = "bold 48px sans-serif";
pub const OVERLAY_TEXT: &str = "GAME OVER";

/// Host 2D drawing surface
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: &str);
    /// Draw `text` centred on `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}

/// Host text element showing the score
pub trait ScoreBoard {
    fn show_score(&mut self, score: u32);
}

/// Redraw the whole scene, back to front
pub fn draw_frame(
    world: &World,
    viewport: &Viewport,
    config: &Config,
    status: GameStatus,
    surface: &mut dyn Surface,
) {
    let ground_y = viewport.ground_y(config.ground_height);

    surface.clear(viewport.width, viewport.height);
    surface.fill_rect(
        0.0,
        ground_y,
        viewport.width,
        config.ground_height,
        GROUND_COLOR,
    );

    if let Some((_e, runner)) = world.query::<&Runner>().iter().next() {
        surface.fill_circle(Vec2::new(runner.x, runner.y), runner.radius, RUNNER_COLOR);
    }

    // Obstacles after the runner so they cover it on overlap
    for obstacle in obstacles_in_spawn_order(world) {
        match obstacle.kind {
            ObstacleKind::Wall => surface.fill_rect(
                obstacle.x,
                obstacle.top(ground_y),
                obstacle.width,
                obstacle.height,
                WALL_COLOR,
            ),
            ObstacleKind::Spike => surface.fill_triangle(
                Vec2::new(obstacle.x, ground_y),
                Vec2::new(obstacle.x + obstacle.width / 2.0, obstacle.top(ground_y)),
                Vec2::new(obstacle.trailing_edge(), ground_y),
                SPIKE_COLOR,
            ),
        }
    }

    if status.is_over() {
        surface.fill_text(
            OVERLAY_TEXT,
            Vec2::new(viewport.width / 2.0, viewport.height / 2.0),
            OVERLAY_FONT,
            OVERLAY_COLOR,
        );
    }
}
