/// Game tuning parameters for the runner
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Ground
    pub const GROUND_HEIGHT: f32 = 50.0; // Thickness of the ground band, in pixels

    // Runner
    pub const RUNNER_X: f32 = 80.0;
    pub const RUNNER_RADIUS: f32 = 15.0;
    pub const GRAVITY: f32 = 0.8; // px per frame^2
    pub const JUMP_IMPULSE: f32 = 15.0; // Applied upwards

    // Scroll
    pub const BASE_SPEED: f32 = 5.0; // px per frame
    pub const SPEED_INCREMENT: f32 = 0.002; // Added every frame past the threshold
    pub const SPEED_UP_SCORE: u32 = 10;

    // Obstacles
    pub const SPAWN_GAP: f32 = 320.0;
    pub const WALL_WIDTH: f32 = 30.0;
    pub const WALL_HEIGHT: f32 = 65.0;
    pub const SPIKE_WIDTH: f32 = 40.0;
    pub const SPIKE_HEIGHT: f32 = 30.0;
    pub const SPIKE_CHANCE: f64 = 0.5;
    pub const SPIKE_UNLOCK_SCORE: u32 = 10;
}
