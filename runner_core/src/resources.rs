/// Size of the host drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y of the ground line (top of the ground band)
    pub fn ground_y(&self, ground_height: f32) -> f32 {
        self.height - ground_height
    }
}

/// Obstacles cleared so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(pub u32);

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Horizontal scroll rate, px per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed(pub f32);

impl Speed {
    pub fn new(base: f32) -> Self {
        Self(base)
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

/// Lifecycle of a session. `Over` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Running,
    Over,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Next spawn sequence number
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnCounter(pub u64);

impl SpawnCounter {
    pub fn next(&mut self) -> u64 {
        let seq = self.0;
        self.0 += 1;
        seq
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub scored: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.scored = false;
        self.game_over = false;
    }
}

/// Messages from the host into the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Jump key or on-screen button
    JumpRequested,
    /// First user gesture anywhere on the page
    AudioUnlockRequested,
    /// The host's play request resolved
    MusicStarted,
    /// The host rejected playback (autoplay policy)
    MusicBlocked,
}

/// Commands waiting to be applied, in arrival order
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pub commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}
