/// Runner component - the player-controlled dot
///
/// `x` never changes after spawn; the world scrolls past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Runner {
    pub x: f32,
    pub y: f32, // Centre of the circle, canvas coordinates (y grows downwards)
    pub radius: f32,
    pub vel_y: f32,
    pub grounded: bool,
}

impl Runner {
    /// Create a runner resting at `rest_y`
    pub fn new(x: f32, rest_y: f32, radius: f32) -> Self {
        Self {
            x,
            y: rest_y,
            radius,
            vel_y: 0.0,
            grounded: true,
        }
    }

    /// Lowest point of the circle
    pub fn bottom(&self) -> f32 {
        self.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.x + self.radius
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Wall,
    Spike,
}

/// Obstacle component - a hazard anchored on the ground line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f32, // Leading (left) edge
    pub width: f32,
    pub height: f32,
    pub scored: bool,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, width: f32, height: f32) -> Self {
        Self {
            kind,
            x,
            width,
            height,
            scored: false,
        }
    }

    /// Rightmost horizontal extent
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Y of the obstacle's top
    pub fn top(&self, ground_y: f32) -> f32 {
        ground_y - self.height
    }
}

/// Spawn sequence number; lower means older
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpawnOrder(pub u64);
