pub mod collision;
pub mod gc;
pub mod input;
pub mod movement;
pub mod scoring;
pub mod spawner;

pub use collision::*;
pub use gc::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
pub use spawner::*;
