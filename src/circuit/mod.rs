pub mod celebration;
pub mod parts;
pub mod puzzle;

pub use celebration::Celebration;
pub use parts::{COMPONENTS, SLOTS};
pub use puzzle::{CircuitPuzzle, CIRCUIT_REWARD, HINT};
