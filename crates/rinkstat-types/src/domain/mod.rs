pub mod game;
pub mod stats;

pub use game::*;
pub use stats::*;
