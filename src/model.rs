pub mod game;
pub mod level;
pub mod metric;
pub mod payload;
pub mod roster;
pub mod stats;

pub use game::*;
pub use level::*;
pub use metric::*;
pub use payload::*;
pub use roster::*;
pub use stats::*;
