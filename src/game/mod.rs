//! Turn-based play on top of the board and move generator.
//!
//! - `session`: `GameSession`, the round-robin game loop
//! - `record`: `MoveRecord` history entries and `GameResult`

pub mod record;
pub mod session;

pub use record::{GameResult, MoveRecord};
pub use session::GameSession;
