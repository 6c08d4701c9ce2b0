//! Game rules: board, turns and outcome.
pub(crate) mod board;
pub(crate) mod components;
pub(crate) mod error;
mod game;
pub mod win;

pub use board::Board;
pub use components::{Event, GameEvents, Move, Outcome, Player, Status};
pub use error::{Error, GameResult};
pub use game::{GameState, Snapshot, Standard, HEIGHT, WIDTH};
