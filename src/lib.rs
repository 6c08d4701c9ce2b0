// #![deny(warnings)]
#![warn(missing_docs)]
//! Connect 4 game crate
//!
//! [`GameState`] holds the rules: drop pieces, alternate turns, detect four in a row or a
//! full board. It does no I/O; adapters such as [`terminal::Terminal`] feed it columns and
//! render the [`Event`]s it emits.
pub mod game;
pub mod terminal;
pub use game::{
    Board, Error, Event, GameEvents, GameResult, GameState, Move, Outcome, Player, Snapshot,
    Standard, Status, HEIGHT, WIDTH,
};
