//! Rules engine for a four-player Blokus-style territory game.
//!
//! The crate validates and applies block placements on a shared square grid,
//! tracks per-player progress, detects when nobody can move any more, and
//! computes scores. Every operation is deterministic so independent hosts
//! (a client-side predictor and an authoritative simulator) never diverge.
//!
//! - [`core`] - Block catalog, geometry, board state and the pure placement validator
//! - [`engine`] - Playability cache, scoring, and the per-session [`GameField`] / [`GameSession`]
//!
//! Invalid placements are reported as `false`, never as errors; the error types
//! below cover construction, parsing and turn scheduling only.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("board size must be between 5 and 32, got {size}")]
pub struct InvalidBoardSizeError {
    pub size: u8,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum InvalidBoardError {
    #[display("{_0}")]
    Size(InvalidBoardSizeError),
    #[display("expected {expected} cells, got {actual}")]
    CellCount { expected: usize, actual: usize },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParsePlacementError {
    #[display("missing '{_0}' in format 'player:kind#rotation@row,col'")]
    MissingSeparator(#[error(not(source))] char),
    #[display("invalid player: {_0}")]
    InvalidPlayer(#[error(not(source))] String),
    #[display("invalid block kind: {_0}")]
    InvalidKind(#[error(not(source))] String),
    #[display("invalid rotation: {_0}")]
    InvalidRotation(#[error(not(source))] String),
    #[display("invalid coordinate: {_0}")]
    InvalidCoordinate(#[error(not(source))] String),
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("turn order must list each player at most once and at least one player")]
pub struct InvalidTurnOrderError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SessionPlaceError {
    #[display("game is not in progress")]
    NotPlaying,
    #[display("it is {current}'s turn, not {requested}'s")]
    NotYourTurn { current: Player, requested: Player },
    #[display("placement rejected")]
    Rejected,
}
