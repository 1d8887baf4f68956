//! Game flow on top of the core rules.
//!
//! - [`GameField`] - A board paired with its playability cache; the mutation surface
//! - [`GameSession`] - Turn order and waiting/playing/finished state over a field
//! - [`legal_placements`] - Brute-force search for a player's legal moves
//! - [`player_score`] / [`calculate_scores`] - End-of-game scoring
//!
//! # Game Flow
//!
//! 1. Start a [`GameSession`]; Blue moves first
//! 2. The current player places a block with [`GameSession::try_place`], or
//!    passes with [`GameSession::skip_turn`] when they cannot move
//! 3. [`GameSession::next_turn`] hands over to the next player
//! 4. Once no player can place anything, the session is finished and
//!    [`GameSession::final_scores`] gives the result
//!
//! # Example
//!
//! ```
//! use blokus_engine::{BlockKind, GameSession, Placement, Player, Position, Rotation};
//!
//! let mut session = GameSession::new();
//! session.start();
//!
//! for (player, anchor) in [
//!     (Player::Blue, Position::new(0, 0)),
//!     (Player::Yellow, Position::new(0, 19)),
//! ] {
//!     let placement = Placement::new(player, BlockKind::Domino, anchor)
//!         .with_rotation(Rotation::DEG_90);
//!     session.try_place(&placement).unwrap();
//!     session.next_turn();
//! }
//!
//! assert_eq!(session.current_player(), Player::Red);
//! assert_eq!(session.final_scores()[&Player::Blue], 2);
//! ```

pub use self::{game_field::*, game_session::*, playability::*, scoring::*};

mod game_field;
mod game_session;
mod playability;
mod scoring;
