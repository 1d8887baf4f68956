//! Game data and the pure placement rules.
//!
//! - [`BlockKind`] / [`Orientation`] - The 21-shape catalog and its transforms
//! - [`Board`] - Cell-ownership grid plus per-player bookkeeping
//! - [`Placement`] - A block, pose, anchor and player
//! - [`can_place`] - The legality check shared by every caller

pub use self::{block::*, board::*, config::*, placement::*, player::*, position::*, validator::*};

pub(crate) mod block;
pub(crate) mod board;
pub mod config;
pub(crate) mod placement;
pub(crate) mod player;
pub(crate) mod position;
pub mod validator;
