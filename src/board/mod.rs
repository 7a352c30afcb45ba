//! Chess board representation, move generation, and search.
//!
//! Bitboard-based: sliding attacks come from magic perfect-hash tables,
//! move generation is fully legal (check and pin masks applied during
//! generation), and the search is an iterative deepening alpha-beta.

mod error;
mod eval;
mod fen;
pub mod magics;
mod movegen;
pub mod search;
mod see;
mod state;
mod tables;
mod types;

pub use error::{FenError, MoveParseError, SquareParseError};
pub use fen::START_FEN;
pub use see::SEE_VALUES;
pub use state::Board;
pub use types::{Bitboard, Color, Move, MoveList, Piece, Square, MAX_PLY};
