pub mod board;
pub mod engine;
pub mod sync;
pub mod uci;

pub use board::{Board, Color, Move, Piece, Square};
pub use engine::EngineController;
pub use sync::StopFlag;
