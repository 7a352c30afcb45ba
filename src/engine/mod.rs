//! Engine lifecycle: owns the board and the single background search
//! worker.

mod controller;

pub use controller::EngineController;
