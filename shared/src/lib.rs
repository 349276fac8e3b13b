//! Platform-independent core of the cube game.
//!
//! Everything here is plain data and logic with no app or renderer state:
//! the game crate feeds pointer events and camera rays in, and gets face
//! turns and sticker colors out.
//!
//! ## Flow
//!
//! pointer down  -> hit::ray_cube_hit -> gesture::GestureInterpreter::pointer_down
//! pointer up    -> gesture::GestureInterpreter::pointer_up -> puzzle::Puzzle::apply
//! puzzle state  -> cube::Cube::stickers -> sticker colors
//!
pub mod config;
pub mod constants;
pub mod cube;
pub mod face;
pub mod gesture;
pub mod hit;
pub mod puzzle;

pub use config::{ConfigError, GameConfig, GestureConfig};
pub use face::{resolve_face, Face, FaceRotationCommand, RotationDirection};
pub use gesture::{
    classify_row, resolve_direction, DragSample, GestureInterpreter, GestureOutcome, Row,
};
pub use puzzle::{MoveError, Puzzle, PuzzleStatus};
