mod board;
mod color;
mod r#move;
mod outcome;
mod piece;
mod role;
mod setup;
mod square;

pub mod rules;

pub use board::*;
pub use color::*;
pub use outcome::*;
pub use piece::*;
pub use r#move::*;
pub use role::*;
pub use setup::*;
pub use square::*;
