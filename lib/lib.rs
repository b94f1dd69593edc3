/// Chess domain types and rules.
pub mod chess;
/// Turn management and move history.
pub mod game;
