//! World implementations for the harness runner.

pub mod eight_puzzle;
pub mod tictactoe;
