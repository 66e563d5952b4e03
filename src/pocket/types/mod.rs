//! Foundational data structures, error types, and the generator turns.

pub mod error;
pub mod models;
pub mod turn;
