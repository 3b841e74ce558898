//! Textbook dynamic programming: 0/1 knapsack, longest common subsequence,
//! coin change, minimum jumps and rod cutting.

pub mod cs;
pub mod error;

pub use cs::dynamic;
pub use error::{Error, Result};
