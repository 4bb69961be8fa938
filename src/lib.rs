//! Power indices for vector weighted voting games
//!
//! This library computes the Shapley–Shubik and normalized Banzhaf power indices for games
//! where a coalition wins only if it meets the quota on every one of several weighted issues.

pub mod coalition;
pub mod error;
pub mod evaluation;
pub mod form;
pub mod power_index;
pub mod types;
mod utils;
pub mod validation;

// Re-export main types and functions
pub use coalition::{Coalition, Coalitions, coalitions};
pub use error::{PowerIndexError, Result};
pub use evaluation::is_winning;
pub use form::{GameForm, coerce_field};
pub use power_index::{banzhaf, compute_indices, shapley_shubik, swing_counts};
pub use types::{GameDescription, Method, PlayerIndex, ResultVector};
pub use validation::MAX_PLAYERS;
