//! Difficulty-tiered move selection for two-player perfect-information
//! games, with a chess backend.
//!
//! The core is three small pieces behind the [`Rules`] capability trait:
//! material [`evaluate`], depth-bounded alpha-beta [`search`], and
//! [`select_move`], which plays a tier of either uniform random moves or
//! fixed-depth search. [`Position`] plugs chess into the trait.

pub mod error;
pub mod evaluate;
pub mod position;
pub mod rules;
pub mod score;
pub mod search;
pub mod select;

pub use evaluate::evaluate;
pub use position::{MoveList, Position, MAX_MOVES};
pub use rules::{Rules, Side};
pub use score::{PlyKind, Score, ScoreKind};
pub use search::search;
pub use select::{select_move, Difficulty};

// Re-exported so front ends can speak the backend's move and color types
// without depending on the chess crate themselves.
pub use chess::{ChessMove, Color};
