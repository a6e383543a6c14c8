//! Capability interface between the search core and a rules engine.
//!
//! The core never inspects a board directly. Everything it needs from a game
//! passes through [`Rules`]: candidate moves, game-over status, playing and
//! taking back moves on a shared position, and piece visitation for
//! evaluation. Any two-player perfect-information game can sit behind the
//! trait; the chess backend lives in [`crate::position`].

use std::fmt::Debug;
use std::ops::Not;

use crate::score::Score;

/// The two players, named by their scoring convention.
///
/// Pieces of [`Side::Max`] count positively in evaluation and the search
/// raises that side's score; pieces of [`Side::Min`] count negatively.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Max,
    Min,
}

impl Not for Side {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

/// Operations the search core requires from a rules engine.
///
/// The position lives inside the implementor and is advanced and reverted in
/// place. Implementations must guarantee that [`Rules::undo_move`] restores
/// the exact state from before the matching [`Rules::apply_move`]; the search
/// explores sibling moves on one shared position and never copies it.
pub trait Rules {
    /// Move identifier. Meaning and equality belong to the rules engine.
    type Move: Copy + Eq + Debug;

    /// Container of legal moves returned by [`Rules::legal_moves`].
    type MoveList: IntoIterator<Item = Self::Move> + AsRef<[Self::Move]>;

    /// Every legal move in the current position, in the engine's own order.
    fn legal_moves(&self) -> Self::MoveList;

    /// True if play cannot continue from the current position.
    fn is_game_over(&self) -> bool;

    /// Plays a move on the position in place.
    fn apply_move(&mut self, mv: Self::Move);

    /// Reverts the most recent [`Rules::apply_move`].
    fn undo_move(&mut self);

    /// Calls `visit` once per piece on the board, with the piece's side and
    /// its fixed positive weight.
    fn for_each_piece(&self, visit: impl FnMut(Side, Score));
}
