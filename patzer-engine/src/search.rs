//! Minimax with alpha-beta pruning over the rules capability interface.

use std::cmp;

use crate::evaluate::evaluate;
use crate::rules::Rules;
use crate::score::{PlyKind, Score};

/// Scores a position by searching `depth` plies ahead under best play.
///
/// `maximizing` names the side to move at this node: the maximizing side
/// raises the score, the minimizing side lowers it, and the flag flips at
/// every ply. `alpha` and `beta` carry the best scores each side has already
/// guaranteed along the current path; pass [`Score::MIN`] and [`Score::MAX`]
/// at a root call.
///
/// Properties of the pruning window:
/// * A maximizing node only raises alpha from its children.
/// * A minimizing node only lowers beta from its children.
/// * When alpha meets or crosses beta, the remaining siblings cannot change
///   the result and are cut off; the accumulated best is returned as is.
///
/// Search stops at `depth == 0` or on a finished game, and both stops score
/// the position with the same static [`evaluate`]. A game that has actually
/// ended is worth exactly the material on its board, with no win, loss, or
/// draw adjustment.
///
/// Every candidate move is applied to the shared position, searched, and
/// undone before the next candidate. When the call returns, the position is
/// in the state it was given in.
pub fn search<R: Rules>(
    rules: &mut R,
    depth: PlyKind,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
) -> Score {
    if depth == 0 || rules.is_game_over() {
        return evaluate(rules);
    }

    if maximizing {
        let mut best = Score::MIN;

        for mv in rules.legal_moves() {
            rules.apply_move(mv);
            let score = search(rules, depth - 1, alpha, beta, false);
            rules.undo_move();

            best = cmp::max(best, score);
            alpha = cmp::max(alpha, score);
            if alpha >= beta {
                // Beta cutoff
                return best;
            }
        }
        best
    } else {
        let mut best = Score::MAX;

        for mv in rules.legal_moves() {
            rules.apply_move(mv);
            let score = search(rules, depth - 1, alpha, beta, true);
            rules.undo_move();

            best = cmp::min(best, score);
            beta = cmp::min(beta, score);
            if alpha >= beta {
                // Alpha cutoff
                return best;
            }
        }
        best
    }
}

/// Full-width minimax sharing [`search`]'s terminal rule, kept as the
/// reference the pruned search is checked against.
#[cfg(test)]
fn minimax<R: Rules>(rules: &mut R, depth: PlyKind, maximizing: bool) -> Score {
    if depth == 0 || rules.is_game_over() {
        return evaluate(rules);
    }

    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for mv in rules.legal_moves() {
        rules.apply_move(mv);
        let score = minimax(rules, depth - 1, !maximizing);
        rules.undo_move();

        best = if maximizing {
            cmp::max(best, score)
        } else {
            cmp::min(best, score)
        };
    }
    best
}
