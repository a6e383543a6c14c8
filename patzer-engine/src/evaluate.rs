//! Static position evaluation.

use crate::rules::{Rules, Side};
use crate::score::Score;

/// Scores a position by material alone.
///
/// Sums the fixed piece weights over the whole board: weights of
/// [`Side::Max`] pieces are added, weights of [`Side::Min`] pieces are
/// subtracted. There is no positional or mobility term. An empty board is
/// level, [`Score::ZERO`].
///
/// Pure: no side effects, and the same position always produces the same
/// score.
pub fn evaluate<R: Rules>(rules: &R) -> Score {
    let mut score = Score::ZERO;
    rules.for_each_piece(|side, weight| match side {
        Side::Max => score += weight,
        Side::Min => score -= weight,
    });
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A bare piece list, enough of a game for the evaluator.
    struct PieceList(Vec<(Side, Score)>);

    impl PieceList {
        fn mirrored(&self) -> PieceList {
            PieceList(self.0.iter().map(|&(side, weight)| (!side, weight)).collect())
        }
    }

    impl Rules for PieceList {
        type Move = usize;
        type MoveList = Vec<usize>;

        fn legal_moves(&self) -> Vec<usize> {
            Vec::new()
        }
        fn is_game_over(&self) -> bool {
            false
        }
        fn apply_move(&mut self, _mv: usize) {
            unreachable!("evaluation never plays moves");
        }
        fn undo_move(&mut self) {
            unreachable!("evaluation never plays moves");
        }
        fn for_each_piece(&self, mut visit: impl FnMut(Side, Score)) {
            for &(side, weight) in &self.0 {
                visit(side, weight);
            }
        }
    }

    #[test]
    fn empty_board_is_level() {
        assert_eq!(evaluate(&PieceList(Vec::new())), Score::ZERO);
    }

    #[test]
    fn sums_weights_by_side() {
        let pieces = PieceList(vec![
            (Side::Max, Score(6)),
            (Side::Max, Score(4)),
            (Side::Min, Score(6)),
            (Side::Min, Score(5)),
        ]);
        assert_eq!(evaluate(&pieces), Score(-1));
    }

    #[test]
    fn mirroring_sides_negates_the_score() {
        let pieces = PieceList(vec![
            (Side::Max, Score(6)),
            (Side::Max, Score(1)),
            (Side::Max, Score(1)),
            (Side::Min, Score(6)),
        ]);
        let score = evaluate(&pieces);
        assert_eq!(evaluate(&pieces.mirrored()), -score);
        assert_eq!(score, Score(2));
    }

    #[test]
    fn balanced_material_is_level() {
        let pieces = PieceList(vec![(Side::Max, Score(3)), (Side::Min, Score(3))]);
        assert_eq!(evaluate(&pieces), Score::ZERO);
    }
}
