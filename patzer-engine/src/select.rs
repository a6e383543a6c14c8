//! Difficulty-tiered move selection.

use std::fmt::{self, Display};
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{self, ErrorKind};
use crate::rules::Rules;
use crate::score::{PlyKind, Score};
use crate::search::search;

/// Playing strength of the automated player, fixed for a whole game session.
///
/// The easy tier plays uniformly random legal moves. The searching tiers
/// score every candidate by searching the opponent's reply tree to a fixed
/// depth.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Difficulty {
    /// Tier 1, uniform random choice.
    Easy,
    /// Tier 2, reply search of depth 2.
    Medium,
    /// Tier 3, reply search of depth 3.
    Hard,
}

impl Difficulty {
    /// Reply-tree search depth of this tier, or None for random play.
    pub const fn search_depth(&self) -> Option<PlyKind> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(2),
            Difficulty::Hard => Some(3),
        }
    }

    /// Numeric tier, as prompted for at the console.
    pub const fn tier(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim() {
            "1" => Ok(Difficulty::Easy),
            "2" => Ok(Difficulty::Medium),
            "3" => Ok(Difficulty::Hard),
            other => Err((ErrorKind::ParseDifficultyMalformed, other).into()),
        }
    }
}

/// Picks one of the legal moves at the given difficulty.
///
/// Callable only on a live position with at least one legal move; a finished
/// or moveless position is a broken precondition, and `None` comes back only
/// in that case. The random source feeds [`Difficulty::Easy`] alone, so a
/// seeded generator makes the easy tier reproducible and leaves the searching
/// tiers untouched.
///
/// The searching tiers apply each candidate, search the reply tree with an
/// open alpha-beta window, and undo. Scores follow the backend's evaluation,
/// so the selector plays for whichever side the backend counts positively;
/// a front end aligns that side with the mover. The first candidate with the
/// strictly greatest score is kept; a later candidate that only equals the
/// best does not replace it.
pub fn select_move<R, G>(rules: &mut R, difficulty: Difficulty, rng: &mut G) -> Option<R::Move>
where
    R: Rules,
    G: Rng,
{
    debug_assert!(!rules.is_game_over(), "selecting a move in a finished game");
    let moves = rules.legal_moves();
    debug_assert!(!moves.as_ref().is_empty(), "selecting a move with none legal");

    let depth = match difficulty.search_depth() {
        None => return moves.as_ref().choose(rng).copied(),
        Some(depth) => depth,
    };

    let mut best_score = Score::MIN;
    let mut best_move = None;

    for mv in moves {
        rules.apply_move(mv);
        let score = search(rules, depth, Score::MIN, Score::MAX, false);
        rules.undo_move();

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    if let Some(mv) = best_move {
        log::debug!("{difficulty} picked {mv:?} scoring {best_score} at depth {depth}");
    }
    best_move
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::rules::testing::{node, over, ScriptedGame};

    #[test]
    fn tier_depths() {
        assert_eq!(Difficulty::Easy.search_depth(), None);
        assert_eq!(Difficulty::Medium.search_depth(), Some(2));
        assert_eq!(Difficulty::Hard.search_depth(), Some(3));
    }

    #[test]
    fn parses_numeric_tiers() {
        assert_eq!("1".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("2".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" 3\n".parse::<Difficulty>().unwrap(), Difficulty::Hard);

        for bad in ["0", "4", "easy", "", "22"] {
            assert!(bad.parse::<Difficulty>().is_err(), "accepted {bad:?}");
        }
    }

    /// Reply scores 5, 9, 9 in enumeration order: the first 9 must win.
    #[test]
    fn first_of_equal_best_scores_is_kept() {
        let mut game = ScriptedGame::new(vec![
            node(0, vec![1, 2, 3]),
            over(5),
            over(9),
            over(9),
        ]);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(select_move(&mut game, Difficulty::Medium, &mut rng), Some(2));
        assert_eq!(select_move(&mut game, Difficulty::Hard, &mut rng), Some(2));
        assert!(game.at_root());
    }

    #[test]
    fn searching_tier_avoids_the_worse_reply_tree() {
        // First branch lets the opponent drop the score to -8; second holds
        // it at +1.
        let mut game = ScriptedGame::new(vec![
            node(0, vec![1, 2]),
            node(0, vec![3, 4]),
            node(0, vec![5, 6]),
            over(10),
            over(-8),
            over(1),
            over(2),
        ]);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(select_move(&mut game, Difficulty::Medium, &mut rng), Some(2));
        assert!(game.at_root());
    }

    #[test]
    fn easy_tier_only_plays_scripted_moves() {
        let mut game = ScriptedGame::new(vec![
            node(0, vec![1, 2, 3]),
            over(0),
            over(0),
            over(0),
        ]);

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = select_move(&mut game, Difficulty::Easy, &mut rng);
            assert!(matches!(mv, Some(1..=3)), "picked {mv:?}");
        }
    }

    #[test]
    fn easy_tier_reaches_every_move() {
        let mut game = ScriptedGame::new(vec![node(0, vec![1, 2]), over(0), over(0)]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 2];

        for _ in 0..64 {
            match select_move(&mut game, Difficulty::Easy, &mut rng) {
                Some(1) => seen[0] = true,
                Some(2) => seen[1] = true,
                other => panic!("picked {other:?}"),
            }
        }
        assert!(seen[0] && seen[1]);
    }
}
