//! Score and depth primitives shared by evaluation and search.

use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Inner type of a Score.
pub type ScoreKind = i32;

/// Inner type of a search depth in plies.
pub type PlyKind = u8;

/// A signed position score in units of piece weights.
///
/// Positive values favor the maximizing side, negative values the minimizing
/// side. [`Score::MIN`] and [`Score::MAX`] double as the unbounded alpha and
/// beta window edges at a search root.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Score(pub ScoreKind);

impl Score {
    pub const ZERO: Score = Self(0);
    pub const MIN: Score = Self(ScoreKind::MIN + 1); // + 1 to avoid overflow error on negate.
    pub const MAX: Score = Self(ScoreKind::MAX);

    /// Returns the sign of the score, either 1, -1, or 0.
    pub const fn signum(&self) -> ScoreKind {
        self.0.signum()
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}
impl Sub for Score {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl SubAssign for Score {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}
impl Neg for Score {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}
