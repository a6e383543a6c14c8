//! Chess backend for the rules capability interface.
//!
//! Board state and legal move generation come from the `chess` crate. Moves
//! are played copy-make: the board is cheap to copy, so applying a move
//! pushes the current board onto a history stack and replaces it, and undoing
//! pops the stack. Apply-then-undo therefore restores the exact prior board.

use std::fmt::{self, Display};
use std::str::FromStr;

use arrayvec::ArrayVec;
use chess::{
    Board, BoardStatus, ChessMove, Color, File, MoveGen, Piece, Rank, Square, ALL_SQUARES,
};

use crate::error::{self, Error, ErrorKind};
use crate::rules::{Rules, Side};
use crate::score::Score;

/// Maximum number of legal moves in any chess position.
pub const MAX_MOVES: usize = 218;

/// Legal moves of a position, in move generator order.
pub type MoveList = ArrayVec<ChessMove, MAX_MOVES>;

/// A chess position with the history of moves played on it.
///
/// The `perspective` side is fixed at construction and decides which color's
/// material counts positively in evaluation. Constructors default it to
/// White; a front end whose engine plays Black rescores with
/// [`Position::with_perspective`].
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    board: Board,
    history: Vec<Board>,
    perspective: Color,
}

impl Position {
    /// Standard chess starting position.
    pub fn start_position() -> Self {
        Self {
            board: Board::default(),
            history: Vec::new(),
            perspective: Color::White,
        }
    }

    /// Parses a position from a FEN string.
    pub fn parse_fen(s: &str) -> error::Result<Self> {
        let board = Board::from_str(s.trim())
            .map_err(|err| Error::new(ErrorKind::Fen, err.to_string()))?;
        Ok(Self {
            board,
            history: Vec::new(),
            perspective: Color::White,
        })
    }

    /// Rescores the position from the given side's point of view.
    pub fn with_perspective(mut self, side: Color) -> Self {
        self.perspective = side;
        self
    }

    /// Side to move.
    pub fn player(&self) -> Color {
        self.board.side_to_move()
    }

    /// Number of half-moves played on this position since construction.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }

    /// True if the move is legal in the current position.
    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    /// Plays a move after checking it is legal here.
    pub fn do_legal_move(&mut self, mv: ChessMove) -> error::Result<()> {
        if self.is_legal(mv) {
            self.apply_move(mv);
            Ok(())
        } else {
            Err((ErrorKind::IllegalMove, mv).into())
        }
    }

    /// Parses coordinate notation, `e2e4` or `e7e8q`, into a move.
    ///
    /// Legality is not checked; pair with [`Position::do_legal_move`].
    pub fn parse_coordinate_move(s: &str) -> error::Result<ChessMove> {
        let s = s.trim();

        let from_str: String = s.chars().take(2).collect();
        let from: Square = from_str
            .parse()
            .map_err(|err| (ErrorKind::ParseMoveMalformed, err))?;

        let to_str: String = s.chars().skip(2).take(2).collect();
        let to: Square = to_str
            .parse()
            .map_err(|err| (ErrorKind::ParseMoveMalformed, err))?;

        let promotion = match s.chars().nth(4) {
            Some('q') => Some(Piece::Queen),
            Some('r') => Some(Piece::Rook),
            Some('b') => Some(Piece::Bishop),
            Some('n') => Some(Piece::Knight),
            Some(other) => return Err((ErrorKind::ParseMoveMalformed, other).into()),
            None => None,
        };

        Ok(ChessMove::new(from, to, promotion))
    }
}

/// Fixed material weight of a piece kind.
const fn piece_weight(piece: Piece) -> Score {
    match piece {
        Piece::Pawn => Score(1),
        Piece::Knight => Score(2),
        Piece::Bishop => Score(3),
        Piece::Rook => Score(4),
        Piece::Queen => Score(5),
        Piece::King => Score(6),
    }
}

impl Rules for Position {
    type Move = ChessMove;
    type MoveList = MoveList;

    fn legal_moves(&self) -> MoveList {
        MoveGen::new_legal(&self.board).collect()
    }

    fn is_game_over(&self) -> bool {
        self.board.status() != BoardStatus::Ongoing
    }

    fn apply_move(&mut self, mv: ChessMove) {
        self.history.push(self.board);
        self.board = self.board.make_move_new(mv);
    }

    fn undo_move(&mut self) {
        self.board = self
            .history
            .pop()
            .expect("undo_move without matching apply_move");
    }

    fn for_each_piece(&self, mut visit: impl FnMut(Side, Score)) {
        for square in ALL_SQUARES {
            if let Some(piece) = self.board.piece_on(square) {
                let side = if self.board.color_on(square) == Some(self.perspective) {
                    Side::Max
                } else {
                    Side::Min
                };
                visit(side, piece_weight(piece));
            }
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank_index in (0..8).rev() {
            write!(f, "{}  ", rank_index + 1)?;
            for file_index in 0..8 {
                let square =
                    Square::make_square(Rank::from_index(rank_index), File::from_index(file_index));
                if file_index > 0 {
                    write!(f, " ")?;
                }
                match (self.board.piece_on(square), self.board.color_on(square)) {
                    (Some(piece), Some(color)) => write!(f, "{}", piece.to_string(color))?,
                    _ => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "\n   a b c d e f g h")
    }
}
