//! Make Undo
//!
//! The search explores every line on one shared position, so apply-then-undo
//! must restore it exactly, step after step.

use patzer_engine::{search, Position, Rules, Score};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn opening_line_round_trips() {
    let mut pos = Position::start_position();
    let mut snapshots = vec![pos.clone()];

    for text in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4"] {
        let mv = Position::parse_coordinate_move(text).unwrap();
        pos.do_legal_move(mv).unwrap();
        snapshots.push(pos.clone());
    }

    while pos.ply() > 0 {
        assert_eq!(&pos, snapshots.last().unwrap());
        pos.undo_move();
        snapshots.pop();
    }
    assert_eq!(pos, Position::start_position());
}

#[test]
fn random_walks_round_trip() {
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pos = Position::start_position();
        let mut snapshots = Vec::new();

        for _ in 0..40 {
            if pos.is_game_over() {
                break;
            }
            let moves = pos.legal_moves();
            let mv = *moves.as_ref().choose(&mut rng).unwrap();
            snapshots.push(pos.clone());
            pos.apply_move(mv);
        }

        while let Some(snapshot) = snapshots.pop() {
            pos.undo_move();
            assert_eq!(pos, snapshot, "seed {seed}, ply {}", pos.ply());
        }
        assert_eq!(pos, Position::start_position());
    }
}

#[test]
fn search_does_not_disturb_the_position() {
    let fen = "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
    let mut pos = Position::parse_fen(fen).unwrap();
    let before = pos.clone();

    search(&mut pos, 3, Score::MIN, Score::MAX, true);
    assert_eq!(pos, before);

    search(&mut pos, 2, Score::MIN, Score::MAX, false);
    assert_eq!(pos, before);
}
