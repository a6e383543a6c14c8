//! Console front end: play chess against the engine.
//!
//! The human plays White and moves first. The engine plays Black at a
//! difficulty chosen once per session, and the position is scored from the
//! engine's side so the selector maximizes its own material.

use std::io::{self, Write};

use patzer_engine::{evaluate, select_move, ChessMove, Color, Difficulty, Position, Rules};
use rand::thread_rng;

enum InputKind {
    Exit,
    Newgame,
    Help,
    Error,
    Undo,
    GameMove(ChessMove),
}

impl From<&str> for InputKind {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if let Ok(mv) = Position::parse_coordinate_move(s) {
            return Self::GameMove(mv);
        }
        match s {
            "exit" | "quit" => Self::Exit,
            "newgame" | "ng" => Self::Newgame,
            "help" => Self::Help,
            "undo" => Self::Undo,
            _ => Self::Error,
        }
    }
}

/// Fresh game scored from the engine's side of the board.
fn new_game() -> Position {
    Position::start_position().with_perspective(Color::Black)
}

fn prompt_difficulty(input: &mut String) -> io::Result<Difficulty> {
    loop {
        print!("Choose difficulty level (1-3): ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no difficulty chosen",
            ));
        }
        match input.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(difficulty),
            Err(err) => println!("{err}"),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("newgame | ng => Begin a new game at the same difficulty.");
    println!("undo => Return to the position before your last move.");
    println!("help => Print this help text.");
    println!("exit | quit => Leave the CLI.");
    println!("\nTo make a move, enter it in algebraic coordinate form.");
    println!("Examples: d2d4 -> Move piece on D2 to D4. e7e8q -> Promote to a queen.");
}

fn main() -> io::Result<()> {
    env_logger::init();
    println!("Patzer CLI {}\n", env!("CARGO_PKG_VERSION"));

    let mut input = String::new();
    let difficulty = prompt_difficulty(&mut input)?;
    log::info!("session difficulty: {difficulty}");
    println!("Playing at difficulty {} ({difficulty}).", difficulty.tier());
    println!("You play White. Enter moves like e2e4, or help for commands.");

    let mut rng = thread_rng();
    let mut position = new_game();

    loop {
        // Wait for user input.
        println!("\nEngine score: {}", evaluate(&position));
        println!("{position}");
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let input_kind = InputKind::from(input.as_str());

        match input_kind {
            InputKind::Exit => break,
            InputKind::Newgame => {
                position = new_game();
                println!("Starting new game...");
                continue;
            }
            InputKind::Help => {
                print_help();
                continue;
            }
            InputKind::Undo => {
                if position.ply() == 0 {
                    println!("Nothing to undo.");
                    continue;
                }
                // Take back the engine's reply too, so it is White's turn.
                position.undo_move();
                if position.ply() > 0 && position.player() != Color::White {
                    position.undo_move();
                }
                println!("Returned to your last turn.");
                continue;
            }
            InputKind::Error => {
                println!("Invalid command: {}", input.trim());
                continue;
            }
            _ => (),
        }

        // Process a player move, then process an engine move.
        if let InputKind::GameMove(mv) = input_kind {
            if let Err(err) = position.do_legal_move(mv) {
                println!("{err}. No action taken.");
                continue;
            }

            // Check if the engine was mated or stalemated by the move.
            if position.is_checkmate() {
                println!("{position}");
                println!("Checkmate! You win. Result: 1-0");
                println!("Press Enter to start a new game.");
                io::stdin().read_line(&mut input)?;
                position = new_game();
                continue;
            }
            if position.is_stalemate() {
                println!("{position}");
                println!("Stalemate. Result: 1/2-1/2");
                println!("Press Enter to start a new game.");
                io::stdin().read_line(&mut input)?;
                position = new_game();
                continue;
            }

            // Have the engine play its response.
            println!("{position}\nthinking...");
            let reply = match select_move(&mut position, difficulty, &mut rng) {
                Some(reply) => reply,
                None => {
                    println!("The engine has no reply.");
                    continue;
                }
            };
            position.apply_move(reply);
            println!("Patzer played move {reply}.");

            if position.is_checkmate() {
                println!("{position}");
                println!("Checkmate! Patzer wins. Result: 0-1");
                println!("Press Enter to start a new game.");
                io::stdin().read_line(&mut input)?;
                position = new_game();
                continue;
            }
            if position.is_stalemate() {
                println!("{position}");
                println!("Stalemate. Result: 1/2-1/2");
                println!("Press Enter to start a new game.");
                io::stdin().read_line(&mut input)?;
                position = new_game();
            }
        }
    }
    Ok(())
}
