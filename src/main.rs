use std::io::{self, BufRead, Write};

use clap::Parser;

use bitboard_checkers::utils::algebraic::{parse_coordinate, square_name};
use bitboard_checkers::utils::render_game_state::render_board;
use bitboard_checkers::{
    CheckersError, CheckersGame, GameStatus, RulesConfig, Square, TurnOutcome,
};

/// Two-player draughts on one terminal.
#[derive(Parser)]
#[command(name = "bitboard_checkers", version, about = "Play English draughts in the terminal")]
struct Args {
    /// Keep jumping after a piece is crowned mid-chain
    #[arg(long)]
    continue_after_promotion: bool,

    /// Let White make the first move
    #[arg(long)]
    white_first: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

enum Input {
    Line(String),
    Quit,
    Eof,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let config = RulesConfig {
        stop_chain_on_promotion: !args.continue_after_promotion,
        black_moves_first: !args.white_first,
    };
    let mut game = CheckersGame::new(config);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("{}", render_board(game.board()));

        if let GameStatus::Win(winner) = game.status() {
            println!("{winner} wins!");
            break;
        }

        let player = game.to_move();
        println!("{player}'s turn.");

        let (start, end) = match read_move(&mut input) {
            Ok(Some(squares)) => squares,
            Ok(None) => {
                println!("{} wins by resignation.", player.opponent());
                break;
            }
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match game.submit_move(start, end) {
            Ok(TurnOutcome::TurnComplete { .. }) => {}
            Ok(TurnOutcome::ChainContinues { .. }) => {
                if !play_chain(&mut game, &mut input) {
                    println!("{} wins by resignation.", player.opponent());
                    break;
                }
            }
            Err(err) => println!("Invalid move ({err}). Try again."),
        }
    }
}

/// Drives a pending capture chain. Returns `false` if the player quit.
fn play_chain(game: &mut CheckersGame, input: &mut impl BufRead) -> bool {
    while let Some(from) = game.pending_chain() {
        println!("{}", render_board(game.board()));
        println!(
            "{} can make another jump from {}.",
            game.to_move(),
            square_name(from)
        );

        let line = match prompt(input, "Enter the next ending position: ") {
            Input::Line(line) => line,
            Input::Quit | Input::Eof => return false,
        };

        let end = match parse_coordinate(&line) {
            Ok(end) => end,
            Err(CheckersError::MalformedCoordinate(_)) => {
                println!("Invalid input format; the jump sequence ends here.");
                if let Err(err) = game.abandon_chain() {
                    println!("{err}");
                }
                return true;
            }
            Err(err) => {
                println!("Invalid board position ({err}). Please try again.");
                continue;
            }
        };

        if let Err(err) = game.continue_chain(end) {
            println!("Invalid jump ({err}). Try again.");
        }
    }
    true
}

/// Reads a start and end square, either on one line (`B6 C5`) or as two prompts.
/// `Ok(None)` means the player quit.
fn read_move(input: &mut impl BufRead) -> Result<Option<(Square, Square)>, String> {
    let first = match prompt(input, "Enter the starting position (e.g., B6): ") {
        Input::Line(line) => line,
        Input::Quit | Input::Eof => return Ok(None),
    };

    let mut tokens = first.split_whitespace();
    let start_text = tokens.next().unwrap_or_default().to_owned();
    let end_text = match tokens.next() {
        Some(token) => token.to_owned(),
        None => match prompt(input, "Enter the ending position (e.g., C5): ") {
            Input::Line(line) => line,
            Input::Quit | Input::Eof => return Ok(None),
        },
    };

    let start = parse_coordinate(&start_text).map_err(describe_input_error)?;
    let end = parse_coordinate(&end_text).map_err(describe_input_error)?;
    Ok(Some((start, end)))
}

fn describe_input_error(err: CheckersError) -> String {
    match err {
        CheckersError::MalformedCoordinate(_) => {
            "Invalid input format. Please try again.".to_owned()
        }
        other => format!("Invalid board position ({other}). Please try again."),
    }
}

fn prompt(input: &mut impl BufRead, text: &str) -> Input {
    print!("{text}");
    io::stdout().flush().ok();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => Input::Eof,
        Ok(_) => {
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("resign") {
                Input::Quit
            } else {
                Input::Line(trimmed.to_owned())
            }
        }
    }
}
