use std::env;
use std::io::Write;
use std::process::ExitCode;

use log::{info, warn};
use mailbox_chess::board::{
    best_move, Game, Position, SearchParams, SearchStrategy, START_FEN,
};

const USAGE: &str = "usage:
  mailbox_chess perft <depth> [fen]
  mailbox_chess divide <depth> [fen]
  mailbox_chess moves [fen]
  mailbox_chess best <depth> [minimax|alphabeta] [fen]
  mailbox_chess play <move1> <move2> ...";

fn init_logging() {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Joins the remaining arguments into a FEN, defaulting to the start position.
fn position_from(args: &[String]) -> Option<Position> {
    if args.is_empty() {
        return Some(Position::new());
    }
    let fen = args.join(" ");
    match Position::try_from_fen(&fen) {
        Ok(position) => Some(position),
        Err(e) => {
            warn!("invalid FEN '{fen}': {e}");
            None
        }
    }
}

fn parse_depth(arg: Option<&String>) -> Option<i32> {
    let text = arg?;
    match text.parse() {
        Ok(depth) => Some(depth),
        Err(_) => {
            warn!("invalid depth '{text}'");
            None
        }
    }
}

fn run(args: &[String]) -> Option<()> {
    let (command, rest) = args.split_first()?;
    match command.as_str() {
        "perft" | "divide" => {
            let depth = u32::try_from(parse_depth(rest.first())?).ok()?;
            let mut position = position_from(&rest[1..])?;
            if command == "perft" {
                println!("{}", position.perft(depth));
            } else {
                let divide = position.perft_divide(depth);
                for (mv, nodes) in &divide {
                    println!("{mv}: {nodes}");
                }
                println!();
                println!("total: {}", divide.iter().map(|(_, n)| n).sum::<u64>());
            }
        }
        "moves" => {
            let position = position_from(rest)?;
            let moves = position.legal_moves();
            println!("side_to_move: {}", position.side_to_move());
            println!("status: {:?}", moves.status());
            println!("legal_moves: {}", moves.len());
            for mv in moves.iter() {
                println!("{mv}");
            }
        }
        "best" => {
            let depth = parse_depth(rest.first())?;
            let named = match rest.get(1).map(String::as_str) {
                Some("minimax") => Some(SearchStrategy::Minimax),
                Some("alphabeta") => Some(SearchStrategy::AlphaBeta),
                _ => None,
            };
            let fen_start = if named.is_some() { 2 } else { 1 };
            let strategy = named.unwrap_or_default();
            let mut position = position_from(&rest[fen_start..])?;
            match best_move(&mut position, &SearchParams::new(strategy, depth)) {
                Ok(result) => {
                    info!("searched {} nodes", result.nodes);
                    match result.best_move {
                        Some(mv) => println!("bestmove {mv} score {}", result.score),
                        None => println!("bestmove (none) score {}", result.score),
                    }
                }
                Err(e) => {
                    warn!("{e}");
                    return None;
                }
            }
        }
        "play" => {
            let mut game = Game::new();
            for text in rest {
                match game.apply_uci(text) {
                    Ok(event) => println!("{text}: {event:?}"),
                    Err(e) => {
                        warn!("{text}: {e}");
                        return None;
                    }
                }
            }
            println!("fen: {}", game.current_fen());
            println!("status: {:?}", game.status());
        }
        other => {
            warn!("unknown command '{other}'");
            return None;
        }
    }
    Some(())
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{USAGE}");
        eprintln!("default fen: {START_FEN}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Some(()) => ExitCode::SUCCESS,
        None => {
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}
