use std::io;
use std::time::Duration;

use board_game_traits::{Color, Position as PositionTrait};
use taklib::eval::FlatCountEval;
use taklib::minmax;
use taklib::position::Position;
use taklib::ptn;

const ENGINE_DEPTH: u16 = 3;
const ENGINE_BUDGET: Duration = Duration::from_secs(10);

fn main() {
    init_logger();

    println!("Play against the engine with \"play\", or watch an engine game with \"selfplay\".");
    loop {
        let mut input = String::new();
        if io::stdin().read_line(&mut input).unwrap() == 0 {
            return;
        }
        match input.trim() {
            "play" => play_human_game(),
            "selfplay" => play_engine_game(),
            "quit" | "exit" => return,
            other => println!("Unknown command \"{}\".", other),
        }
    }
}

fn init_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(io::stderr())
        .apply()
        .unwrap();
}

/// Play a game against the engine on a 5x5 board, as White.
fn play_human_game() {
    let eval = FlatCountEval::default();
    let mut position = <Position<5>>::start_position();

    while position.game_result().is_none() {
        println!("{}", position);
        if position.side_to_move() == Color::White {
            println!("Enter your move:");
            let mut input = String::new();
            if io::stdin().read_line(&mut input).unwrap() == 0 {
                return;
            }
            let mv = match ptn::parse_move(input.trim()) {
                Ok(mv) => mv,
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            };
            if let Err(violation) = position.do_move_checked(mv) {
                println!("{}", violation);
            }
        } else {
            match minmax::best_move(&position, ENGINE_DEPTH, Some(ENGINE_BUDGET), &eval) {
                Some((mv, value)) => {
                    println!("Engine played {} with evaluation {}.", mv, value);
                    position.do_move(mv);
                }
                None => break,
            }
        }
    }
    println!("{}", position);
}

/// Have the engine play both sides of a 5x5 game.
fn play_engine_game() {
    let eval = FlatCountEval::default();
    let mut position = <Position<5>>::start_position();

    while position.game_result().is_none() {
        match minmax::best_move(&position, ENGINE_DEPTH, Some(ENGINE_BUDGET), &eval) {
            Some((mv, value)) => {
                println!(
                    "{} played {} with evaluation {}.",
                    position.side_to_move(),
                    mv,
                    value
                );
                position.do_move(mv);
            }
            None => break,
        }
    }
    println!("{}", position);
}
