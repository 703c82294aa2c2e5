//! Interactive terminal game: the human plays side A, the engine side B.

use std::error::Error;
use std::io::{self, BufRead, Write};

use board::{Board, Player, A_STORE, B_STORE};
use log::debug;
use search::{Engine, SearchConfig};

use crate::args::Args;
use crate::history::History;

pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut board = Board::new(args.stones);
    let mut history = History::new();
    let mut engine = Engine::new(SearchConfig::new(args.depth, !args.no_tt));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    draw(&board);
    loop {
        if board.terminal() {
            print_outcome(&board);
            break;
        }

        let mv = if board.current() == Player::B {
            let result = engine.choose(&board);
            let Some(mv) = result.mv else {
                break;
            };
            println!(
                "Engine plays {} | value {:.2} | nodes {}",
                mv, result.value, result.nodes
            );
            mv
        } else {
            let legal = board.legal_moves();
            print!("Choose pit {:?} (u=undo, r=redo, g=hint, q=quit): ", &legal[..]);
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            match line?.trim().to_lowercase().as_str() {
                "q" => break,
                "u" => {
                    if history.undo(&mut board) {
                        draw(&board);
                    } else {
                        println!("Nothing to undo.");
                    }
                    continue;
                }
                "r" => {
                    if history.redo(&mut board) {
                        draw(&board);
                    } else {
                        println!("Nothing to redo.");
                    }
                    continue;
                }
                "g" => {
                    match engine.greedy_hint(&board) {
                        Some(hint) => println!("Hint: pit {hint}"),
                        None => println!("No legal moves."),
                    }
                    continue;
                }
                input => match input.parse::<usize>() {
                    Ok(pit) => pit,
                    Err(_) => {
                        println!("Enter a pit number or a command.");
                        continue;
                    }
                },
            }
        };

        // Apply to a scratch copy first so a rejected move never leaves a
        // stray history snapshot behind.
        let mut next = board;
        match next.apply_move(mv) {
            Ok(outcome) => {
                debug!(
                    "{} plays {}: extra_turn={} end={:?}",
                    board.current(),
                    mv,
                    outcome.extra_turn,
                    outcome.end
                );
                history.push(&board);
                board = next;
                draw(&board);
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

fn print_outcome(board: &Board) {
    let a = board.score(Player::A);
    let b = board.score(Player::B);
    let winner = match a.cmp(&b) {
        std::cmp::Ordering::Greater => "A",
        std::cmp::Ordering::Less => "B",
        std::cmp::Ordering::Equal => "Draw",
    };
    println!("Game over. A={a} B={b}. Winner: {winner}");
}

fn draw(board: &Board) {
    let pits = board.pits();
    println!("\n{}", "=".repeat(38));
    println!("          [12][11][10][09][08][07]");
    print!("      B   ");
    for i in (7..13).rev() {
        print!("{:2} ", pits[i]);
    }
    println!();
    println!(
        "[{:2}]                          [{:2}]",
        pits[B_STORE], pits[A_STORE]
    );
    print!("      A   ");
    for i in 0..6 {
        print!("{:2} ", pits[i]);
    }
    println!();
    println!("          [00][01][02][03][04][05]");
    println!("Turn: {}", board.current());
}
