use anyhow::Result;

use std::io::{stdin, stdout, Write};

use fourinarow::game::{Game, GameState};
use fourinarow::search::{SearchMode, DEFAULT_DEPTH};
use fourinarow::WIDTH;

mod display;
use display::draw_board;

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Four in a Row\n");
    println!("You are yellow, the machine is red. Drop into a column by number, 'q' quits.\n");

    // choose search depth
    let max_depth = loop {
        print!("Machine search depth (1-12, enter for {}): ", DEFAULT_DEPTH);
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        let trimmed = buffer.trim();
        if trimmed.is_empty() {
            break DEFAULT_DEPTH;
        }
        match trimmed.parse::<u32>() {
            Ok(depth @ 1..=12) => break depth,
            _ => println!("Depth must be a number between 1 and 12"),
        }
    };

    let mut game = Game::with_search(max_depth, SearchMode::Alternating);

    // game loop
    loop {
        draw_board(game.board())?;

        match game.state() {
            GameState::Playing => {
                print!("Column (1-{}) > ", WIDTH);
                stdout().flush()?;

                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;
                let trimmed = input_str.trim();

                if trimmed.eq_ignore_ascii_case("q") {
                    break;
                }
                let column = match trimmed.parse::<usize>() {
                    Ok(column @ 1..=WIDTH) => column - 1,
                    _ => {
                        println!("Columns must be between 1 and {}", WIDTH);
                        continue;
                    }
                };

                if !game.apply_human_move(column) {
                    println!("Invalid move, column {} full", column + 1);
                    continue;
                }

                if let GameState::Playing = game.state() {
                    println!("Machine is thinking...");
                    stdout().flush()?;

                    if let Some(reply) = game.apply_automated_move() {
                        println!("Machine drops into column {}", reply + 1);
                    }
                }
            }

            // end states
            GameState::HumanWin => {
                println!("You win!");
                break;
            }
            GameState::MachineWin => {
                println!("The machine wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
