use anyhow::Result;

use std::io::{stdin, stdout, Write};
use std::thread;
use std::time::Duration;

use dots_and_boxes::*;

mod render;

// purely presentational pacing before each robot move
const ROBOT_DELAY: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Dots and Boxes\n");

    let mut robot_players = (false, false);

    // choose robot control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 robot controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                robot_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose robot control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 robot controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                robot_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    let mut game = GameController::new(DOTS);
    let mut robot = Robot::new();

    // game loop
    loop {
        render::draw(game.board()).expect("Failed to draw board!");

        match game.state() {
            GameState::PlayerOneTurn | GameState::PlayerTwoTurn => {
                let (player, robot_turn) = match game.state() {
                    GameState::PlayerOneTurn => (1, robot_players.0),
                    _ => (2, robot_players.1),
                };

                // robot player
                if robot_turn {
                    println!("Robot (player {}) is thinking...", player);
                    stdout().flush().expect("Failed to flush to stdout!");
                    thread::sleep(ROBOT_DELAY);

                    let outcome = game.request_ai_move(&mut robot)?;
                    println!("Robot plays {}", outcome.edge);
                    if !outcome.claimed.is_empty() {
                        println!(
                            "Robot closes {} box(es) and moves again",
                            outcome.claimed.len()
                        );
                    }

                // human player
                } else {
                    print!("Player {} move (h|v ROW COL) > ", player);
                    stdout().flush().expect("Failed to flush to stdout!");
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    let next_move = match parse_move(input_str.trim()) {
                        Some(edge) => edge,
                        None => {
                            println!("Could not parse '{}' as a move", input_str.trim());
                            continue;
                        }
                    };

                    if let Err(err) = game.submit_move(next_move) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            }

            // end state
            GameState::GameOver => {
                let (one, two) = (game.score(Player::One), game.score(Player::Two));
                if one > two {
                    println!("Player 1 wins {} boxes to {}!", one, two);
                } else if two > one {
                    println!("Player 2 wins {} boxes to {}!", two, one);
                } else {
                    println!("Draw, {} boxes each!", one);
                }

                // offer a rematch on a fresh board
                loop {
                    let mut buffer = String::new();
                    print!("Play again? y/n: ");
                    stdout().flush().expect("failed to flush to stdout!");
                    stdin.read_line(&mut buffer)?;
                    match buffer.to_lowercase().chars().next() {
                        Some(_letter @ 'y') => {
                            game = GameController::new(DOTS);
                            break;
                        }
                        Some(_letter @ 'n') => return Ok(()),
                        _ => println!("Unknown answer given"),
                    }
                }
            }
        }
    }
}

// moves are typed as "h ROW COL" or "v ROW COL"
fn parse_move(input: &str) -> Option<Edge> {
    let mut parts = input.split_whitespace();
    let kind = parts.next()?;
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    match kind {
        "h" | "H" => Some(Edge::horizontal(row, col)),
        "v" | "V" => Some(Edge::vertical(row, col)),
        _ => None,
    }
}
