use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use dots_and_boxes::{Board, Edge, Player};

pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let scores = format!(
        "Player 1: {}   Player 2: {}\n\n",
        board.score(Player::One),
        board.score(Player::Two)
    );
    stdout.queue(PrintStyledContent(
        style(scores).attribute(Attribute::Bold),
    ))?;

    for row in 0..board.dots() {
        // dots and the horizontal edges between them
        for col in 0..board.dots() {
            stdout.queue(PrintStyledContent(
                style("o").attribute(Attribute::Bold).with(Color::Green),
            ))?;
            if col < board.dots() - 1 {
                let segment = if board.has_edge(Edge::horizontal(row, col)) {
                    "───"
                } else {
                    "   "
                };
                stdout.queue(PrintStyledContent(style(segment)))?;
            }
        }
        stdout.queue(PrintStyledContent(style("\n")))?;

        // vertical edges and box interiors
        if row < board.dots() - 1 {
            for col in 0..board.dots() {
                let bar = if board.has_edge(Edge::vertical(row, col)) {
                    "│"
                } else {
                    " "
                };
                stdout.queue(PrintStyledContent(style(bar)))?;
                if col < board.dots() - 1 {
                    let fill = style("   ");
                    let fill = match board.owner(row, col) {
                        Some(Player::One) => fill.on(Color::Blue),
                        Some(Player::Two) => fill.on(Color::Red),
                        None => fill,
                    };
                    stdout.queue(PrintStyledContent(fill))?;
                }
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
    }
    stdout.queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
