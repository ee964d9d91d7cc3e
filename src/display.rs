use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use fourinarow::board::{Board, Cell};
use fourinarow::{HEIGHT, WIDTH};

/// Draws the board as colored discs on a blue frame, topped by a row of
/// column numbers matching the move prompt.
pub fn draw_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    // the top row prints first
    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.cell(row, column) {
                        Cell::Human => Color::Yellow,
                        Cell::Machine => Color::Red,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
