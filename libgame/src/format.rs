//! The plain text seed format.
//!
//! ```text
//! 1      <- generations to run
//! 3      <- rows
//! 3      <- columns
//! ...
//! ooo    <- `rows` lines of `columns` cells, `o` alive and `.` dead
//! ...
//! ```
//!
//! Rendering a board produces exactly the cell section of this format.

use std::{fmt, str::FromStr};

use crate::{
    board::{GameBoard, TileState},
    error::{Error, MalformedReason, Result},
};

/// A parsed seed file: the starting board and how far to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub generations: usize,
    pub board: GameBoard,
}

impl Seed {
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = NumberedLines::new(input);

        let generations = lines.next_integer("generation count")?;
        let rows = lines.next_integer("row count")?;
        let cols = lines.next_integer("column count")?;

        let generations =
            usize::try_from(generations).map_err(|_| Error::InvalidArgument { generations })?;
        let (rows, cols) = GameBoard::check_dimensions(rows, cols)?;

        let board = read_tiles(rows, cols, &mut lines)?;
        lines.expect_end()?;

        Ok(Self { generations, board })
    }
}

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.generations)?;
        writeln!(f, "{}", self.board.rows())?;
        writeln!(f, "{}", self.board.cols())?;
        write!(f, "{}", self.board)
    }
}

/// Parses just the cell section of a seed, for boards of known dimensions.
pub fn parse_board(rows: usize, cols: usize, input: &str) -> Result<GameBoard> {
    let mut lines = NumberedLines::new(input);

    let board = read_tiles(rows, cols, &mut lines)?;
    lines.expect_end()?;

    Ok(board)
}

pub fn render(board: &GameBoard) -> String {
    board.to_string()
}

/// Tiles are collected from the rows actually present in the input, never preallocated from
/// the header.
fn read_tiles(rows: usize, cols: usize, lines: &mut NumberedLines<'_>) -> Result<GameBoard> {
    let mut tiles = Vec::new();

    for _ in 0..rows {
        let (line_number, line) = lines.next_line("next board row")?;
        let malformed = |reason| Error::MalformedInput {
            line: line_number,
            reason,
        };

        let found = line.chars().count();
        if found != cols {
            return Err(malformed(MalformedReason::RowLength {
                expected: cols,
                found,
            }));
        }

        for (col, c) in line.chars().enumerate() {
            let state = TileState::from_char(c)
                .ok_or_else(|| malformed(MalformedReason::UnexpectedChar { found: c, col }))?;

            tiles.push(state);
        }
    }

    // Every row was checked against `cols` above.
    GameBoard::with_tiles(rows, cols, tiles).ok_or(Error::InvalidDimension {
        rows: rows as i64,
        cols: cols as i64,
    })
}

struct NumberedLines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    last_line: usize,
}

impl<'a> NumberedLines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            last_line: 0,
        }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<(usize, &'a str)> {
        match self.lines.next() {
            Some((index, line)) => {
                self.last_line = index + 1;
                Ok((self.last_line, line))
            }
            None => Err(Error::MalformedInput {
                line: self.last_line + 1,
                reason: MalformedReason::MissingLine(expected),
            }),
        }
    }

    fn next_integer(&mut self, field: &'static str) -> Result<i64> {
        let (line_number, line) = self.next_line(field)?;

        line.trim().parse().map_err(|_| Error::MalformedInput {
            line: line_number,
            reason: MalformedReason::NotAnInteger {
                field,
                found: line.to_owned(),
            },
        })
    }

    /// Only blank lines may follow the last board row.
    fn expect_end(&mut self) -> Result<()> {
        match self.lines.find(|(_, line)| !line.is_empty()) {
            Some((index, _)) => Err(Error::MalformedInput {
                line: index + 1,
                reason: MalformedReason::TrailingLine,
            }),
            None => Ok(()),
        }
    }
}
