use std::fmt;

use crate::{
    error::{Error, Result},
    pos::Position,
};

/// A fixed-size grid of cells. Everything outside the grid reads as dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    rows: usize,
    cols: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(rows: usize, cols: usize) -> Self {
        let tiles = vec![TileState::default(); rows * cols];
        Self { rows, cols, tiles }
    }

    /// Like [`GameBoard::new`], but for dimensions that come from untrusted signed input.
    pub fn try_new(rows: i64, cols: i64) -> Result<Self> {
        let (rows, cols) = Self::check_dimensions(rows, cols)?;
        Ok(Self::new(rows, cols))
    }

    /// Validates signed dimensions without allocating anything.
    pub fn check_dimensions(rows: i64, cols: i64) -> Result<(usize, usize)> {
        let invalid = || Error::InvalidDimension { rows, cols };

        let row_count = usize::try_from(rows).map_err(|_| invalid())?;
        let col_count = usize::try_from(cols).map_err(|_| invalid())?;
        row_count.checked_mul(col_count).ok_or_else(invalid)?;

        Ok((row_count, col_count))
    }

    /// Builds a board from row-major tiles, `None` if the tile count doesn't match.
    pub fn with_tiles(rows: usize, cols: usize, tiles: Vec<TileState>) -> Option<Self> {
        (rows.checked_mul(cols)? == tiles.len()).then_some(Self { rows, cols, tiles })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    /// Liveness at a signed coordinate. Anything off the board is dead.
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };

        self.tile((row, col)).is_some_and(|tile| tile.is_alive())
    }

    pub fn set<P>(&mut self, pos: P, state: TileState) -> Result<()>
    where
        P: Into<Position>,
    {
        let position = pos.into();
        let (rows, cols) = (self.rows, self.cols);

        let tile = self.tile_mut(position).ok_or(Error::IndexOutOfRange {
            position,
            rows,
            cols,
        })?;
        *tile = state;

        Ok(())
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn count_cells(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|tile| **tile == state).count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.cols {
            return None;
        }

        Some(col + (row * self.cols))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.cols;
        let col = index % self.cols;
        Position { row, col }
    }
}

/// Renders one line per row, `o` for alive and `.` for dead, each line ending in a newline.
impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return (0..self.rows).try_for_each(|_| writeln!(f));
        }

        for row in self.tiles.chunks(self.cols) {
            let line: String = row.iter().map(|tile| tile.to_char()).collect();
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub const ALIVE_CHAR: char = 'o';
    pub const DEAD_CHAR: char = '.';

    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }

    pub fn to_char(self) -> char {
        match self {
            TileState::Alive => Self::ALIVE_CHAR,
            TileState::Dead => Self::DEAD_CHAR,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::ALIVE_CHAR => Some(TileState::Alive),
            Self::DEAD_CHAR => Some(TileState::Dead),
            _ => None,
        }
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}
