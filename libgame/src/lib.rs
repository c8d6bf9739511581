use std::mem;

use board::{GameBoard, TileState};
use log::{debug, trace};
use pos::Position;
use rule::Rule;

pub mod board;
pub mod error;
pub mod format;
pub mod pos;
pub mod rule;


pub use error::{Error, Result};

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [0, -1],
    [1, -1],
    [-1, 0],
    [1, 0],
    [-1, 1],
    [0, 1],
    [1, 1],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,
    pub rule: Rule,
}

impl Game {
    pub fn new(board: GameBoard, rule: Rule) -> Self {
        Self { board, rule }
    }

    pub fn tick(&mut self) {
        let mut next_board = GameBoard::new(self.board.rows(), self.board.cols());
        step(&self.rule, &self.board, &mut next_board);
        self.board = next_board;
    }

    /// Runs the held board forward and returns the result, leaving `self` untouched.
    pub fn run(&self, generations: usize) -> GameBoard {
        debug!(
            "Running {}x{} board for {generations} generations",
            self.board.rows(),
            self.board.cols()
        );

        let mut current = self.board.clone();
        let mut next = GameBoard::new(current.rows(), current.cols());

        for generation in 0..generations {
            step(&self.rule, &current, &mut next);
            mem::swap(&mut current, &mut next);

            trace!(
                "generation {}: {} alive",
                generation + 1,
                current.count_cells(TileState::Alive)
            );
        }

        current
    }

    /// [`Game::run`] for a generation count that comes from untrusted signed input.
    pub fn run_checked(&self, generations: i64) -> Result<GameBoard> {
        let generations =
            usize::try_from(generations).map_err(|_| Error::InvalidArgument { generations })?;
        Ok(self.run(generations))
    }
}

/// Runs `initial` forward by `generations` steps of the standard B3/S23 rule.
pub fn run(initial: &GameBoard, generations: usize) -> GameBoard {
    Game::new(initial.clone(), Rule::default()).run(generations)
}

/// Writes the successor of `current` into `next`. Both boards must have the same dimensions.
fn step(rule: &Rule, current: &GameBoard, next: &mut GameBoard) {
    debug_assert_eq!(
        (current.rows(), current.cols()),
        (next.rows(), next.cols())
    );

    for (tile_pos, tile) in current.enumerate_tiles() {
        let alive = rule.next_alive(tile.is_alive(), alive_neighbor_count(current, tile_pos));

        // Same dimensions, so every position of `current` exists in `next`.
        if let Some(next_tile) = next.tile_mut(tile_pos) {
            *next_tile = alive.into();
        }
    }
}

fn alive_neighbor_count(board: &GameBoard, tile_pos: Position) -> usize {
    NEIGHBOR_RELATIVE_POSITIONS
        .iter()
        .filter(|[d_row, d_col]| {
            tile_pos
                .offset(*d_row, *d_col)
                .and_then(|pos| board.tile(pos))
                .is_some_and(|tile| tile.is_alive())
        })
        .count()
}
