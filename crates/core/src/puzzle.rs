//! Sliding-free picture puzzle - swap pieces until each is home
//!
//! The board is a square grid of numbered pieces; piece `n` belongs at
//! cell `n` in row-major order. A scramble is a uniform permutation that
//! is never the solved layout, so every fresh board has work to do. The
//! host drives a one-second timer that stops once the board is solved.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::Difficulty;

/// Enough cells for the hard 5x5 board.
const MAX_PIECES: usize = 25;

/// One puzzle board.
#[derive(Debug, Clone)]
pub struct Puzzle {
    difficulty: Difficulty,
    side: u8,
    /// `cells[cell]` is the piece sitting there; home cell equals piece id
    cells: ArrayVec<u8, MAX_PIECES>,
    seconds: u32,
    rng: SimpleRng,
}

impl Puzzle {
    pub fn new(seed: u32, difficulty: Difficulty) -> Self {
        let mut puzzle = Self {
            difficulty,
            side: difficulty.grid_side(),
            cells: ArrayVec::new(),
            seconds: 0,
            rng: SimpleRng::new(seed),
        };
        puzzle.scramble();
        puzzle
    }

    /// Deal a fresh permutation and restart the timer.
    pub fn scramble(&mut self) {
        self.cells.clear();
        for piece in 0..self.difficulty.piece_count() as u8 {
            self.cells.push(piece);
        }
        self.rng.shuffle(&mut self.cells);

        // A scramble that lands solved would end the game before it
        // starts; nudge it apart.
        if self.solved() && self.cells.len() > 1 {
            self.cells.swap(0, 1);
        }
        self.seconds = 0;
    }

    fn index(&self, row: u8, col: u8) -> Option<usize> {
        if row < self.side && col < self.side {
            return Some(row as usize * self.side as usize + col as usize);
        }
        None
    }

    /// Swap the pieces at two cells. Rejected once the board is solved,
    /// for out-of-bounds cells, or when both name the same cell.
    pub fn swap(&mut self, a_row: u8, a_col: u8, b_row: u8, b_col: u8) -> bool {
        if self.solved() {
            return false;
        }
        let (a, b) = match (self.index(a_row, a_col), self.index(b_row, b_col)) {
            (Some(a), Some(b)) if a != b => (a, b),
            _ => return false,
        };
        self.cells.swap(a, b);
        true
    }

    /// Count one second of play. Stops once the board is solved.
    pub fn tick_second(&mut self) {
        if !self.solved() {
            self.seconds += 1;
        }
    }

    pub fn solved(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(cell, piece)| *piece as usize == cell)
    }

    /// Piece sitting at a cell.
    pub fn piece_at(&self, row: u8, col: u8) -> u8 {
        self.cells[row as usize * self.side as usize + col as usize]
    }

    /// Where a piece belongs, row-major.
    pub fn piece_home(&self, piece: u8) -> (u8, u8) {
        (piece / self.side, piece % self.side)
    }

    /// Whether the piece at a cell is in its home cell.
    pub fn is_home(&self, row: u8, col: u8) -> bool {
        let cell = row as usize * self.side as usize + col as usize;
        self.cells[cell] as usize == cell
    }

    pub fn placed_count(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|(cell, piece)| **piece as usize == *cell)
            .count()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.len()
    }

    pub fn side(&self) -> u8 {
        self.side
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Put every piece in its home cell by direct swaps.
    fn solve(puzzle: &mut Puzzle) {
        let side = puzzle.side();
        for piece in 0..puzzle.piece_count() as u8 {
            let mut at = None;
            'search: for row in 0..side {
                for col in 0..side {
                    if puzzle.piece_at(row, col) == piece {
                        at = Some((row, col));
                        break 'search;
                    }
                }
            }
            let (row, col) = at.unwrap();
            let (home_row, home_col) = puzzle.piece_home(piece);
            if (row, col) != (home_row, home_col) {
                assert!(puzzle.swap(row, col, home_row, home_col));
            }
        }
        assert!(puzzle.solved());
    }

    #[test]
    fn test_board_sizes() {
        assert_eq!(Puzzle::new(1, Difficulty::Easy).piece_count(), 9);
        assert_eq!(Puzzle::new(1, Difficulty::Medium).piece_count(), 16);
        assert_eq!(Puzzle::new(1, Difficulty::Hard).piece_count(), 25);
    }

    #[test]
    fn test_scramble_is_a_permutation() {
        let puzzle = Puzzle::new(42, Difficulty::Medium);

        let mut pieces: Vec<u8> = (0..4)
            .flat_map(|row| (0..4).map(move |col| (row, col)))
            .map(|(row, col)| puzzle.piece_at(row, col))
            .collect();
        pieces.sort_unstable();
        let expected: Vec<u8> = (0..16).collect();
        assert_eq!(pieces, expected);
    }

    #[test]
    fn test_fresh_board_is_never_solved() {
        for seed in 0..50 {
            let puzzle = Puzzle::new(seed, Difficulty::Easy);
            assert!(!puzzle.solved(), "seed {} dealt a solved board", seed);
        }
    }

    #[test]
    fn test_swap_exchanges_pieces() {
        let mut puzzle = Puzzle::new(7, Difficulty::Easy);
        let a = puzzle.piece_at(0, 0);
        let b = puzzle.piece_at(1, 2);

        assert!(puzzle.swap(0, 0, 1, 2));
        assert_eq!(puzzle.piece_at(0, 0), b);
        assert_eq!(puzzle.piece_at(1, 2), a);
    }

    #[test]
    fn test_swap_rejects_bad_cells() {
        let mut puzzle = Puzzle::new(7, Difficulty::Easy);

        assert!(!puzzle.swap(0, 0, 0, 3));
        assert!(!puzzle.swap(3, 0, 0, 0));
        assert!(!puzzle.swap(1, 1, 1, 1));
    }

    #[test]
    fn test_piece_homes_are_row_major() {
        let puzzle = Puzzle::new(7, Difficulty::Hard);

        assert_eq!(puzzle.piece_home(0), (0, 0));
        assert_eq!(puzzle.piece_home(7), (1, 2));
        assert_eq!(puzzle.piece_home(24), (4, 4));
    }

    #[test]
    fn test_solving_places_every_piece() {
        let mut puzzle = Puzzle::new(19, Difficulty::Easy);
        assert!(puzzle.placed_count() < puzzle.piece_count());

        solve(&mut puzzle);

        assert_eq!(puzzle.placed_count(), puzzle.piece_count());
        for row in 0..3 {
            for col in 0..3 {
                assert!(puzzle.is_home(row, col));
            }
        }
    }

    #[test]
    fn test_solved_board_rejects_swaps() {
        let mut puzzle = Puzzle::new(19, Difficulty::Easy);
        solve(&mut puzzle);

        assert!(!puzzle.swap(0, 0, 0, 1));
    }

    #[test]
    fn test_timer_stops_when_solved() {
        let mut puzzle = Puzzle::new(19, Difficulty::Easy);

        puzzle.tick_second();
        puzzle.tick_second();
        puzzle.tick_second();
        assert_eq!(puzzle.elapsed_seconds(), 3);

        solve(&mut puzzle);
        puzzle.tick_second();
        assert_eq!(puzzle.elapsed_seconds(), 3);
    }

    #[test]
    fn test_scramble_restarts_the_board() {
        let mut puzzle = Puzzle::new(19, Difficulty::Easy);
        puzzle.tick_second();
        solve(&mut puzzle);

        puzzle.scramble();

        assert!(!puzzle.solved());
        assert_eq!(puzzle.elapsed_seconds(), 0);
    }
}
