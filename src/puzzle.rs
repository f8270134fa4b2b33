//! The sliding-tile puzzle hosted by the game screen.
//!
//! Tiles are numbered `1..size*size`, `0` marks the blank. The solved
//! layout has the tiles in reading order with the blank in the last cell.

use rand::Rng;

/// Edge lengths the board accepts
pub const BOARD_SIZES: std::ops::RangeInclusive<u8> = 2..=8;

/// Random moves applied per cell when shuffling
const SHUFFLE_MOVES_PER_CELL: usize = 20;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("board size {0} is outside {min}..={max}", min = BOARD_SIZES.start(), max = BOARD_SIZES.end())]
    InvalidSize(u8),
}

/// Direction a tile moves in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl Board {
    /// A board in the solved layout
    pub fn solved(size: u8) -> Result<Self, BoardError> {
        if !BOARD_SIZES.contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        let size = size as usize;
        let cells = size * size;
        let mut tiles: Vec<u8> = (1..cells as u8).collect();
        tiles.push(0);
        Ok(Self {
            size,
            tiles,
            blank: cells - 1,
        })
    }

    /// A solvable, unsolved board reached by random legal slides from the
    /// solved layout
    pub fn shuffled<R: Rng + ?Sized>(size: u8, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::solved(size)?;
        let moves = board.tiles.len() * SHUFFLE_MOVES_PER_CELL;
        let mut last: Option<Direction> = None;

        loop {
            for _ in 0..moves {
                let options: Vec<Direction> = Direction::ALL
                    .into_iter()
                    .filter(|d| Some(d.opposite()) != last && board.can_slide(*d))
                    .collect();
                let dir = options[rng.gen_range(0..options.len())];
                board.slide(dir);
                last = Some(dir);
            }
            if !board.is_solved() {
                return Ok(board);
            }
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at a cell, `0` for the blank
    pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * self.size + col]
    }

    /// Whether the tile at a cell is where the solved layout puts it
    pub fn in_place(&self, row: usize, col: usize) -> bool {
        let index = row * self.size + col;
        let tile = self.tiles[index];
        tile != 0 && tile as usize == index + 1
    }

    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .take(self.tiles.len() - 1)
            .enumerate()
            .all(|(i, &t)| t as usize == i + 1)
    }

    /// Cell of the tile that would move in `dir`, if any
    fn mover(&self, dir: Direction) -> Option<usize> {
        let (row, col) = (self.blank / self.size, self.blank % self.size);
        match dir {
            // the tile below the blank moves up into it
            Direction::Up => (row + 1 < self.size).then(|| self.blank + self.size),
            Direction::Down => (row > 0).then(|| self.blank - self.size),
            Direction::Left => (col + 1 < self.size).then(|| self.blank + 1),
            Direction::Right => (col > 0).then(|| self.blank - 1),
        }
    }

    pub fn can_slide(&self, dir: Direction) -> bool {
        self.mover(dir).is_some()
    }

    /// Slide the tile next to the blank in `dir`; false when nothing can move
    pub fn slide(&mut self, dir: Direction) -> bool {
        match self.mover(dir) {
            Some(from) => {
                self.tiles.swap(from, self.blank);
                self.blank = from;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_solved_layout() {
        let board = Board::solved(3).unwrap();
        assert!(board.is_solved());
        assert_eq!(board.tile_at(0, 0), 1);
        assert_eq!(board.tile_at(2, 1), 8);
        assert_eq!(board.tile_at(2, 2), 0);
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        assert_eq!(Board::solved(1), Err(BoardError::InvalidSize(1)));
        assert_eq!(Board::solved(9), Err(BoardError::InvalidSize(9)));
    }

    #[test]
    fn test_slide_moves_tile_into_blank() {
        let mut board = Board::solved(3).unwrap();
        // blank is bottom-right: the 8 to its left can move right
        assert!(board.slide(Direction::Right));
        assert_eq!(board.tile_at(2, 2), 8);
        assert_eq!(board.tile_at(2, 1), 0);
        assert!(!board.is_solved());

        assert!(board.slide(Direction::Left));
        assert!(board.is_solved());
    }

    #[test]
    fn test_blocked_slides() {
        let mut board = Board::solved(3).unwrap();
        // nothing below or to the right of the blank
        assert!(!board.slide(Direction::Up));
        assert!(!board.slide(Direction::Left));
        assert!(board.is_solved());
    }

    #[test]
    fn test_in_place() {
        let mut board = Board::solved(3).unwrap();
        assert!(board.in_place(0, 0));
        assert!(!board.in_place(2, 2));
        board.slide(Direction::Down);
        assert!(!board.in_place(2, 2));
        assert!(!board.in_place(1, 2));
    }

    #[test]
    fn test_shuffled_is_unsolved_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in 2..=5 {
            let board = Board::shuffled(size, &mut rng).unwrap();
            assert!(!board.is_solved());
            let mut tiles = board.tiles.clone();
            tiles.sort_unstable();
            let expected: Vec<u8> = (0..(size as usize * size as usize) as u8).collect();
            assert_eq!(tiles, expected);
            assert_eq!(board.tile_at(board.blank / board.size, board.blank % board.size), 0);
        }
    }
}
