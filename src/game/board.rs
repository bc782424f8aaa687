use super::player::Seat;
use crate::error::MoveError;

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;

/// Direction offsets probed from every start cell: horizontal, vertical,
/// diagonal down-right, diagonal down-left. Offsets are (row, col).
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

const LINE: isize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Seat),
}

impl Cell {
    pub fn seat(self) -> Option<Seat> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(seat) => Some(seat),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Get the cell at a specific position, or `None` when out of range.
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Lowest empty row in `col`. Rows fill bottom-up, so this is the highest
    /// empty row index.
    pub fn find_spot_for_column(&self, col: usize) -> Result<usize, MoveError> {
        if col >= WIDTH {
            return Err(MoveError::InvalidColumn { col, width: WIDTH });
        }

        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Put `seat`'s piece at (row, col). The cell must be empty.
    pub fn place(&mut self, row: usize, col: usize, seat: Seat) -> Result<(), MoveError> {
        if col >= WIDTH || row >= HEIGHT {
            return Err(MoveError::OutOfBounds {
                row,
                col,
                height: HEIGHT,
                width: WIDTH,
            });
        }

        let cell = &mut self.cells[row][col];
        if *cell != Cell::Empty {
            return Err(MoveError::InvalidMove { row, col });
        }
        *cell = Cell::Occupied(seat);
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// True if `seat` owns four contiguous cells in any direction.
    ///
    /// Every cell is tried as a line start. Candidate coordinates are signed
    /// so the down-left diagonal can run off the left edge; such lines are
    /// rejected by the bounds check, never by indexing.
    pub fn check_win(&self, seat: Seat) -> bool {
        (0..HEIGHT as isize).any(|row| {
            (0..WIDTH as isize).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.line_owned_by(row, col, dr, dc, seat))
            })
        })
    }

    /// Scan the whole board for any player with a line of four.
    pub fn winner(&self) -> Option<Seat> {
        Seat::BOTH.into_iter().find(|&seat| self.check_win(seat))
    }

    fn line_owned_by(&self, row: isize, col: isize, dr: isize, dc: isize, seat: Seat) -> bool {
        (0..LINE).all(|step| {
            let r = row + dr * step;
            let c = col + dc * step;
            in_bounds(r, c) && self.cells[r as usize][c as usize] == Cell::Occupied(seat)
        })
    }
}

fn in_bounds(row: isize, col: isize) -> bool {
    (0..HEIGHT as isize).contains(&row) && (0..WIDTH as isize).contains(&col)
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
