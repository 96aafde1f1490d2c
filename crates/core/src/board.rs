//! Board module - the settled grid.
//!
//! The board is a `width x height` grid of [`Cell`]s stored as a flat vector
//! in row-major order (`y * width + x`), row 0 at the top. It only ever holds
//! locked pieces; the active piece lives in the engine and is composed in by
//! renderers. Dimensions are fixed at construction.

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Upper bound on rows a single lock can complete (the tallest piece spans
/// four rows).
pub const MAX_CLEARED_ROWS: usize = 4;

/// The settled grid of locked cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the default 10x20 dimensions.
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board with custom dimensions.
    pub fn with_size(width: u16, height: u16) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Cell at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write a cell. Returns false when out of bounds.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) is inside the grid and empty.
    ///
    /// This is the cell-level half of the placement predicate: a solid shape
    /// cell may only occupy a free board cell.
    pub fn is_free(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Whether (x, y) is inside the grid and filled.
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether row `y` has no empty cell.
    pub fn is_row_full(&self, y: u16) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every fully-filled row and refill at the top.
    ///
    /// Surviving rows keep their relative order and slide down; as many empty
    /// rows are inserted at row 0 as were removed, so the row count stays
    /// `height`. Returns the removed row indices, bottom-most last.
    pub fn clear_full_rows(&mut self) -> ArrayVec<u16, MAX_CLEARED_ROWS> {
        let width = self.width as usize;
        let mut cleared = ArrayVec::new();
        let mut write_y = self.height as usize;

        // Compact surviving rows downwards, bottom to top.
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y as u16) {
                cleared.push(read_y as u16);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // Whatever is left above the last surviving row becomes empty.
        self.cells[..write_y * width].fill(None);

        cleared.reverse();
        cleared
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Flat row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
