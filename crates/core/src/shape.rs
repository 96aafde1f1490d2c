//! Shape module - piece geometry in the piece's local frame.
//!
//! A [`Shape`] is an owned boolean matrix: `true` cells are the solid part of
//! a piece. Each [`PieceKind`] has an immutable template in its default
//! orientation; rotation never mutates a matrix in place but builds a fresh
//! one (transpose, then reverse the row order), so the dimensions of
//! non-square pieces swap on every turn.

use crate::types::PieceKind;

/// A piece's occupied cells in its local frame, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Build a shape from 0/1 rows. All rows must have equal length.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        debug_assert!(rows.iter().all(|r| r.len() == width));

        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&v| v != 0))
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    /// The template matrix for a piece kind in its default orientation.
    pub fn template(kind: PieceKind) -> Self {
        match kind {
            PieceKind::L => Self::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]),
            PieceKind::J => Self::from_rows(&[&[0, 1], &[0, 1], &[1, 1]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::T => Self::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::I => Self::from_rows(&[&[1], &[1], &[1], &[1]]),
        }
    }

    /// Width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the local cell at (x, y) is solid. Out of range is not solid.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x]
    }

    /// Iterate the (dx, dy) offsets of every solid cell.
    pub fn offsets(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &solid)| solid)
            .map(|(i, _)| ((i % self.width) as i16, (i / self.width) as i16))
    }

    /// A quarter turn of this shape as a brand-new matrix.
    ///
    /// Computed as "transpose, then reverse the row order". Dimensions swap
    /// for rectangular shapes; four turns return the original.
    pub fn rotated(&self) -> Self {
        let width = self.height;
        let height = self.width;
        let mut cells = vec![false; self.cells.len()];

        for y in 0..height {
            for x in 0..width {
                // Row y of the result is column (old_width - 1 - y) of self,
                // read top to bottom.
                cells[y * width + x] = self.cells[x * self.width + (self.width - 1 - y)];
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }
}
