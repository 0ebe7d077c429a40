//! Grid module - the matrix of locked cells
//!
//! The grid is `rows x cols`, fixed at construction. Each cell holds `0` (empty)
//! or a color in `1..=COLOR_COUNT`. Storage is a flat row-major vector for cache
//! locality. Coordinates are `(row, col)` with row 0 at the top.

use crate::types::{Cell, EMPTY, FIRST_CLEARABLE_ROW};

/// The locked-cell matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// An empty input yields a 0x0 grid.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let cols = rows.first().map_or(0, |r| r.len());
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "grid rows must all have {} columns",
            cols
        );
        let height = rows.len();
        Self {
            rows: height,
            cols,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Calculate flat index from signed coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`, `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Write a cell. Returns false (and writes nothing) when out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and non-empty
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(c) if c != EMPTY)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        self.row(row).iter().all(|&c| c != EMPTY)
    }

    /// Remove a row: everything above it drops by one and a fresh empty row
    /// appears at the top. Out-of-range rows are ignored.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let width = self.cols;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(EMPTY);
    }

    /// Lowest full row that is eligible for clearing, scanning bottom to top
    pub fn lowest_full_row(&self) -> Option<usize> {
        (FIRST_CLEARABLE_ROW..self.rows)
            .rev()
            .find(|&row| self.is_row_full(row))
    }

    /// Write `color` into every in-bounds `(row, col)` block.
    ///
    /// Blocks outside the grid (typically above row 0) are dropped. Returns the
    /// number of cells written.
    pub fn lock_cells<I>(&mut self, blocks: I, color: Cell) -> usize
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        blocks
            .into_iter()
            .filter(|&(row, col)| self.set(row, col, color))
            .count()
    }

    /// One row as a slice. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}
