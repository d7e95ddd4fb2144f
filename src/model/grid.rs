//! Dense relationship grid sized to the model's requirement/characteristic counts.

use serde::{Deserialize, Serialize};

use super::Relationship;

/// Row-major grid of relationships.
///
/// The owning model resizes the grid eagerly whenever a requirement
/// (row) or characteristic (column) is appended, so the shape always
/// equals the collection lengths. Cells never explicitly set hold
/// `Relationship::Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Relationship>,
}

impl RelationshipGrid {
    /// Creates an empty 0x0 grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the (rows, cols) shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the cell at (row, col), or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&Relationship> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Overwrites the cell at (row, col). Returns false if out of range.
    pub fn set(&mut self, row: usize, col: usize, relationship: Relationship) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = relationship;
            true
        } else {
            false
        }
    }

    /// Resizes to the new shape, preserving the overlapping top-left
    /// region. New cells hold `Null`.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if (rows, cols) == (self.rows, self.cols) {
            return;
        }

        let mut cells = vec![Relationship::Null; rows * cols];
        for row in 0..self.rows.min(rows) {
            for col in 0..self.cols.min(cols) {
                cells[row * cols + col] = self.cells[row * self.cols + col];
            }
        }

        self.rows = rows;
        self.cols = cols;
        self.cells = cells;
    }

    /// Iterates one row in column order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Relationship> {
        let start = row * self.cols;
        self.cells[start..start + self.cols].iter()
    }
}
