//! Page and cell geometry
//!
//! A page is split into `columns x rows` equal cells separated by a uniform
//! margin. The margin is also applied before the first and after the last
//! cell, so a row of `n` cells has `n + 1` gaps.

use crate::types::{GridError, Result};

use super::{Rect, to_bottom_up};

/// Immutable page geometry with derived cell dimensions, all in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    page_width: f64,
    page_height: f64,
    columns: usize,
    rows: usize,
    margin: f64,
    capacity: usize,
    cell_width: f64,
    cell_height: f64,
}

impl PageGeometry {
    /// Create a page geometry, validating that every cell has a positive size.
    ///
    /// # Arguments
    /// * `page_width` - Page width in points
    /// * `page_height` - Page height in points
    /// * `columns` - Number of cells per row
    /// * `rows` - Number of cells per column
    /// * `margin` - Gap between cells and around the page edge, in points
    pub fn new(
        page_width: f64,
        page_height: f64,
        columns: usize,
        rows: usize,
        margin: f64,
    ) -> Result<Self> {
        if columns < 1 || rows < 1 {
            return Err(GridError::InvalidGeometry(format!(
                "grid must have at least one column and one row (got {}x{})",
                columns, rows
            )));
        }
        let capacity = columns.checked_mul(rows).ok_or_else(|| {
            GridError::InvalidGeometry(format!(
                "{}x{} grid has more cells than can be counted",
                columns, rows
            ))
        })?;
        if !margin.is_finite() || margin < 0.0 {
            return Err(GridError::InvalidGeometry(format!(
                "margin must be a non-negative number (got {})",
                margin
            )));
        }
        if !(page_width.is_finite() && page_height.is_finite())
            || page_width <= 0.0
            || page_height <= 0.0
        {
            return Err(GridError::InvalidGeometry(format!(
                "page size must be positive (got {}x{})",
                page_width, page_height
            )));
        }

        let cell_width = cell_extent(page_width, columns, margin);
        let cell_height = cell_extent(page_height, rows, margin);

        if cell_width <= 0.0 || cell_height <= 0.0 {
            return Err(GridError::InvalidGeometry(format!(
                "margin {} leaves no room for a {}x{} grid on a {}x{} page (cell {}x{})",
                margin, columns, rows, page_width, page_height, cell_width, cell_height
            )));
        }

        Ok(Self {
            page_width,
            page_height,
            columns,
            rows,
            margin,
            capacity,
            cell_width,
            cell_height,
        })
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Number of cells on one page
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Top-left corner of a cell, measured from the top-left of the page.
    pub fn cell_top_left(&self, row: usize, column: usize) -> (f64, f64) {
        (
            self.margin + column as f64 * (self.cell_width + self.margin),
            self.margin + row as f64 * (self.cell_height + self.margin),
        )
    }

    /// Bounds of a cell in bottom-up page coordinates.
    pub fn cell_rect(&self, row: usize, column: usize) -> Rect {
        let (x, y_top) = self.cell_top_left(row, column);
        Rect::new(
            x,
            to_bottom_up(self.page_height, y_top, self.cell_height),
            self.cell_width,
            self.cell_height,
        )
    }
}

/// Size of one cell along an axis holding `count` cells and `count + 1` gaps.
fn cell_extent(length: f64, count: usize, margin: f64) -> f64 {
    (length - (count as f64 + 1.0) * margin) / count as f64
}
