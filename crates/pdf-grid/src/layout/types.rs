//! Layout data types for grid sheets
//!
//! These types represent the output of the layout engine, consumed by
//! page emitters.

use super::to_top_down;

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major slot index within a page
    pub fn slot(&self, columns: usize) -> usize {
        self.row * columns + self.col
    }
}

/// A rectangular area in points, bottom-up coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (bottom edge)
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.top() <= self.top()
    }
}

/// Final placement of one image on an output page
///
/// `origin_x`/`origin_y` are the lower-left corner of the drawn image in
/// page points with the origin at the bottom-left of the page (PDF user
/// space). Scaled sizes are whole points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Identifier of the image, as given by the image source
    pub identifier: String,
    /// Position of the image in the input sequence
    pub index: usize,
    /// 0-based output page
    pub page_index: usize,
    /// Row within the page (0 = top)
    pub row: usize,
    /// Column within the page (0 = left)
    pub column: usize,
    pub scaled_width: f64,
    pub scaled_height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Placement {
    pub fn grid_pos(&self) -> GridPosition {
        GridPosition::new(self.row, self.column)
    }

    /// Drawn area of the image
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            self.scaled_width,
            self.scaled_height,
        )
    }

    /// Top edge of the image measured downward from the top of the page
    pub fn top_left_y(&self, page_height: f64) -> f64 {
        to_top_down(page_height, self.origin_y, self.scaled_height)
    }
}

/// All placements that land on one output page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page_index: usize,
    pub placements: Vec<Placement>,
}

impl PageLayout {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
