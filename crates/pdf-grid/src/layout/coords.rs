//! Conversion between top-down and bottom-up page coordinates
//!
//! Grid rows are counted from the top of the page, but PDF user space has
//! its origin at the bottom-left and draws images upward from their
//! lower-left corner. Flipping therefore has to subtract the object's
//! height as well as mirror the axis.

/// Convert the top edge of an object (measured downward from the page top)
/// into the bottom edge measured upward from the page bottom.
#[inline]
pub fn to_bottom_up(page_height: f64, y_top: f64, height: f64) -> f64 {
    page_height - y_top - height
}

/// Inverse of [`to_bottom_up`].
#[inline]
pub fn to_top_down(page_height: f64, y_bottom: f64, height: f64) -> f64 {
    page_height - y_bottom - height
}
