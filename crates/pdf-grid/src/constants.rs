//! Shared constants for grid sheets
//!
//! This module centralizes magic numbers and defaults used throughout
//! layout, configuration and rendering.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f64 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Grid Defaults
// =============================================================================

/// Default number of columns per page
pub const DEFAULT_COLUMNS: usize = 3;

/// Default number of rows per page
pub const DEFAULT_ROWS: usize = 4;

/// Default gap between cells and around the page edge (points)
pub const DEFAULT_MARGIN_PT: f64 = 10.0;

// =============================================================================
// Input
// =============================================================================

/// File extensions picked up when scanning an image directory (lowercase)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Background the trimmed images are flattened onto
pub const BACKGROUND_RGB: [u8; 3] = [255, 255, 255];
