//! Slot assignment, scale-to-fit and pagination
//!
//! Images are assigned to cells strictly in input order: the first
//! `rows * columns` images fill page 0 row by row, the next batch fills
//! page 1, and so on. The last page may be partially filled; empty cells
//! produce no placement.

use crate::types::{GridError, ImageDescriptor, Result};

use super::{GridPosition, PageGeometry, PageLayout, Placement, to_bottom_up};

// =============================================================================
// Layout
// =============================================================================

/// Compute one placement per image, in input order.
///
/// Fails with [`GridError::InvalidImage`] on the first image with a zero
/// side; no placements are returned in that case.
pub fn layout(images: &[ImageDescriptor], geometry: &PageGeometry) -> Result<Vec<Placement>> {
    images
        .iter()
        .enumerate()
        .map(|(index, image)| place_image(index, image, geometry))
        .collect()
}

/// Compute the placement of the image at input position `index`.
pub fn place_image(
    index: usize,
    image: &ImageDescriptor,
    geometry: &PageGeometry,
) -> Result<Placement> {
    if image.width == 0 || image.height == 0 {
        return Err(GridError::InvalidImage {
            index,
            identifier: image.identifier.clone(),
            width: image.width,
            height: image.height,
        });
    }

    let (page_index, pos) = slot_for_index(index, geometry);
    let (scaled_width, scaled_height) = scale_to_fit(
        image.width,
        image.height,
        geometry.cell_width(),
        geometry.cell_height(),
    );

    // Center inside the cell, working top-down, then flip once
    let (cell_x, cell_y) = geometry.cell_top_left(pos.row, pos.col);
    let offset_x = (geometry.cell_width() - scaled_width) / 2.0;
    let offset_y = (geometry.cell_height() - scaled_height) / 2.0;

    Ok(Placement {
        identifier: image.identifier.clone(),
        index,
        page_index,
        row: pos.row,
        column: pos.col,
        scaled_width,
        scaled_height,
        origin_x: cell_x + offset_x,
        origin_y: to_bottom_up(geometry.page_height(), cell_y + offset_y, scaled_height),
    })
}

/// Page and cell for the image at input position `index`.
pub fn slot_for_index(index: usize, geometry: &PageGeometry) -> (usize, GridPosition) {
    let capacity = geometry.capacity();
    let slot = index % capacity;
    (
        index / capacity,
        GridPosition::new(slot / geometry.columns(), slot % geometry.columns()),
    )
}

/// Uniformly scale `width x height` so it fits inside the cell.
///
/// The smaller of the two ratios wins so neither side overflows. Scaled
/// sides are truncated to whole points, so a side thinner than one point
/// after scaling comes out as zero and the result never exceeds the cell.
pub fn scale_to_fit(width: u32, height: u32, cell_width: f64, cell_height: f64) -> (f64, f64) {
    let (width, height) = (f64::from(width), f64::from(height));
    let scale = (cell_width / width).min(cell_height / height);

    (
        (width * scale).floor(),
        (height * scale).floor(),
    )
}

// =============================================================================
// Pagination
// =============================================================================

/// Number of pages needed for `image_count` images.
pub fn page_count(image_count: usize, geometry: &PageGeometry) -> usize {
    image_count.div_ceil(geometry.capacity())
}

/// Group placements by page, in increasing page order.
///
/// Placements keep their relative order within a page. No page is
/// produced for an empty input.
pub fn paginate(placements: &[Placement]) -> Vec<PageLayout> {
    let mut pages: Vec<PageLayout> = Vec::new();

    let mut sorted: Vec<&Placement> = placements.iter().collect();
    sorted.sort_by_key(|p| p.page_index);

    for placement in sorted {
        match pages.last_mut() {
            Some(page) if page.page_index == placement.page_index => {
                page.placements.push(placement.clone());
            }
            _ => pages.push(PageLayout {
                page_index: placement.page_index,
                placements: vec![placement.clone()],
            }),
        }
    }

    pages
}

// =============================================================================
// Tests
// =============================================================================
