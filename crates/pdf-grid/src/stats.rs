use crate::layout::{PageGeometry, page_count};
use crate::types::*;

/// Calculate statistics for laying out `image_count` images on `geometry`
pub fn calculate_statistics(image_count: usize, geometry: &PageGeometry) -> GridStatistics {
    let slots_per_page = geometry.capacity();
    let pages = page_count(image_count, geometry);

    // Cells left over on the last page
    let empty_slots = pages * slots_per_page - image_count;

    GridStatistics {
        images: image_count,
        pages,
        slots_per_page,
        empty_slots,
    }
}
