use pdf_grid::layout::{GridPosition, to_bottom_up, to_top_down};
use pdf_grid::*;
use std::collections::HashSet;

fn a4_like() -> PageGeometry {
    PageGeometry::new(595.0, 842.0, 3, 4, 10.0).unwrap()
}

/// Images with a spread of sizes and aspect ratios
fn mixed_images(count: usize) -> Vec<ImageDescriptor> {
    (0..count)
        .map(|i| {
            let width = 200 + (i as u32 * 137) % 600;
            let height = 200 + (i as u32 * 251) % 800;
            ImageDescriptor::new(format!("img_{:02}.png", i + 1), width, height)
        })
        .collect()
}

#[test]
fn test_one_placement_per_image_in_order() {
    let geometry = a4_like();

    for count in [0, 1, 11, 12, 13, 24, 50] {
        let images = mixed_images(count);
        let placements = layout(&images, &geometry).unwrap();

        assert_eq!(placements.len(), count);

        let identifiers: HashSet<_> = placements.iter().map(|p| &p.identifier).collect();
        assert_eq!(identifiers.len(), count);

        for (n, (placement, image)) in placements.iter().zip(&images).enumerate() {
            assert_eq!(placement.identifier, image.identifier);
            assert_eq!(placement.index, n);
        }
    }
}

#[test]
fn test_slot_formula() {
    let geometry = PageGeometry::new(500.0, 700.0, 4, 3, 5.0).unwrap();
    let placements = layout(&mixed_images(40), &geometry).unwrap();
    let k = 12;

    for (n, p) in placements.iter().enumerate() {
        assert_eq!(p.page_index, n / k);
        assert_eq!(p.row, (n % k) / 4);
        assert_eq!(p.column, (n % k) % 4);
    }
}

#[test]
fn test_row_major_fill_then_next_page() {
    let geometry = a4_like();
    let placements = layout(&mixed_images(13), &geometry).unwrap();

    let expected: Vec<GridPosition> = (0..4)
        .flat_map(|row| (0..3).map(move |col| GridPosition::new(row, col)))
        .collect();

    for (placement, pos) in placements[..12].iter().zip(&expected) {
        assert_eq!(placement.page_index, 0);
        assert_eq!(placement.grid_pos(), *pos);
    }

    // Image 12 is alone on page 1 at the top-left cell
    let last = &placements[12];
    assert_eq!(last.identifier, "img_13.png");
    assert_eq!(last.page_index, 1);
    assert_eq!((last.row, last.column), (0, 0));
}

#[test]
fn test_page_index_non_decreasing() {
    let placements = layout(&mixed_images(50), &a4_like()).unwrap();

    for pair in placements.windows(2) {
        assert!(pair[0].page_index <= pair[1].page_index);
    }
    assert_eq!(placements.last().unwrap().page_index, 4);
}

#[test]
fn test_aspect_ratio_preserved() {
    let geometry = a4_like();
    let images = mixed_images(50);
    let placements = layout(&images, &geometry).unwrap();

    for (p, image) in placements.iter().zip(&images) {
        let source_ratio = f64::from(image.width) / f64::from(image.height);
        let placed_ratio = p.scaled_width / p.scaled_height;

        // Truncating each side to whole points moves the ratio by at most
        // one point's worth on either side.
        let tolerance = source_ratio / p.scaled_height + 1.0 / p.scaled_height;
        assert!(
            (source_ratio - placed_ratio).abs() <= tolerance,
            "{}: {} vs {}",
            p.identifier,
            source_ratio,
            placed_ratio
        );
    }
}

#[test]
fn test_fits_inside_cell_and_binds_one_side() {
    let geometry = a4_like();
    let placements = layout(&mixed_images(50), &geometry).unwrap();

    for p in &placements {
        assert!(p.scaled_width <= geometry.cell_width());
        assert!(p.scaled_height <= geometry.cell_height());
        // The binding side reaches the cell edge, less truncation
        assert!(
            p.scaled_width >= geometry.cell_width() - 1.0
                || p.scaled_height >= geometry.cell_height() - 1.0
        );
        assert_eq!(p.scaled_width, p.scaled_width.floor());
        assert_eq!(p.scaled_height, p.scaled_height.floor());
    }
}

#[test]
fn test_centered_in_cell() {
    let geometry = a4_like();
    let placements = layout(&mixed_images(24), &geometry).unwrap();

    for p in &placements {
        let cell = geometry.cell_rect(p.row, p.column);
        let image = p.rect();

        assert!(cell.contains(&image));

        let left = image.x - cell.x;
        let right = cell.right() - image.right();
        let bottom = image.y - cell.y;
        let top = cell.top() - image.top();

        assert!(left >= 0.0 && bottom >= 0.0);
        assert!((left - right).abs() < 1e-9);
        assert!((bottom - top).abs() < 1e-9);
    }
}

#[test]
fn test_bottom_up_origin_accounts_for_height() {
    let geometry = a4_like();
    // 370x100 in a 185x198 cell: scale 0.5 -> 185x50, 74pt above and below
    let placements = layout(&[ImageDescriptor::new("wide", 370, 100)], &geometry).unwrap();
    let p = &placements[0];

    assert_eq!((p.scaled_width, p.scaled_height), (185.0, 50.0));
    assert_eq!(p.origin_x, 10.0);
    // Top edge 10 + 74 = 84 from the top; the lower-left corner is 50 below that
    assert_eq!(p.origin_y, 842.0 - 84.0 - 50.0);
    assert_eq!(p.top_left_y(geometry.page_height()), 84.0);
}

#[test]
fn test_coordinate_round_trip() {
    let geometry = a4_like();
    let placements = layout(&mixed_images(12), &geometry).unwrap();

    for p in &placements {
        let y_top = p.top_left_y(geometry.page_height());
        assert_eq!(
            to_bottom_up(geometry.page_height(), y_top, p.scaled_height),
            p.origin_y
        );
        assert_eq!(
            to_top_down(geometry.page_height(), p.origin_y, p.scaled_height),
            y_top
        );
    }
}

#[test]
fn test_bottom_row_sits_on_bottom_margin() {
    let geometry = a4_like();
    // 100x396 in 185x198: height binds at scale 0.5, so the image spans the cell
    let mut images = mixed_images(9);
    images.push(ImageDescriptor::new("tall", 100, 396));
    let placements = layout(&images, &geometry).unwrap();

    let tall = &placements[9];
    assert_eq!((tall.row, tall.column), (3, 0));
    assert_eq!(tall.scaled_height, 198.0);
    assert_eq!(tall.origin_y, 10.0);
}

#[test]
fn test_zero_images() {
    let placements = layout(&[], &a4_like()).unwrap();
    assert!(placements.is_empty());
    assert!(paginate(&placements).is_empty());
}

#[test]
fn test_invalid_geometry() {
    assert!(matches!(
        PageGeometry::new(595.0, 842.0, 0, 4, 10.0),
        Err(GridError::InvalidGeometry(_))
    ));
    assert!(matches!(
        PageGeometry::new(595.0, 842.0, 3, 4, 300.0),
        Err(GridError::InvalidGeometry(_))
    ));
}

#[test]
fn test_invalid_image_aborts_whole_layout() {
    let mut images = mixed_images(5);
    images[3] = ImageDescriptor::new("broken.png", 0, 300);

    let result = layout(&images, &a4_like());

    match result {
        Err(GridError::InvalidImage {
            index, identifier, ..
        }) => {
            assert_eq!(index, 3);
            assert_eq!(identifier, "broken.png");
        }
        other => panic!("Expected InvalidImage, got {:?}", other),
    }
}

#[test]
fn test_zero_height_rejected() {
    let images = vec![ImageDescriptor::new("flat.png", 300, 0)];
    assert!(matches!(
        layout(&images, &a4_like()),
        Err(GridError::InvalidImage { .. })
    ));
}

/// Three columns of 1/3 pt each: 4 gaps of 148.5 leave 1pt across
fn sub_point_cells() -> PageGeometry {
    PageGeometry::new(595.0, 842.0, 3, 1, 148.5).unwrap()
}

#[test]
fn test_sub_point_cell_keeps_images_inside() {
    let geometry = sub_point_cells();
    assert!(geometry.cell_width() < 1.0);

    let images = vec![
        ImageDescriptor::new("dot.png", 1, 1),
        ImageDescriptor::new("tall.png", 1, 3000),
        ImageDescriptor::new("wide.png", 3000, 1),
    ];
    let placements = layout(&images, &geometry).unwrap();
    assert_eq!(placements.len(), 3);

    for placement in &placements {
        let cell = geometry.cell_rect(placement.row, placement.column);
        assert_eq!(placement.scaled_width, 0.0);
        assert!(placement.scaled_height <= geometry.cell_height());
        assert!(placement.origin_x >= cell.x);
        assert!(placement.origin_x + placement.scaled_width <= cell.right());
        assert!(placement.origin_y >= cell.y);
        assert!(placement.origin_y + placement.scaled_height <= cell.top());
    }
}

#[test]
fn test_sliver_truncates_to_zero_and_stays_centered() {
    let geometry = a4_like();
    let placements = layout(&[ImageDescriptor::new("line.png", 10_000, 1)], &geometry).unwrap();
    let placement = &placements[0];

    assert_eq!(placement.scaled_width, 185.0);
    assert_eq!(placement.scaled_height, 0.0);
    // Centered at mid-cell: 842 - 10 - 99
    assert_eq!(placement.origin_y, 733.0);
}

#[test]
fn test_uncountable_grid_rejected() {
    let huge = 1usize << (usize::BITS / 2);
    assert!(matches!(
        PageGeometry::new(1e30, 1e30, huge, huge, 0.0),
        Err(GridError::InvalidGeometry(_))
    ));
}

#[test]
fn test_large_grid_lays_out() {
    let geometry = PageGeometry::new(1e9, 1e9, 1 << 10, 1 << 10, 0.0).unwrap();
    let placements = layout(&mixed_images(3), &geometry).unwrap();

    assert_eq!(placements[2].page_index, 0);
    assert_eq!(placements[2].grid_pos(), GridPosition::new(0, 2));
}
