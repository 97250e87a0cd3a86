use image::{DynamicImage, Rgba, RgbaImage};
use lopdf::Document;
use pdf_grid::*;
use std::path::Path;

fn a4_like() -> PageGeometry {
    PageGeometry::new(595.0, 842.0, 3, 4, 10.0).unwrap()
}

/// Transparent canvas with an opaque block in the middle
fn padded_image(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for x in width / 4..width * 3 / 4 {
        for y in height / 4..height * 3 / 4 {
            img.put_pixel(x, y, Rgba([30, 120, 200, 255]));
        }
    }
    img
}

fn write_images(dir: &Path, count: usize) {
    for i in 1..=count {
        let width = 40 + (i as u32 * 7) % 60;
        let height = 40 + (i as u32 * 13) % 90;
        padded_image(width, height)
            .save(dir.join(format!("img_{:02}.png", i)))
            .unwrap();
    }
}

fn library(count: usize) -> ImageLibrary {
    let images = (0..count)
        .map(|i| {
            (
                format!("img_{:02}.png", i),
                DynamicImage::ImageRgba8(padded_image(20 + i as u32, 30)),
            )
        })
        .collect();
    ImageLibrary::from_images(images, true).unwrap()
}

#[test]
fn test_build_document_page_count() {
    let doc = build_document(&library(13), &a4_like()).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn test_build_document_no_images() {
    let doc = build_document(&library(0), &a4_like()).unwrap();
    assert!(doc.get_pages().is_empty());
}

#[test]
fn test_page_content_draws_each_image() {
    let doc = build_document(&library(4), &a4_like()).unwrap();
    let pages = doc.get_pages();
    let page_id = *pages.get(&1).unwrap();

    let content = String::from_utf8(doc.get_page_content(page_id).unwrap()).unwrap();
    assert_eq!(content.matches(" Do Q").count(), 4);
    assert!(content.contains("/Im0 Do"));
    assert!(content.contains("/Im3 Do"));
}

#[test]
fn test_sub_point_cells_render_blank_pages() {
    // Every image truncates to zero width, so pages exist but nothing is painted
    let geometry = PageGeometry::new(595.0, 842.0, 3, 1, 148.5).unwrap();
    let doc = build_document(&library(4), &geometry).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 2);

    let content = doc.get_page_content(*pages.get(&1).unwrap()).unwrap();
    assert!(content.is_empty());
}

#[test]
fn test_emitter_rejects_unknown_image() {
    let source = library(1);
    let geometry = a4_like();
    let placements = layout(&[ImageDescriptor::new("ghost.png", 10, 10)], &geometry).unwrap();

    let mut emitter = PdfEmitter::new(&source, &geometry);
    let result = emit_pages(&placements, &mut emitter);
    assert!(matches!(result, Err(GridError::ImageNotFound(_))));
}

#[test]
fn test_emitter_rejects_unbalanced_calls() {
    let source = library(1);
    let geometry = a4_like();
    let mut emitter = PdfEmitter::new(&source, &geometry);

    assert!(emitter.finish_page().is_err());
    emitter.begin_page(0).unwrap();
    assert!(matches!(emitter.begin_page(1), Err(GridError::Emit(_))));
    assert!(emitter.finish().is_err());
}

#[tokio::test]
async fn test_load_image_dir_sorted_and_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    write_images(dir.path(), 3);
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
    std::fs::create_dir(dir.path().join("nested.png")).unwrap();

    let library = load_image_dir(dir.path(), true).await.unwrap();
    let identifiers: Vec<_> = library.identifiers().collect();
    assert_eq!(identifiers, vec!["img_01.png", "img_02.png", "img_03.png"]);

    // img_01 is 47x53 with an opaque block from 11..35 x 13..39
    let first = &library.descriptors()[0];
    assert_eq!((first.width, first.height), (24, 26));
}

#[tokio::test]
async fn test_load_image_dir_without_trim() {
    let dir = tempfile::tempdir().unwrap();
    write_images(dir.path(), 1);

    let library = load_image_dir(dir.path(), false).await.unwrap();
    let first = &library.descriptors()[0];
    assert_eq!((first.width, first.height), (47, 53));
}

#[tokio::test]
async fn test_load_empty_dir() {
    let dir = tempfile::tempdir().unwrap();
    let library = load_image_dir(dir.path(), true).await.unwrap();
    assert!(library.is_empty());
}

#[tokio::test]
async fn test_load_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_image_dir(dir.path().join("missing"), true).await;
    assert!(matches!(result, Err(GridError::Io(_))));
}

#[tokio::test]
async fn test_generate_and_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    write_images(dir.path(), 25);

    let options = GridOptions {
        input_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    options.validate().unwrap();

    let library = load_image_dir(&options.input_dir, options.trim_transparent)
        .await
        .unwrap();
    let geometry = options.page_geometry().unwrap();
    let doc = generate_pdf(library, &geometry).await.unwrap();

    let output = dir.path().join("output.pdf");
    save_pdf(doc, &output).await.unwrap();

    // 25 images at 12 per page
    let loaded = Document::load(&output).unwrap();
    assert_eq!(loaded.get_pages().len(), 3);
}
