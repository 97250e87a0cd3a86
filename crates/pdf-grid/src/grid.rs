//! Grid sheet generation
//!
//! This module orchestrates the whole process:
//! 1. Read descriptors from an image source
//! 2. Lay them out on the page grid
//! 3. Emit the pages into a PDF document
//! 4. Serialize the document to disk

use crate::layout::{PageGeometry, layout};
use crate::render::{PdfEmitter, emit_pages};
use crate::source::{ImageLibrary, ImageSource};
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Lay out every image in the library and render the pages.
///
/// The library moves onto the blocking task that draws it.
pub async fn generate_pdf(library: ImageLibrary, geometry: &PageGeometry) -> Result<Document> {
    let geometry = *geometry;

    tokio::task::spawn_blocking(move || build_document(&library, &geometry)).await?
}

/// Synchronous core of [`generate_pdf`], usable with any image source.
pub fn build_document<S: ImageSource + ?Sized>(
    source: &S,
    geometry: &PageGeometry,
) -> Result<Document> {
    let placements = layout(&source.descriptors(), geometry)?;

    let mut emitter = PdfEmitter::new(source, geometry);
    let pages = emit_pages(&placements, &mut emitter)?;

    log::info!(
        "Placed {} image(s) on {} page(s)",
        placements.len(),
        pages
    );
    emitter.finish()
}

/// Save the generated document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, GridError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
