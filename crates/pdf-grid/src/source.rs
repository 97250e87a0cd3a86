//! Image sources
//!
//! The layout engine only needs identifiers and pixel sizes; emitters need
//! the pixels themselves. [`ImageSource`] provides both. [`ImageLibrary`]
//! is the in-memory implementation, filled from a directory or from
//! already-decoded images.

use crate::constants::{BACKGROUND_RGB, SUPPORTED_EXTENSIONS};
use crate::types::*;
use image::{DynamicImage, Rgba, RgbImage, RgbaImage, imageops};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Supplies ordered image descriptors and, later, their pixel content.
pub trait ImageSource {
    /// Descriptors in document order
    fn descriptors(&self) -> Vec<ImageDescriptor>;

    /// Opaque RGB pixels for a descriptor's identifier
    fn pixels(&self, identifier: &str) -> Result<&RgbImage>;
}

#[derive(Debug, Clone)]
struct SourceImage {
    identifier: String,
    pixels: RgbImage,
}

/// Decoded, flattened images kept in document order
#[derive(Debug, Clone, Default)]
pub struct ImageLibrary {
    images: Vec<SourceImage>,
    by_identifier: HashMap<String, usize>,
}

impl ImageLibrary {
    /// Build a library from decoded images, keeping their order.
    ///
    /// Identifiers must be unique.
    pub fn from_images(images: Vec<(String, DynamicImage)>, trim: bool) -> Result<Self> {
        let mut library = Self::default();
        for (identifier, image) in images {
            library.push(identifier, prepare_image(&image, trim))?;
        }
        Ok(library)
    }

    fn push(&mut self, identifier: String, pixels: RgbImage) -> Result<()> {
        if self.by_identifier.contains_key(&identifier) {
            return Err(GridError::Config(format!(
                "Duplicate image identifier: {}",
                identifier
            )));
        }
        self.by_identifier
            .insert(identifier.clone(), self.images.len());
        self.images.push(SourceImage { identifier, pixels });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Identifiers in document order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(|img| img.identifier.as_str())
    }
}

impl ImageSource for ImageLibrary {
    fn descriptors(&self) -> Vec<ImageDescriptor> {
        self.images
            .iter()
            .map(|img| {
                ImageDescriptor::new(
                    img.identifier.clone(),
                    img.pixels.width(),
                    img.pixels.height(),
                )
            })
            .collect()
    }

    fn pixels(&self, identifier: &str) -> Result<&RgbImage> {
        self.by_identifier
            .get(identifier)
            .map(|&idx| &self.images[idx].pixels)
            .ok_or_else(|| GridError::ImageNotFound(identifier.to_string()))
    }
}

// =============================================================================
// Directory Loading
// =============================================================================

/// Load every supported image in `dir`, sorted by file name.
///
/// Subdirectories are ignored. An empty directory yields an empty library.
pub async fn load_image_dir(dir: impl AsRef<Path>, trim: bool) -> Result<ImageLibrary> {
    let paths = list_image_files(dir.as_ref()).await?;

    let mut library = ImageLibrary::default();
    for path in paths {
        let identifier = file_name(&path);
        let bytes = tokio::fs::read(&path).await?;

        let pixels = tokio::task::spawn_blocking(move || {
            let image = image::load_from_memory(&bytes)?;
            Ok::<_, GridError>(prepare_image(&image, trim))
        })
        .await??;

        log::debug!(
            "Loaded {} ({}x{})",
            identifier,
            pixels.width(),
            pixels.height()
        );
        library.push(identifier, pixels)?;
    }

    log::info!(
        "Loaded {} image(s) from {}",
        library.len(),
        dir.as_ref().display()
    );
    Ok(library)
}

/// Supported image files directly inside `dir`, sorted by file name
pub async fn list_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut paths = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file() && is_supported(&path) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// =============================================================================
// Pre-processing
// =============================================================================

/// Optionally trim transparent borders, then flatten onto the background.
pub fn prepare_image(image: &DynamicImage, trim: bool) -> RgbImage {
    let rgba = image.to_rgba8();
    let rgba = if trim { trim_transparent(&rgba) } else { rgba };
    flatten(&rgba)
}

/// Crop to the bounding box of pixels that are not fully transparent.
///
/// A fully transparent image is returned unchanged.
pub fn trim_transparent(image: &RgbaImage) -> RgbaImage {
    match opaque_bounds(image) {
        Some((x, y, width, height)) => imageops::crop_imm(image, x, y, width, height).to_image(),
        None => image.clone(),
    }
}

/// Bounding box `(x, y, width, height)` of pixels with non-zero alpha
fn opaque_bounds(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    bounds.map(|(min_x, min_y, max_x, max_y)| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Composite over an opaque background and drop the alpha channel
fn flatten(image: &RgbaImage) -> RgbImage {
    let [r, g, b] = BACKGROUND_RGB;
    let mut canvas = RgbaImage::from_pixel(image.width(), image.height(), Rgba([r, g, b, 255]));
    imageops::overlay(&mut canvas, image, 0, 0);
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}
