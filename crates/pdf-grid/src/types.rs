use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Invalid image #{index} ({identifier}): {width}x{height}, both sides must be positive")]
    InvalidImage {
        index: usize,
        identifier: String,
        width: u32,
        height: u32,
    },
    #[error("Image not found: {0}")]
    ImageNotFound(String),
    #[error("Emit error: {0}")]
    Emit(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f64, height_mm: f64 },
}

impl PaperSize {
    /// Get base dimensions (always portrait for standard sizes)
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f64, f64) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// An image as seen by the layout engine: an opaque identifier plus pixel size.
///
/// The identifier is whatever the [`ImageSource`](crate::ImageSource) needs to
/// hand the pixels back at emission time (the file name for directory sources).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageDescriptor {
    pub identifier: String,
    pub width: u32,
    pub height: u32,
}

impl ImageDescriptor {
    pub fn new(identifier: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            identifier: identifier.into(),
            width,
            height,
        }
    }
}

/// Statistics about a grid layout
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridStatistics {
    /// Number of images placed
    pub images: usize,
    /// Number of output pages
    pub pages: usize,
    /// Cells per page (rows * columns)
    pub slots_per_page: usize,
    /// Unfilled cells on the last page
    pub empty_slots: usize,
}
