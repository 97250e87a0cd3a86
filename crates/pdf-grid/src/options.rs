use crate::constants::{DEFAULT_COLUMNS, DEFAULT_MARGIN_PT, DEFAULT_ROWS, mm_to_pt};
use crate::layout::PageGeometry;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid sheet configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridOptions {
    // Input
    pub input_dir: PathBuf,
    pub trim_transparent: bool,

    // Page
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    // Grid
    pub columns: usize,
    pub rows: usize,
    pub margin_pt: f64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::new(),
            trim_transparent: true,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            margin_pt: DEFAULT_MARGIN_PT,
        }
    }
}

impl GridOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| GridError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GridError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page size in points with orientation applied
    pub fn page_size_pt(&self) -> (f64, f64) {
        let (width_mm, height_mm) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        (mm_to_pt(width_mm), mm_to_pt(height_mm))
    }

    /// Build the page geometry described by these options
    pub fn page_geometry(&self) -> Result<PageGeometry> {
        let (width_pt, height_pt) = self.page_size_pt();
        PageGeometry::new(width_pt, height_pt, self.columns, self.rows, self.margin_pt)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(GridError::Config("No input directory specified".to_string()));
        }

        self.page_geometry().map(|_| ())
    }
}
