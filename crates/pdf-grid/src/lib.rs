pub mod constants;
mod grid;
pub mod layout;
mod options;
pub mod render;
#[cfg(feature = "samples")]
mod samples;
mod source;
mod stats;
mod types;

pub use grid::{build_document, generate_pdf, save_pdf};
pub use layout::{PageGeometry, PageLayout, Placement, layout, paginate};
pub use options::*;
pub use render::{PageEmitter, PdfEmitter, emit_pages};
#[cfg(feature = "samples")]
pub use samples::{SampleOptions, generate_samples, sample_image};
pub use source::{ImageLibrary, ImageSource, list_image_files, load_image_dir, prepare_image};
pub use stats::calculate_statistics;
pub use types::*;
