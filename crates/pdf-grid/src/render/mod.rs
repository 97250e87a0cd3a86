//! Page emission
//!
//! The layout engine produces placements; an emitter turns them into
//! output pages. This module holds the emitter seam and the driver that
//! feeds placements to it page by page:
//! - `PageEmitter`: the drawing capability a backend implements
//! - `emit_pages`: groups placements and issues begin/draw/finish calls
//! - `PdfEmitter`: lopdf backend drawing image XObjects

mod pdf;

pub use pdf::PdfEmitter;

use crate::layout::{Placement, paginate};
use crate::types::Result;

/// A backend that draws placed images onto successive pages.
///
/// Calls always arrive as `begin_page`, zero or more `draw`, `finish_page`,
/// with page indices strictly increasing.
pub trait PageEmitter {
    /// Open a new output page
    fn begin_page(&mut self, page_index: usize) -> Result<()>;

    /// Draw one image at its placement on the open page
    fn draw(&mut self, placement: &Placement) -> Result<()>;

    /// Commit the open page to the output
    fn finish_page(&mut self) -> Result<()>;
}

/// Feed placements to an emitter, one page at a time in page order.
///
/// Returns the number of pages emitted. An empty placement list emits
/// nothing.
pub fn emit_pages<E: PageEmitter + ?Sized>(
    placements: &[Placement],
    emitter: &mut E,
) -> Result<usize> {
    let pages = paginate(placements);

    for page in &pages {
        emitter.begin_page(page.page_index)?;
        for placement in &page.placements {
            emitter.draw(placement)?;
        }
        emitter.finish_page()?;
    }

    Ok(pages.len())
}
