//! lopdf page emitter
//!
//! Each image becomes an `/Image` XObject. PDF paints an image into the
//! unit square, so the placement command scales it to the placed size and
//! translates it to the placement's lower-left corner.

use crate::layout::{PageGeometry, Placement};
use crate::source::ImageSource;
use crate::types::{GridError, Result};
use image::RgbImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::PageEmitter;

/// Page being filled between `begin_page` and `finish_page`
struct OpenPage {
    page_index: usize,
    content_ops: Vec<String>,
    xobjects: Dictionary,
}

/// Builds a PDF document from placements, fetching pixels from a source.
pub struct PdfEmitter<'a, S: ImageSource + ?Sized> {
    source: &'a S,
    output: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    page_width_pt: f64,
    page_height_pt: f64,
    xobject_cache: HashMap<String, ObjectId>,
    open_page: Option<OpenPage>,
}

impl<'a, S: ImageSource + ?Sized> PdfEmitter<'a, S> {
    pub fn new(source: &'a S, geometry: &PageGeometry) -> Self {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();

        Self {
            source,
            output,
            pages_tree_id,
            page_refs: Vec::new(),
            page_width_pt: geometry.page_width(),
            page_height_pt: geometry.page_height(),
            xobject_cache: HashMap::new(),
            open_page: None,
        }
    }

    /// Number of pages committed so far
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Write the page tree and catalog and hand back the document.
    pub fn finish(mut self) -> Result<Document> {
        if let Some(page) = &self.open_page {
            return Err(GridError::Emit(format!(
                "page {} was never finished",
                page.page_index
            )));
        }

        // Create pages tree
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        // Create catalog
        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));

        self.output.trailer.set("Root", catalog_id);

        Ok(self.output)
    }

    /// Add (or reuse) the image XObject for an identifier.
    fn image_xobject(&mut self, identifier: &str) -> Result<ObjectId> {
        if let Some(&id) = self.xobject_cache.get(identifier) {
            return Ok(id);
        }

        let source = self.source;
        let pixels = source.pixels(identifier)?;
        let id = self.output.add_object(image_stream(pixels)?);
        self.xobject_cache.insert(identifier.to_string(), id);
        Ok(id)
    }
}

impl<S: ImageSource + ?Sized> PageEmitter for PdfEmitter<'_, S> {
    fn begin_page(&mut self, page_index: usize) -> Result<()> {
        if let Some(page) = &self.open_page {
            return Err(GridError::Emit(format!(
                "cannot begin page {} while page {} is open",
                page_index, page.page_index
            )));
        }

        self.open_page = Some(OpenPage {
            page_index,
            content_ops: Vec::new(),
            xobjects: Dictionary::new(),
        });
        Ok(())
    }

    fn draw(&mut self, placement: &Placement) -> Result<()> {
        if self.open_page.is_none() {
            return Err(GridError::Emit(format!(
                "no open page for {}",
                placement.identifier
            )));
        }
        // Truncated to nothing, there is nothing to paint
        if placement.scaled_width <= 0.0 || placement.scaled_height <= 0.0 {
            log::debug!(
                "Skipping {}: scaled to {}x{}",
                placement.identifier,
                placement.scaled_width,
                placement.scaled_height
            );
            return Ok(());
        }

        let xobject_id = self.image_xobject(&placement.identifier)?;
        let page = self
            .open_page
            .as_mut()
            .ok_or_else(|| GridError::Emit("page closed while drawing".to_string()))?;

        let xobject_name = format!("Im{}", page.content_ops.len());
        page.xobjects
            .set(xobject_name.as_bytes(), Object::Reference(xobject_id));
        page.content_ops
            .push(generate_placement_command(&xobject_name, placement));
        Ok(())
    }

    fn finish_page(&mut self) -> Result<()> {
        let page = self
            .open_page
            .take()
            .ok_or_else(|| GridError::Emit("no open page to finish".to_string()))?;

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.page_width_pt as f32),
                Object::Real(self.page_height_pt as f32),
            ]),
        );

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(page.xobjects));

        let content = page.content_ops.join("");
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.output.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));

        log::debug!(
            "Finished page {} with {} image(s)",
            page.page_index,
            page.content_ops.len()
        );
        Ok(())
    }
}

/// Generate the content stream command that paints an image XObject.
fn generate_placement_command(xobject_name: &str, placement: &Placement) -> String {
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        placement.scaled_width,
        placement.scaled_height,
        placement.origin_x,
        placement.origin_y,
        xobject_name
    )
}

/// Build a compressed DeviceRGB image stream from 8-bit pixels.
fn image_stream(pixels: &RgbImage) -> Result<Stream> {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(i64::from(pixels.width())));
    dict.set("Height", Object::Integer(i64::from(pixels.height())));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));

    let mut stream = Stream::new(dict, pixels.as_raw().clone());
    stream.compress()?;
    Ok(stream)
}
