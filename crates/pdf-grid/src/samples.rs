//! Sample input generation
//!
//! Writes transparent PNGs of random size, each holding one semi-transparent
//! shape inset from the canvas edge. They exercise both trimming and the
//! layout of mixed aspect ratios.

use crate::types::*;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_ellipse_mut,
    draw_hollow_polygon_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// How many sample images to write and how large they may be (pixels)
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOptions {
    pub count: usize,
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            count: 50,
            min_width: 200,
            max_width: 800,
            min_height: 200,
            max_height: 1000,
            seed: None,
        }
    }
}

impl SampleOptions {
    pub fn validate(&self) -> Result<()> {
        if self.min_width == 0 || self.min_height == 0 {
            return Err(GridError::Config(
                "Sample sizes must be at least 1 pixel".to_string(),
            ));
        }
        if self.min_width > self.max_width || self.min_height > self.max_height {
            return Err(GridError::Config(format!(
                "Sample size range is empty: width {}..={}, height {}..={}",
                self.min_width, self.max_width, self.min_height, self.max_height
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Rectangle,
    Ellipse,
    Triangle,
    Line,
}

const SHAPES: [Shape; 4] = [Shape::Rectangle, Shape::Ellipse, Shape::Triangle, Shape::Line];

/// Write `img_01.png`, `img_02.png`, ... into `dir`, creating it if needed.
///
/// Returns the written paths in order.
pub async fn generate_samples(
    dir: impl AsRef<Path>,
    options: &SampleOptions,
) -> Result<Vec<PathBuf>> {
    options.validate()?;
    let dir = dir.as_ref().to_owned();
    tokio::fs::create_dir_all(&dir).await?;

    let options = options.clone();
    let paths = tokio::task::spawn_blocking(move || {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut paths = Vec::with_capacity(options.count);
        for i in 1..=options.count {
            let width = rng.random_range(options.min_width..=options.max_width);
            let height = rng.random_range(options.min_height..=options.max_height);

            let path = dir.join(format!("img_{:02}.png", i));
            sample_image(&mut rng, width, height).save(&path)?;
            log::debug!("Wrote {} ({}x{})", path.display(), width, height);
            paths.push(path);
        }
        Ok::<_, GridError>(paths)
    })
    .await??;

    log::info!("Generated {} sample image(s)", paths.len());
    Ok(paths)
}

/// Draw one random shape on a transparent `width x height` canvas.
///
/// The shape's bounding box starts between 10% and 30% in from the top-left
/// edges and ends between 70% and 90% across, so every sample has a
/// transparent border to trim.
pub fn sample_image<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    let (w, h) = (width as i32, height as i32);
    let (pad_w, pad_h) = (w / 10, h / 10);
    let x1 = rng.random_range(pad_w..=(w * 3 / 10).max(pad_w));
    let y1 = rng.random_range(pad_h..=(h * 3 / 10).max(pad_h));
    let x2 = rng.random_range((w * 7 / 10).max(x1)..=(w - pad_w).max(x1));
    let y2 = rng.random_range((h * 7 / 10).max(y1)..=(h - pad_h).max(y1));

    let fill = Rgba([
        rng.random_range(60..=220),
        rng.random_range(60..=220),
        rng.random_range(60..=220),
        180,
    ]);
    let outline = Rgba([
        rng.random_range(0..=120),
        rng.random_range(0..=120),
        rng.random_range(0..=120),
        255,
    ]);
    let stroke = (w.min(h) / 50).max(2);

    match SHAPES[rng.random_range(0..SHAPES.len())] {
        Shape::Rectangle => {
            let (rw, rh) = (x2 - x1 + 1, y2 - y1 + 1);
            draw_filled_rect_mut(&mut img, Rect::at(x1, y1).of_size(rw as u32, rh as u32), fill);
            for t in 0..stroke {
                if rw - 2 * t < 1 || rh - 2 * t < 1 {
                    break;
                }
                let inset = Rect::at(x1 + t, y1 + t)
                    .of_size((rw - 2 * t) as u32, (rh - 2 * t) as u32);
                draw_hollow_rect_mut(&mut img, inset, outline);
            }
        }
        Shape::Ellipse => {
            let center = ((x1 + x2) / 2, (y1 + y2) / 2);
            let (rx, ry) = ((x2 - x1) / 2, (y2 - y1) / 2);
            if rx > 0 && ry > 0 {
                draw_filled_ellipse_mut(&mut img, center, rx, ry, fill);
                for t in 0..stroke.min(rx).min(ry) {
                    draw_hollow_ellipse_mut(&mut img, center, rx - t, ry - t, outline);
                }
            }
        }
        Shape::Triangle => {
            let apex = rng.random_range(x1..=x2);
            if y2 > y1 && x2 > x1 {
                let points = [Point::new(apex, y1), Point::new(x1, y2), Point::new(x2, y2)];
                draw_polygon_mut(&mut img, &points, fill);
                let edge: Vec<Point<f32>> = points
                    .iter()
                    .map(|p| Point::new(p.x as f32, p.y as f32))
                    .collect();
                draw_hollow_polygon_mut(&mut img, &edge, outline);
            }
        }
        Shape::Line => {
            let thickness = stroke * 2;
            for offset in -(thickness / 2)..(thickness - thickness / 2) {
                draw_line_segment_mut(
                    &mut img,
                    (x1 as f32, (y1 + offset) as f32),
                    (x2 as f32, (y2 + offset) as f32),
                    outline,
                );
            }
        }
    }

    img
}
