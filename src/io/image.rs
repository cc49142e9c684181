//! PNG export of finished paintings by direct rasterisation

use crate::geometry::{Line, Orientation, Vector};
use crate::io::configuration::{BORDER_STROKE_WIDTH, LINE_STROKE_WIDTH};
use crate::io::error::{AlgorithmError, Result, file_system_error};
use crate::render::Painting;
use image::{Rgba, RgbaImage};
use std::ops::Range;
use std::path::Path;

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

// Half-open pixel range covering `[low, high]` widened by `pad` on each side
fn pixel_range(low: f64, high: f64, pad: f64, limit: u32) -> Range<u32> {
    let clamp = |value: f64| value.round().clamp(0.0, f64::from(limit)) as u32;
    clamp(low - pad)..clamp(high + pad)
}

// Cuts are axis aligned, so each stroke is a rectangle with butt ends
fn draw_cut(img: &mut RgbaImage, painting: &Painting, cut: &Line) {
    let (start, end) = (cut.origin, cut.end());
    let (x0, x1) = (painting.scale_x(start.x), painting.scale_x(end.x));
    let (y0, y1) = (painting.scale_y(start.y), painting.scale_y(end.y));
    let (width, height) = img.dimensions();
    let half = f64::from(LINE_STROKE_WIDTH) / 2.0;

    let (pad_x, pad_y) = match cut.orientation() {
        Orientation::Horizontal => (0.0, half),
        Orientation::Vertical => (half, 0.0),
    };
    let xs = pixel_range(x0.min(x1), x0.max(x1), pad_x, width);
    let ys = pixel_range(y0.min(y1), y0.max(y1), pad_y, height);

    for y in ys {
        for x in xs.clone() {
            img.put_pixel(x, y, INK);
        }
    }
}

/// Rasterise a painting at its own pixel size
///
/// Each pixel takes the colour of the face containing its centre; cuts and
/// the frame are then drawn with the same stroke widths as the SVG output.
/// The frame stroke is centred on the canvas edge, so only its inner half is
/// visible.
pub fn rasterize(painting: &Painting) -> RgbaImage {
    let (width, height) = (painting.width, painting.height);
    let mut img = RgbaImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let center = Vector::new(
            (f64::from(x) + 0.5) / f64::from(width),
            (f64::from(y) + 0.5) / f64::from(height),
        );
        *pixel = painting
            .faces
            .iter()
            .find(|face| face.polygon.contains(center))
            .map_or(INK, |face| Rgba(face.color.rgba()));
    }

    for cut in &painting.cuts {
        draw_cut(&mut img, painting, cut);
    }

    let frame = BORDER_STROKE_WIDTH / 2;
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if x < frame || y < frame || x + frame >= width || y + frame >= height {
            *pixel = INK;
        }
    }

    img
}

/// Export a painting as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_painting_as_png(painting: &Painting, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(file_system_error(parent, "create directory"))?;
    }

    rasterize(painting)
        .save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
