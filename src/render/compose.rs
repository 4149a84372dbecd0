//! CPU-side frame preparation: decode, downscale to fit, center on black.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

/// Decode `path` and composite it onto a canvas-sized frame.
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded; the caller is
/// expected to log and keep the previous frame.
pub fn prepare(path: &Path, canvas_w: u32, canvas_h: u32) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .to_rgba8();
    Ok(compose(&img, canvas_w, canvas_h))
}

/// Scale `img` down (never up) to fit the canvas, preserving aspect ratio,
/// and overlay it centered on an opaque black background.
pub fn compose(img: &RgbaImage, canvas_w: u32, canvas_h: u32) -> RgbaImage {
    use image::Rgba;
    use image::imageops::{FilterType, overlay, resize};

    let mut bg = RgbaImage::from_pixel(canvas_w, canvas_h, Rgba([0, 0, 0, 255]));
    let (dest_w, dest_h) = scaled_size(img.width(), img.height(), canvas_w, canvas_h);
    let dx = i64::from((canvas_w - dest_w) / 2);
    let dy = i64::from((canvas_h - dest_h) / 2);

    if (dest_w, dest_h) == (img.width(), img.height()) {
        overlay(&mut bg, img, dx, dy);
    } else {
        let scaled = resize(img, dest_w, dest_h, FilterType::Triangle);
        overlay(&mut bg, &scaled, dx, dy);
    }
    bg
}

/// Target dimensions for an image fitted into the canvas. The scale factor
/// is clamped to 1.0: small images are centered at their native size.
fn scaled_size(img_w: u32, img_h: u32, canvas_w: u32, canvas_h: u32) -> (u32, u32) {
    let sw = (canvas_w as f32) / (img_w.max(1) as f32);
    let sh = (canvas_h as f32) / (img_h.max(1) as f32);
    let s = sw.min(sh).min(1.0);
    let dest_w = ((img_w as f32) * s).floor().max(1.0) as u32;
    let dest_h = ((img_h as f32) * s).floor().max(1.0) as u32;
    (dest_w, dest_h)
}
