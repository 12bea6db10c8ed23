use image::RgbaImage;
use rayon::prelude::*;

use crate::consts::{PARALLEL_PIXEL_THRESHOLD, RGBA_CHANNELS};
use crate::fit::Placement;
use crate::io::image_io::OverlayImage;
use crate::render::OverlayView;

/// Blend `overlay` onto `base` the way the live overlay would appear:
/// placed by `view.placement`, faded by `view.opacity`, nearest sampling.
///
/// `view` coordinates are taken as base-image pixels. Nothing is drawn when
/// the view is hidden or has no placement.
pub fn composite(base: &mut RgbaImage, view: &OverlayView, overlay: &OverlayImage) {
    let Some(placement) = view.placement else {
        return;
    };
    if !view.visible || placement.dest.is_empty() || view.opacity <= 0.0 {
        return;
    }

    let (w, h) = base.dimensions();
    let row_len = w as usize * RGBA_CHANNELS;
    if row_len == 0 {
        return;
    }
    let opacity = view.opacity.min(1.0);
    let apply = |(y, row): (usize, &mut [u8])| {
        blend_row(row, y as u32, &placement, overlay, opacity);
    };

    let buf: &mut [u8] = &mut **base;
    if (w as usize) * (h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        buf.par_chunks_mut(row_len).enumerate().for_each(apply);
    } else {
        buf.chunks_mut(row_len).enumerate().for_each(apply);
    }
}

fn blend_row(row: &mut [u8], y: u32, placement: &Placement, overlay: &OverlayImage, opacity: f32) {
    let dest = placement.dest;
    let uv = placement.uv;
    let cy = y as f32 + 0.5;
    if cy < dest.top || cy >= dest.bottom() {
        return;
    }
    let v = uv.min_v + (cy - dest.top) / dest.height * (uv.max_v - uv.min_v);
    let sy = source_index(v, overlay.height);

    for (x, px) in row.chunks_exact_mut(RGBA_CHANNELS).enumerate() {
        let cx = x as f32 + 0.5;
        if cx < dest.left || cx >= dest.right() {
            continue;
        }
        let u = uv.min_u + (cx - dest.left) / dest.width * (uv.max_u - uv.min_u);
        let src = overlay.pixel(source_index(u, overlay.width), sy);
        blend_pixel(px, src, opacity);
    }
}

fn source_index(t: f32, extent: u32) -> u32 {
    ((t * extent as f32) as u32).min(extent.saturating_sub(1))
}

/// Source-over blend of straight RGBA `src` scaled by `opacity` onto `dst`.
fn blend_pixel(dst: &mut [u8], src: [u8; 4], opacity: f32) {
    let a = f32::from(src[3]) / 255.0 * opacity;
    for c in 0..3 {
        let value = f32::from(src[c]) * a + f32::from(dst[c]) * (1.0 - a);
        dst[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    let dst_a = f32::from(dst[3]) / 255.0;
    dst[3] = ((a + dst_a * (1.0 - a)) * 255.0).round().clamp(0.0, 255.0) as u8;
}
