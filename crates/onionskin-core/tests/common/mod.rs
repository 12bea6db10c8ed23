#![allow(dead_code)]

use std::io::Cursor;
use std::time::{Duration, Instant};

use image::{ImageFormat, Rgba, RgbaImage};
use onionskin_core::config::OnionskinConfig;
use onionskin_core::controller::{OverlayController, OverlayMount};
use onionskin_core::geometry::Rect;
use onionskin_core::io::image_io::OverlayImage;

/// Reference container used by most controller tests.
pub fn app_shell() -> Rect {
    Rect::new(0.0, 64.0, 1280.0, 720.0)
}

/// Controller attached with default config to `reference`.
pub fn attached(reference: Rect) -> OverlayController {
    OverlayController::attach(OverlayMount::complete(reference), &OnionskinConfig::default())
        .expect("complete mount attaches")
}

/// Solid-color decoded overlay.
pub fn solid_overlay(width: u32, height: u32, rgba: [u8; 4]) -> OverlayImage {
    OverlayImage::from_rgba(RgbaImage::from_pixel(width, height, Rgba(rgba)))
        .expect("non-empty image")
}

/// Encode a solid-color image as PNG bytes.
pub fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("encode png");
    buf.into_inner()
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Fixed origin so offsets read as milliseconds since the test began.
pub fn t0() -> Instant {
    Instant::now()
}
