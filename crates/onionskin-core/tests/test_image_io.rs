mod common;

use common::{png_bytes, solid_overlay};
use image::{Rgba, RgbaImage};
use onionskin_core::fit::{place, FitMode};
use onionskin_core::geometry::Rect;
use onionskin_core::io::composite::composite;
use onionskin_core::io::image_io::{decode_bytes, decode_file, first_selected, load_rgba, save_rgba};
use onionskin_core::render::OverlayView;

#[test]
fn test_decode_png_bytes() {
    let img = decode_bytes(&png_bytes(6, 3, [10, 20, 30, 200])).unwrap();
    assert_eq!((img.width, img.height), (6, 3));
    assert_eq!(img.byte_len(), 6 * 3 * 4);
    assert_eq!(img.pixel(5, 2), [10, 20, 30, 200]);
}

#[test]
fn test_decode_garbage_fails() {
    assert!(decode_bytes(b"definitely not a png").is_err());
}

#[test]
fn test_decode_file_sniffs_format_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design");
    std::fs::write(&path, png_bytes(4, 4, [1, 2, 3, 255])).unwrap();
    let img = decode_file(&path).unwrap();
    assert_eq!((img.width, img.height), (4, 4));
}

#[test]
fn test_decode_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(decode_file(&dir.path().join("missing.png")).is_err());
}

#[test]
fn test_first_selected_ignores_rest() {
    let paths: Vec<std::path::PathBuf> = vec!["a.png".into(), "b.png".into()];
    assert_eq!(first_selected(&paths), Some(std::path::Path::new("a.png")));
    assert_eq!(first_selected(&[]), None);
}

#[test]
fn test_save_and_load_rgba() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let img = RgbaImage::from_pixel(3, 2, Rgba([5, 6, 7, 255]));
    save_rgba(&img, &path).unwrap();
    assert_eq!(load_rgba(&path).unwrap(), img);
}

fn view_for(overlay_size: (u32, u32), bounds: Rect, mode: FitMode, opacity: f32) -> OverlayView {
    let overlay = solid_overlay(overlay_size.0, overlay_size.1, [0, 0, 0, 255]);
    OverlayView {
        visible: true,
        opacity,
        bounds,
        placement: Some(place(mode, overlay.size(), bounds)),
    }
}

#[test]
fn test_composite_full_opacity_covers_base() {
    let mut base = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
    let overlay = solid_overlay(8, 8, [255, 0, 0, 255]);
    let view = view_for((8, 8), Rect::new(0.0, 0.0, 8.0, 8.0), FitMode::Contain, 1.0);
    composite(&mut base, &view, &overlay);
    assert!(base.pixels().all(|p| p.0 == [255, 0, 0, 255]));
}

#[test]
fn test_composite_half_opacity() {
    let mut base = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let overlay = solid_overlay(4, 4, [255, 255, 255, 255]);
    let view = view_for((4, 4), Rect::new(0.0, 0.0, 4.0, 4.0), FitMode::Contain, 0.5);
    composite(&mut base, &view, &overlay);
    assert_eq!(base.get_pixel(2, 2).0, [128, 128, 128, 255]);
}

#[test]
fn test_composite_none_centered_touches_only_center() {
    let mut base = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
    let overlay = solid_overlay(2, 2, [255, 255, 255, 255]);
    let view = view_for((2, 2), Rect::new(0.0, 0.0, 10.0, 10.0), FitMode::NoneCentered, 1.0);
    composite(&mut base, &view, &overlay);

    for y in 0..10 {
        for x in 0..10 {
            let inside = (4..6).contains(&x) && (4..6).contains(&y);
            let expected = if inside { 255 } else { 0 };
            assert_eq!(base.get_pixel(x, y).0[0], expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn test_composite_hidden_view_is_noop() {
    let mut base = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
    let overlay = solid_overlay(4, 4, [255, 255, 255, 255]);
    let mut view = view_for((4, 4), Rect::new(0.0, 0.0, 4.0, 4.0), FitMode::Contain, 1.0);
    view.visible = false;
    composite(&mut base, &view, &overlay);
    assert!(base.pixels().all(|p| p.0 == [9, 9, 9, 255]));
}

#[test]
fn test_composite_large_image_parallel_path() {
    let mut base = RgbaImage::from_pixel(512, 256, Rgba([0, 0, 0, 255]));
    let overlay = solid_overlay(64, 32, [0, 255, 0, 255]);
    let view = view_for((64, 32), Rect::new(0.0, 0.0, 512.0, 256.0), FitMode::Cover, 1.0);
    composite(&mut base, &view, &overlay);
    assert_eq!(base.get_pixel(0, 0).0, [0, 255, 0, 255]);
    assert_eq!(base.get_pixel(511, 255).0, [0, 255, 0, 255]);
}
