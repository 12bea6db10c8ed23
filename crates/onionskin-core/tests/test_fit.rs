use approx::assert_relative_eq;
use onionskin_core::fit::{place, FitMode};
use onionskin_core::geometry::{Rect, Size, UvRect};

fn bounds() -> Rect {
    Rect::new(10.0, 20.0, 400.0, 200.0)
}

#[test]
fn test_contain_wide_box_letterboxes_sides() {
    // 100x100 into 400x200: scale 2, 200x200 centered horizontally.
    let p = place(FitMode::Contain, Size::new(100.0, 100.0), bounds());
    assert_relative_eq!(p.scale, 2.0);
    assert_relative_eq!(p.dest.left, 110.0);
    assert_relative_eq!(p.dest.top, 20.0);
    assert_relative_eq!(p.dest.width, 200.0);
    assert_relative_eq!(p.dest.height, 200.0);
    assert_eq!(p.uv, UvRect::FULL);
}

#[test]
fn test_cover_fills_box_and_crops() {
    // 100x100 into 400x200: scale 4, 400x400, top and bottom quarter cropped.
    let p = place(FitMode::Cover, Size::new(100.0, 100.0), bounds());
    assert_relative_eq!(p.scale, 4.0);
    assert_eq!(p.dest, bounds());
    assert_relative_eq!(p.uv.min_u, 0.0);
    assert_relative_eq!(p.uv.max_u, 1.0);
    assert_relative_eq!(p.uv.min_v, 0.25);
    assert_relative_eq!(p.uv.max_v, 0.75);
}

#[test]
fn test_none_centered_small_image() {
    let p = place(FitMode::NoneCentered, Size::new(50.0, 30.0), bounds());
    assert_relative_eq!(p.scale, 1.0);
    assert_relative_eq!(p.dest.left, 10.0 + 175.0);
    assert_relative_eq!(p.dest.top, 20.0 + 85.0);
    assert_relative_eq!(p.dest.width, 50.0);
    assert_relative_eq!(p.dest.height, 30.0);
    assert_eq!(p.uv, UvRect::FULL);
}

#[test]
fn test_none_centered_large_image_is_clipped_not_scaled() {
    // 800x400 into 400x200: the central half in each axis shows through.
    let p = place(FitMode::NoneCentered, Size::new(800.0, 400.0), bounds());
    assert_relative_eq!(p.scale, 1.0);
    assert_eq!(p.dest, bounds());
    assert_relative_eq!(p.uv.min_u, 0.25);
    assert_relative_eq!(p.uv.max_u, 0.75);
    assert_relative_eq!(p.uv.min_v, 0.25);
    assert_relative_eq!(p.uv.max_v, 0.75);
}

#[test]
fn test_dest_always_inside_bounds() {
    let b = bounds();
    for mode in FitMode::ALL {
        for (w, h) in [(1.0, 1.0), (4000.0, 30.0), (30.0, 4000.0), (400.0, 200.0)] {
            let p = place(mode, Size::new(w, h), b);
            assert!(p.dest.left >= b.left - 1e-3, "{mode} {w}x{h}");
            assert!(p.dest.top >= b.top - 1e-3, "{mode} {w}x{h}");
            assert!(p.dest.right() <= b.right() + 1e-3, "{mode} {w}x{h}");
            assert!(p.dest.bottom() <= b.bottom() + 1e-3, "{mode} {w}x{h}");
        }
    }
}

#[test]
fn test_empty_bounds_gives_empty_dest() {
    let p = place(FitMode::Contain, Size::new(10.0, 10.0), Rect::new(5.0, 5.0, 0.0, 100.0));
    assert!(p.dest.is_empty());
}

#[test]
fn test_fit_mode_display() {
    assert_eq!(format!("{}", FitMode::Contain), "Contain");
    assert_eq!(format!("{}", FitMode::Cover), "Cover");
    assert_eq!(format!("{}", FitMode::NoneCentered), "None (centered)");
}

#[test]
fn test_fit_mode_default_is_contain() {
    assert_eq!(FitMode::default(), FitMode::Contain);
}
