mod common;

use approx::assert_relative_eq;
use common::{app_shell, attached, ms, solid_overlay, t0};
use onionskin_core::config::OnionskinConfig;
use onionskin_core::controller::{OverlayController, OverlayMount};
use onionskin_core::error::OnionskinError;
use onionskin_core::fit::FitMode;
use onionskin_core::geometry::Rect;

fn decode_failure() -> onionskin_core::error::Result<onionskin_core::io::image_io::OverlayImage> {
    Err(OnionskinError::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        "not an image",
    )))
}

// ---------------------------------------------------------------------------
// attach
// ---------------------------------------------------------------------------

#[test]
fn test_attach_applies_reference_bounds() {
    let c = attached(app_shell());
    assert_eq!(c.state().bounds(), app_shell());
    assert!(!c.is_panel_open());
    assert!(!c.aria_expanded());
    assert_eq!(c.state().opacity_percent(), 100);
    assert_eq!(c.state().fit_mode(), FitMode::Contain);
}

#[test]
fn test_attach_declines_without_reference() {
    let mount = OverlayMount {
        reference: None,
        ..OverlayMount::complete(app_shell())
    };
    assert!(OverlayController::attach(mount, &OnionskinConfig::default()).is_none());
}

#[test]
fn test_attach_declines_without_controls() {
    let config = OnionskinConfig::default();
    for mount in [
        OverlayMount { has_toggle: false, ..OverlayMount::complete(app_shell()) },
        OverlayMount { has_panel: false, ..OverlayMount::complete(app_shell()) },
        OverlayMount { has_overlay_surface: false, ..OverlayMount::complete(app_shell()) },
    ] {
        assert!(OverlayController::attach(mount, &config).is_none(), "{mount:?}");
    }
}

#[test]
fn test_attach_uses_configured_defaults() {
    let mut config = OnionskinConfig::default();
    config.overlay.opacity_percent = 40;
    config.overlay.fit_mode = FitMode::Cover;
    let c = OverlayController::attach(OverlayMount::complete(app_shell()), &config).unwrap();
    assert_eq!(c.state().opacity_percent(), 40);
    assert_eq!(c.state().fit_mode(), FitMode::Cover);
}

// ---------------------------------------------------------------------------
// panel
// ---------------------------------------------------------------------------

#[test]
fn test_toggle_twice_is_identity() {
    let mut c = attached(app_shell());
    let before = c.is_panel_open();
    c.toggle_config_panel();
    c.toggle_config_panel();
    assert_eq!(c.is_panel_open(), before);
    assert_eq!(c.aria_expanded(), before);
}

#[test]
fn test_open_panel_without_image_keeps_overlay_hidden() {
    let mut c = attached(app_shell());
    assert!(c.toggle_config_panel());
    assert!(c.is_panel_open());
    assert!(c.aria_expanded());
    assert!(!c.state().visible());
}

#[test]
fn test_never_visible_without_image() {
    let mut c = attached(app_shell());
    // Every open/close/toggle interleaving up to length 4.
    for seq in 0u32..(3u32.pow(4)) {
        let mut s = seq;
        for _ in 0..4 {
            match s % 3 {
                0 => {
                    c.toggle_config_panel();
                }
                1 => c.close_config_panel(),
                _ => {
                    c.load_image(decode_failure());
                }
            }
            s /= 3;
            assert!(!c.state().visible());
            assert!(!c.view().visible);
        }
    }
}

#[test]
fn test_close_panel_keeps_image_and_settings() {
    let mut c = attached(app_shell());
    c.toggle_config_panel();
    c.load_image(Ok(solid_overlay(10, 10, [255, 0, 0, 255])));
    c.set_opacity(35);
    c.set_fit_mode(FitMode::NoneCentered);

    c.close_config_panel();

    assert!(!c.is_panel_open());
    assert!(!c.aria_expanded());
    assert!(c.state().has_image());
    assert!(c.state().visible());
    assert_eq!(c.state().opacity_percent(), 35);
    assert_eq!(c.state().fit_mode(), FitMode::NoneCentered);
}

#[test]
fn test_reopening_panel_shows_loaded_image() {
    let mut c = attached(app_shell());
    c.load_image(Ok(solid_overlay(4, 4, [0, 0, 0, 255])));
    c.toggle_config_panel();
    c.toggle_config_panel();
    c.toggle_config_panel();
    assert!(c.state().visible());
}

// ---------------------------------------------------------------------------
// load_image
// ---------------------------------------------------------------------------

#[test]
fn test_load_valid_image_makes_overlay_visible() {
    let mut c = attached(app_shell());
    let img = solid_overlay(32, 16, [1, 2, 3, 255]);
    assert!(c.load_image(Ok(img.clone())));
    assert!(c.state().visible());
    assert_eq!(c.state().image().map(|i| i.as_ref()), Some(&img));
}

#[test]
fn test_load_failure_is_noop() {
    let mut c = attached(app_shell());
    let img = solid_overlay(8, 8, [9, 9, 9, 255]);
    c.load_image(Ok(img.clone()));
    c.set_opacity(60);
    let before = c.view();

    assert!(!c.load_image(decode_failure()));

    assert_eq!(c.view(), before);
    assert_eq!(c.state().image().map(|i| i.as_ref()), Some(&img));
}

#[test]
fn test_load_replaces_previous_image() {
    let mut c = attached(app_shell());
    c.load_image(Ok(solid_overlay(8, 8, [0, 0, 0, 255])));
    c.load_image(Ok(solid_overlay(16, 4, [255, 255, 255, 255])));
    let img = c.state().image().unwrap();
    assert_eq!((img.width, img.height), (16, 4));
}

// ---------------------------------------------------------------------------
// opacity / fit
// ---------------------------------------------------------------------------

#[test]
fn test_opacity_maps_percent_to_fraction() {
    let mut c = attached(app_shell());
    let mut last = -1.0f32;
    for p in 0..=100u8 {
        c.set_opacity(p);
        let o = c.view().opacity;
        assert_relative_eq!(o, f32::from(p) / 100.0);
        assert!(o > last, "opacity must increase with percent");
        last = o;
    }
}

#[test]
fn test_opacity_above_range_clamps() {
    let mut c = attached(app_shell());
    c.set_opacity(250);
    assert_eq!(c.state().opacity_percent(), 100);
    assert_relative_eq!(c.view().opacity, 1.0);
}

#[test]
fn test_none_centered_is_unscaled_and_centered() {
    let mut c = attached(Rect::new(100.0, 50.0, 400.0, 300.0));
    c.load_image(Ok(solid_overlay(40, 20, [0, 0, 0, 255])));
    c.set_fit_mode(FitMode::NoneCentered);

    let placement = c.view().placement.unwrap();
    assert_relative_eq!(placement.scale, 1.0);
    assert_relative_eq!(placement.dest.width, 40.0);
    assert_relative_eq!(placement.dest.height, 20.0);
    assert_relative_eq!(placement.dest.left, 100.0 + 180.0);
    assert_relative_eq!(placement.dest.top, 50.0 + 140.0);
}

// ---------------------------------------------------------------------------
// bounds tracking
// ---------------------------------------------------------------------------

#[test]
fn test_first_layout_event_applies_immediately() {
    let mut c = attached(app_shell());
    let start = t0();
    let moved = Rect::new(0.0, 20.0, 1280.0, 720.0);
    c.on_layout_event(start, moved);
    assert_eq!(c.state().bounds(), moved);
    assert!(c.next_deadline().is_none());
}

#[test]
fn test_burst_converges_to_latest_geometry() {
    let mut c = attached(app_shell());
    let start = t0();

    // 30 scroll ticks, 5ms apart: all inside one throttle window after the first.
    let mut last = app_shell();
    for i in 0..30u64 {
        last = Rect::new(0.0, 64.0 - i as f32 * 10.0, 1280.0, 720.0);
        c.on_layout_event(start + ms(i * 5), last);
    }
    assert_ne!(c.state().bounds(), last, "mid-window events are deferred");

    let deadline = c.next_deadline().expect("trailing run queued");
    assert!(!c.tick(deadline - ms(1)));
    assert!(c.tick(deadline));
    assert_eq!(c.state().bounds(), last);
    assert!(!c.tick(deadline + ms(500)), "trailing run fires once");
}

#[test]
fn test_resize_sequence_eventually_consistent() {
    let mut c = attached(app_shell());
    let start = t0();
    let widths = [1200.0, 1100.0, 1000.0, 900.0, 1024.0, 1366.0, 800.0];
    let mut t = 0u64;
    let mut latest = app_shell();
    for w in widths {
        latest = Rect::new(0.0, 64.0, w, 720.0);
        c.on_layout_event(start + ms(t), latest);
        c.tick(start + ms(t));
        t += 37;
    }
    c.tick(start + ms(t + 1000));
    assert_eq!(c.state().bounds(), latest);
    assert_eq!(c.view().bounds, latest);
}

#[test]
fn test_recompute_bounds_direct() {
    let mut c = attached(app_shell());
    let r = Rect::new(12.0, 34.0, 56.0, 78.0);
    c.recompute_bounds(r);
    assert_eq!(c.state().bounds(), r);
}
