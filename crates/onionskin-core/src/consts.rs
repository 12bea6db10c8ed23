/// Minimum spacing between two bounds recomputations triggered by
/// resize/scroll events, in milliseconds.
pub const DEFAULT_THROTTLE_MS: u64 = 100;

/// Quiet period before a window resize is considered settled, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Overlay opacity shown before the user touches the slider.
pub const DEFAULT_OPACITY_PERCENT: u8 = 100;

/// Upper end of the opacity slider.
pub const MAX_OPACITY_PERCENT: u8 = 100;

/// Viewport widths (logical points) for the dashboard layout.
pub const BREAKPOINT_MOBILE: u32 = 640;
pub const BREAKPOINT_TABLET: u32 = 768;
pub const BREAKPOINT_DESKTOP: u32 = 1024;
pub const BREAKPOINT_WIDE: u32 = 1280;

/// Minimum pixel count (w*h) of the compositing target before rows are
/// blended in parallel with Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Bytes per pixel of a decoded overlay image (RGBA8).
pub const RGBA_CHANNELS: usize = 4;

/// Space between a tooltip's bottom edge and the top of its anchor, in points.
pub const TOOLTIP_GAP: f32 = 8.0;
