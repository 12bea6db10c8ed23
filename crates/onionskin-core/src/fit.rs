use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size, UvRect};

/// How the overlay image is scaled and positioned inside its bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitMode {
    /// Scale uniformly so the whole image fits inside the box.
    #[default]
    Contain,
    /// Scale uniformly so the image covers the whole box, cropping overflow.
    Cover,
    /// No scaling; the image is centered at its natural size (1:1 pixels).
    NoneCentered,
}

impl FitMode {
    pub const ALL: [FitMode; 3] = [FitMode::Contain, FitMode::Cover, FitMode::NoneCentered];

    /// Short label for mode buttons.
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Contain => "Fit",
            Self::Cover => "Fill",
            Self::NoneCentered => "1:1",
        }
    }

    fn scale(&self, image: Size, bounds: Size) -> f32 {
        let sx = bounds.width / image.width;
        let sy = bounds.height / image.height;
        match self {
            Self::Contain => sx.min(sy),
            Self::Cover => sx.max(sy),
            Self::NoneCentered => 1.0,
        }
    }
}

impl std::fmt::Display for FitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contain => write!(f, "Contain"),
            Self::Cover => write!(f, "Cover"),
            Self::NoneCentered => write!(f, "None (centered)"),
        }
    }
}

/// Where an image lands on screen and which part of it is visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// On-screen rectangle, always inside the bounding box.
    pub dest: Rect,
    /// Source sub-rectangle shown through `dest`.
    pub uv: UvRect,
    /// Uniform scale applied to the image (1.0 for `NoneCentered`).
    pub scale: f32,
}

/// Compute the placement of an `image`-sized picture inside `bounds`.
///
/// The picture is always centered on the box. Parts that fall outside the
/// box are clipped, and the uv rectangle is narrowed to match, so drawing
/// `uv` into `dest` reproduces exactly the visible portion.
pub fn place(mode: FitMode, image: Size, bounds: Rect) -> Placement {
    if image.is_empty() || bounds.is_empty() {
        return Placement {
            dest: Rect::new(bounds.left, bounds.top, 0.0, 0.0),
            uv: UvRect::FULL,
            scale: 0.0,
        };
    }

    let scale = mode.scale(image, bounds.size());
    let (cx, cy) = bounds.center();
    let drawn = Rect::from_center_size(
        cx,
        cy,
        Size::new(image.width * scale, image.height * scale),
    );
    let dest = drawn.intersect(&bounds);

    let uv = UvRect {
        min_u: (dest.left - drawn.left) / drawn.width,
        min_v: (dest.top - drawn.top) / drawn.height,
        max_u: (dest.right() - drawn.left) / drawn.width,
        max_v: (dest.bottom() - drawn.top) / drawn.height,
    };

    Placement { dest, uv, scale }
}
