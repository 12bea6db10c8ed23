use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::TOOLTIP_GAP;
use crate::error::OnionskinError;

/// Width/height pair in screen points (or pixels for images).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Parses `WxH`, e.g. `1440x900`.
impl FromStr for Size {
    type Err = OnionskinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| OnionskinError::InvalidGeometry(format!("expected WxH, got '{s}'")))?;
        Ok(Self::new(parse_coord(w)?, parse_coord(h)?))
    }
}

/// Axis-aligned rectangle, in the same shape a layout engine reports a
/// bounding client rect: top-left corner plus extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of `size` centered on `(cx, cy)`.
    pub fn from_center_size(cx: f32, cy: f32, size: Size) -> Self {
        Self::new(
            cx - size.width / 2.0,
            cy - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Overlap of two rectangles. Disjoint inputs give a zero-sized rect
    /// anchored at the clamped corner.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }
}

/// Parses `L,T,W,H`, e.g. `0,64,1280,720`.
impl FromStr for Rect {
    type Err = OnionskinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(OnionskinError::InvalidGeometry(format!(
                "expected L,T,W,H, got '{s}'"
            )));
        }
        let rect = Rect::new(
            parse_coord(parts[0])?,
            parse_coord(parts[1])?,
            parse_coord(parts[2])?,
            parse_coord(parts[3])?,
        );
        if rect.width < 0.0 || rect.height < 0.0 {
            return Err(OnionskinError::InvalidGeometry(format!(
                "negative extent in '{s}'"
            )));
        }
        Ok(rect)
    }
}

/// Where a tooltip of `tooltip` size goes for a hovered `anchor`: centred
/// horizontally on it, [`TOOLTIP_GAP`] above its top edge. No viewport
/// clamping; a tooltip over an element at the very top may start above 0.
pub fn tooltip_rect(anchor: &Rect, tooltip: Size) -> Rect {
    Rect::new(
        anchor.left + anchor.width / 2.0 - tooltip.width / 2.0,
        anchor.top - tooltip.height - TOOLTIP_GAP,
        tooltip.width,
        tooltip.height,
    )
}

/// Normalized texture coordinates of the visible part of an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRect {
    pub min_u: f32,
    pub min_v: f32,
    pub max_u: f32,
    pub max_v: f32,
}

impl UvRect {
    pub const FULL: UvRect = UvRect {
        min_u: 0.0,
        min_v: 0.0,
        max_u: 1.0,
        max_v: 1.0,
    };
}

fn parse_coord(s: &str) -> Result<f32, OnionskinError> {
    let s = s.trim();
    let value = s
        .parse::<f32>()
        .map_err(|e| OnionskinError::InvalidGeometry(format!("'{s}': {e}")))?;
    if !value.is_finite() {
        return Err(OnionskinError::InvalidGeometry(format!("'{s}' is not a finite number")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_disjoint_is_empty() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn parse_rect_rejects_negative_extent() {
        assert!("0,0,-1,10".parse::<Rect>().is_err());
        assert!("0,0,10".parse::<Rect>().is_err());
    }

    #[test]
    fn parse_rejects_non_finite_coordinates() {
        assert!("NaN,0,10,10".parse::<Rect>().is_err());
        assert!("0,0,inf,10".parse::<Rect>().is_err());
        assert!("infx600".parse::<Size>().is_err());
        assert!("800xNaN".parse::<Size>().is_err());
    }

    #[test]
    fn tooltip_sits_centred_above_anchor() {
        let anchor = Rect::new(100.0, 200.0, 40.0, 20.0);
        let tip = tooltip_rect(&anchor, Size::new(80.0, 24.0));
        assert_eq!(tip, Rect::new(80.0, 168.0, 80.0, 24.0));
        assert_eq!(tip.center().0, anchor.center().0);
        assert_eq!(anchor.top - tip.bottom(), TOOLTIP_GAP);
    }

    #[test]
    fn parse_size_accepts_upper_x() {
        let s: Size = "800X600".parse().unwrap();
        assert_eq!(s, Size::new(800.0, 600.0));
    }
}
