use onionskin_core::geometry::{Rect, UvRect};
use onionskin_core::io::image_io::OverlayImage;

pub fn to_egui_rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(r.left, r.top), egui::vec2(r.width, r.height))
}

pub fn from_egui_rect(r: egui::Rect) -> Rect {
    Rect::new(r.min.x, r.min.y, r.width(), r.height())
}

pub fn uv_to_egui(uv: UvRect) -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(uv.min_u, uv.min_v), egui::pos2(uv.max_u, uv.max_v))
}

/// Upload-ready copy of a decoded overlay.
pub fn overlay_to_color_image(img: &OverlayImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied([img.width as usize, img.height as usize], &img.rgba)
}
