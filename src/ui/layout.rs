use eframe::egui;

pub(super) const THUMBNAIL_EDGE: f32 = 220.0;

/// Largest size with the image's aspect ratio that fits in `available`,
/// never scaled above the image's own size.
pub(super) fn fit_within(image: egui::Vec2, available: egui::Vec2) -> egui::Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 || available.x <= 0.0 || available.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (available.x / image.x).min(available.y / image.y).min(1.0);
    image * scale
}

/// Fills the box, cropping along the longer edge; used for thumbnails.
pub(super) fn cover_uv(image: egui::Vec2) -> egui::Rect {
    if image.x <= 0.0 || image.y <= 0.0 {
        return egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0));
    }
    if image.x > image.y {
        let span = image.y / image.x;
        let start = (1.0 - span) / 2.0;
        egui::Rect::from_min_max(egui::pos2(start, 0.0), egui::pos2(start + span, 1.0))
    } else {
        let span = image.x / image.y;
        let start = (1.0 - span) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, start), egui::pos2(1.0, start + span))
    }
}

/// Where a swipe starts. egui reports a drag only after the pointer has
/// passed its drag threshold, so the press origin is preferred over the
/// pointer position at that moment.
pub(super) fn drag_origin_x(
    press_origin: Option<egui::Pos2>,
    pointer: Option<egui::Pos2>,
) -> Option<f32> {
    press_origin.or(pointer).map(|pos| pos.x)
}
