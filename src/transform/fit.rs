use eframe::egui;

use super::DEFAULT_SCALE;

/// Scale that makes `image` exactly fill one dimension of `viewport`
/// without exceeding either. Degenerate sizes yield 1.0 rather than a
/// zero, NaN or infinite scale.
pub fn fit_scale(image: egui::Vec2, viewport: egui::Vec2) -> f32 {
    if image.x <= 0.0 || image.y <= 0.0 || viewport.x <= 0.0 || viewport.y <= 0.0 {
        return DEFAULT_SCALE;
    }
    (viewport.x / image.x).min(viewport.y / image.y)
}

/// Offset that centers the scaled image inside the viewport. An axis with
/// no slack (scaled image at least as large as the viewport) gets a zero
/// offset, aligning the image to the origin.
pub fn centering_translation(image: egui::Vec2, scale: f32, viewport: egui::Vec2) -> egui::Vec2 {
    let slack = viewport - image * scale;
    egui::vec2((slack.x / 2.0).max(0.0), (slack.y / 2.0).max(0.0))
}
