use eframe::egui;
use serde::{Deserialize, Serialize};

/// Translation + uniform scale from image coordinates to viewport
/// coordinates. The skew components exist for completeness but are held
/// at zero by every operation in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    scale_x: f32,
    skew_x: f32,
    translate_x: f32,
    skew_y: f32,
    scale_y: f32,
    translate_y: f32,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        skew_x: 0.0,
        translate_x: 0.0,
        skew_y: 0.0,
        scale_y: 1.0,
        translate_y: 0.0,
    };

    pub fn from_scale_translation(scale: f32, translation: egui::Vec2) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            translate_x: translation.x,
            translate_y: translation.y,
            ..Self::IDENTITY
        }
    }

    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f32 {
        self.scale_y
    }

    pub fn translate_x(&self) -> f32 {
        self.translate_x
    }

    pub fn translate_y(&self) -> f32 {
        self.translate_y
    }

    pub fn translation(&self) -> egui::Vec2 {
        egui::vec2(self.translate_x, self.translate_y)
    }

    /// Scale component, or `fallback` when the component is exactly zero.
    /// Zero is only possible before first initialization; callers divide
    /// by this value, so it must never propagate.
    pub fn scale_or(&self, fallback: f32) -> f32 {
        if self.scale_x == 0.0 {
            fallback
        } else {
            self.scale_x
        }
    }

    pub fn translate(&mut self, delta: egui::Vec2) {
        self.translate_x += delta.x;
        self.translate_y += delta.y;
    }

    /// Scales around `pivot`, given in the transform's own input (image)
    /// space: the viewport point `pivot` maps to stays fixed.
    pub fn scale_about(&mut self, factor: f32, pivot: egui::Pos2) {
        self.translate_x += self.scale_x * (1.0 - factor) * pivot.x;
        self.translate_y += self.scale_y * (1.0 - factor) * pivot.y;
        self.scale_x *= factor;
        self.scale_y *= factor;
    }

    pub fn apply(&self, point: egui::Pos2) -> egui::Pos2 {
        egui::pos2(
            self.scale_x * point.x + self.skew_x * point.y + self.translate_x,
            self.skew_y * point.x + self.scale_y * point.y + self.translate_y,
        )
    }

    /// Viewport point back to image space. Assumes uniform scale and zero
    /// skew, which every mutation in this crate preserves.
    pub fn unapply(&self, point: egui::Pos2) -> egui::Pos2 {
        let scale = self.scale_or(1.0);
        egui::pos2(
            (point.x - self.translate_x) / scale,
            (point.y - self.translate_y) / scale,
        )
    }
}
