use eframe::egui;

/// Current viewport and decoded-image dimensions, as reported by the
/// hosting layout and the image-decoding collaborator. Performs no I/O;
/// a dimension is absent until its collaborator reports it, and sizes
/// without positive area are treated as absent (layout not yet complete).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportBinding {
    viewport: Option<egui::Vec2>,
    image: Option<egui::Vec2>,
}

impl ViewportBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_viewport(&mut self, size: egui::Vec2) {
        self.viewport = Some(size);
    }

    pub fn set_image(&mut self, size: egui::Vec2) {
        self.image = Some(size);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn viewport(&self) -> Option<egui::Vec2> {
        self.viewport.filter(has_area)
    }

    pub fn image(&self) -> Option<egui::Vec2> {
        self.image.filter(has_area)
    }

    pub fn ready(&self) -> bool {
        self.viewport().is_some() && self.image().is_some()
    }
}

fn has_area(size: &egui::Vec2) -> bool {
    size.x > 0.0 && size.y > 0.0
}
