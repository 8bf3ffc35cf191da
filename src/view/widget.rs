use eframe::egui;

use crate::gesture::{GestureEngine, GestureState, PointerEvent};
use crate::transform::{
    AffineTransform, DEFAULT_SCALE, ScaleBounds, centering_translation, fit_scale,
};

use super::{Result, ViewConfig, ViewportBinding};

/// The widget-level adapter: owns the gesture engine and the viewport
/// binding, and performs fit-to-viewport initialization whenever both an
/// image and a non-zero viewport are known.
#[derive(Debug, Clone, Default)]
pub struct PinchZoomView {
    binding: ViewportBinding,
    engine: GestureEngine,
    config: ViewConfig,
    // Caller-configured bounds; the engine carries the per-image bounds
    // derived from these plus the current fit scale.
    configured_bounds: ScaleBounds,
}

impl PinchZoomView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ViewConfig) -> Result<Self> {
        config.validate()?;
        let bounds = config.scale_bounds()?;
        let mut engine = GestureEngine::new();
        engine.set_scale_bounds(bounds);
        engine.set_min_pointer_distance(config.min_pointer_distance);
        Ok(Self {
            binding: ViewportBinding::new(),
            engine,
            config,
            configured_bounds: bounds,
        })
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        self.engine.handle(event)
    }

    pub fn on_viewport_ready(&mut self, size: egui::Vec2) {
        self.binding.set_viewport(size);
        self.reinitialize();
    }

    pub fn on_image_assigned(&mut self, size: egui::Vec2) {
        self.binding.set_image(size);
        self.reinitialize();
    }

    pub fn current_transform(&self) -> AffineTransform {
        self.engine.current_transform()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.engine.state()
    }

    pub fn scale_bounds(&self) -> ScaleBounds {
        self.engine.scale_bounds()
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn set_scale_bounds(&mut self, min: f32, max: f32) -> Result<()> {
        let bounds = ScaleBounds::new(min, max)?;
        self.engine.set_scale_bounds(bounds);
        self.configured_bounds = bounds;
        self.config.min_scale = min;
        self.config.max_scale = max;
        Ok(())
    }

    /// Fit/center computation, run on every viewport or image report.
    /// Deferred while either dimension is missing or zero. The fitted
    /// transform is only written while the displayed transform is still
    /// at the default scale, so a user's zoom survives re-layout; the
    /// scale bounds follow the fit scale either way.
    fn reinitialize(&mut self) {
        let (Some(viewport), Some(image)) = (self.binding.viewport(), self.binding.image()) else {
            log::debug!("fit deferred: viewport or image dimensions not ready");
            return;
        };
        let fit = fit_scale(image, viewport);
        self.engine
            .set_scale_bounds(self.configured_bounds.for_fit_scale(fit));
        if self.engine.current_transform().scale_x() == DEFAULT_SCALE {
            let centering = centering_translation(image, fit, viewport);
            self.engine
                .reset(AffineTransform::from_scale_translation(fit, centering));
            log::debug!(
                "image fitted: scale {:.3}, centering ({:.1}, {:.1})",
                fit,
                centering.x,
                centering.y
            );
        }
    }
}
