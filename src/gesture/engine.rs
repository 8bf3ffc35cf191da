use eframe::egui;

use crate::transform::{AffineTransform, ScaleBounds};

use super::{PointerEvent, PointerPhase};

/// Two pointers closer than this (in device-independent pixels) cannot
/// start a pinch; the distance ratio would be numerically unstable.
pub const MIN_POINTER_DISTANCE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging,
    Zooming,
}

#[derive(Debug, Clone, Copy)]
enum GestureSession {
    Drag {
        last: egui::Pos2,
    },
    Pinch {
        start_distance: f32,
        pivot: egui::Pos2,
        snapshot: AffineTransform,
    },
}

/// Interprets pointer events into drag/pinch mutations of an affine
/// transform, one gesture at a time.
///
/// Three transforms are tracked: `live` is the working matrix a gesture
/// mutates, `current` is what the renderer sees (updated only on accepted
/// moves), and `committed` is the baseline the next gesture starts from.
/// Scale bounds are enforced by rejection: an out-of-bounds pinch move
/// leaves `current` at the last accepted value instead of saturating.
#[derive(Debug, Clone)]
pub struct GestureEngine {
    live: AffineTransform,
    current: AffineTransform,
    committed: AffineTransform,
    bounds: ScaleBounds,
    min_pointer_distance: f32,
    session: Option<GestureSession>,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureEngine {
    pub fn new() -> Self {
        Self {
            live: AffineTransform::IDENTITY,
            current: AffineTransform::IDENTITY,
            committed: AffineTransform::IDENTITY,
            bounds: ScaleBounds::default(),
            min_pointer_distance: MIN_POINTER_DISTANCE,
            session: None,
        }
    }

    pub fn state(&self) -> GestureState {
        match self.session {
            None => GestureState::Idle,
            Some(GestureSession::Drag { .. }) => GestureState::Dragging,
            Some(GestureSession::Pinch { .. }) => GestureState::Zooming,
        }
    }

    pub fn current_transform(&self) -> AffineTransform {
        self.current
    }

    pub fn committed_transform(&self) -> AffineTransform {
        self.committed
    }

    pub fn scale_bounds(&self) -> ScaleBounds {
        self.bounds
    }

    pub fn set_scale_bounds(&mut self, bounds: ScaleBounds) {
        self.bounds = bounds;
    }

    pub fn set_min_pointer_distance(&mut self, distance: f32) {
        self.min_pointer_distance = distance;
    }

    /// Replaces all three transforms and discards any in-flight gesture.
    /// Used at image-load time.
    pub fn reset(&mut self, transform: AffineTransform) {
        self.live = transform;
        self.current = transform;
        self.committed = transform;
        self.session = None;
    }

    /// Routes an event to the drag handler first, then the pinch handler;
    /// a touch sequence drives exactly one gesture at a time. Returns
    /// whether the event changed state.
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        if self.handle_drag(event) {
            return true;
        }
        self.handle_pinch(event)
    }

    fn handle_drag(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => {
                let Some(pos) = event.primary() else {
                    return false;
                };
                self.live = self.committed;
                self.session = Some(GestureSession::Drag { last: pos });
                log::trace!("drag started at ({:.1}, {:.1})", pos.x, pos.y);
                true
            }
            PointerPhase::Move => {
                let Some(GestureSession::Drag { last }) = self.session else {
                    return false;
                };
                let Some(pos) = event.primary() else {
                    return false;
                };
                self.live.translate(pos - last);
                self.current = self.live;
                self.session = Some(GestureSession::Drag { last: pos });
                true
            }
            PointerPhase::Up => {
                self.commit();
                true
            }
            _ => false,
        }
    }

    fn handle_pinch(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::PointerDown => self.begin_pinch(event),
            PointerPhase::Move => match self.session {
                Some(GestureSession::Pinch { .. }) => self.move_pinch(event),
                _ => false,
            },
            PointerPhase::PointerUp => {
                self.commit();
                true
            }
            _ => false,
        }
    }

    fn begin_pinch(&mut self, event: &PointerEvent) -> bool {
        let Some(distance) = event.separation() else {
            return false;
        };
        if distance < self.min_pointer_distance {
            log::debug!("pinch rejected: separation {distance:.1} below threshold");
            return false;
        }
        let Some(midpoint) = event.midpoint() else {
            return false;
        };
        // The pivot is the two-finger midpoint un-projected into image
        // space through the displayed transform, which also becomes the
        // snapshot this pinch scales from.
        let pivot = self.current.unapply(midpoint);
        self.live = self.current;
        self.session = Some(GestureSession::Pinch {
            start_distance: distance,
            pivot,
            snapshot: self.current,
        });
        log::trace!(
            "pinch started: separation {:.1}, pivot ({:.1}, {:.1})",
            distance,
            pivot.x,
            pivot.y
        );
        true
    }

    fn move_pinch(&mut self, event: &PointerEvent) -> bool {
        let Some(GestureSession::Pinch {
            start_distance,
            pivot,
            snapshot,
        }) = self.session
        else {
            return false;
        };
        let Some(distance) = event.separation() else {
            return false;
        };
        let factor = distance / start_distance;
        self.live = snapshot;
        let candidate = factor * snapshot.scale_or(1.0);
        if !self.bounds.contains(candidate) {
            log::debug!(
                "pinch move rejected: scale {:.2} outside [{:.2}, {:.2}]",
                candidate,
                self.bounds.min(),
                self.bounds.max()
            );
            return false;
        }
        self.live.scale_about(factor, pivot);
        self.current = self.live;
        true
    }

    fn commit(&mut self) {
        self.committed = self.current;
        self.session = None;
        log::trace!(
            "gesture committed at scale {:.2}",
            self.committed.scale_or(1.0)
        );
    }
}
