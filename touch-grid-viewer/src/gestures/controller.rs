use bevy::math::{DVec2, DVec3};
use bevy::prelude::*;

use super::error::GestureError;
use super::intersect::{ReferencePlane, intersect};
use super::tracker::TouchTracker;
use super::viewport::ViewportContext;
use super::world_transform::{TransformDelta, WorldTransform};
use crate::constants::gestures::MIN_PINCH_DISTANCE;

/// One touch as reported by the input source, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    pub id: u64,
    pub position: DVec2,
}

impl TouchSample {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id,
            position: DVec2::new(x, y),
        }
    }
}

/// Touch notification in the shape delivered by browsers: `touches` is the full
/// active set, `changed` the touches this event is about.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    TouchStart {
        changed: Vec<TouchSample>,
    },
    TouchMove {
        touches: Vec<TouchSample>,
        changed: Vec<TouchSample>,
    },
    TouchEnd {
        changed: Vec<TouchSample>,
    },
    TouchCancel {
        changed: Vec<TouchSample>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Idle,
    Pan,
    PinchZoom,
}

impl Gesture {
    pub fn classify(active_touches: usize) -> Self {
        match active_touches {
            1 => Gesture::Pan,
            2 => Gesture::PinchZoom,
            _ => Gesture::Idle,
        }
    }
}

/// Result of feeding one event through the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    pub gesture: Gesture,
    /// `Ok(None)` means the frame carried no usable positional information.
    pub delta: Result<Option<TransformDelta>, GestureError>,
    pub redraw: bool,
}

impl FrameOutcome {
    fn bookkeeping() -> Self {
        Self {
            gesture: Gesture::Idle,
            delta: Ok(None),
            redraw: false,
        }
    }
}

/// Interprets touch events as pan and pinch-zoom deltas for the content group.
///
/// Nothing but the tracker survives between events; the gesture is re-classified
/// from the active touch count every time.
#[derive(Resource, Debug, Default, Clone)]
pub struct GestureController {
    tracker: TouchTracker,
    plane: ReferencePlane,
}

impl GestureController {
    pub fn new(plane: ReferencePlane) -> Self {
        Self {
            tracker: TouchTracker::default(),
            plane,
        }
    }

    #[cfg(test)]
    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    /// Forget touches that ended or were cancelled. Works without a viewport.
    pub fn release(&mut self, event: &InputEvent) {
        if let InputEvent::TouchEnd { changed } | InputEvent::TouchCancel { changed } = event {
            for touch in changed {
                self.tracker.end(touch.id);
            }
        }
    }

    /// Feed one input event. The returned delta is not applied; `world` is only
    /// read for the pinch pivot. Tracker bookkeeping happens whether or not a
    /// delta could be computed.
    pub fn process_input_event(
        &mut self,
        event: &InputEvent,
        viewport: &ViewportContext,
        world: &WorldTransform,
    ) -> FrameOutcome {
        match event {
            InputEvent::TouchStart { changed } => {
                self.record(changed, viewport);
                FrameOutcome::bookkeeping()
            }
            InputEvent::TouchMove { touches, changed } => {
                let gesture = Gesture::classify(touches.len());
                let delta = match (gesture, touches.as_slice()) {
                    (Gesture::Pan, [touch]) => Ok(self.pan(touch, viewport)),
                    (Gesture::PinchZoom, [first, second]) => {
                        self.pinch(first, second, viewport, world)
                    }
                    _ => Ok(None),
                };
                self.record(changed, viewport);
                FrameOutcome {
                    gesture,
                    delta,
                    redraw: true,
                }
            }
            InputEvent::TouchEnd { .. } | InputEvent::TouchCancel { .. } => {
                self.release(event);
                FrameOutcome::bookkeeping()
            }
        }
    }

    fn record(&mut self, touches: &[TouchSample], viewport: &ViewportContext) {
        for touch in touches {
            self.tracker.start(touch.id, viewport.to_ndc(touch.position));
        }
    }

    fn project(&self, ndc: DVec2, viewport: &ViewportContext) -> Option<DVec3> {
        intersect(ndc, viewport, &self.plane)
    }

    /// Ground points for the tracked sample and the new sample of `touch`, in that order.
    fn ground_samples(
        &self,
        touch: &TouchSample,
        viewport: &ViewportContext,
    ) -> Option<(DVec3, DVec3)> {
        let Some(previous_ndc) = self.tracker.current(touch.id) else {
            debug!("touch {} has no tracked sample; skipping frame", touch.id);
            return None;
        };
        let previous = self.project(previous_ndc, viewport)?;
        let current = self.project(viewport.to_ndc(touch.position), viewport)?;
        Some((previous, current))
    }

    fn pan(&self, touch: &TouchSample, viewport: &ViewportContext) -> Option<TransformDelta> {
        let Some((previous, current)) = self.ground_samples(touch, viewport) else {
            debug!("pan skipped for touch {}", touch.id);
            return None;
        };
        let mut offset = current - previous;
        offset.y = 0.0;
        Some(TransformDelta::Translate(offset))
    }

    /// Scale by the change in finger spread, holding the world point under the
    /// previous finger midpoint fixed on screen.
    fn pinch(
        &self,
        first: &TouchSample,
        second: &TouchSample,
        viewport: &ViewportContext,
        world: &WorldTransform,
    ) -> Result<Option<TransformDelta>, GestureError> {
        let (Some((old_first, new_first)), Some((old_second, new_second))) = (
            self.ground_samples(first, viewport),
            self.ground_samples(second, viewport),
        ) else {
            debug!("pinch skipped: missing sample or ground miss");
            return Ok(None);
        };
        let (old_first, new_first) = (flatten(old_first), flatten(new_first));
        let (old_second, new_second) = (flatten(old_second), flatten(new_second));

        let old_distance = old_first.distance(old_second);
        if old_distance <= MIN_PINCH_DISTANCE {
            debug!("pinch skipped: fingers started on the same ground point");
            return Ok(None);
        }
        let factor = new_first.distance(new_second) / old_distance;
        if !factor.is_finite() {
            return Err(GestureError::NonFinite {
                what: "scale factor",
            });
        }
        if factor <= 0.0 {
            return Err(GestureError::InvalidScale(factor));
        }

        let pivot = (old_first + old_second) * 0.5;
        // Projected pivot after scaling about the group origin, minus the pivot itself.
        let displacement = (pivot - world.position) * (factor - 1.0);
        if !displacement.is_finite() {
            return Err(GestureError::NonFinite {
                what: "zoom displacement",
            });
        }

        Ok(Some(TransformDelta::Zoom {
            factor,
            displacement,
        }))
    }
}

fn flatten(point: DVec3) -> DVec3 {
    DVec3::new(point.x, 0.0, point.z)
}
