use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::math::DVec2;
use bevy::prelude::*;

use super::controller::{InputEvent, TouchSample};

/// Groups bevy's per-touch `TouchInput` stream into browser-style touch events.
///
/// Consecutive moves collapse into one `TouchMove` carrying the whole active set,
/// which is what the gesture controller classifies on.
#[derive(Resource, Debug, Default)]
pub struct TouchFrameAssembler {
    /// Touches in contact, in the order they went down.
    active: Vec<TouchSample>,
    pending_moves: Vec<TouchSample>,
    ready: Vec<InputEvent>,
}

impl TouchFrameAssembler {
    pub fn push_touch_input(&mut self, input: &TouchInput) {
        self.push(input.phase, input.id, input.position.as_dvec2());
    }

    pub fn push(&mut self, phase: TouchPhase, id: u64, position: DVec2) {
        let sample = TouchSample::new(id, position.x, position.y);
        match phase {
            TouchPhase::Started => {
                self.flush_moves();
                self.upsert_active(sample);
                self.ready.push(InputEvent::TouchStart {
                    changed: vec![sample],
                });
            }
            TouchPhase::Moved => {
                if self.pending_moves.iter().any(|pending| pending.id == id) {
                    self.flush_moves();
                }
                self.upsert_active(sample);
                self.pending_moves.push(sample);
            }
            TouchPhase::Ended | TouchPhase::Canceled => {
                self.flush_moves();
                self.active.retain(|touch| touch.id != id);
                let changed = vec![sample];
                self.ready.push(if phase == TouchPhase::Ended {
                    InputEvent::TouchEnd { changed }
                } else {
                    InputEvent::TouchCancel { changed }
                });
            }
        }
    }

    /// Take every assembled event, closing any open move batch first.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        self.flush_moves();
        std::mem::take(&mut self.ready)
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    fn upsert_active(&mut self, sample: TouchSample) {
        match self.active.iter_mut().find(|touch| touch.id == sample.id) {
            Some(touch) => touch.position = sample.position,
            None => self.active.push(sample),
        }
    }

    fn flush_moves(&mut self) {
        if self.pending_moves.is_empty() {
            return;
        }
        self.ready.push(InputEvent::TouchMove {
            touches: self.active.clone(),
            changed: std::mem::take(&mut self.pending_moves),
        });
    }
}
