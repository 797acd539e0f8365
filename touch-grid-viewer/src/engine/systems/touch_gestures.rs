use bevy::input::touch::TouchInput;
use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, RequestRedraw, WindowResized};

use crate::engine::camera::{CameraRays, ViewportCamera};
use crate::engine::core::config::ViewerConfig;
use crate::gestures::{
    GestureController, GestureError, InputEvent, ReferencePlane, TouchFrameAssembler,
    ViewportContext, WorldTransform,
};

/// User-facing message about a gesture that could not be applied.
#[derive(Event, Debug, Clone)]
pub struct GestureNotification {
    pub message: String,
}

/// What one batch of input events did to the world transform.
#[derive(Debug, Default, PartialEq)]
pub struct BatchOutcome {
    /// At least one touch-move was processed.
    pub redraw: bool,
    /// At least one delta was applied.
    pub transformed: bool,
    pub errors: Vec<GestureError>,
}

/// Reset gesture state for the configured reference plane on entering `Running`.
pub fn init_gesture_state(mut commands: Commands, config: Res<ViewerConfig>) {
    let plane = ReferencePlane::at_height(config.gestures.reference_plane_height);
    commands.insert_resource(GestureController::new(plane));
    commands.insert_resource(TouchFrameAssembler::default());
}

/// Run `events` through the controller in order, applying each delta as it comes.
/// A failed frame is recorded and the remaining events are still processed.
pub fn apply_input_events(
    events: &[InputEvent],
    controller: &mut GestureController,
    viewport: &ViewportContext,
    world: &mut WorldTransform,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for event in events {
        let frame = controller.process_input_event(event, viewport, world);
        outcome.redraw |= frame.redraw;

        let applied = frame
            .delta
            .and_then(|delta| delta.map(|delta| world.apply(&delta)).transpose());
        match applied {
            Ok(Some(())) => outcome.transformed = true,
            Ok(None) => {}
            Err(err) => outcome.errors.push(err),
        }
    }
    outcome
}

/// Feed this frame's touch input through the gesture controller and apply the results.
pub fn touch_gesture_system(
    mut touch_events: EventReader<TouchInput>,
    mut assembler: ResMut<TouchFrameAssembler>,
    mut controller: ResMut<GestureController>,
    mut world: ResMut<WorldTransform>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<ViewportCamera>>,
    mut redraw: EventWriter<RequestRedraw>,
    mut notifications: EventWriter<GestureNotification>,
) {
    for input in touch_events.read() {
        assembler.push_touch_input(input);
    }
    let events = assembler.drain();
    if events.is_empty() {
        return;
    }

    let (Ok(window), Ok((camera, camera_transform))) = (windows.single(), cameras.single())
    else {
        // The assembler already forgot ended touches; the tracker must too.
        for event in &events {
            controller.release(event);
        }
        warn!(
            "Dropping {} touch events: no primary window or viewport camera",
            events.len()
        );
        return;
    };

    // Read the window size now, not at startup, so resizes never skew NDC.
    let rays = CameraRays {
        camera,
        transform: camera_transform,
    };
    let viewport = ViewportContext::new(
        DVec2::new(window.width() as f64, window.height() as f64),
        &rays,
    );

    let outcome = apply_input_events(
        &events,
        &mut controller,
        &viewport,
        world.bypass_change_detection(),
    );
    if outcome.transformed {
        world.set_changed();
    }
    for err in &outcome.errors {
        if let Some(notification) = report_gesture_error(err) {
            notifications.write(notification);
        }
    }
    if outcome.redraw {
        redraw.write(RequestRedraw);
    }
}

/// Log a gesture failure. Failures the user should see come back as a notification.
fn report_gesture_error(err: &GestureError) -> Option<GestureNotification> {
    match err {
        GestureError::InvalidScale(_) => {
            warn!("Pinch ignored: {}", err);
            None
        }
        GestureError::NonFinite { .. } => {
            error!("Gesture failed: {}", err);
            Some(GestureNotification {
                message: format!("Gesture failed: {}", err),
            })
        }
    }
}

pub fn log_viewport_resize(mut resized: EventReader<WindowResized>) {
    for event in resized.read() {
        debug!("Viewport resized to {}x{}", event.width, event.height);
    }
}
