use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::gestures::MOUSE_TOUCH_ID;
use crate::engine::core::config::ViewerConfig;

/// Emit a synthetic single touch while the left mouse button is held, so the
/// pan gesture can be exercised without a touchscreen.
pub fn mouse_touch_emulation(
    config: Res<ViewerConfig>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<(Entity, &Window), With<PrimaryWindow>>,
    mut touch_events: EventWriter<TouchInput>,
    mut last_position: Local<Option<Vec2>>,
) {
    if !config.gestures.mouse_emulates_touch {
        return;
    }
    let Ok((window_entity, window)) = windows.single() else {
        return;
    };
    let cursor = window.cursor_position();

    let mut emit = |phase: TouchPhase, position: Vec2| {
        touch_events.write(TouchInput {
            phase,
            position,
            window: window_entity,
            force: None,
            id: MOUSE_TOUCH_ID,
        });
    };

    if mouse_button.just_pressed(MouseButton::Left) {
        if let Some(position) = cursor {
            emit(TouchPhase::Started, position);
            *last_position = Some(position);
        }
    }

    if mouse_button.just_released(MouseButton::Left) {
        if let Some(last) = last_position.take() {
            emit(TouchPhase::Ended, cursor.unwrap_or(last));
        }
        return;
    }

    let Some(last) = *last_position else {
        return;
    };
    match cursor {
        Some(position) if position != last => {
            emit(TouchPhase::Moved, position);
            *last_position = Some(position);
        }
        Some(_) => {}
        None => {
            // Cursor left the window mid-drag.
            emit(TouchPhase::Canceled, last);
            *last_position = None;
        }
    }
}
