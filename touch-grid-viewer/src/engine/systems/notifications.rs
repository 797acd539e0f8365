use bevy::prelude::*;
use bevy::window::RequestRedraw;

use crate::engine::core::config::ViewerConfig;
use crate::engine::systems::touch_gestures::GestureNotification;

#[derive(Component)]
pub struct NotificationBanner {
    timer: Timer,
}

pub fn spawn_notification_banner(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                Visibility::Hidden,
                NotificationBanner {
                    timer: Timer::from_seconds(0.0, TimerMode::Once),
                },
            ));
        });
}

/// Show the latest gesture notification on screen for a few seconds. Never blocks input.
pub fn show_gesture_notifications(
    mut notifications: EventReader<GestureNotification>,
    config: Res<ViewerConfig>,
    time: Res<Time>,
    mut banners: Query<(&mut Text, &mut Visibility, &mut NotificationBanner)>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    let latest = notifications.read().last();

    for (mut text, mut visibility, mut banner) in &mut banners {
        if let Some(notification) = latest {
            text.0 = notification.message.clone();
            banner.timer =
                Timer::from_seconds(config.gestures.notification_seconds, TimerMode::Once);
            *visibility = Visibility::Visible;
        }

        if *visibility == Visibility::Hidden {
            continue;
        }
        banner.timer.tick(time.delta());
        if banner.timer.finished() {
            *visibility = Visibility::Hidden;
        }
        // Keep frames coming until the banner expires under reactive winit.
        redraw.write(RequestRedraw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::gestures::NOTIFICATION_SECONDS;
    use std::time::Duration;

    fn banner_app() -> App {
        let mut app = App::new();
        app.add_event::<GestureNotification>()
            .add_event::<RequestRedraw>()
            .insert_resource(ViewerConfig::default())
            .init_resource::<Time>()
            .add_systems(Startup, spawn_notification_banner)
            .add_systems(Update, show_gesture_notifications);
        app
    }

    fn banner(app: &mut App) -> (String, Visibility) {
        let mut query = app
            .world_mut()
            .query_filtered::<(&Text, &Visibility), With<NotificationBanner>>();
        let (text, visibility) = query.single(app.world()).unwrap();
        (text.0.clone(), *visibility)
    }

    fn redraw_requests(app: &mut App) -> usize {
        app.world_mut()
            .resource_mut::<Events<RequestRedraw>>()
            .drain()
            .count()
    }

    #[test]
    fn test_banner_starts_hidden() {
        let mut app = banner_app();
        app.update();

        assert_eq!(banner(&mut app), (String::new(), Visibility::Hidden));
        assert_eq!(redraw_requests(&mut app), 0);
    }

    #[test]
    fn test_notification_shows_then_expires() {
        let mut app = banner_app();
        app.update();

        app.world_mut().send_event(GestureNotification {
            message: "Gesture failed".to_string(),
        });
        app.update();
        assert_eq!(
            banner(&mut app),
            ("Gesture failed".to_string(), Visibility::Visible)
        );
        assert_eq!(redraw_requests(&mut app), 1);

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(NOTIFICATION_SECONDS + 1.0));
        app.update();
        assert_eq!(banner(&mut app).1, Visibility::Hidden);
        assert_eq!(redraw_requests(&mut app), 1);

        app.update();
        assert_eq!(redraw_requests(&mut app), 0);
    }
}
