use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::winit::WinitSettings;
use bevy_common_assets::json::JsonAssetPlugin;
// Crate engine modules
use crate::constants::render_settings::LIGHT_ILLUMINANCE;
use crate::engine::camera::viewport_camera::spawn_viewport_camera;
use crate::engine::core::app_state::{AppState, log_running};
use crate::engine::core::config::{
    ConfigLoader, ViewerConfig, load_config_system, srgb, start_loading,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::scene::{spawn_tile_grid, sync_content_transform};
use crate::engine::systems::mouse_emulation::mouse_touch_emulation;
use crate::engine::systems::notifications::{
    show_gesture_notifications, spawn_notification_banner,
};
use crate::engine::systems::touch_gestures::{
    GestureNotification, init_gesture_state, log_viewport_resize, touch_gesture_system,
};
use crate::gestures::WorldTransform;
// Create Web RPC modules
use crate::rpc::web_rpc::WebRpcPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers ViewerConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerConfig>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        // Frames only run on input or an explicit RequestRedraw.
        .insert_resource(WinitSettings::desktop_app());

    // Gesture controller and touch assembler are created on entering Running,
    // once the reference plane height is known.
    app.init_resource::<ConfigLoader>()
        .init_resource::<WorldTransform>()
        .add_event::<GestureNotification>();

    // State-based system scheduling
    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            load_config_system.run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            OnEnter(AppState::Running),
            (
                setup_scene,
                init_gesture_state,
                spawn_notification_banner,
                log_running,
            ),
        );

    // Emulated touches must be written before the gesture system reads them,
    // and the content group follows the transform in the same frame.
    let runtime_systems = (
        (
            mouse_touch_emulation,
            touch_gesture_system,
            sync_content_transform,
        )
            .chain(),
        show_gesture_notifications,
        log_viewport_resize,
    );

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: LIGHT_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ViewerConfig>,
    world: Res<WorldTransform>,
) {
    commands.insert_resource(ClearColor(srgb(config.background_colour)));
    spawn_lighting(&mut commands);
    spawn_viewport_camera(&mut commands, &config.camera);
    spawn_tile_grid(
        &mut commands,
        &mut meshes,
        &mut materials,
        &config.grid,
        &world,
    );
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
