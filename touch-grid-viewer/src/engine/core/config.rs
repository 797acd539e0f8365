use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::window::RequestRedraw;
use serde::{Deserialize, Serialize};

use crate::constants::gestures::{NOTIFICATION_SECONDS, REFERENCE_PLANE_HEIGHT};
use crate::constants::render_settings::*;
use crate::engine::core::app_state::AppState;

pub const VIEWER_CONFIG_PATH: &str = "viewer.json";

/// Tile grid layout and materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: u32,
    pub rows: u32,
    pub tile_size: f32,
    pub tile_height: f32,
    pub light_colour: [u8; 3],
    pub dark_colour: [u8; 3],
    pub metallic: f32,
    pub roughness: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            tile_size: TILE_SIZE,
            tile_height: TILE_HEIGHT,
            light_colour: LIGHT_TILE_COLOUR,
            dark_colour: DARK_TILE_COLOUR,
            metallic: TILE_METALLIC,
            roughness: TILE_ROUGHNESS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// One world unit per logical pixel.
    #[default]
    Orthographic,
    Perspective,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
    pub projection: ProjectionKind,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: CAMERA_POSITION,
            look_at: CAMERA_LOOK_AT,
            projection: ProjectionKind::default(),
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub reference_plane_height: f64,
    pub mouse_emulates_touch: bool,
    pub notification_seconds: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            reference_plane_height: REFERENCE_PLANE_HEIGHT,
            // Browsers already deliver real touch events; emulating on top would double them.
            mouse_emulates_touch: cfg!(not(target_arch = "wasm32")),
            notification_seconds: NOTIFICATION_SECONDS,
        }
    }
}

/// Runtime configuration loaded from `assets/viewer.json`. Every field is optional.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub grid: GridConfig,
    pub camera: CameraConfig,
    pub background_colour: [u8; 3],
    pub gestures: GestureConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            camera: CameraConfig::default(),
            background_colour: BACKGROUND_COLOUR,
            gestures: GestureConfig::default(),
        }
    }
}

pub fn srgb(bytes: [u8; 3]) -> Color {
    Color::srgb_u8(bytes[0], bytes[1], bytes[2])
}

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<ViewerConfig>>,
}

pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    config_loader.handle = Some(asset_server.load(VIEWER_CONFIG_PATH));
}

/// Insert the loaded config, or defaults if the file is missing or malformed, then start running.
pub fn load_config_system(
    config_loader: Res<ConfigLoader>,
    configs: Res<Assets<ViewerConfig>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    let Some(ref handle) = config_loader.handle else {
        return;
    };

    let config = if let Some(config) = configs.get(handle) {
        info!("Viewer config loaded from {}", VIEWER_CONFIG_PATH);
        config.clone()
    } else if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
        warn!(
            "Could not load {} ({}); using built-in defaults",
            VIEWER_CONFIG_PATH, err
        );
        ViewerConfig::default()
    } else {
        return;
    };

    enter_running(config, &mut commands, &mut next_state, &mut redraw);
}

/// Install the config and queue the switch to `Running`, waking the frame that applies it.
fn enter_running(
    config: ViewerConfig,
    commands: &mut Commands,
    next_state: &mut NextState<AppState>,
    redraw: &mut EventWriter<RequestRedraw>,
) {
    commands.insert_resource(config);
    next_state.set(AppState::Running);
    redraw.write(RequestRedraw);
}
