/// Tiles along the X axis
pub const GRID_COLUMNS: u32 = 10;

/// Tiles along the Z axis
pub const GRID_ROWS: u32 = 10;

/// Edge length of a square tile in world units
pub const TILE_SIZE: f32 = 16.0;

/// Vertical thickness of a tile
pub const TILE_HEIGHT: f32 = 2.0;

pub const TILE_METALLIC: f32 = 0.5;
pub const TILE_ROUGHNESS: f32 = 0.5;

/// sRGB bytes of the sky-blue clear colour
pub const BACKGROUND_COLOUR: [u8; 3] = [179, 231, 249];

pub const LIGHT_TILE_COLOUR: [u8; 3] = [255, 255, 255];
pub const DARK_TILE_COLOUR: [u8; 3] = [0, 0, 0];

pub const CAMERA_POSITION: [f32; 3] = [300.0, 300.0, 300.0];
pub const CAMERA_LOOK_AT: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 1e5;
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Illuminance of the single directional light (half of bevy's overcast-day preset)
pub const LIGHT_ILLUMINANCE: f32 = 500.0;
