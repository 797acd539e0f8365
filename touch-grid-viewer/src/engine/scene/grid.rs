/// Checkerboard tile grid inside the movable content group
use bevy::prelude::*;

use crate::engine::core::config::{GridConfig, srgb};
use crate::gestures::WorldTransform;

/// The node gestures pan and scale. Every tile is one of its children.
#[derive(Component)]
pub struct ContentGroup;

/// Tile placement in content-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub position: Vec3,
    pub light: bool,
}

/// Tiles sit at `(x * size, 0, z * size)`; light where the column and row parity match.
pub fn tile_layout(config: &GridConfig) -> Vec<TilePlacement> {
    let mut tiles = Vec::with_capacity((config.columns * config.rows) as usize);
    for x in 0..config.columns {
        for z in 0..config.rows {
            tiles.push(TilePlacement {
                position: Vec3::new(x as f32 * config.tile_size, 0.0, z as f32 * config.tile_size),
                light: x % 2 == z % 2,
            });
        }
    }
    tiles
}

/// Spawn the content group at the current world transform, with the tile grid beneath it.
pub fn spawn_tile_grid(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    config: &GridConfig,
    world: &WorldTransform,
) {
    let tile_mesh = meshes.add(Cuboid::new(
        config.tile_size,
        config.tile_height,
        config.tile_size,
    ));
    let light_material = materials.add(tile_material(config, config.light_colour));
    let dark_material = materials.add(tile_material(config, config.dark_colour));

    commands
        .spawn((
            ContentGroup,
            world.to_bevy_transform(),
            Visibility::Visible,
        ))
        .with_children(|parent| {
            for tile in tile_layout(config) {
                let material = if tile.light {
                    light_material.clone()
                } else {
                    dark_material.clone()
                };
                parent.spawn((
                    Mesh3d(tile_mesh.clone()),
                    MeshMaterial3d(material),
                    Transform::from_translation(tile.position),
                ));
            }
        });
}

fn tile_material(config: &GridConfig, colour: [u8; 3]) -> StandardMaterial {
    StandardMaterial {
        base_color: srgb(colour),
        metallic: config.metallic,
        perceptual_roughness: config.roughness,
        ..default()
    }
}

/// Mirror `WorldTransform` onto the content group whenever a gesture changed it.
pub fn sync_content_transform(
    world: Res<WorldTransform>,
    mut groups: Query<&mut Transform, With<ContentGroup>>,
) {
    if !world.is_changed() {
        return;
    }
    for mut transform in &mut groups {
        *transform = world.to_bevy_transform();
    }
}
