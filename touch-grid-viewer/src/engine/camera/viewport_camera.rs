use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::engine::core::config::{CameraConfig, ProjectionKind};
use crate::gestures::{RaySource, WorldRay};

/// Marks the single 3D camera whose rays drive touch projection.
#[derive(Component)]
pub struct ViewportCamera;

pub fn spawn_viewport_camera(commands: &mut Commands, config: &CameraConfig) {
    let projection = match config.projection {
        ProjectionKind::Orthographic => Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::WindowSize,
            near: config.near,
            far: config.far,
            ..OrthographicProjection::default_3d()
        }),
        ProjectionKind::Perspective => Projection::from(PerspectiveProjection {
            fov: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            ..default()
        }),
    };

    commands.spawn((
        Camera3d::default(),
        projection,
        Transform::from_translation(Vec3::from_array(config.position))
            .looking_at(Vec3::from_array(config.look_at), Vec3::Y),
        ViewportCamera,
    ));
}

/// Casts rays through NDC points for a bevy camera, unprojecting at the near and far planes.
pub struct CameraRays<'a> {
    pub camera: &'a Camera,
    pub transform: &'a GlobalTransform,
}

impl RaySource for CameraRays<'_> {
    fn ray_through(&self, ndc: DVec2) -> Option<WorldRay> {
        let ndc = ndc.as_vec2();
        // Reverse-Z: depth 1 is the near plane, depth 0 the (possibly infinite) far plane.
        let near = self.camera.ndc_to_world(self.transform, ndc.extend(1.0))?;
        let far = self
            .camera
            .ndc_to_world(self.transform, ndc.extend(f32::EPSILON))?;
        let direction = (far - near).try_normalize()?;
        Some(WorldRay::new(near.as_dvec3(), direction.as_dvec3()))
    }
}
