use bevy::math::{DVec2, DVec3};

use super::viewport::{RaySource, WorldRay};
use crate::constants::gestures::{RAY_PARALLEL_EPSILON, REFERENCE_PLANE_HEIGHT};

/// Infinite horizontal plane used only as a projection target for touches. Never rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePlane {
    pub height: f64,
}

impl ReferencePlane {
    pub fn at_height(height: f64) -> Self {
        Self { height }
    }

    /// Parametric ray/plane solve. `None` when the ray runs parallel to the
    /// plane or meets it behind its origin.
    pub fn intersect_ray(&self, ray: &WorldRay) -> Option<DVec3> {
        if ray.direction.y.abs() < RAY_PARALLEL_EPSILON {
            return None;
        }
        let t = (self.height - ray.origin.y) / ray.direction.y;
        if t < 0.0 {
            return None;
        }
        let point = ray.point_at(t);
        point.is_finite().then_some(point)
    }
}

impl Default for ReferencePlane {
    fn default() -> Self {
        Self::at_height(REFERENCE_PLANE_HEIGHT)
    }
}

/// World point where the camera ray through `ndc` meets `plane`, if any.
pub fn intersect<R>(ndc: DVec2, rays: &R, plane: &ReferencePlane) -> Option<DVec3>
where
    R: RaySource + ?Sized,
{
    if !ndc.is_finite() {
        return None;
    }
    let ray = rays.ray_through(ndc)?;
    plane.intersect_ray(&ray)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downward_camera(ndc: DVec2) -> Option<WorldRay> {
        Some(WorldRay::new(
            DVec3::new(ndc.x * 100.0, 50.0, -ndc.y * 100.0),
            DVec3::NEG_Y,
        ))
    }

    #[test]
    fn test_straight_down_hits_plane() {
        let hit = intersect(DVec2::new(0.1, 0.0), &downward_camera, &ReferencePlane::default());
        assert_eq!(hit, Some(DVec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_plane_height_is_respected() {
        let plane = ReferencePlane::at_height(-5.0);
        let hit = intersect(DVec2::new(0.0, 0.2), &downward_camera, &plane);
        assert_eq!(hit, Some(DVec3::new(0.0, -5.0, -20.0)));
    }

    #[test]
    fn test_parallel_ray_misses() {
        let plane = ReferencePlane::default();
        let ray = WorldRay::new(DVec3::new(0.0, 10.0, 0.0), DVec3::X);
        assert_eq!(plane.intersect_ray(&ray), None);
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let plane = ReferencePlane::default();
        let ray = WorldRay::new(DVec3::new(0.0, 10.0, 0.0), DVec3::Y);
        assert_eq!(plane.intersect_ray(&ray), None);
    }

    #[test]
    fn test_origin_on_plane_hits_at_origin() {
        let plane = ReferencePlane::default();
        let ray = WorldRay::new(DVec3::new(3.0, 0.0, 4.0), DVec3::new(1.0, -1.0, 0.0));
        assert_eq!(plane.intersect_ray(&ray), Some(DVec3::new(3.0, 0.0, 4.0)));
    }

    #[test]
    fn test_oblique_ray() {
        let plane = ReferencePlane::default();
        let ray = WorldRay::new(DVec3::new(300.0, 300.0, 300.0), DVec3::new(-1.0, -1.0, -1.0));
        let hit = plane.intersect_ray(&ray).unwrap();
        assert!((hit - DVec3::ZERO).length() < 1e-9);
    }

    #[test]
    fn test_failed_unprojection_is_a_miss() {
        let broken = |_ndc: DVec2| -> Option<WorldRay> { None };
        assert_eq!(intersect(DVec2::ZERO, &broken, &ReferencePlane::default()), None);
    }

    #[test]
    fn test_non_finite_ndc_is_a_miss() {
        let ndc = DVec2::new(f64::NAN, 0.0);
        assert_eq!(intersect(ndc, &downward_camera, &ReferencePlane::default()), None);
    }
}
