use bevy::math::{DVec2, DVec3};

/// Ray in world space produced by the camera for a normalised device coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRay {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl WorldRay {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    pub fn point_at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// Anything able to cast a world ray through an NDC point.
///
/// Returns `None` when the camera cannot unproject the point (degenerate projection).
pub trait RaySource {
    fn ray_through(&self, ndc: DVec2) -> Option<WorldRay>;
}

impl<F> RaySource for F
where
    F: Fn(DVec2) -> Option<WorldRay>,
{
    fn ray_through(&self, ndc: DVec2) -> Option<WorldRay> {
        self(ndc)
    }
}

/// Map a pointer position in pixels (origin top-left, Y down) to NDC
/// (origin centre, range [-1, 1], Y up).
pub fn to_ndc(pixel: DVec2, viewport_size: DVec2) -> DVec2 {
    DVec2::new(
        2.0 * pixel.x / viewport_size.x - 1.0,
        -(2.0 * pixel.y / viewport_size.y - 1.0),
    )
}

/// Viewport size and camera captured for one pass over the input events.
///
/// Built fresh from the live window every time input is processed so a resize
/// between two touch samples never leaves stale dimensions behind.
pub struct ViewportContext<'a> {
    pub size: DVec2,
    pub rays: &'a dyn RaySource,
}

impl<'a> ViewportContext<'a> {
    pub fn new(size: DVec2, rays: &'a dyn RaySource) -> Self {
        Self { size, rays }
    }

    pub fn to_ndc(&self, pixel: DVec2) -> DVec2 {
        to_ndc(pixel, self.size)
    }
}

impl RaySource for ViewportContext<'_> {
    fn ray_through(&self, ndc: DVec2) -> Option<WorldRay> {
        self.rays.ray_through(ndc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: DVec2 = DVec2::new(800.0, 600.0);

    #[test]
    fn test_centre_maps_to_origin() {
        assert_eq!(to_ndc(DVec2::new(400.0, 300.0), VIEWPORT), DVec2::ZERO);
    }

    #[test]
    fn test_corners_map_to_unit_square() {
        assert_eq!(to_ndc(DVec2::ZERO, VIEWPORT), DVec2::new(-1.0, 1.0));
        assert_eq!(to_ndc(VIEWPORT, VIEWPORT), DVec2::new(1.0, -1.0));
    }

    #[test]
    fn test_context_uses_its_own_size() {
        let rays = |_ndc: DVec2| -> Option<WorldRay> { None };
        let before = ViewportContext::new(VIEWPORT, &rays);
        let after = ViewportContext::new(DVec2::new(400.0, 300.0), &rays);
        let pixel = DVec2::new(400.0, 300.0);

        assert_eq!(before.to_ndc(pixel), DVec2::ZERO);
        assert_eq!(after.to_ndc(pixel), DVec2::new(1.0, -1.0));
    }

    #[test]
    fn test_closure_ray_source() {
        let rays = |ndc: DVec2| Some(WorldRay::new(DVec3::new(ndc.x, 1.0, ndc.y), DVec3::NEG_Y));
        let ray = rays.ray_through(DVec2::new(0.5, -0.5)).unwrap();

        assert_eq!(ray.origin, DVec3::new(0.5, 1.0, -0.5));
        assert_eq!(ray.point_at(1.0), DVec3::new(0.5, 0.0, -0.5));
    }
}
