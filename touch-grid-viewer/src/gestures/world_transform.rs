use bevy::math::DVec3;
use bevy::prelude::*;

use super::error::GestureError;

/// Change produced by one gesture frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformDelta {
    /// Horizontal pan; `y` is always zero.
    Translate(DVec3),
    /// Pinch: multiply scale by `factor`, then subtract `displacement` from the position.
    Zoom { factor: f64, displacement: DVec3 },
}

/// Position and uniform scale of the content group. The only state gestures mutate.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pub position: DVec3,
    pub scale: f64,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            scale: 1.0,
        }
    }
}

impl WorldTransform {
    pub fn translate(&mut self, delta: DVec3) {
        self.position += delta;
    }

    /// Multiply the scale by `factor`. Zero, negative and non-finite factors are
    /// rejected and leave the scale untouched.
    pub fn rescale(&mut self, factor: f64) -> Result<(), GestureError> {
        validate_factor(factor)?;
        self.scale *= factor;
        Ok(())
    }

    /// Apply a gesture delta all-or-nothing: every component is validated before anything changes.
    pub fn apply(&mut self, delta: &TransformDelta) -> Result<(), GestureError> {
        match *delta {
            TransformDelta::Translate(offset) => {
                if !offset.is_finite() {
                    return Err(GestureError::NonFinite { what: "pan offset" });
                }
                self.translate(offset);
            }
            TransformDelta::Zoom {
                factor,
                displacement,
            } => {
                validate_factor(factor)?;
                if !displacement.is_finite() {
                    return Err(GestureError::NonFinite {
                        what: "zoom displacement",
                    });
                }
                self.rescale(factor)?;
                self.translate(-displacement);
            }
        }
        Ok(())
    }

    /// Content-local point rendered at `world`.
    pub fn to_local(&self, world: DVec3) -> DVec3 {
        (world - self.position) / self.scale
    }

    /// World position at which content-local `local` is rendered.
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.position + local * self.scale
    }

    pub fn to_bevy_transform(&self) -> Transform {
        Transform::from_translation(self.position.as_vec3())
            .with_scale(Vec3::splat(self.scale as f32))
    }
}

fn validate_factor(factor: f64) -> Result<(), GestureError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(GestureError::InvalidScale(factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_identity() {
        let world = WorldTransform::default();
        assert_eq!(world.position, DVec3::ZERO);
        assert_eq!(world.scale, 1.0);
    }

    #[test]
    fn test_translate_accumulates() {
        let mut world = WorldTransform::default();
        world.translate(DVec3::new(1.0, 0.0, 2.0));
        world.translate(DVec3::new(-3.0, 0.0, 0.5));
        assert_eq!(world.position, DVec3::new(-2.0, 0.0, 2.5));
    }

    #[test]
    fn test_rescale_rejects_non_positive() {
        let mut world = WorldTransform::default();
        assert_eq!(world.rescale(0.0), Err(GestureError::InvalidScale(0.0)));
        assert_eq!(world.rescale(-2.0), Err(GestureError::InvalidScale(-2.0)));
        assert!(world.rescale(f64::INFINITY).is_err());
        assert_eq!(world.scale, 1.0);

        world.rescale(2.5).unwrap();
        assert_eq!(world.scale, 2.5);
    }

    #[test]
    fn test_failed_zoom_leaves_state_untouched() {
        let mut world = WorldTransform {
            position: DVec3::new(4.0, 0.0, -1.0),
            scale: 3.0,
        };
        let before = world;

        let bad_factor = TransformDelta::Zoom {
            factor: f64::NAN,
            displacement: DVec3::ONE,
        };
        let bad_displacement = TransformDelta::Zoom {
            factor: 2.0,
            displacement: DVec3::new(f64::INFINITY, 0.0, 0.0),
        };

        assert!(world.apply(&bad_factor).is_err());
        assert!(world.apply(&bad_displacement).is_err());
        assert_eq!(world, before);
    }

    #[test]
    fn test_apply_zoom_scales_then_displaces() {
        let mut world = WorldTransform::default();
        world
            .apply(&TransformDelta::Zoom {
                factor: 2.0,
                displacement: DVec3::new(5.0, 0.0, 5.0),
            })
            .unwrap();

        assert_eq!(world.scale, 2.0);
        assert_eq!(world.position, DVec3::new(-5.0, 0.0, -5.0));
    }

    #[test]
    fn test_local_world_round_trip() {
        let world = WorldTransform {
            position: DVec3::new(10.0, 0.0, 20.0),
            scale: 4.0,
        };
        let local = DVec3::new(1.0, 0.0, -2.0);
        assert_eq!(world.to_world(local), DVec3::new(14.0, 0.0, 12.0));
        assert_eq!(world.to_local(world.to_world(local)), local);
    }
}
