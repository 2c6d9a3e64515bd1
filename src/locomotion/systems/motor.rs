//! Locomotion domain: kinematic collide-and-slide motor.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::kinematics::math::{yaw_of, yaw_rotation};
use crate::locomotion::{CharacterMotor, KinematicBody};

const MAX_BUMPS: usize = 4;
const MIN_MOVEMENT: f32 = 1e-8;
/// Contact normals closer to parallel than this share no usable crease.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Moves a kinematic body through the world, sliding along whatever it hits.
/// Sensors never block.
pub(crate) struct KinematicMotor<'a, 'w, 's> {
    pub transform: &'a mut Transform,
    pub body: &'a mut KinematicBody,
    pub collider: &'a Collider,
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub sensors: &'a Query<'w, 's, (), With<Sensor>>,
    pub filter: SpatialQueryFilter,
    pub dt: f32,
}

impl KinematicMotor<'_, '_, '_> {
    fn cast(&self, direction: Dir3, distance: f32) -> Option<ShapeHitData> {
        self.spatial_query.cast_shape_predicate(
            self.collider,
            self.transform.translation,
            self.transform.rotation,
            direction,
            &ShapeCastConfig {
                ignore_origin_penetration: true,
                max_distance: distance,
                ..default()
            },
            &self.filter,
            &|entity| !self.sensors.contains(entity),
        )
    }

    /// Displacement actually applied after sliding along contacts.
    fn slide(&mut self, displacement: Vec3) -> Vec3 {
        let mut moved = Vec3::ZERO;
        let mut remaining = displacement;
        let mut planes: Vec<Vec3> = Vec::with_capacity(MAX_BUMPS);

        for _ in 0..MAX_BUMPS {
            let Ok((direction, length)) = Dir3::new_and_length(remaining) else {
                break;
            };
            if length * length < MIN_MOVEMENT {
                break;
            }

            match self.cast(direction, length) {
                Some(hit) => {
                    let safe_distance = (hit.distance - self.body.skin_width).max(0.0);
                    let step = direction * safe_distance;
                    self.transform.translation += step;
                    moved += step;
                    remaining -= step;

                    planes.push(hit.normal1);
                    remaining = slide_along(&planes, remaining);
                }
                None => {
                    self.transform.translation += remaining;
                    moved += remaining;
                    break;
                }
            }
        }

        moved
    }
}

/// Project the leftover motion onto the contact planes hit so far.
fn slide_along(planes: &[Vec3], motion: Vec3) -> Vec3 {
    let Some(last) = planes.last() else {
        return motion;
    };
    let mut result = motion.reject_from(*last);

    // Two planes: move along their crease
    if planes.len() > 1 {
        result = planes
            .windows(2)
            .fold(result, |acc, pair| {
                let crease = pair[0].cross(pair[1]);
                if crease.length_squared() < PARALLEL_EPSILON {
                    acc
                } else {
                    acc.project_onto(crease)
                }
            });
    }

    result
}

impl CharacterMotor for KinematicMotor<'_, '_, '_> {
    fn position(&self) -> Vec3 {
        self.transform.translation - Vec3::Y * self.body.feet_offset
    }

    fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    fn facing_yaw(&self) -> f32 {
        yaw_of(self.transform.rotation)
    }

    fn set_facing_yaw(&mut self, yaw: f32) {
        self.transform.rotation = yaw_rotation(yaw);
    }

    fn move_by(&mut self, displacement: Vec3) -> Vec3 {
        let moved = self.slide(displacement);
        self.body.velocity = if self.dt > 0.0 {
            moved / self.dt
        } else {
            Vec3::ZERO
        };
        self.body.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_along_floor_keeps_horizontal_motion() {
        let motion = Vec3::new(1.0, -0.5, 0.0);
        let slid = slide_along(&[Vec3::Y], motion);
        assert!(slid.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_slide_into_corner_follows_crease() {
        let motion = Vec3::new(1.0, -1.0, 1.0);
        let slid = slide_along(&[Vec3::Y, Vec3::NEG_X], motion);
        assert!(slid.x.abs() < 1e-6);
        assert!(slid.y.abs() < 1e-6);
        assert!((slid.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_slide_along_same_plane_twice_stays_finite() {
        let motion = Vec3::new(1.0, -0.1, 0.5);
        let slid = slide_along(&[Vec3::Y, Vec3::Y], motion);
        assert!(slid.is_finite());
        assert!(slid.abs_diff_eq(Vec3::new(1.0, 0.0, 0.5), 1e-6));
    }

    #[test]
    fn test_slide_between_opposed_planes_stays_finite() {
        let motion = Vec3::new(0.5, 1.0, 0.0);
        let slid = slide_along(&[Vec3::Y, Vec3::NEG_Y], motion);
        assert!(slid.is_finite());
        assert!(slid.abs_diff_eq(Vec3::new(0.5, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_slide_without_contacts_is_identity() {
        let motion = Vec3::new(0.3, 0.2, -0.1);
        assert_eq!(slide_along(&[], motion), motion);
    }
}
