//! Locomotion domain: ground probe backed by avian spatial queries.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::GroundQuery;

/// Sphere overlap against the physics world, skipping the character itself
/// and any sensor colliders.
pub(crate) struct AvianGroundQuery<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub sensors: &'a Query<'w, 's, (), With<Sensor>>,
    pub character: Entity,
}

impl GroundQuery for AvianGroundQuery<'_, '_, '_> {
    fn check_sphere(&self, center: Vec3, radius: f32, layers: u32) -> bool {
        let filter = SpatialQueryFilter::from_mask(LayerMask(layers))
            .with_excluded_entities([self.character]);

        self.spatial_query
            .shape_intersections(&Collider::sphere(radius), center, Quat::IDENTITY, &filter)
            .into_iter()
            .any(|entity| !self.sensors.contains(entity))
    }
}
