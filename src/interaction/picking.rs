use bevy::prelude::*;

use crate::scene::PickCollider;

/// World-space sphere the pick ray is tested against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickCandidate {
    pub entity: Entity,
    pub center: Vec3,
    pub radius: f32,
}

impl PickCandidate {
    /// Lift a local collider into world space using its global transform.
    pub fn from_collider(entity: Entity, collider: &PickCollider, global: &GlobalTransform) -> Self {
        Self {
            entity,
            center: global.translation(),
            radius: collider.radius * global.scale().max_element(),
        }
    }
}

/// One ray intersection, `distance` along the ray from the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    pub distance: f32,
}

/// Normalize a logical cursor position (origin top-left) into NDC, +Y up.
pub fn pointer_to_ndc(cursor: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        cursor.x / viewport.x * 2.0 - 1.0,
        -(cursor.y / viewport.y * 2.0 - 1.0),
    ))
}

/// Build the world-space ray from the camera through an NDC point.
pub fn camera_ray(camera: &Transform, projection: &PerspectiveProjection, ndc: Vec2) -> Option<Ray3d> {
    let half_height = (projection.fov * 0.5).tan();
    let view_direction = Vec3::new(
        ndc.x * half_height * projection.aspect_ratio,
        ndc.y * half_height,
        -1.0,
    );
    let direction = Dir3::new(camera.rotation * view_direction).ok()?;
    Some(Ray3d::new(camera.translation, direction))
}

/// Distance along `ray` to the first point of a sphere in front of the origin.
pub fn ray_sphere_distance(ray: &Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let offset = ray.origin - center;
    let b = offset.dot(*ray.direction);
    let c = offset.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let far = -b + root;
    if far < 0.0 {
        return None;
    }
    let near = -b - root;
    Some(if near >= 0.0 { near } else { far })
}

/// Intersect every candidate and return hits nearest first.
pub fn intersect_sorted<I>(ray: &Ray3d, candidates: I) -> Vec<PickHit>
where
    I: IntoIterator<Item = PickCandidate>,
{
    let mut hits: Vec<PickHit> = candidates
        .into_iter()
        .filter_map(|candidate| {
            ray_sphere_distance(ray, candidate.center, candidate.radius).map(|distance| PickHit {
                entity: candidate.entity,
                distance,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::*;

    /// Globe shells, a pin, and its hit target, keyed by freshly spawned entities.
    fn globe_candidates(world: &mut World) -> Vec<PickCandidate> {
        let layout = [
            (Vec3::ZERO, 1.0),
            (Vec3::ZERO, 1.003),
            (Vec3::ZERO, 1.01),
            (Vec3::new(0.0, 0.0, 1.04), 0.015),
            (Vec3::new(0.0, -0.02, 1.04), 0.08),
        ];
        layout
            .into_iter()
            .map(|(center, radius)| PickCandidate {
                entity: world.spawn_empty().id(),
                center,
                radius,
            })
            .collect()
    }

    /// Screen corners map to NDC corners with Y flipped.
    #[test]
    fn pointer_maps_to_flipped_ndc() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(pointer_to_ndc(Vec2::ZERO, viewport), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(pointer_to_ndc(viewport, viewport), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(pointer_to_ndc(viewport * 0.5, viewport), Some(Vec2::ZERO));
        assert_eq!(pointer_to_ndc(Vec2::ONE, Vec2::new(0.0, 600.0)), None);
    }

    /// A ray aimed at a hit target's center reports that target first.
    #[test]
    fn ray_at_hit_target_center_hits_it_first() {
        let origin = Vec3::new(0.0, 0.0, 5.0);
        let target_center = Vec3::new(0.0, -0.02, 1.04);
        let direction = Dir3::new(target_center - origin).expect("direction");
        let ray = Ray3d::new(origin, direction);

        let mut world = World::new();
        let candidates = globe_candidates(&mut world);
        let hits = intersect_sorted(&ray, candidates.clone());
        assert_eq!(hits[0].entity, candidates[4].entity);
        assert!(hits.iter().any(|hit| hit.entity == candidates[0].entity));
        assert!(hits.windows(2).all(|pair| pair[0].distance <= pair[1].distance));
    }

    /// A ray into empty space hits nothing.
    #[test]
    fn ray_into_empty_space_hits_nothing() {
        let camera = Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y);
        let projection = PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            ..default()
        };
        let ray = camera_ray(&camera, &projection, Vec2::new(0.95, 0.95)).expect("ray");
        let mut world = World::new();
        assert!(intersect_sorted(&ray, globe_candidates(&mut world)).is_empty());
    }

    /// The center of the screen looks straight down the camera's forward axis.
    #[test]
    fn screen_center_ray_follows_camera_forward() {
        let camera = Transform::from_xyz(3.0, 0.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y);
        let projection = PerspectiveProjection::default();
        let ray = camera_ray(&camera, &projection, Vec2::ZERO).expect("ray");
        assert!(ray.direction.as_vec3().abs_diff_eq(Vec3::NEG_X, 1e-6));
        let distance = ray_sphere_distance(&ray, Vec3::ZERO, 1.0).expect("hit");
        assert!((distance - 2.0).abs() < 1e-5);
    }

    /// Spheres behind the ray origin are ignored; a ray starting inside exits forward.
    #[test]
    fn sphere_distance_ignores_spheres_behind() {
        let ray = Ray3d::new(Vec3::ZERO, Dir3::Z);
        assert_eq!(ray_sphere_distance(&ray, Vec3::new(0.0, 0.0, -5.0), 1.0), None);
        assert_eq!(ray_sphere_distance(&ray, Vec3::ZERO, 2.0), Some(2.0));
    }
}
