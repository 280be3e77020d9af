use bevy::prelude::*;

use crate::PIN_ORBIT_RADIUS;
use crate::geometry::project_to_sphere;
use crate::portfolio::Location;
use crate::scene::{HitTarget, PickCollider, Pin, PinGlow, hit_target_name, pin_name};

/// Radius of the visible pin sphere.
const PIN_SPHERE_RADIUS: f32 = 0.015;
/// Radius of the invisible hit-target sphere.
const HIT_TARGET_RADIUS: f32 = 0.08;
/// Downward offset of the hit target from the pin center.
const HIT_TARGET_DROP: f32 = 0.02;
/// Radius of the glow sphere around each pin.
const PIN_GLOW_RADIUS: f32 = 0.03;
/// Pin color.
const PIN_COLOR: Color = Color::srgb(1.0, 0.35, 0.2);
/// Pin glow color, blended additively.
const PIN_GLOW_COLOR: Color = Color::srgba(1.0, 0.55, 0.3, 0.45);

/// Shared meshes and materials for every location marker.
#[derive(Default, Clone)]
pub(crate) struct MarkerAssets {
    pin_mesh: Handle<Mesh>,
    pin_material: Handle<StandardMaterial>,
    hit_mesh: Handle<Mesh>,
    glow_mesh: Handle<Mesh>,
    glow_material: Handle<StandardMaterial>,
}

impl MarkerAssets {
    /// Build marker meshes/materials once so all pins share them.
    pub(crate) fn build(
        meshes: &mut ResMut<Assets<Mesh>>,
        materials: &mut ResMut<Assets<StandardMaterial>>,
    ) -> Self {
        Self {
            pin_mesh: meshes.add(Sphere::new(PIN_SPHERE_RADIUS).mesh().uv(16, 12)),
            pin_material: materials.add(StandardMaterial {
                base_color: PIN_COLOR,
                emissive: PIN_COLOR.to_linear(),
                unlit: true,
                ..default()
            }),
            hit_mesh: meshes.add(Sphere::new(HIT_TARGET_RADIUS).mesh().uv(12, 8)),
            glow_mesh: meshes.add(Sphere::new(PIN_GLOW_RADIUS).mesh().uv(16, 12)),
            glow_material: materials.add(StandardMaterial {
                base_color: PIN_GLOW_COLOR,
                unlit: true,
                alpha_mode: AlphaMode::Add,
                ..default()
            }),
        }
    }
}

/// Spawn pin, hit target, and glow for every location under `globe`.
///
/// Each entity gets its own copy of the location index and `WorkInfo`, so
/// the three stay in 1:1:1 correspondence with `locations`. Returns the
/// number of pins spawned.
pub(crate) fn spawn_location_markers(
    commands: &mut Commands,
    assets: &MarkerAssets,
    globe: Entity,
    locations: &[Location],
) -> usize {
    for (index, location) in locations.iter().enumerate() {
        let position = project_to_sphere(location.latitude, location.longitude, PIN_ORBIT_RADIUS);

        commands.spawn((
            pin_name(index),
            Pin {
                index,
                position,
                info: location.info.clone(),
            },
            PickCollider::new(PIN_SPHERE_RADIUS),
            bevy::mesh::Mesh3d(assets.pin_mesh.clone()),
            bevy::pbr::MeshMaterial3d(assets.pin_material.clone()),
            Transform::from_translation(position),
            ChildOf(globe),
        ));

        commands.spawn((
            hit_target_name(index),
            HitTarget {
                index,
                info: location.info.clone(),
            },
            PickCollider::new(HIT_TARGET_RADIUS),
            bevy::mesh::Mesh3d(assets.hit_mesh.clone()),
            bevy::pbr::MeshMaterial3d(assets.pin_material.clone()),
            Visibility::Hidden,
            Transform::from_translation(position - Vec3::Y * HIT_TARGET_DROP),
            ChildOf(globe),
        ));

        commands.spawn((
            Name::new(format!("pinGlow_{index}")),
            PinGlow,
            PickCollider::new(PIN_GLOW_RADIUS),
            bevy::mesh::Mesh3d(assets.glow_mesh.clone()),
            bevy::pbr::MeshMaterial3d(assets.glow_material.clone()),
            bevy::light::NotShadowCaster,
            Transform::from_translation(position),
            ChildOf(globe),
        ));
    }
    locations.len()
}

#[cfg(test)]
mod tests {
    use bevy::ecs::world::CommandQueue;
    use bevy::prelude::*;

    use super::*;
    use crate::portfolio::locations;
    use crate::scene::GlobeGroup;

    /// Spawn markers for the real location table into a bare world.
    fn assemble_markers(world: &mut World) -> Entity {
        let globe = world.spawn(GlobeGroup::new(0.0)).id();
        let mut queue = CommandQueue::default();
        {
            let mut commands = Commands::new(&mut queue, world);
            let spawned =
                spawn_location_markers(&mut commands, &MarkerAssets::default(), globe, &locations());
            assert_eq!(spawned, locations().len());
        }
        queue.apply(world);
        globe
    }

    /// One pin and one hit target per location, each carrying that location's info.
    #[test]
    fn markers_match_locations_one_to_one() {
        let mut world = World::new();
        let globe = assemble_markers(&mut world);
        let table = locations();

        let mut pins: Vec<(String, Pin)> = world
            .query::<(&Name, &Pin)>()
            .iter(&world)
            .map(|(name, pin)| (name.as_str().to_string(), pin.clone()))
            .collect();
        pins.sort_by_key(|(_, pin)| pin.index);
        let mut targets: Vec<(String, HitTarget)> = world
            .query::<(&Name, &HitTarget)>()
            .iter(&world)
            .map(|(name, target)| (name.as_str().to_string(), target.clone()))
            .collect();
        targets.sort_by_key(|(_, target)| target.index);

        assert_eq!(pins.len(), table.len());
        assert_eq!(targets.len(), table.len());
        for (index, location) in table.iter().enumerate() {
            assert_eq!(pins[index].0, format!("pin_{index}"));
            assert_eq!(pins[index].1.info, location.info);
            assert_eq!(targets[index].0, format!("clickBox_{index}"));
            assert_eq!(targets[index].1.info, location.info);
        }

        // Every marker hangs off the globe group.
        let children = world
            .query::<&ChildOf>()
            .iter(&world)
            .filter(|child_of| child_of.parent() == globe)
            .count();
        assert_eq!(children, table.len() * 3);
    }

    /// Hit targets sit just below their pin and fully enclose it.
    #[test]
    fn hit_target_encloses_its_pin() {
        let mut world = World::new();
        assemble_markers(&mut world);

        let pins: Vec<(usize, Vec3)> = world
            .query::<(&Pin, &Transform)>()
            .iter(&world)
            .map(|(pin, transform)| (pin.index, transform.translation))
            .collect();
        let targets: Vec<(usize, Vec3, f32)> = world
            .query::<(&HitTarget, &Transform, &PickCollider)>()
            .iter(&world)
            .map(|(target, transform, collider)| {
                (target.index, transform.translation, collider.radius)
            })
            .collect();

        for (index, pin_position) in pins {
            let (_, center, radius) = targets
                .iter()
                .find(|(target_index, _, _)| *target_index == index)
                .copied()
                .expect("hit target for pin");
            assert!((pin_position.length() - PIN_ORBIT_RADIUS).abs() < 1e-5);
            assert!(center.y < pin_position.y);
            assert!(center.distance(pin_position) + PIN_GLOW_RADIUS < radius);
        }
    }
}
