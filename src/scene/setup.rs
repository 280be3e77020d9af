use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::OrbitCamera;
use crate::geometry::generate_starfield;
use crate::portfolio::LocationCatalog;
use crate::scene::fresnel::{DEFAULT_FACING_COLOR, DEFAULT_RIM_COLOR, FresnelMaterial};
use crate::scene::markers::{MarkerAssets, spawn_location_markers};
use crate::scene::viewport::RenderSurface;
use crate::scene::{CloudShell, GlobeGroup, PickCollider};
use crate::{
    CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, GLOBE_RADIUS,
    GLOBE_TILT_DEGREES, STAR_COUNT,
};

/// Longitude segments of the globe sphere.
const GLOBE_SECTORS: u32 = 128;
/// Latitude rings of the globe sphere.
const GLOBE_STACKS: u32 = 64;
/// Cloud shell scale relative to the surface.
const CLOUD_SCALE: f32 = 1.003;
/// Cloud opacity before additive blending.
const CLOUD_OPACITY: f32 = 0.5;
/// Glow shell scale relative to the surface.
const GLOW_SCALE: f32 = 1.01;
/// Day-side surface texture.
const DAY_TEXTURE: &str = "textures/earthmap.jpg";
/// City-lights texture, blended additively over the surface.
const LIGHTS_TEXTURE: &str = "textures/earthlights.jpg";
/// Cloud texture.
const CLOUDS_TEXTURE: &str = "textures/clouds.jpg";
/// Round sprite drawn on each star quad.
const STAR_TEXTURE: &str = "textures/circle.png";
/// Sun position; the light looks from here toward the origin.
const SUN_POSITION: Vec3 = Vec3::new(-3.0, 2.0, 5.0);
/// Directional-light illuminance used for the sun.
const SUN_ILLUMINANCE: f32 = 10_000.0;
/// Global ambient-light brightness, kept low so the night side stays dark.
const AMBIENT_BRIGHTNESS: f32 = 40.0;

/// Assemble renderer settings, camera, globe, location markers, starfield, and sun.
#[allow(clippy::too_many_arguments)]
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut fresnel_materials: ResMut<Assets<FresnelMaterial>>,
    asset_server: Res<AssetServer>,
    catalog: Res<LocationCatalog>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut surface: ResMut<RenderSurface>,
) {
    setup_environment(&mut commands);
    if let Ok(window) = windows.single() {
        surface.resize(window.width(), window.height(), window.scale_factor());
    }
    spawn_camera(&mut commands, surface.aspect_ratio());

    let globe = spawn_globe(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut fresnel_materials,
        &asset_server,
    );
    let marker_assets = MarkerAssets::build(&mut meshes, &mut materials);
    let pins = spawn_location_markers(&mut commands, &marker_assets, globe, &catalog.locations);

    spawn_starfield(&mut commands, &mut meshes, &mut materials, &asset_server);
    spawn_sun(&mut commands);

    info!("Globe assembled with {pins} location pins");
}

/// Insert background and ambient-light resources.
fn setup_environment(commands: &mut Commands) {
    commands.insert_resource(ClearColor(Color::BLACK));
    commands.insert_resource(bevy::light::GlobalAmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: true,
    });
}

/// Spawn the tone-mapped perspective camera on its orbit.
fn spawn_camera(commands: &mut Commands, aspect_ratio: f32) {
    let orbit = OrbitCamera::new(CAMERA_DISTANCE);
    commands.spawn((
        bevy::camera::Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            aspect_ratio,
            ..default()
        }),
        // MSAA stays at Bevy's default 4x.
        Tonemapping::AcesFitted,
        orbit.transform(),
        orbit,
    ));
}

/// Spawn the tilted globe group with surface, lights, clouds, and glow shells.
fn spawn_globe(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    fresnel_materials: &mut ResMut<Assets<FresnelMaterial>>,
    asset_server: &Res<AssetServer>,
) -> Entity {
    let group = GlobeGroup::new(GLOBE_TILT_DEGREES.to_radians());
    let globe = commands
        .spawn((
            Name::new("earthGroup"),
            group,
            Transform::from_rotation(group.rotation()),
            Visibility::default(),
        ))
        .id();

    let sphere = meshes.add(Sphere::new(GLOBE_RADIUS).mesh().uv(GLOBE_SECTORS, GLOBE_STACKS));

    let day_material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(DAY_TEXTURE)),
        perceptual_roughness: 0.9,
        reflectance: 0.2,
        ..default()
    });
    commands.spawn((
        Name::new("earth"),
        PickCollider::new(GLOBE_RADIUS),
        bevy::mesh::Mesh3d(sphere.clone()),
        bevy::pbr::MeshMaterial3d(day_material),
        Transform::IDENTITY,
        ChildOf(globe),
    ));

    let lights_material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(LIGHTS_TEXTURE)),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    });
    commands.spawn((
        Name::new("earthLights"),
        PickCollider::new(GLOBE_RADIUS),
        bevy::mesh::Mesh3d(sphere.clone()),
        bevy::pbr::MeshMaterial3d(lights_material),
        bevy::light::NotShadowCaster,
        Transform::IDENTITY,
        ChildOf(globe),
    ));

    let clouds_material = materials.add(StandardMaterial {
        base_color: Color::WHITE.with_alpha(CLOUD_OPACITY),
        base_color_texture: Some(asset_server.load(CLOUDS_TEXTURE)),
        alpha_mode: AlphaMode::Add,
        ..default()
    });
    commands.spawn((
        Name::new("clouds"),
        CloudShell,
        PickCollider::new(GLOBE_RADIUS),
        bevy::mesh::Mesh3d(sphere.clone()),
        bevy::pbr::MeshMaterial3d(clouds_material),
        bevy::light::NotShadowCaster,
        Transform::from_scale(Vec3::splat(CLOUD_SCALE)),
        ChildOf(globe),
    ));

    let glow_material =
        fresnel_materials.add(FresnelMaterial::new(DEFAULT_RIM_COLOR, DEFAULT_FACING_COLOR));
    commands.spawn((
        Name::new("glow"),
        PickCollider::new(GLOBE_RADIUS),
        bevy::mesh::Mesh3d(sphere),
        bevy::pbr::MeshMaterial3d(glow_material),
        bevy::light::NotShadowCaster,
        Transform::from_scale(Vec3::splat(GLOW_SCALE)),
        ChildOf(globe),
    ));

    globe
}

/// Spawn the background starfield as round sprites facing the origin.
fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    asset_server: &Res<AssetServer>,
) {
    let starfield = generate_starfield(STAR_COUNT, &mut rand::rng());
    debug!("Starfield generated with {} stars", starfield.len());
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(asset_server.load(STAR_TEXTURE)),
        alpha_mode: AlphaMode::Mask(0.5),
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    commands.spawn((
        Name::new("starfield"),
        bevy::mesh::Mesh3d(meshes.add(starfield.into_mesh())),
        bevy::pbr::MeshMaterial3d(material),
        bevy::light::NotShadowCaster,
        Transform::IDENTITY,
    ));
}

/// Spawn the single directional sun light.
fn spawn_sun(commands: &mut Commands) {
    commands.spawn((
        Name::new("sun"),
        bevy::light::DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            color: Color::WHITE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
