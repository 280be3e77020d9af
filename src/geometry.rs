use std::f32::consts::TAU;

use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::prelude::*;
use rand::Rng;

/// Inner radius of the starfield shell.
const STAR_MIN_RADIUS: f32 = 25.0;
/// Outer (exclusive) radius of the starfield shell.
const STAR_MAX_RADIUS: f32 = 50.0;
/// Star hue in degrees (0.6 of a turn, pale blue).
const STAR_HUE_DEGREES: f32 = 216.0;
/// Star color saturation.
const STAR_SATURATION: f32 = 0.2;
/// Edge length of one star quad in world units.
const STAR_SIZE: f32 = 0.2;

/// Parallel position/color buffers for the starfield point cloud.
#[derive(Debug, Default, Clone)]
pub struct Starfield {
    /// Star positions in world units.
    pub positions: Vec<[f32; 3]>,
    /// Linear RGBA star colors, one per position.
    pub colors: Vec<[f32; 4]>,
}

impl Starfield {
    /// Number of stars in the cloud.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Convert buffers into a mesh of star quads facing the origin, with vertex colors.
    ///
    /// Each star becomes four vertices and six indices; corners carry UVs for a
    /// round sprite texture.
    pub fn into_mesh(self) -> Mesh {
        let count = self.len();
        let mut positions = Vec::with_capacity(count * 4);
        let mut normals = Vec::with_capacity(count * 4);
        let mut uvs = Vec::with_capacity(count * 4);
        let mut colors = Vec::with_capacity(count * 4);
        let mut indices = Vec::with_capacity(count * 6);
        let half = STAR_SIZE * 0.5;

        for (position, color) in self.positions.iter().zip(&self.colors) {
            let center = Vec3::from_array(*position);
            let facing = (-center).normalize_or(Vec3::Z);
            let (right, up) = facing.any_orthonormal_pair();
            let base = positions.len() as u32;
            for (corner, uv) in [
                (-right - up, [0.0, 1.0]),
                (right - up, [1.0, 1.0]),
                (right + up, [1.0, 0.0]),
                (-right + up, [0.0, 0.0]),
            ] {
                positions.push((center + corner * half).to_array());
                normals.push(facing.to_array());
                uvs.push(uv);
                colors.push(*color);
            }
            indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        let mut mesh = Mesh::new(
            bevy::render::render_resource::PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }
}

/// Sample `count` stars on random-radius shells around the origin.
///
/// Directions use inverse-CDF sphere sampling so stars are uniform over the
/// sphere instead of bunching at the poles.
pub fn generate_starfield<R: Rng>(count: usize, rng: &mut R) -> Starfield {
    let mut starfield = Starfield {
        positions: Vec::with_capacity(count),
        colors: Vec::with_capacity(count),
    };
    for _ in 0..count {
        let radius = rng.random_range(STAR_MIN_RADIUS..STAR_MAX_RADIUS);
        let u: f32 = rng.random();
        let v: f32 = rng.random();
        let theta = TAU * u;
        let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
        starfield.positions.push([
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
        ]);

        let lightness: f32 = rng.random();
        let color = Color::hsl(STAR_HUE_DEGREES, STAR_SATURATION, lightness);
        starfield.colors.push(color.to_linear().to_f32_array());
    }
    starfield
}

/// Project latitude/longitude degrees onto a sphere of `radius`.
///
/// Longitude is used as given; callers pass values in the location table's
/// convention, which may exceed 180 degrees.
pub fn project_to_sphere(latitude_deg: f32, longitude_deg: f32, radius: f32) -> Vec3 {
    let lat = latitude_deg.to_radians();
    let lon = longitude_deg.to_radians();
    Vec3::new(
        radius * lat.cos() * lon.sin(),
        radius * lat.sin(),
        radius * lat.cos() * lon.cos(),
    )
}
