use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderType};
use bevy::shader::ShaderRef;

/// Shader asset implementing both fresnel stages.
const FRESNEL_SHADER_PATH: &str = "shaders/fresnel.wgsl";
/// Default rim color (light blue, 0xADD8E6).
pub const DEFAULT_RIM_COLOR: Color = Color::srgb(173.0 / 255.0, 216.0 / 255.0, 230.0 / 255.0);
/// Default facing color (black, so additive blending leaves the globe untouched).
pub const DEFAULT_FACING_COLOR: Color = Color::BLACK;

/// Rim-light tuning shared by the shader and its CPU mirror.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FresnelParams {
    pub rim_color: LinearRgba,
    pub facing_color: LinearRgba,
    pub bias: f32,
    pub scale: f32,
    pub power: f32,
}

impl Default for FresnelParams {
    fn default() -> Self {
        Self::new(DEFAULT_RIM_COLOR, DEFAULT_FACING_COLOR)
    }
}

impl FresnelParams {
    /// Build params with default bias/scale/power (0.1, 1.0, 4.0).
    pub fn new(rim_color: Color, facing_color: Color) -> Self {
        Self {
            rim_color: rim_color.to_linear(),
            facing_color: facing_color.to_linear(),
            bias: 0.1,
            scale: 1.0,
            power: 4.0,
        }
    }

    /// Vertex-stage reflection factor for an incident view ray and a surface normal.
    pub fn reflection_factor(&self, incident: Vec3, normal: Vec3) -> f32 {
        let facing = (1.0 + incident.normalize_or_zero().dot(normal)).max(0.0);
        self.bias + self.scale * facing.powf(self.power)
    }

    /// Fragment-stage color for a reflection factor; alpha equals the clamped factor.
    pub fn shade(&self, reflection_factor: f32) -> LinearRgba {
        let f = reflection_factor.clamp(0.0, 1.0);
        let rgb = self.facing_color.mix(&self.rim_color, f);
        rgb.with_alpha(f)
    }

    fn uniform(&self) -> FresnelUniform {
        FresnelUniform {
            rim_color: self.rim_color.to_vec4(),
            facing_color: self.facing_color.to_vec4(),
            bias: self.bias,
            scale: self.scale,
            power: self.power,
        }
    }
}

/// GPU layout of the fresnel uniform block.
#[derive(ShaderType, Clone, Copy, Debug)]
pub struct FresnelUniform {
    rim_color: Vec4,
    facing_color: Vec4,
    bias: f32,
    scale: f32,
    power: f32,
}

/// Additive rim-light material used for the atmosphere glow shell.
#[derive(Asset, TypePath, AsBindGroup, Clone, Debug)]
pub struct FresnelMaterial {
    #[uniform(0)]
    pub uniform: FresnelUniform,
}

impl FresnelMaterial {
    pub fn new(rim_color: Color, facing_color: Color) -> Self {
        Self::from_params(FresnelParams::new(rim_color, facing_color))
    }

    pub fn from_params(params: FresnelParams) -> Self {
        Self {
            uniform: params.uniform(),
        }
    }
}

impl Material for FresnelMaterial {
    fn vertex_shader() -> ShaderRef {
        FRESNEL_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        FRESNEL_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}
