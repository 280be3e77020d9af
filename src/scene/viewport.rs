use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::camera::OrbitCamera;

/// Last known output surface of the primary window.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RenderSurface {
    /// Logical width in pixels.
    pub width: f32,
    /// Logical height in pixels.
    pub height: f32,
    /// Device pixel ratio.
    pub scale_factor: f32,
}

impl Default for RenderSurface {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            scale_factor: 1.0,
        }
    }
}

impl RenderSurface {
    /// Width over height; 1.0 for a collapsed surface.
    pub fn aspect_ratio(&self) -> f32 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return 1.0;
        }
        self.width / self.height
    }

    /// Logical size as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Output size in physical pixels.
    pub fn physical_size(&self) -> UVec2 {
        (self.size() * self.scale_factor).round().as_uvec2()
    }

    /// Apply new logical size and pixel density; return whether anything changed.
    pub fn resize(&mut self, width: f32, height: f32, scale_factor: f32) -> bool {
        let next = Self {
            width,
            height,
            scale_factor,
        };
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}

/// Set a perspective projection's aspect ratio; return whether it changed.
///
/// Writing through `Mut<Projection>` flags the projection as changed, which is
/// what makes Bevy rebuild the camera's projection matrix.
pub fn apply_aspect_ratio(projection: &mut Projection, aspect_ratio: f32) -> bool {
    let Projection::Perspective(perspective) = projection else {
        return false;
    };
    if perspective.aspect_ratio == aspect_ratio {
        return false;
    }
    perspective.aspect_ratio = aspect_ratio;
    true
}

/// Track primary-window resizes and keep the camera aspect in sync.
pub fn viewport_resize_system(
    mut resized: MessageReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut surface: ResMut<RenderSurface>,
    mut cameras: Query<&mut Projection, With<OrbitCamera>>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };
    let Ok(window) = windows.get(event.window) else {
        return;
    };

    let mut next = *surface;
    if !next.resize(event.width, event.height, window.scale_factor()) {
        return;
    }
    *surface = next;

    for mut projection in &mut cameras {
        apply_aspect_ratio(&mut projection, next.aspect_ratio());
    }
    let physical = next.physical_size();
    debug!(
        "Viewport resized to {}x{} ({}x{} physical)",
        next.width, next.height, physical.x, physical.y
    );
}
