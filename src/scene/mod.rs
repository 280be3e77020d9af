use bevy::prelude::*;

use crate::portfolio::WorkInfo;

mod fresnel;
mod frame;
mod markers;
mod setup;
mod viewport;

pub use fresnel::FresnelMaterial;
pub use frame::{
    FrameLoop, cancel_frame_loop_on_exit, frame_loop_running, spin_clouds_system,
    spin_globe_system,
};
pub use setup::setup_scene;
pub use viewport::{RenderSurface, viewport_resize_system};

#[cfg(test)]
pub(crate) use markers::{MarkerAssets, spawn_location_markers};

/// Name prefix shared by every hit-target collider.
pub const HIT_TARGET_PREFIX: &str = "clickBox_";
/// Name prefix shared by every visible pin.
pub const PIN_PREFIX: &str = "pin_";

/// Root node holding every Earth mesh, pin, and collider; rotated as a unit.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct GlobeGroup {
    /// Fixed axial tilt about Z in radians.
    pub tilt: f32,
    /// Accumulated spin about the tilted axis in radians.
    pub yaw: f32,
}

impl GlobeGroup {
    pub fn new(tilt: f32) -> Self {
        Self { tilt, yaw: 0.0 }
    }

    /// Tilt first, then spin about the tilted axis.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.tilt) * Quat::from_rotation_y(self.yaw)
    }

    /// Advance spin by `delta` radians.
    pub fn advance(&mut self, delta: f32) {
        self.yaw += delta;
    }
}

/// Marker for the cloud shell, which drifts faster than the surface.
#[derive(Component)]
pub struct CloudShell;

/// Sphere collider queried by the pick ray, in the entity's local units.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PickCollider {
    pub radius: f32,
}

impl PickCollider {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

/// Small visible marker at a location's projected position.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Pin {
    /// Index into the location catalog.
    pub index: usize,
    /// Projected position in globe-local space.
    pub position: Vec3,
    pub info: WorkInfo,
}

/// Invisible oversized collider that opens the work dialog when clicked.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct HitTarget {
    /// Index into the location catalog.
    pub index: usize,
    pub info: WorkInfo,
}

/// Marker for the glow decoration around a pin.
#[derive(Component)]
pub struct PinGlow;

/// Stable queryable name of the pin for location `index`.
pub fn pin_name(index: usize) -> Name {
    Name::new(format!("{PIN_PREFIX}{index}"))
}

/// Stable queryable name of the hit target for location `index`.
pub fn hit_target_name(index: usize) -> Name {
    Name::new(format!("{HIT_TARGET_PREFIX}{index}"))
}
