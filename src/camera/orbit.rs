use bevy::prelude::*;

use crate::ORBIT_DAMPING;

/// Damped orbit controller around the globe center.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Drag sensitivity in radians per logical pixel.
    pub sensitivity: f32,
    /// Radius change per scroll line.
    pub zoom_speed: f32,
    /// Fraction of the remaining distance to the target covered each frame.
    pub damping: f32,
    /// Current yaw around +Y in radians.
    pub yaw: f32,
    /// Current pitch above the equator in radians.
    pub pitch: f32,
    /// Current distance from the origin.
    pub radius: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_radius: f32,
}

impl OrbitCamera {
    /// Minimum pitch clamp, just short of the south pole.
    const PITCH_MIN: f32 = -1.5;
    /// Maximum pitch clamp, just short of the north pole.
    const PITCH_MAX: f32 = 1.5;
    /// Closest allowed zoom.
    const RADIUS_MIN: f32 = 1.5;
    /// Farthest allowed zoom.
    const RADIUS_MAX: f32 = 20.0;

    /// Build an orbit on +Z at `radius`, at rest.
    pub fn new(radius: f32) -> Self {
        let radius = radius.clamp(Self::RADIUS_MIN, Self::RADIUS_MAX);
        Self {
            sensitivity: 0.005,
            zoom_speed: 0.25,
            damping: ORBIT_DAMPING,
            yaw: 0.0,
            pitch: 0.0,
            radius,
            target_yaw: 0.0,
            target_pitch: 0.0,
            target_radius: radius,
        }
    }

    /// Apply a pointer drag delta to the target angles.
    pub fn apply_drag(&mut self, delta: Vec2) {
        self.target_yaw -= delta.x * self.sensitivity;
        self.target_pitch =
            (self.target_pitch + delta.y * self.sensitivity).clamp(Self::PITCH_MIN, Self::PITCH_MAX);
    }

    /// Apply scroll lines to the target radius; positive scroll zooms in.
    pub fn apply_zoom(&mut self, lines: f32) {
        self.target_radius =
            (self.target_radius - lines * self.zoom_speed).clamp(Self::RADIUS_MIN, Self::RADIUS_MAX);
    }

    /// Move current angles and radius one damping step toward their targets.
    pub fn step(&mut self) {
        self.yaw += (self.target_yaw - self.yaw) * self.damping;
        self.pitch += (self.target_pitch - self.pitch) * self.damping;
        self.radius += (self.target_radius - self.radius) * self.damping;
    }

    /// Camera position on the orbit sphere.
    pub fn eye_position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.pitch.cos() * self.yaw.sin(),
            self.radius * self.pitch.sin(),
            self.radius * self.pitch.cos() * self.yaw.cos(),
        )
    }

    /// Camera transform looking at the origin from the current orbit position.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye_position()).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::Vec2;
    use bevy::prelude::Vec3;

    use super::OrbitCamera;

    /// A fresh orbit sits on +Z at its radius and looks at the origin.
    #[test]
    fn new_orbit_starts_on_positive_z() {
        let orbit = OrbitCamera::new(5.0);
        assert!(orbit.eye_position().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-6));
        let forward = orbit.transform().forward().as_vec3();
        assert!(forward.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    /// Damping approaches the drag target without overshooting.
    #[test]
    fn damping_converges_toward_target() {
        let mut orbit = OrbitCamera::new(5.0);
        orbit.apply_drag(Vec2::new(-100.0, 0.0));
        let target = orbit.target_yaw;
        assert!(target > 0.0);

        orbit.step();
        assert!(orbit.yaw > 0.0 && orbit.yaw < target);
        for _ in 0..500 {
            orbit.step();
        }
        assert!((orbit.yaw - target).abs() < 1e-4);
        assert!(orbit.yaw <= target);
    }

    /// Pitch and zoom targets stay inside their clamps.
    #[test]
    fn drag_and_zoom_are_clamped() {
        let mut orbit = OrbitCamera::new(5.0);
        orbit.apply_drag(Vec2::new(0.0, 1.0e6));
        assert_eq!(orbit.target_pitch, 1.5);
        orbit.apply_zoom(1.0e6);
        assert_eq!(orbit.target_radius, 1.5);
        orbit.apply_zoom(-1.0e6);
        assert_eq!(orbit.target_radius, 20.0);
    }
}
