use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use crate::interaction::DialogGuard;

mod orbit;

pub use orbit::OrbitCamera;

/// Pixel-unit scroll distance treated as one wheel line.
const PIXELS_PER_SCROLL_LINE: f32 = 100.0;

/// Feed pointer drag and scroll into the orbit targets while no dialog covers the globe.
pub fn orbit_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    guard: Res<DialogGuard>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    if guard.is_open() {
        return;
    }
    let lines = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_SCROLL_LINE,
    };
    let dragging = buttons.pressed(MouseButton::Left) && motion.delta != Vec2::ZERO;
    if !dragging && lines == 0.0 {
        return;
    }
    for mut orbit in &mut cameras {
        if dragging {
            orbit.apply_drag(motion.delta);
        }
        if lines != 0.0 {
            orbit.apply_zoom(lines);
        }
    }
}

/// Apply one damping step and move the camera onto its orbit.
pub fn orbit_update_system(mut cameras: Query<(&mut Transform, &mut OrbitCamera)>) {
    for (mut transform, mut orbit) in &mut cameras {
        orbit.step();
        *transform = orbit.transform();
    }
}
