use bevy::prelude::*;

use crate::scene::{CloudShell, GlobeGroup};
use crate::{CLOUD_SPIN_PER_FRAME, GLOBE_SPIN_PER_FRAME};

/// Cloud yaw relative to the surface; the group spin supplies the rest.
const CLOUD_DRIFT_PER_FRAME: f32 = CLOUD_SPIN_PER_FRAME - GLOBE_SPIN_PER_FRAME;

/// Cancellation token for the per-frame globe animation.
#[derive(Resource, Debug)]
pub struct FrameLoop {
    running: bool,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self { running: true }
    }
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the frame loop. Cancelling twice is harmless.
    pub fn cancel(&mut self) {
        self.running = false;
    }
}

/// Run condition gating every frame-loop system.
pub fn frame_loop_running(frame_loop: Res<FrameLoop>) -> bool {
    frame_loop.is_running()
}

/// Advance globe spin by one frame step.
pub fn spin_globe_system(mut query: Query<(&mut GlobeGroup, &mut Transform)>) {
    for (mut globe, mut transform) in &mut query {
        globe.advance(GLOBE_SPIN_PER_FRAME);
        transform.rotation = globe.rotation();
    }
}

/// Drift the cloud shell relative to the surface so its world yaw advances by
/// `CLOUD_SPIN_PER_FRAME` once the group spin is composed in.
pub fn spin_clouds_system(mut query: Query<&mut Transform, With<CloudShell>>) {
    for mut transform in &mut query {
        transform.rotate_local_y(CLOUD_DRIFT_PER_FRAME);
    }
}

/// Cancel the frame loop when the view is being torn down.
pub fn cancel_frame_loop_on_exit(
    mut exits: MessageReader<AppExit>,
    mut frame_loop: ResMut<FrameLoop>,
) {
    if exits.read().next().is_some() && frame_loop.is_running() {
        frame_loop.cancel();
        info!("Frame loop cancelled");
    }
}
