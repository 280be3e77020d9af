use bevy::prelude::*;

mod camera;
mod dialog;
mod geometry;
mod interaction;
mod portfolio;
mod scene;

use camera::{orbit_input_system, orbit_update_system};
use dialog::{
    OpenWorkDialog, WorkDialogClosed, dialog_close_system, dialog_flip_system,
    open_work_dialog_system,
};
use interaction::{ClickTracker, DialogGuard, dialog_closed_system, pointer_click_system};
use portfolio::{LocationCatalog, locations};
use scene::{
    FrameLoop, FresnelMaterial, RenderSurface, cancel_frame_loop_on_exit, frame_loop_running,
    setup_scene, spin_clouds_system, spin_globe_system, viewport_resize_system,
};

// Radius of the Earth sphere in world units.
const GLOBE_RADIUS: f32 = 1.0;
// Radius at which pins float above the surface.
const PIN_ORBIT_RADIUS: f32 = 1.04;
// Axial tilt of the globe group about Z, in degrees.
const GLOBE_TILT_DEGREES: f32 = -12.4;
// Globe spin per frame in radians.
const GLOBE_SPIN_PER_FRAME: f32 = 0.002;
// Cloud-shell world spin per frame in radians, including the globe spin.
const CLOUD_SPIN_PER_FRAME: f32 = 0.003;
// Number of background stars.
const STAR_COUNT: usize = 2000;
// Vertical field of view in degrees.
const CAMERA_FOV_DEGREES: f32 = 75.0;
// Near clip plane.
const CAMERA_NEAR: f32 = 0.1;
// Far clip plane.
const CAMERA_FAR: f32 = 1000.0;
// Initial camera distance from the globe center.
const CAMERA_DISTANCE: f32 = 5.0;
// Fraction of the remaining orbit distance covered each frame.
const ORBIT_DAMPING: f32 = 0.05;
// Max pointer travel between press and release that still counts as a click.
const CLICK_SLOP_PX: f32 = 5.0;
// Primary window title.
const WINDOW_TITLE: &str = "Globe Folio";

// App entry point and system registration.
fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    fit_canvas_to_parent: true,
                    ..default()
                }),
                ..default()
            }),
            MaterialPlugin::<FresnelMaterial>::default(),
        ))
        .insert_resource(LocationCatalog::new(locations()))
        .init_resource::<FrameLoop>()
        .init_resource::<RenderSurface>()
        .init_resource::<DialogGuard>()
        .init_resource::<ClickTracker>()
        .add_message::<OpenWorkDialog>()
        .add_message::<WorkDialogClosed>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                viewport_resize_system,
                (
                    orbit_input_system,
                    (spin_globe_system, spin_clouds_system, orbit_update_system)
                        .run_if(frame_loop_running),
                )
                    .chain(),
                (
                    pointer_click_system,
                    open_work_dialog_system,
                    dialog_flip_system,
                    dialog_close_system,
                    dialog_closed_system,
                )
                    .chain(),
                cancel_frame_loop_on_exit,
            ),
        )
        .run();
}
