use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::OrbitCamera;
use crate::dialog::{OpenWorkDialog, WorkDialogClosed};
use crate::interaction::click::ClickTracker;
use crate::interaction::guard::DialogGuard;
use crate::interaction::picking::{
    PickCandidate, camera_ray, intersect_sorted, pointer_to_ndc,
};
use crate::portfolio::WorkInfo;
use crate::scene::{GlobeGroup, HIT_TARGET_PREFIX, HitTarget, PickCollider};

/// Decide what the nearest hit opens, claiming the guard when it opens a dialog.
///
/// Only hit targets open dialogs, and only while no dialog is open.
pub fn route_nearest_hit(
    nearest: Option<(&Name, Option<&HitTarget>)>,
    guard: &mut DialogGuard,
) -> Option<WorkInfo> {
    let (name, target) = nearest?;
    if !name.as_str().starts_with(HIT_TARGET_PREFIX) {
        return None;
    }
    let target = target?;
    guard.try_open().then(|| target.info.clone())
}

/// Turn completed clicks over the canvas into dialog-open requests.
#[allow(clippy::too_many_arguments)]
pub fn pointer_click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut tracker: ResMut<ClickTracker>,
    mut guard: ResMut<DialogGuard>,
    cameras: Query<(&GlobalTransform, &Projection), With<OrbitCamera>>,
    globes: Query<Entity, With<GlobeGroup>>,
    colliders: Query<(Entity, &ChildOf, &GlobalTransform, &PickCollider)>,
    markers: Query<(&Name, Option<&HitTarget>)>,
    mut open_requests: MessageWriter<OpenWorkDialog>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    // Presses under an open dialog belong to the dialog's own buttons.
    if buttons.just_pressed(MouseButton::Left) {
        if guard.is_open() {
            tracker.cancel();
        } else {
            tracker.press(window.cursor_position());
        }
    }
    if !buttons.just_released(MouseButton::Left) {
        return;
    }
    let Some(cursor) = tracker.release(window.cursor_position()) else {
        return;
    };

    let Ok((camera_transform, projection)) = cameras.single() else {
        warn!("Click ignored: no orbit camera");
        return;
    };
    let Projection::Perspective(perspective) = projection else {
        return;
    };
    let Ok(globe) = globes.single() else {
        return;
    };
    let Some(ndc) = pointer_to_ndc(cursor, Vec2::new(window.width(), window.height())) else {
        return;
    };
    let Some(ray) = camera_ray(&camera_transform.compute_transform(), perspective, ndc) else {
        warn!("Click ignored: degenerate pick ray at {cursor}");
        return;
    };

    let candidates = colliders
        .iter()
        .filter(|(_, child_of, _, _)| child_of.parent() == globe)
        .map(|(entity, _, global, collider)| PickCandidate::from_collider(entity, collider, global));
    let hits = intersect_sorted(&ray, candidates);
    let nearest = hits.first().and_then(|hit| markers.get(hit.entity).ok());

    match route_nearest_hit(nearest, &mut guard) {
        Some(info) => {
            info!("Opening work dialog for {}", info.job_title);
            open_requests.write(OpenWorkDialog { info });
        }
        None => debug!("Click at {cursor} opened nothing ({} hits)", hits.len()),
    }
}

/// Release the guard once the dialog reports it closed.
pub fn dialog_closed_system(
    mut closed: MessageReader<WorkDialogClosed>,
    mut guard: ResMut<DialogGuard>,
) {
    if closed.read().count() > 0 && guard.close() {
        info!("Work dialog closed");
    }
}
