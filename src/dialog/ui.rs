use bevy::prelude::*;

use crate::dialog::{DialogButton, DialogFace, WorkDialogCard};
use crate::portfolio::WorkInfo;

/// Overlay tint behind the card.
const OVERLAY_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
/// Card background.
const CARD_COLOR: Color = Color::srgb(0.08, 0.1, 0.14);
/// Button background.
const BUTTON_COLOR: Color = Color::srgb(0.2, 0.24, 0.32);
/// Secondary text color for company, location, and dates.
const MUTED_TEXT_COLOR: Color = Color::srgb(0.75, 0.8, 0.88);
/// Card width in pixels.
const CARD_WIDTH: f32 = 520.0;
/// Patch image edge length in pixels.
const PATCH_SIZE: f32 = 128.0;
/// Keeps the dialog above any other UI.
const DIALOG_Z_INDEX: i32 = 100;

/// Spawn the modal overlay and card for `info`; return the overlay root.
///
/// Empty fields are left out. The Flip button only appears when there are
/// details to show on the back face.
pub(crate) fn spawn_work_dialog(
    commands: &mut Commands,
    info: &WorkInfo,
    patch: Option<Handle<Image>>,
) -> Entity {
    commands
        .spawn((
            Name::new("workDialog"),
            WorkDialogCard::default(),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            GlobalZIndex(DIALOG_Z_INDEX),
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        width: Val::Px(CARD_WIDTH),
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(12.0),
                        padding: UiRect::all(Val::Px(20.0)),
                        ..default()
                    },
                    BackgroundColor(CARD_COLOR),
                ))
                .with_children(|card| {
                    spawn_front_face(card, info, patch);
                    spawn_back_face(card, info);
                    spawn_buttons(card, info.has_details());
                });
        })
        .id()
}

fn spawn_front_face(card: &mut ChildSpawnerCommands, info: &WorkInfo, patch: Option<Handle<Image>>) {
    card.spawn((
        DialogFace::Front,
        Node {
            display: DialogFace::Front.display_for(false),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(6.0),
            ..default()
        },
    ))
    .with_children(|face| {
        if let Some(patch) = patch {
            face.spawn((
                ImageNode::new(patch),
                Node {
                    width: Val::Px(PATCH_SIZE),
                    height: Val::Px(PATCH_SIZE),
                    ..default()
                },
            ));
        }
        spawn_line(face, &info.job_title, 28.0, Color::WHITE);
        for line in [&info.job_company, &info.job_location, &info.job_dates] {
            spawn_line(face, line, 18.0, MUTED_TEXT_COLOR);
        }
    });
}

fn spawn_back_face(card: &mut ChildSpawnerCommands, info: &WorkInfo) {
    card.spawn((
        DialogFace::Back,
        Node {
            display: DialogFace::Back.display_for(false),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        },
    ))
    .with_children(|face| {
        for detail in &info.job_details {
            spawn_line(face, &detail.job_duty, 20.0, Color::WHITE);
            for bullet in &detail.job_details {
                spawn_line(face, &format!("\u{2022} {bullet}"), 15.0, MUTED_TEXT_COLOR);
            }
        }
    });
}

fn spawn_buttons(card: &mut ChildSpawnerCommands, with_flip: bool) {
    card.spawn(Node {
        justify_content: JustifyContent::End,
        column_gap: Val::Px(8.0),
        ..default()
    })
    .with_children(|row| {
        if with_flip {
            spawn_button(row, DialogButton::Flip, "Flip");
        }
        spawn_button(row, DialogButton::Close, "Close");
    });
}

fn spawn_button(row: &mut ChildSpawnerCommands, action: DialogButton, label: &str) {
    row.spawn((
        Button,
        action,
        Node {
            padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(BUTTON_COLOR),
    ))
    .with_children(|button| {
        spawn_line(button, label, 16.0, Color::WHITE);
    });
}

/// Spawn one text line; empty strings are skipped.
fn spawn_line(parent: &mut ChildSpawnerCommands, text: &str, font_size: f32, color: Color) {
    if text.is_empty() {
        return;
    }
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
    ));
}
