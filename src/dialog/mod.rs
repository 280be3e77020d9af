use bevy::prelude::*;

use crate::portfolio::WorkInfo;

mod ui;

use ui::spawn_work_dialog;

/// Request to show the work dialog for one location.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct OpenWorkDialog {
    pub info: WorkInfo,
}

/// Sent once the open dialog has been dismissed.
#[derive(Message, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkDialogClosed;

/// Overlay root of the open dialog, holding which face is showing.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkDialogCard {
    /// `true` while the details face is showing.
    pub flipped: bool,
}

impl WorkDialogCard {
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }
}

/// One side of the dialog card.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogFace {
    /// Patch, title, company, location, and dates.
    Front,
    /// Duties and their bullet lines.
    Back,
}

impl DialogFace {
    /// Layout display for this face given the card's flip state.
    pub fn display_for(self, flipped: bool) -> Display {
        let visible = match self {
            Self::Front => !flipped,
            Self::Back => flipped,
        };
        if visible { Display::Flex } else { Display::None }
    }
}

/// Action bound to a dialog button.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Flip,
    Close,
}

/// Open the dialog for the latest request, unless one is already showing.
pub fn open_work_dialog_system(
    mut commands: Commands,
    mut requests: MessageReader<OpenWorkDialog>,
    asset_server: Res<AssetServer>,
    open_cards: Query<(), With<WorkDialogCard>>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };
    if !open_cards.is_empty() {
        debug!("Dialog already open; ignoring request for {}", request.info.job_title);
        return;
    }
    let patch = (!request.info.image.is_empty())
        .then(|| asset_server.load(request.info.image.clone()));
    spawn_work_dialog(&mut commands, &request.info, patch);
}

/// Return whether a button bound to `action` was pressed this frame.
fn any_pressed(
    buttons: &Query<(&Interaction, &DialogButton), Changed<Interaction>>,
    action: DialogButton,
) -> bool {
    buttons
        .iter()
        .any(|(interaction, bound)| *interaction == Interaction::Pressed && *bound == action)
}

/// Toggle between front and back faces when Flip is pressed.
pub fn dialog_flip_system(
    buttons: Query<(&Interaction, &DialogButton), Changed<Interaction>>,
    mut cards: Query<&mut WorkDialogCard>,
    mut faces: Query<(&DialogFace, &mut Node)>,
) {
    if !any_pressed(&buttons, DialogButton::Flip) {
        return;
    }
    let Ok(mut card) = cards.single_mut() else {
        return;
    };
    card.flip();
    for (face, mut node) in &mut faces {
        node.display = face.display_for(card.flipped);
    }
}

/// Dismiss the dialog on Close or Escape and report it closed.
pub fn dialog_close_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Query<(&Interaction, &DialogButton), Changed<Interaction>>,
    cards: Query<Entity, With<WorkDialogCard>>,
    mut closed: MessageWriter<WorkDialogClosed>,
) {
    if !any_pressed(&buttons, DialogButton::Close) && !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    let Ok(card) = cards.single() else {
        return;
    };
    commands.entity(card).despawn();
    closed.write(WorkDialogClosed);
}

#[cfg(test)]
mod tests {
    use bevy::ecs::world::CommandQueue;
    use bevy::prelude::*;

    use super::*;
    use crate::interaction::{DialogGuard, dialog_closed_system};
    use crate::portfolio::locations;

    /// App with the dialog input systems and the guard release wired as in main.
    fn dialog_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_resource(DialogGuard::Open);
        app.add_message::<WorkDialogClosed>();
        app.add_systems(
            Update,
            (dialog_flip_system, dialog_close_system, dialog_closed_system).chain(),
        );
        app
    }

    fn spawn_dialog(world: &mut World, info: &WorkInfo) -> Entity {
        let mut queue = CommandQueue::default();
        let root = {
            let mut commands = Commands::new(&mut queue, world);
            spawn_work_dialog(&mut commands, info, Some(Handle::default()))
        };
        queue.apply(world);
        root
    }

    fn button(world: &mut World, action: DialogButton) -> Entity {
        world
            .query::<(Entity, &DialogButton)>()
            .iter(world)
            .find(|(_, candidate)| **candidate == action)
            .map(|(entity, _)| entity)
            .expect("dialog button")
    }

    fn face_display(world: &mut World, face: DialogFace) -> Display {
        world
            .query::<(&DialogFace, &Node)>()
            .iter(world)
            .find(|(candidate, _)| **candidate == face)
            .map(|(_, node)| node.display)
            .expect("dialog face")
    }

    /// Only the face matching the flip state is laid out.
    #[test]
    fn faces_follow_flip_state() {
        assert_eq!(DialogFace::Front.display_for(false), Display::Flex);
        assert_eq!(DialogFace::Back.display_for(false), Display::None);
        assert_eq!(DialogFace::Front.display_for(true), Display::None);
        assert_eq!(DialogFace::Back.display_for(true), Display::Flex);
    }

    /// Pressing Flip swaps the visible face.
    #[test]
    fn flip_button_shows_details_face() {
        let mut app = dialog_app();
        let info = locations()[1].info.clone();
        let root = spawn_dialog(app.world_mut(), &info);
        assert_eq!(face_display(app.world_mut(), DialogFace::Front), Display::Flex);

        let flip = button(app.world_mut(), DialogButton::Flip);
        app.world_mut().entity_mut(flip).insert(Interaction::Pressed);
        app.update();

        assert!(app.world().get::<WorkDialogCard>(root).expect("card").flipped);
        assert_eq!(face_display(app.world_mut(), DialogFace::Front), Display::None);
        assert_eq!(face_display(app.world_mut(), DialogFace::Back), Display::Flex);
    }

    /// A payload without details gets no Flip button.
    #[test]
    fn flip_is_hidden_without_details() {
        let mut world = World::new();
        spawn_dialog(&mut world, &locations()[0].info);
        let actions: Vec<DialogButton> = world
            .query::<&DialogButton>()
            .iter(&world)
            .copied()
            .collect();
        assert_eq!(actions, vec![DialogButton::Close]);
    }

    /// Close despawns the whole overlay and releases the guard.
    #[test]
    fn close_button_despawns_dialog_and_releases_guard() {
        let mut app = dialog_app();
        let root = spawn_dialog(app.world_mut(), &locations()[1].info);

        let close = button(app.world_mut(), DialogButton::Close);
        app.world_mut().entity_mut(close).insert(Interaction::Pressed);
        app.update();

        assert!(app.world().get_entity(root).is_err());
        assert_eq!(app.world_mut().query::<&DialogFace>().iter(app.world()).count(), 0);
        assert_eq!(*app.world().resource::<DialogGuard>(), DialogGuard::Closed);
    }

    /// Escape closes the dialog like the Close button.
    #[test]
    fn escape_closes_dialog() {
        let mut app = dialog_app();
        let root = spawn_dialog(app.world_mut(), &locations()[1].info);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();

        assert!(app.world().get_entity(root).is_err());
        assert!(!app.world().resource::<DialogGuard>().is_open());
    }

    /// App that opens dialogs from requests, with a real asset server for patch images.
    fn open_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()));
        app.init_asset::<Image>();
        app.add_message::<OpenWorkDialog>();
        app.add_systems(Update, open_work_dialog_system);
        app
    }

    fn has_text(world: &mut World, line: &str) -> bool {
        world.query::<&Text>().iter(world).any(|text| text.0 == line)
    }

    /// A request opens one dialog with its payload; a second request while it is open is dropped.
    #[test]
    fn open_request_spawns_one_dialog_at_a_time() {
        let mut app = open_app();
        let table = locations();

        app.world_mut().write_message(OpenWorkDialog {
            info: table[1].info.clone(),
        });
        app.update();
        assert_eq!(app.world_mut().query::<&WorkDialogCard>().iter(app.world()).count(), 1);
        assert!(has_text(app.world_mut(), "Knowledge Manager"));
        assert_eq!(app.world_mut().query::<&ImageNode>().iter(app.world()).count(), 1);

        app.world_mut().write_message(OpenWorkDialog {
            info: table[2].info.clone(),
        });
        app.update();
        assert_eq!(app.world_mut().query::<&WorkDialogCard>().iter(app.world()).count(), 1);
        assert!(!has_text(app.world_mut(), "Executive Admin"));
    }

    /// A payload without a patch image opens a dialog with no image node.
    #[test]
    fn open_request_without_image_skips_patch() {
        let mut app = open_app();
        app.world_mut().write_message(OpenWorkDialog {
            info: WorkInfo::new("Analyst", "Nowhere", ""),
        });
        app.update();

        assert_eq!(app.world_mut().query::<&WorkDialogCard>().iter(app.world()).count(), 1);
        assert!(has_text(app.world_mut(), "Analyst"));
        assert_eq!(app.world_mut().query::<&ImageNode>().iter(app.world()).count(), 0);
    }
}
