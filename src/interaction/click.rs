use bevy::prelude::*;

use crate::CLICK_SLOP_PX;

/// Press position of the pending click, if the pointer went down over the canvas.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ClickTracker {
    pressed_at: Option<Vec2>,
}

impl ClickTracker {
    /// Remember where the pointer went down. A press outside the window clears it.
    pub fn press(&mut self, cursor: Option<Vec2>) {
        self.pressed_at = cursor;
    }

    /// Forget the pending press.
    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }

    /// Finish a click; yield the release position when the pointer stayed within slop.
    ///
    /// Anything farther is treated as an orbit drag, not a click.
    pub fn release(&mut self, cursor: Option<Vec2>) -> Option<Vec2> {
        let pressed_at = self.pressed_at.take()?;
        let released_at = cursor?;
        (pressed_at.distance(released_at) <= CLICK_SLOP_PX).then_some(released_at)
    }
}
