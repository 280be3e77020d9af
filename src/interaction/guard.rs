use bevy::prelude::*;

/// Whether a work dialog currently owns the screen.
///
/// Only one dialog may be open at a time; clicks that arrive while it is
/// open never reach the router.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DialogGuard {
    #[default]
    Closed,
    Open,
}

impl DialogGuard {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Claim the guard; return `false` if a dialog is already open.
    pub fn try_open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        *self = Self::Open;
        true
    }

    /// Release the guard; return whether it was held.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }
}
