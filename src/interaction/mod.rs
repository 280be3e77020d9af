mod click;
mod guard;
mod picking;
mod router;

pub use click::ClickTracker;
pub use guard::DialogGuard;
pub use router::{dialog_closed_system, pointer_click_system};
