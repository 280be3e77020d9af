use bevy::prelude::*;

mod locations;
mod work_info;

pub use locations::locations;
pub use work_info::{JobDetail, Location, WorkInfo};

/// Ordered, immutable location table consumed by the scene assembler.
#[derive(Resource, Clone, Debug, Default)]
pub struct LocationCatalog {
    /// Locations in pin-index order.
    pub locations: Vec<Location>,
}

impl LocationCatalog {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }
}
