//! Static location table shown on the globe.
//!
//! Longitudes are degrees in the globe's own convention: they are handed to
//! `project_to_sphere` unchanged and are never wrapped into [-180, 180], so
//! entries east of the date line keep counting past 180 and even past 360.

use crate::portfolio::work_info::{JobDetail, Location, WorkInfo};

/// Build the ordered location table. Order decides the `pin_<index>` names.
pub fn locations() -> Vec<Location> {
    vec![
        // Mississippi
        Location::new(
            28.7416,
            183.0,
            WorkInfo::new(
                "IT Apprentice",
                "Biloxi, Mississippi",
                "patches/336.png",
            ),
        ),
        // Omaha
        Location::new(36.257, 171.0, knowledge_manager()),
        // Djibouti
        Location::new(
            12.0,
            310.0,
            WorkInfo::new("Executive Admin", "Djibouti, Africa", "patches/449.png"),
        ),
        // Okinawa
        Location::new(
            25.0,
            398.0,
            WorkInfo::new(
                "Data Operations Supervisor",
                "Okinawa, Japan",
                "patches/390.png",
            ),
        ),
    ]
}

fn knowledge_manager() -> WorkInfo {
    WorkInfo::new(
        "Knowledge Manager",
        "Offutt AFB - Omaha, Nebraska",
        "patches/55.png",
    )
    .with_company("55th Communications Squadron")
    .with_dates("2017-2021")
    .with_detail(JobDetail::new(
        "SharePoint Admin",
        &[
            "Project lead for development of COVID-19 tracking site and Airman promotion dashboard",
            "Led monthly training for 200+ delegates on SharePoint best practices and security measures",
            "Promoted organization process improvement techniques with collaboration management tools",
        ],
    ))
    .with_detail(JobDetail::new(
        "Records Manager",
        &[
            "Conducted quarterly audits to ensure compliance with record's disposition schedules",
            "Managed data life-cycle; inventoried, destroyed and archived over 90,000 records",
        ],
    ))
    .with_detail(JobDetail::new(
        "Cybersecurity Liaison",
        &[
            "Administered AFNet domain access utilizing Information Assurance Officer (IAO) Express",
            "JPAS experience verifying security clearance information and certification",
        ],
    ))
}
