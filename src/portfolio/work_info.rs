/// One duty heading and its bullet lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobDetail {
    /// Duty heading shown above the bullets.
    pub job_duty: String,
    /// Bullet lines, in display order.
    pub job_details: Vec<String>,
}

impl JobDetail {
    pub fn new(job_duty: &str, job_details: &[&str]) -> Self {
        Self {
            job_duty: job_duty.to_string(),
            job_details: job_details.iter().map(|line| line.to_string()).collect(),
        }
    }
}

/// Payload shown by the work dialog for one location.
///
/// Fields missing from the location table are left empty and hidden by the dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkInfo {
    pub job_title: String,
    pub job_company: String,
    pub job_location: String,
    pub job_dates: String,
    pub job_details: Vec<JobDetail>,
    /// Asset path of the unit patch image, relative to `assets/`.
    pub image: String,
}

impl WorkInfo {
    /// Build a payload with title, location, and patch image only.
    pub fn new(job_title: &str, job_location: &str, image: &str) -> Self {
        Self {
            job_title: job_title.to_string(),
            job_location: job_location.to_string(),
            image: image.to_string(),
            ..Default::default()
        }
    }

    pub fn with_company(mut self, job_company: &str) -> Self {
        self.job_company = job_company.to_string();
        self
    }

    pub fn with_dates(mut self, job_dates: &str) -> Self {
        self.job_dates = job_dates.to_string();
        self
    }

    pub fn with_detail(mut self, detail: JobDetail) -> Self {
        self.job_details.push(detail);
        self
    }

    /// Return whether the back face has anything to show.
    pub fn has_details(&self) -> bool {
        !self.job_details.is_empty()
    }
}

/// A pinned place on the globe.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f32,
    /// Longitude in degrees, not wrapped into any range.
    pub longitude: f32,
    pub info: WorkInfo,
}

impl Location {
    pub fn new(latitude: f32, longitude: f32, info: WorkInfo) -> Self {
        Self {
            latitude,
            longitude,
            info,
        }
    }
}
