#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success {
        consignment_id: String,
    },
    Error {
        message: String,
    },
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success { .. } => "success",
            SubmissionState::Error { .. } => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationState {
    #[default]
    Loading,
    Ready(Vec<String>),
    Failed {
        reason: String,
    },
}

impl LocationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LocationState::Loading)
    }

    pub fn options(&self) -> &[String] {
        match self {
            LocationState::Ready(locations) => locations,
            LocationState::Loading | LocationState::Failed { .. } => &[],
        }
    }

    pub fn contains(&self, location: &str) -> bool {
        self.options().iter().any(|known| known == location)
    }
}
