//! OnboardingProgressHandler - tracker state for a track and viewport signal.

use crate::domain::foundation::DomainError;
use crate::domain::onboarding::{StepTracker, Track, VisibilityEntry};

/// Where the visitor is in the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressPosition {
    /// No signal yet; the tracker sits on the first step.
    Start,
    /// An explicit step index.
    Active(usize),
    /// A batch of visibility entries, applied in order.
    Visible(Vec<VisibilityEntry>),
    /// The visitor was on `track` at step `index` and selected the query's
    /// track tab.
    SwitchedFrom { track: Track, index: usize },
}

#[derive(Debug, Clone)]
pub struct OnboardingProgressQuery {
    pub track: Track,
    pub position: ProgressPosition,
}

#[derive(Debug, Default)]
pub struct OnboardingProgressHandler;

impl OnboardingProgressHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: OnboardingProgressQuery) -> Result<StepTracker, DomainError> {
        let mut tracker = StepTracker::new(query.track);
        match query.position {
            ProgressPosition::Start => {}
            ProgressPosition::Active(index) => tracker.activate(index)?,
            ProgressPosition::Visible(entries) => {
                tracker.observe(&entries);
            }
            ProgressPosition::SwitchedFrom { track, index } => {
                tracker = StepTracker::new(track);
                tracker.activate(index)?;
                tracker.select_track(query.track);
            }
        }
        Ok(tracker)
    }
}
