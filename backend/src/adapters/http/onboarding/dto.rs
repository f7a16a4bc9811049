//! DTOs for onboarding endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::onboarding::{OnboardingStep, StepState, StepTracker, Track};

#[derive(Debug, Clone, Serialize)]
pub struct StepResponse {
    pub index: usize,
    pub number: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

impl StepResponse {
    fn new(index: usize, step: &OnboardingStep) -> Self {
        Self {
            index,
            number: step.number,
            title: step.title,
            detail: step.detail,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackTab {
    pub track: Track,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackResponse {
    pub track: Track,
    pub label: &'static str,
    pub steps: Vec<StepResponse>,
    /// Both tabs, in display order.
    pub tracks: Vec<TrackTab>,
}

impl TrackResponse {
    pub fn new(track: Track) -> Self {
        Self {
            track,
            label: track.label(),
            steps: track
                .steps()
                .iter()
                .enumerate()
                .map(|(i, step)| StepResponse::new(i, step))
                .collect(),
            tracks: Track::ALL
                .iter()
                .map(|t| TrackTab {
                    track: *t,
                    label: t.label(),
                })
                .collect(),
        }
    }
}

/// `?active=N`, `?visible=i,j,...` or `?from=<track>&from_index=N` (a tab
/// switch); with none the tracker starts at 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressParams {
    pub active: Option<usize>,
    pub visible: Option<String>,
    pub from: Option<String>,
    pub from_index: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepProgress {
    pub number: &'static str,
    pub title: &'static str,
    pub state: StepState,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub track: Track,
    pub active_index: usize,
    pub active_step: StepResponse,
    /// e.g. "Step 3 of 6"
    pub label: String,
    pub progress_percent: f64,
    pub is_complete: bool,
    pub steps: Vec<StepProgress>,
}

impl From<&StepTracker> for ProgressResponse {
    fn from(tracker: &StepTracker) -> Self {
        Self {
            track: tracker.track(),
            active_index: tracker.active_index(),
            active_step: StepResponse::new(tracker.active_index(), tracker.active_step()),
            label: tracker.progress_label(),
            progress_percent: tracker.progress_percent(),
            is_complete: tracker.is_complete(),
            steps: tracker
                .steps()
                .iter()
                .enumerate()
                .map(|(i, step)| StepProgress {
                    number: step.number,
                    title: step.title,
                    state: tracker.step_state(i),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_response_lists_steps_and_tabs() {
        let response = TrackResponse::new(Track::Buyer);
        assert_eq!(response.steps.len(), 6);
        assert_eq!(response.steps[0].title, "Understand Your Footprint");
        assert_eq!(response.tracks.len(), 2);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["track"], "buyer");
        assert_eq!(json["tracks"][0]["label"], "For Sellers");
    }

    #[test]
    fn progress_response_marks_states() {
        let mut tracker = StepTracker::new(Track::Seller);
        tracker.activate(1).unwrap();
        let json = serde_json::to_value(ProgressResponse::from(&tracker)).unwrap();

        assert_eq!(json["label"], "Step 2 of 6");
        assert_eq!(json["steps"][0]["state"], "completed");
        assert_eq!(json["steps"][1]["state"], "active");
        assert_eq!(json["steps"][2]["state"], "upcoming");
    }
}
