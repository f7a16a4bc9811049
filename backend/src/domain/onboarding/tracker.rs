//! Step tracker for the scroll-driven onboarding walkthrough.
//!
//! The active step is not chosen by clicking; it follows whichever step
//! region the viewport reports as dominant.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::track::{OnboardingStep, Track};

/// One visibility callback entry for a step region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VisibilityEntry {
    pub index: usize,
    pub intersecting: bool,
}

impl VisibilityEntry {
    pub fn visible(index: usize) -> Self {
        Self {
            index,
            intersecting: true,
        }
    }
}

/// How a step renders relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepTracker {
    track: Track,
    active: usize,
}

impl StepTracker {
    pub fn new(track: Track) -> Self {
        Self { track, active: 0 }
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn steps(&self) -> &'static [OnboardingStep] {
        self.track.steps()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_step(&self) -> &'static OnboardingStep {
        &self.steps()[self.active]
    }

    fn last_index(&self) -> usize {
        self.steps().len().saturating_sub(1)
    }

    /// Switches tabs. A different track rewinds to the first step;
    /// re-selecting the current one keeps the position.
    pub fn select_track(&mut self, track: Track) {
        if self.track != track {
            self.track = track;
            self.active = 0;
        }
    }

    /// Applies a batch of visibility entries in order; each intersecting
    /// entry with a valid index becomes active, so the last one wins.
    /// Returns whether the active step changed.
    pub fn observe(&mut self, entries: &[VisibilityEntry]) -> bool {
        let before = self.active;
        for entry in entries.iter().filter(|e| e.intersecting) {
            if entry.index <= self.last_index() {
                self.active = entry.index;
            }
        }
        self.active != before
    }

    /// Jumps straight to `index`.
    pub fn activate(&mut self, index: usize) -> Result<(), ValidationError> {
        if index > self.last_index() {
            return Err(ValidationError::out_of_range(
                "step",
                0,
                self.last_index() as i64,
                index as i64,
            ));
        }
        self.active = index;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.active == self.last_index()
    }

    /// `active / (steps - 1) × 100`.
    pub fn progress_percent(&self) -> f64 {
        let last = self.last_index();
        if last == 0 {
            return 100.0;
        }
        self.active as f64 / last as f64 * 100.0
    }

    /// e.g. "Step 3 of 6".
    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.active + 1, self.steps().len())
    }

    pub fn step_state(&self, index: usize) -> StepState {
        use std::cmp::Ordering;
        match index.cmp(&self.active) {
            Ordering::Less => StepState::Completed,
            Ordering::Equal => StepState::Active,
            Ordering::Greater => StepState::Upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_seller_step() {
        let tracker = StepTracker::default();
        assert_eq!(tracker.track(), Track::Seller);
        assert_eq!(tracker.active_index(), 0);
        assert_eq!(tracker.progress_label(), "Step 1 of 6");
        assert_eq!(tracker.progress_percent(), 0.0);
    }

    #[test]
    fn visibility_advances_active_step() {
        let mut tracker = StepTracker::new(Track::Buyer);
        assert!(tracker.observe(&[VisibilityEntry::visible(2)]));
        assert_eq!(tracker.active_index(), 2);
        assert_eq!(tracker.active_step().title, "Select Credit Type");
    }

    #[test]
    fn last_intersecting_entry_wins() {
        let mut tracker = StepTracker::default();
        tracker.observe(&[
            VisibilityEntry::visible(1),
            VisibilityEntry {
                index: 4,
                intersecting: false,
            },
            VisibilityEntry::visible(3),
        ]);
        assert_eq!(tracker.active_index(), 3);
    }

    #[test]
    fn out_of_range_visibility_is_ignored() {
        let mut tracker = StepTracker::default();
        tracker.observe(&[VisibilityEntry::visible(2)]);
        assert!(!tracker.observe(&[VisibilityEntry::visible(6)]));
        assert_eq!(tracker.active_index(), 2);
    }

    #[test]
    fn switching_track_resets_index() {
        let mut tracker = StepTracker::default();
        tracker.observe(&[VisibilityEntry::visible(4)]);
        tracker.select_track(Track::Buyer);
        assert_eq!(tracker.active_index(), 0);
        assert_eq!(tracker.track(), Track::Buyer);
    }

    #[test]
    fn reselecting_current_track_keeps_position() {
        let mut tracker = StepTracker::new(Track::Buyer);
        tracker.observe(&[VisibilityEntry::visible(3)]);
        tracker.select_track(Track::Buyer);
        assert_eq!(tracker.active_index(), 3);
        assert_eq!(tracker.track(), Track::Buyer);
    }

    #[test]
    fn last_step_is_terminal() {
        let mut tracker = StepTracker::default();
        tracker.activate(5).unwrap();
        assert!(tracker.is_complete());
        assert_eq!(tracker.progress_percent(), 100.0);
        assert!(tracker.activate(6).is_err());
        assert_eq!(tracker.active_index(), 5);
    }

    #[test]
    fn progress_is_linear_over_steps() {
        let mut tracker = StepTracker::default();
        tracker.activate(3).unwrap();
        assert!((tracker.progress_percent() - 60.0).abs() < 1e-9);
        assert_eq!(tracker.progress_label(), "Step 4 of 6");
    }

    #[test]
    fn step_states_split_around_active() {
        let mut tracker = StepTracker::default();
        tracker.activate(2).unwrap();
        assert_eq!(tracker.step_state(0), StepState::Completed);
        assert_eq!(tracker.step_state(2), StepState::Active);
        assert_eq!(tracker.step_state(5), StepState::Upcoming);
    }
}
