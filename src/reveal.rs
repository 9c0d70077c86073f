//! Fire-once viewport reveal tracking.
//!
//! A [`VisibilityTracker`] owns the subscription that feeds it intersection
//! samples. The first qualifying sample flips the tracker to revealed and
//! unsubscribes; later samples are ignored. Tearing the tracker down (or
//! dropping it) before that point unsubscribes as well.

use crate::config::DEFAULT_REVEAL_THRESHOLD;

/// Slack for sub-pixel rounding in browser-reported ratios.
const RATIO_TOLERANCE: f64 = 1e-6;

/// Fraction of a region that must be on screen before it counts as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::default();
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    pub fn admits(self, sample: IntersectionSample) -> bool {
        sample.intersecting && sample.ratio > 0.0 && sample.ratio + RATIO_TOLERANCE >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_THRESHOLD)
    }
}

/// One intersection report for the observed region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    #[cfg(test)]
    pub fn at(ratio: f64) -> Self {
        Self {
            intersecting: ratio > 0.0,
            ratio,
        }
    }
}

pub trait Subscription {
    fn unsubscribe(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerState {
    Observing,
    Revealed,
    Detached,
}

pub struct VisibilityTracker<S: Subscription> {
    threshold: Threshold,
    state: TrackerState,
    subscription: Option<S>,
    engaged: bool,
}

impl<S: Subscription> VisibilityTracker<S> {
    pub fn observe(threshold: Threshold, subscription: S) -> Self {
        Self {
            threshold,
            state: TrackerState::Observing,
            subscription: Some(subscription),
            engaged: true,
        }
    }

    /// Tracker for environments without intersection reporting: the region
    /// is shown from the start so content stays reachable.
    pub fn unsupported() -> Self {
        Self {
            threshold: Threshold::default(),
            state: TrackerState::Revealed,
            subscription: None,
            engaged: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == TrackerState::Revealed
    }

    #[cfg(test)]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Feeds one sample. Returns `true` only for the sample that reveals.
    ///
    /// The subscription is released but kept alive until the tracker drops,
    /// since the sample may be delivered from inside the subscription's own
    /// callback.
    pub fn report(&mut self, sample: IntersectionSample) -> bool {
        if self.state != TrackerState::Observing || !self.threshold.admits(sample) {
            return false;
        }

        self.state = TrackerState::Revealed;
        self.release();
        true
    }

    pub fn teardown(&mut self) {
        if self.state == TrackerState::Observing {
            self.state = TrackerState::Detached;
        }
        self.release();
    }

    fn release(&mut self) {
        if !self.engaged {
            return;
        }
        self.engaged = false;
        if let Some(subscription) = self.subscription.as_mut() {
            subscription.unsubscribe();
        }
    }
}

impl<S: Subscription> Drop for VisibilityTracker<S> {
    fn drop(&mut self) {
        self.release();
    }
}
