//! Aggregate load-progress reporting.
//!
//! Combines per-asset fractional load progress into a single overall
//! percentage for the loading screen. The aggregation itself is a pure
//! function; `LoadProgress` adds the bookkeeping the loading phase needs
//! (clamping, per-key monotonicity).

use rustc_hash::FxHashMap;

/// Arithmetic mean of reported per-asset percentages over the expected
/// asset count.
///
/// Defined as 100 when no assets are expected, and 0 when assets are
/// expected but none has reported yet.
pub fn aggregate(reported: &FxHashMap<String, f32>, expected: usize) -> f32 {
    if expected == 0 {
        return 100.0;
    }
    if reported.is_empty() {
        return 0.0;
    }
    reported.values().sum::<f32>() / expected as f32
}

/// Tracks per-asset progress fractions during the loading phase.
///
/// Each key's value is clamped to [0, 100] and never decreases, so the
/// aggregate is monotonically non-decreasing for the whole phase.
#[derive(Debug, Default)]
pub struct LoadProgress {
    reported: FxHashMap<String, f32>,
    expected: usize,
}

impl LoadProgress {
    /// Create a tracker expecting the given number of assets.
    pub fn new(expected: usize) -> Self {
        Self {
            reported: FxHashMap::default(),
            expected,
        }
    }

    /// Create a tracker pre-seeded with 0% for each expected id.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let reported: FxHashMap<String, f32> =
            ids.into_iter().map(|id| (id.into(), 0.0)).collect();
        let expected = reported.len();
        Self { reported, expected }
    }

    /// Record a progress report for one asset.
    ///
    /// Values are clamped to [0, 100]; a report lower than the key's
    /// current value is ignored.
    pub fn record(&mut self, asset_id: &str, pct: f32) {
        let pct = pct.clamp(0.0, 100.0);
        let entry = self.reported.entry(asset_id.to_string()).or_insert(0.0);
        if pct > *entry {
            *entry = pct;
        }
    }

    /// Overall percentage across all expected assets.
    pub fn overall(&self) -> f32 {
        aggregate(&self.reported, self.expected)
    }

    /// Whether every expected asset has reported 100%.
    pub fn is_complete(&self) -> bool {
        self.reported.len() >= self.expected
            && self.reported.values().all(|&pct| pct >= 100.0)
    }

    /// Number of expected assets.
    pub fn expected(&self) -> usize {
        self.expected
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
