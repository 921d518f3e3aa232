//! Crossing times for a resolved bridge under the ferry strategy.
//!
//! The fastest hiker escorts every other hiker across one at a time. Each
//! pair walks at the slower partner's pace, so a forward trip costs the
//! escorted hiker's own crossing time. Between escorts the ferry walks back
//! alone, which happens once after every forward trip but the last.

use log::debug;

use crate::{Hiker, ResolvedBridge};

/// Crossing times for one bridge.
///
/// Times are in the time unit implied by hiker speeds and are never rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossingResult {
    /// Bridge the result belongs to.
    pub bridge_id: String,
    /// Sum of all escorted forward trips.
    pub forward_time: f64,
    /// Sum of all solo return trips made by the ferry hiker.
    pub return_time: f64,
    /// Number of return trips made by the ferry hiker.
    pub return_trips: usize,
    /// `forward_time + return_time`.
    pub total_time: f64,
}

impl CrossingResult {
    fn idle(bridge_id: &str) -> Self {
        Self {
            bridge_id: bridge_id.to_owned(),
            forward_time: 0.0,
            return_time: 0.0,
            return_trips: 0,
            total_time: 0.0,
        }
    }
}

/// Compute forward, return and total crossing time for a resolved bridge.
///
/// A bridge with no resolved hikers takes no time. A lone hiker crosses once
/// on its own and never returns. Further listings of the ferry's own ID add
/// return trips but no forward time.
///
/// # Examples
/// ```
/// use trailcross_core::{Bridge, Hiker, compute_crossing_time, resolve};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let hikers = [
///     Hiker::new("A", 100.0)?,
///     Hiker::new("B", 50.0)?,
///     Hiker::new("C", 20.0)?,
///     Hiker::new("D", 10.0)?,
/// ];
/// let bridges = [Bridge::new("1", 100, ["A", "B", "C", "D"])?];
/// let resolved = resolve(&bridges, &hikers);
/// let result = compute_crossing_time(&resolved[0]);
/// assert_eq!(result.return_trips, 2);
/// assert!((result.forward_time - 17.0).abs() < 1e-9);
/// assert!((result.return_time - 2.0).abs() < 1e-9);
/// assert!((result.total_time - 19.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the total sums forward and return legs"
)]
pub fn compute_crossing_time(bridge: &ResolvedBridge) -> CrossingResult {
    let Some(ferry) = bridge.ferry() else {
        debug!("bridge {} has no hikers to cross", bridge.id());
        return CrossingResult::idle(bridge.id());
    };
    let length = bridge.length();
    let forward_time = escorted_forward_time(bridge.hikers(), ferry, length);
    let return_trips = bridge.hikers().len().saturating_sub(2);
    let return_time = solo_return_time(return_trips, ferry.crossing_time(length));
    let total_time = forward_time + return_time;
    debug!(
        "bridge {}: ferry {} makes {return_trips} return trip(s); forward {forward_time}, return {return_time}, total {total_time}",
        bridge.id(),
        ferry.id(),
    );
    CrossingResult {
        bridge_id: bridge.id().to_owned(),
        forward_time,
        return_time,
        return_trips,
        total_time,
    }
}

// Hikers sharing the ferry's ID never need an escort.
fn escorted_forward_time(hikers: &[Hiker], ferry: &Hiker, length: u32) -> f64 {
    if hikers.len() == 1 {
        return ferry.crossing_time(length);
    }
    hikers
        .iter()
        .filter(|hiker| hiker.id() != ferry.id())
        .map(|hiker| hiker.crossing_time(length))
        .sum()
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "return time scales one solo leg by a trip count far below 2^52"
)]
fn solo_return_time(return_trips: usize, leg: f64) -> f64 {
    return_trips as f64 * leg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bridge, resolve};
    use rstest::rstest;

    fn sample_hikers() -> Vec<Hiker> {
        [
            ("A", 100.0),
            ("B", 50.0),
            ("C", 20.0),
            ("D", 10.0),
            ("E", 2.5),
            ("F", 25.0),
            ("G", 15.0),
        ]
        .into_iter()
        .map(|(id, speed)| Hiker::new(id, speed).expect("valid hiker"))
        .collect()
    }

    fn crossing(hikers: &[Hiker], length: u32, listed: &[&str]) -> CrossingResult {
        let bridge = Bridge::new("b", length, listed.iter().copied()).expect("valid bridge");
        let resolved = resolve(&[bridge], hikers);
        compute_crossing_time(resolved.first().expect("one bridge resolved"))
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "test delta computation requires float maths"
    )]
    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    #[case(100, &["A", "B", "C", "D"], 17.0, 2, 2.0, 19.0)]
    #[case(250, &["A", "B", "C", "D", "E"], 142.5, 3, 7.5, 150.0)]
    #[case(150, &["A", "B", "C", "D", "E", "F", "G"], 101.5, 5, 7.5, 109.0)]
    fn reference_bridges(
        #[case] length: u32,
        #[case] listed: &[&str],
        #[case] forward: f64,
        #[case] trips: usize,
        #[case] back: f64,
        #[case] total: f64,
    ) {
        let hikers = sample_hikers();
        let result = crossing(&hikers, length, listed);
        assert_close(result.forward_time, forward);
        assert_eq!(result.return_trips, trips);
        assert_close(result.return_time, back);
        assert_close(result.total_time, total);
    }

    #[rstest]
    fn ferry_position_does_not_matter() {
        let hikers = sample_hikers();
        let first = crossing(&hikers, 100, &["A", "B", "C", "D"]);
        let last = crossing(&hikers, 100, &["D", "C", "B", "A"]);
        assert_close(first.total_time, last.total_time);
    }

    #[rstest]
    fn pair_needs_no_return() {
        let hikers = sample_hikers();
        let result = crossing(&hikers, 100, &["A", "D"]);
        assert_eq!(result.return_trips, 0);
        assert_close(result.total_time, 10.0);
    }

    #[rstest]
    fn empty_bridge_takes_no_time() {
        let hikers = sample_hikers();
        let result = crossing(&hikers, 100, &[]);
        assert_eq!(result, CrossingResult::idle("b"));
    }

    #[rstest]
    fn lone_hiker_crosses_once() {
        let hikers = sample_hikers();
        let result = crossing(&hikers, 250, &["E"]);
        assert_eq!(result.return_trips, 0);
        assert_close(result.forward_time, 100.0);
        assert_close(result.total_time, 100.0);
    }

    #[rstest]
    #[case(&["A", "A"], 0.0, 0, 0.0)]
    #[case(&["A", "A", "A"], 0.0, 1, 1.0)]
    #[case(&["A", "A", "B"], 2.0, 1, 3.0)]
    #[case(&["B", "B"], 0.0, 0, 0.0)]
    fn repeated_ferry_listings_add_no_forward_time(
        #[case] listed: &[&str],
        #[case] forward: f64,
        #[case] trips: usize,
        #[case] total: f64,
    ) {
        let hikers = sample_hikers();
        let result = crossing(&hikers, 100, listed);
        assert_close(result.forward_time, forward);
        assert_eq!(result.return_trips, trips);
        assert_close(result.total_time, total);
    }

    #[rstest]
    fn repeated_escort_listing_crosses_twice() {
        let hikers = sample_hikers();
        let result = crossing(&hikers, 100, &["A", "B", "B"]);
        assert_eq!(result.return_trips, 1);
        assert_close(result.forward_time, 4.0);
        assert_close(result.total_time, 5.0);
    }

    #[rstest]
    fn unknown_ids_do_not_count() {
        let hikers = sample_hikers();
        let with_unknown = crossing(&hikers, 100, &["A", "B", "Nobody", "C", "D"]);
        let without = crossing(&hikers, 100, &["A", "B", "C", "D"]);
        assert_eq!(with_unknown, without);
    }
}
