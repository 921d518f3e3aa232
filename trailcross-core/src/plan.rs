//! Aggregate per-bridge crossing times into a single plan.

use log::info;

use crate::{
    CrossingResult, ResolutionPolicy, ResolveError, ResolvedBridge, Roster, compute_crossing_time,
    resolve_with,
};

/// Per-bridge results in registry order and their summed total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CrossingPlan {
    results: Vec<CrossingResult>,
    total_time: f64,
}

impl CrossingPlan {
    /// Results in the order the bridges were supplied.
    #[must_use]
    pub fn results(&self) -> &[CrossingResult] {
        &self.results
    }

    /// Look up the result for a bridge by ID.
    #[must_use]
    pub fn result_for(&self, bridge_id: &str) -> Option<&CrossingResult> {
        self.results
            .iter()
            .find(|result| result.bridge_id == bridge_id)
    }

    /// Sum of every bridge's total time.
    #[must_use]
    pub const fn total_time(&self) -> f64 {
        self.total_time
    }
}

/// Compute every resolved bridge and sum their totals.
///
/// # Examples
/// ```
/// use trailcross_core::{Roster, plan_crossings, resolve};
///
/// # fn main() -> Result<(), trailcross_core::RosterError> {
/// let roster = Roster::sample()?;
/// let plan = plan_crossings(&resolve(roster.bridges(), roster.hikers()));
/// assert!((plan.total_time() - 278.0).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn plan_crossings(bridges: &[ResolvedBridge]) -> CrossingPlan {
    let results: Vec<CrossingResult> = bridges.iter().map(compute_crossing_time).collect();
    let total_time = results.iter().map(|result| result.total_time).sum();
    info!(
        "planned {} bridge crossing(s) taking {total_time} in total",
        results.len()
    );
    CrossingPlan {
        results,
        total_time,
    }
}

/// Resolve a roster under `policy` and plan every crossing.
///
/// # Errors
/// Propagates [`ResolveError`] from strict resolution; no partial plan is
/// produced.
pub fn plan_roster(
    roster: &Roster,
    policy: ResolutionPolicy,
) -> Result<CrossingPlan, ResolveError> {
    let resolved = resolve_with(roster.bridges(), roster.hikers(), policy)?;
    Ok(plan_crossings(&resolved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bridge, Hiker};
    use rstest::rstest;

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

    fn sample_roster() -> Roster {
        Roster::sample().expect("sample is valid")
    }

    #[rstest]
    fn sample_totals_278() {
        let sample = sample_roster();
        let plan = plan_roster(&sample, ResolutionPolicy::Lenient).expect("lenient plan");
        assert_close(plan.total_time(), 278.0);
        for (result, expected) in plan.results().iter().zip([19.0, 150.0, 109.0]) {
            assert_close(result.total_time, expected);
        }
        assert_eq!(plan.results().len(), 3);
    }

    #[rstest]
    fn sample_passes_strict_policy() {
        let sample = sample_roster();
        let strict = plan_roster(&sample, ResolutionPolicy::Strict).expect("strict plan");
        let lenient = plan_roster(&sample, ResolutionPolicy::Lenient).expect("lenient plan");
        assert_eq!(strict, lenient);
    }

    #[rstest]
    fn result_for_finds_bridge() {
        let sample = sample_roster();
        let plan = plan_roster(&sample, ResolutionPolicy::Lenient).expect("lenient plan");
        let second = plan.result_for("2").expect("bridge 2 planned");
        assert_eq!(second.return_trips, 3);
        assert!(plan.result_for("missing").is_none());
    }

    #[rstest]
    fn empty_roster_plans_nothing() {
        let plan = plan_roster(&Roster::default(), ResolutionPolicy::Strict).expect("empty plan");
        assert!(plan.results().is_empty());
        assert!(plan.total_time().abs() <= f64::EPSILON);
    }

    #[rstest]
    fn strict_failure_yields_no_plan() {
        let hikers = vec![Hiker::new("A", 10.0).expect("valid hiker")];
        let bridges = vec![Bridge::new("1", 10, ["A", "Ghost"]).expect("valid bridge")];
        let roster = Roster::new(hikers, bridges);
        let err = plan_roster(&roster, ResolutionPolicy::Strict).expect_err("strict must fail");
        assert!(matches!(err, ResolveError::UnknownHiker { ref hiker, .. } if hiker == "Ghost"));
    }
}
