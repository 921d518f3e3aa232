//! Join hiker records onto bridges and pick each bridge's ferry hiker.

use std::collections::HashMap;

use log::warn;
use thiserror::Error;

use crate::{Bridge, Hiker, ResolvedBridge};

/// How to treat bridges that reference unknown hikers or end up with too few
/// hikers to need a ferry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    /// Drop unknown hiker IDs and accept degenerate bridges.
    #[default]
    Lenient,
    /// Reject unknown hiker IDs and bridges resolving fewer than two hikers.
    Strict,
}

/// Errors raised by [`resolve_with`] under [`ResolutionPolicy::Strict`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// A bridge listed a hiker ID missing from the registry.
    #[error("bridge {bridge} lists unknown hiker {hiker}")]
    UnknownHiker {
        /// Bridge carrying the reference.
        bridge: String,
        /// The unknown hiker ID.
        hiker: String,
    },
    /// A bridge resolved fewer than two hikers.
    #[error("bridge {bridge} resolved {count} hiker(s); a crossing needs at least two")]
    TooFewHikers {
        /// Offending bridge.
        bridge: String,
        /// Number of hikers resolved.
        count: usize,
    },
}

struct HikerLookup<'a> {
    by_id: HashMap<&'a str, &'a Hiker>,
}

impl<'a> HikerLookup<'a> {
    // Later records replace earlier ones sharing an ID.
    fn new(hikers: &'a [Hiker]) -> Self {
        let mut by_id = HashMap::with_capacity(hikers.len());
        for hiker in hikers {
            if by_id.insert(hiker.id(), hiker).is_some() {
                warn!("duplicate hiker id {}; keeping the later record", hiker.id());
            }
        }
        Self { by_id }
    }

    fn get(&self, id: &str) -> Option<&'a Hiker> {
        self.by_id.get(id).copied()
    }
}

fn resolve_bridge(bridge: &Bridge, lookup: &HikerLookup<'_>) -> ResolvedBridge {
    let mut resolved = ResolvedBridge::empty(bridge);
    for hiker_id in bridge.hiker_ids() {
        match lookup.get(hiker_id) {
            Some(hiker) => resolved.push_hiker(hiker.clone()),
            None => resolved.push_unresolved(hiker_id),
        }
    }
    resolved
}

fn resolve_all(bridges: &[Bridge], hikers: &[Hiker]) -> Vec<ResolvedBridge> {
    let lookup = HikerLookup::new(hikers);
    bridges
        .iter()
        .map(|bridge| resolve_bridge(bridge, &lookup))
        .collect()
}

fn ensure_complete(bridge: &ResolvedBridge) -> Result<(), ResolveError> {
    if let Some(hiker) = bridge.unresolved_ids().first() {
        return Err(ResolveError::UnknownHiker {
            bridge: bridge.id().to_owned(),
            hiker: hiker.clone(),
        });
    }
    let count = bridge.hikers().len();
    if count < 2 {
        return Err(ResolveError::TooFewHikers {
            bridge: bridge.id().to_owned(),
            count,
        });
    }
    Ok(())
}

/// Resolve every bridge against the hiker registry, dropping unknown IDs.
///
/// Bridges come back in input order and each keeps its listed hiker order.
/// Unknown IDs are logged and recorded on the bridge but never fail.
///
/// # Examples
/// ```
/// use trailcross_core::{Bridge, Hiker, resolve};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let hikers = [Hiker::new("A", 100.0)?, Hiker::new("B", 50.0)?];
/// let bridges = [Bridge::new("1", 100, ["B", "A", "Q"])?];
/// let resolved = resolve(&bridges, &hikers);
/// let ids: Vec<_> = resolved[0].hikers().iter().map(Hiker::id).collect();
/// assert_eq!(ids, ["B", "A"]);
/// assert_eq!(resolved[0].ferry().map(Hiker::id), Some("A"));
/// assert_eq!(resolved[0].unresolved_ids(), ["Q"]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn resolve(bridges: &[Bridge], hikers: &[Hiker]) -> Vec<ResolvedBridge> {
    let resolved = resolve_all(bridges, hikers);
    for bridge in &resolved {
        for hiker_id in bridge.unresolved_ids() {
            warn!(
                "bridge {} lists unknown hiker {hiker_id}; skipping it",
                bridge.id()
            );
        }
    }
    resolved
}

/// Resolve bridges under an explicit [`ResolutionPolicy`].
///
/// # Errors
/// Under [`ResolutionPolicy::Strict`] returns the first
/// [`ResolveError`] found, scanning bridges in input order. The lenient
/// policy never fails.
pub fn resolve_with(
    bridges: &[Bridge],
    hikers: &[Hiker],
    policy: ResolutionPolicy,
) -> Result<Vec<ResolvedBridge>, ResolveError> {
    match policy {
        ResolutionPolicy::Lenient => Ok(resolve(bridges, hikers)),
        ResolutionPolicy::Strict => {
            let resolved = resolve_all(bridges, hikers);
            resolved.iter().try_for_each(ensure_complete)?;
            Ok(resolved)
        }
    }
}
