//! Core domain for Trailcross, a bridge-crossing planner for hiking groups.
//!
//! Each bridge is narrow enough that hikers cross in pairs, the pair moving at
//! the slower partner's pace. The planner fixes one strategy: the fastest
//! hiker on a bridge acts as a ferry, escorting every other hiker across in
//! turn and walking back alone between escorts.
//!
//! - [`resolve`] joins the hiker registry onto each [`Bridge`] and picks the
//!   ferry hiker, producing [`ResolvedBridge`] values.
//! - [`compute_crossing_time`] turns one resolved bridge into a
//!   [`CrossingResult`].
//! - [`plan_crossings`] and [`plan_roster`] sum the per-bridge totals into a
//!   [`CrossingPlan`].
//!
//! # Examples
//!
//! ```
//! use trailcross_core::{ResolutionPolicy, Roster, plan_roster};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let roster = Roster::sample()?;
//! let plan = plan_roster(&roster, ResolutionPolicy::Lenient)?;
//! assert!((plan.total_time() - 278.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod bridge;
mod calculator;
mod hiker;
mod plan;
mod resolver;
mod roster;

pub use bridge::{Bridge, BridgeError, ResolvedBridge};
pub use calculator::{CrossingResult, compute_crossing_time};
pub use hiker::{Hiker, HikerError};
pub use plan::{CrossingPlan, plan_crossings, plan_roster};
pub use resolver::{ResolutionPolicy, ResolveError, resolve, resolve_with};
pub use roster::{Roster, RosterError};
