//! Facade crate for the Trailcross bridge-crossing planner.
//!
//! This crate re-exports the core domain types and the resolve/plan entry
//! points so callers depend on a single crate.

#![forbid(unsafe_code)]

pub use trailcross_core::{
    Bridge, BridgeError, CrossingPlan, CrossingResult, Hiker, HikerError, ResolutionPolicy,
    ResolveError, ResolvedBridge, Roster, RosterError, compute_crossing_time, plan_crossings,
    plan_roster, resolve, resolve_with,
};
