//! Plan command implementation for the Trailcross CLI.

use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use trailcross_core::{CrossingPlan, ResolutionPolicy, Roster, plan_roster};

use crate::{ARG_PLAN_STRICT, CliError};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan every crossing in the built-in roster. The fastest \
                 hiker on each bridge ferries the others across one at a \
                 time; the summed crossing time is printed on stdout.",
    about = "Compute the total crossing time for the built-in roster"
)]
#[ortho_config(prefix = "TRAILCROSS")]
pub(crate) struct PlanArgs {
    /// Reject unknown hiker IDs and bridges with fewer than two hikers.
    #[arg(
        long = ARG_PLAN_STRICT,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) strict: Option<bool>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(PlanConfig::from(merged))
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PlanConfig {
    /// How unknown hikers and short bridges are treated.
    pub(crate) policy: ResolutionPolicy,
}

impl From<PlanArgs> for PlanConfig {
    fn from(args: PlanArgs) -> Self {
        let policy = if args.strict.unwrap_or(false) {
            ResolutionPolicy::Strict
        } else {
            ResolutionPolicy::Lenient
        };
        Self { policy }
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    execute_plan(&config, &mut stdout)
}

pub(super) fn execute_plan(config: &PlanConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    debug!("planning crossings with {:?} resolution", config.policy);
    let roster = Roster::sample()?;
    let plan = plan_roster(&roster, config.policy)?;
    write_total(writer, &plan)
}

fn write_total(writer: &mut dyn Write, plan: &CrossingPlan) -> Result<(), CliError> {
    writeln!(writer, "total time: {}", plan.total_time()).map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(PlanConfig::from(merged))
}
