//! Command dispatch logic for graphwalk
use crate::cli::{Cli, Commands};
use crate::commands;
use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;

pub fn run(cli: &Cli, config: &WalkConfig, format: OutputFormat) -> Result<()> {
    match &cli.command {
        Commands::Traverse { target, strategy } => commands::traverse::execute(
            format,
            &target.graph,
            &target.from,
            strategy.unwrap_or(config.strategy),
        ),

        Commands::Hops { target } => commands::hops::execute(format, &target.graph, &target.from),

        Commands::Path {
            target,
            to,
            strategy,
        } => commands::path::execute(
            format,
            &target.graph,
            &target.from,
            to,
            strategy.unwrap_or(config.strategy),
        ),

        Commands::Shortest {
            target,
            to,
            algorithm,
        } => commands::shortest::execute(
            format,
            &target.graph,
            &target.from,
            to.as_deref(),
            algorithm.unwrap_or(config.algorithm),
        ),
    }
}
