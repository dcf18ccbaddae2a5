use crate::reports::{self, OutputFormat};
use clap::Args;
use evaltable::builder::TableBuilder;
use evaltable::config::Config;
use evaltable::error::EtResult;
use evaltable::evaluator::ProcessEvaluator;
use evaltable::table::ResultTable;
use std::io;
use tracing::info;

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: Config,

    /// Suppress per-row progress lines.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run(args: BuildArgs) -> EtResult<()> {
    let table = reconstruct(&args.config, args.quiet)?;
    reports::print_table(&table, args.format)
}

/// Runs the evaluator over the configured selection.
pub fn reconstruct(config: &Config, quiet: bool) -> EtResult<ResultTable> {
    let evaluator = ProcessEvaluator::from_config(&config.evaluator);
    info!(
        "🔎 Evaluating with: {} {}",
        config.evaluator.program, config.evaluator.script
    );

    let mut builder = TableBuilder::new(&evaluator).with_policy(config.evaluator.on_failure);
    if !quiet {
        builder = builder.with_progress(io::stdout());
    }
    builder.build(&config.selection.datasets, &config.selection.methods)
}
