use super::build::reconstruct;
use crate::reports;
use clap::Args;
use evaltable::compare::compare;
use evaltable::config::Config;
use evaltable::error::EtResult;
use evaltable::reference::published_table;
use evaltable::render::{legend_svg, DivergingScale};
use evaltable::table::ResultTable;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV table to compare against instead of the published results.
    #[arg(short, long)]
    pub reference: Option<String>,

    /// Also write the color-scale legend to this SVG file.
    #[arg(short, long)]
    pub legend: Option<String>,

    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

pub fn run(args: CompareArgs) -> EtResult<()> {
    let reference = match &args.reference {
        Some(path) => {
            info!("📂 Loading reference table: {}", path);
            ResultTable::read_csv_file(path)?
        }
        None => published_table(),
    };

    let table = reconstruct(&args.config, args.quiet)?;
    let comparison = compare(&table, &reference)?;
    reports::print_comparison(&table, &comparison);

    if let Some(path) = &args.legend {
        let svg = legend_svg(&DivergingScale::new(comparison.bound()));
        fs::write(path, svg)?;
        info!("🖼️  Legend written to {}", path);
    }
    Ok(())
}
