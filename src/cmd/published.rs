use crate::reports::{self, OutputFormat};
use clap::Args;
use evaltable::error::EtResult;
use evaltable::reference::published_table;

#[derive(Args, Debug, Clone)]
pub struct PublishedArgs {
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run(args: PublishedArgs) -> EtResult<()> {
    reports::print_table(&published_table(), args.format)
}
