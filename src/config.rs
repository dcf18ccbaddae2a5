use crate::ids::{all_datasets, all_methods, Dataset, Method};
use clap::{Args, ValueEnum};

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub evaluator: EvaluatorConfig,
    #[command(flatten)]
    pub selection: Selection,
}

/// What to do when the evaluation routine exits with a failure status.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log a warning and record the metric as missing (NaN).
    #[default]
    Nan,
    /// Abort the build.
    Error,
}

#[derive(Args, Debug, Clone)]
pub struct EvaluatorConfig {
    /// Interpreter or executable that runs the evaluation routine.
    #[arg(long, default_value = "python")]
    pub program: String,
    /// Script passed as the first argument; empty to call `program` directly.
    #[arg(long, default_value = "summarize_results.py")]
    pub script: String,
    #[arg(long, value_enum, default_value_t = FailurePolicy::Nan)]
    pub on_failure: FailurePolicy,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            script: "summarize_results.py".to_string(),
            on_failure: FailurePolicy::Nan,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct Selection {
    #[arg(long, value_delimiter = ',', default_value = "mutag,benzene,fc")]
    pub datasets: Vec<Dataset>,
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "RAND,GRAD,GCAM,GBP,IG,GNNEX,PGMEX,PGEX,SUBX"
    )]
    pub methods: Vec<Method>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            datasets: all_datasets(),
            methods: all_methods(),
        }
    }
}
