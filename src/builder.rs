//! Reconstructs the results table by evaluating every (dataset, method) cell.

use crate::config::FailurePolicy;
use crate::error::{EtResult, EvalTableError};
use crate::evaluator::{fetch, Evaluator};
use crate::ids::{Dataset, Method, Metric};
use crate::parser::parse_record;
use crate::table::{MetricRecord, ResultRow, ResultTable};
use std::collections::HashSet;
use std::hash::Hash;
use std::io::Write;
use tracing::{debug, info};

/// Formats one progress line, three decimals per number.
pub fn progress_line(row: &ResultRow) -> String {
    format!(
        "{:<10}{:<10}{:>5.3} ± {:>5.3}   {:>5.3} ± {:>5.3}",
        row.dataset.to_string(),
        row.method.to_string(),
        row.gea,
        row.gea_std,
        row.gef,
        row.gef_std
    )
}

pub struct TableBuilder<'a, E: Evaluator + ?Sized> {
    evaluator: &'a E,
    policy: FailurePolicy,
    progress: Option<Box<dyn Write + 'a>>,
}

impl<'a, E: Evaluator + ?Sized> TableBuilder<'a, E> {
    pub fn new(evaluator: &'a E) -> Self {
        Self {
            evaluator,
            policy: FailurePolicy::default(),
            progress: None,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Emit a progress line per finished row to `sink`.
    pub fn with_progress(mut self, sink: impl Write + 'a) -> Self {
        self.progress = Some(Box::new(sink));
        self
    }

    /// Two evaluations per row, strictly in dataset-major, method-minor order.
    pub fn build(&mut self, datasets: &[Dataset], methods: &[Method]) -> EtResult<ResultTable> {
        ensure_unique(datasets, "dataset")?;
        ensure_unique(methods, "method")?;

        info!(
            "Reconstructing {} rows ({} datasets x {} methods)",
            datasets.len() * methods.len(),
            datasets.len(),
            methods.len()
        );

        let mut table = ResultTable::new();
        for &dataset in datasets {
            for &method in methods {
                let gea = self.metric(dataset, method, Metric::Gea)?;
                let gef = self.metric(dataset, method, Metric::Gef)?;
                let row = ResultRow::new(dataset, method, gea, gef);

                if let Some(sink) = self.progress.as_mut() {
                    writeln!(sink, "{}", progress_line(&row))?;
                }
                table.push(row);
            }
        }
        Ok(table)
    }

    fn metric(&self, dataset: Dataset, method: Method, metric: Metric) -> EtResult<MetricRecord> {
        let text = fetch(self.evaluator, self.policy, dataset, method, metric)?;
        if text.is_empty() {
            debug!("{} {} {}: no data", dataset, method, metric);
            return Ok(MetricRecord::MISSING);
        }
        parse_record(&text)
    }
}

fn ensure_unique<T: Eq + Hash + std::fmt::Display>(items: &[T], what: &str) -> EtResult<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return Err(EvalTableError::Config(format!(
                "{} '{}' selected more than once",
                what, item
            )));
        }
    }
    Ok(())
}
