#![allow(dead_code)]

use evaltable::error::EtResult;
use evaltable::evaluator::{Evaluator, Outcome};
use evaltable::ids::{Dataset, Method, Metric};
use evaltable::table::{ResultRow, ResultTable};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory evaluator: canned outcomes per triple, `Empty` for everything else.
#[derive(Default)]
pub struct ScriptedEvaluator {
    outcomes: HashMap<(Dataset, Method, Metric), Outcome>,
    pub calls: RefCell<Vec<(Dataset, Method, Metric)>>,
}

impl ScriptedEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dataset: Dataset, method: Method, metric: Metric, outcome: Outcome) -> Self {
        self.outcomes.insert((dataset, method, metric), outcome);
        self
    }

    pub fn text(self, dataset: Dataset, method: Method, metric: Metric, text: &str) -> Self {
        self.with(dataset, method, metric, Outcome::Success(text.to_string()))
    }
}

impl Evaluator for ScriptedEvaluator {
    fn evaluate(&self, dataset: Dataset, method: Method, metric: Metric) -> EtResult<Outcome> {
        self.calls.borrow_mut().push((dataset, method, metric));
        Ok(self
            .outcomes
            .get(&(dataset, method, metric))
            .cloned()
            .unwrap_or(Outcome::Empty))
    }
}

pub fn row(dataset: Dataset, method: Method, values: [f64; 4]) -> ResultRow {
    ResultRow {
        dataset,
        method,
        gea: values[0],
        gea_std: values[1],
        gef: values[2],
        gef_std: values[3],
    }
}

pub fn table(rows: Vec<ResultRow>) -> ResultTable {
    ResultTable::from_rows(rows)
}
