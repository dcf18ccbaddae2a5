//! The reconstructed results table and its rows.

use crate::error::{EtResult, EvalTableError};
use crate::ids::{Dataset, Method};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Column header shared by every serialized table.
pub const COLUMNS: [&str; 6] = ["Dataset", "Method", "GEA", "GEA_std", "GEF", "GEF_std"];

/// Names of the four numeric columns, in cell order.
pub const NUMERIC_COLUMNS: [&str; 4] = ["GEA", "GEA_std", "GEF", "GEF_std"];

/// Decimal places used for comparison and display.
pub const PRECISION: i32 = 3;

/// Rounds to `places` decimals, ties to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRecord {
    pub mean: f64,
    pub std: f64,
}

impl MetricRecord {
    /// Placeholder for a metric the evaluator had no data for.
    pub const MISSING: MetricRecord = MetricRecord {
        mean: f64::NAN,
        std: f64::NAN,
    };

    pub fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Dataset")]
    pub dataset: Dataset,
    #[serde(rename = "Method")]
    pub method: Method,
    #[serde(rename = "GEA")]
    pub gea: f64,
    #[serde(rename = "GEA_std")]
    pub gea_std: f64,
    #[serde(rename = "GEF")]
    pub gef: f64,
    #[serde(rename = "GEF_std")]
    pub gef_std: f64,
}

impl ResultRow {
    pub fn new(dataset: Dataset, method: Method, gea: MetricRecord, gef: MetricRecord) -> Self {
        Self {
            dataset,
            method,
            gea: gea.mean,
            gea_std: gea.std,
            gef: gef.mean,
            gef_std: gef.std,
        }
    }

    pub fn key(&self) -> (Dataset, Method) {
        (self.dataset, self.method)
    }

    /// Numeric cells in `NUMERIC_COLUMNS` order.
    pub fn values(&self) -> [f64; 4] {
        [self.gea, self.gea_std, self.gef, self.gef_std]
    }

    pub fn rounded(&self, places: i32) -> Self {
        let [gea, gea_std, gef, gef_std] = self.values().map(|v| round_to(v, places));
        Self {
            dataset: self.dataset,
            method: self.method,
            gea,
            gea_std,
            gef,
            gef_std,
        }
    }
}

/// Rows in dataset-major, method-minor order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, dataset: Dataset, method: Method) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.key() == (dataset, method))
    }

    pub fn rounded(&self, places: i32) -> Self {
        Self {
            rows: self.rows.iter().map(|r| r.rounded(places)).collect(),
        }
    }

    /// Reads a table with the `COLUMNS` header. `NaN` is accepted in numeric cells.
    pub fn read_csv<R: Read>(reader: R) -> EtResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.len() != COLUMNS.len() || headers.iter().zip(COLUMNS).any(|(h, c)| h != c) {
            return Err(EvalTableError::Validation(format!(
                "expected header '{}', found '{}'",
                COLUMNS.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut rows: Vec<ResultRow> = Vec::new();
        for record in rdr.deserialize::<ResultRow>() {
            rows.push(record?);
        }
        Ok(Self { rows })
    }

    pub fn read_csv_file(path: &str) -> EtResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::read_csv(file)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> EtResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> EtResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
