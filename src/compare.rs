//! Cell-by-cell difference between two results tables.

use crate::error::{EtResult, EvalTableError};
use crate::ids::{Dataset, Method};
use crate::table::{round_to, ResultTable, PRECISION};

#[derive(Debug, Clone, PartialEq)]
pub struct DiffRow {
    pub dataset: Dataset,
    pub method: Method,
    /// Differences in `NUMERIC_COLUMNS` order. NaN where either side is missing.
    pub diffs: [f64; 4],
}

/// Rounded differences between two tables and the symmetric scale they span.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    rows: Vec<DiffRow>,
    bound: f64,
    missing: usize,
}

impl Comparison {
    pub fn rows(&self) -> &[DiffRow] {
        &self.rows
    }

    /// Largest absolute finite difference; 0 when there is none.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn diff(&self, dataset: Dataset, method: Method) -> Option<[f64; 4]> {
        self.rows
            .iter()
            .find(|r| r.dataset == dataset && r.method == method)
            .map(|r| r.diffs)
    }

    /// Cells whose difference is NaN because either side had no value.
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// True when every cell has a value on both sides and all differences are zero.
    pub fn is_identical(&self) -> bool {
        self.missing == 0 && self.bound == 0.0
    }
}

/// Joins `a` and `b` on (dataset, method) and subtracts `b` from `a`.
///
/// Both sides are rounded to three decimals before subtracting, and the result is
/// rounded again so float noise never shows up as a difference. Rows follow `a`'s
/// order. Every row of `a` must have a partner in `b`; extra rows in `b` are ignored.
pub fn compare(a: &ResultTable, b: &ResultTable) -> EtResult<Comparison> {
    let a = a.rounded(PRECISION);
    let b = b.rounded(PRECISION);

    let mut rows = Vec::with_capacity(a.len());
    for row in &a {
        let other = b.get(row.dataset, row.method).ok_or_else(|| {
            EvalTableError::Validation(format!(
                "no reference row for {} / {}",
                row.dataset, row.method
            ))
        })?;

        let lhs = row.values();
        let rhs = other.values();
        let diffs = std::array::from_fn(|i| round_to(lhs[i] - rhs[i], PRECISION));
        rows.push(DiffRow {
            dataset: row.dataset,
            method: row.method,
            diffs,
        });
    }

    let bound = rows
        .iter()
        .flat_map(|r| r.diffs)
        .filter(|d| d.is_finite())
        .fold(0.0f64, |acc, d| acc.max(d.abs()));

    let missing = rows
        .iter()
        .flat_map(|r| r.diffs)
        .filter(|d| d.is_nan())
        .count();

    Ok(Comparison {
        rows,
        bound,
        missing,
    })
}
