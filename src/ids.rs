//! Identifiers for the benchmark grid: datasets, explainability methods and metrics.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Mutag,
    Benzene,
    Fc,
}

/// Explanation techniques under evaluation.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Rand,
    Grad,
    Gcam,
    Gbp,
    Ig,
    Gnnex,
    Pgmex,
    Pgex,
    Subx,
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Metric {
    /// Graph explanation accuracy.
    Gea,
    /// Graph explanation faithfulness.
    Gef,
}

pub fn all_datasets() -> Vec<Dataset> {
    Dataset::iter().collect()
}

pub fn all_methods() -> Vec<Method> {
    Method::iter().collect()
}
