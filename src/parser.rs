//! Turns free-form evaluator output into numbers.

use crate::error::{EtResult, EvalTableError};
use crate::table::MetricRecord;
use regex::Regex;
use std::sync::OnceLock;

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[-+]?(?:\d*\.\d+|\d+)").expect("number pattern is a valid regex")
    })
}

/// Every numeric token in `text`, in order of appearance.
///
/// Fails when fewer than two tokens are present; callers always need at least a
/// mean and a standard deviation. Digits outside ASCII (e.g. `١٢`) are still
/// recognised as a token and rejected, so later tokens never shift into their place.
pub fn parse_numbers(text: &str) -> EtResult<Vec<f64>> {
    let numbers = number_pattern()
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .parse::<f64>()
                .map_err(|_| EvalTableError::BadNumber {
                    token: m.as_str().to_string(),
                    text: text.to_string(),
                })
        })
        .collect::<EtResult<Vec<f64>>>()?;

    if numbers.len() < 2 {
        return Err(EvalTableError::Parse {
            text: text.to_string(),
        });
    }
    Ok(numbers)
}

/// First token is the mean, second the standard deviation. Extra tokens are ignored.
pub fn parse_record(text: &str) -> EtResult<MetricRecord> {
    let numbers = parse_numbers(text)?;
    Ok(MetricRecord::new(numbers[0], numbers[1]))
}
