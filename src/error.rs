use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalTableError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-empty evaluator output that does not hold a (mean, std) pair.
    #[error("Unexpected result (need at least two numbers):\n{text}")]
    Parse { text: String },

    #[error("Unreadable number '{token}' in result:\n{text}")]
    BadNumber { token: String, text: String },

    #[error("Evaluation of {dataset}/{method}/{metric} failed (exit code {code:?}): {stderr}")]
    Evaluation {
        dataset: String,
        method: String,
        metric: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type EtResult<T> = Result<T, EvalTableError>;
