//! The boundary to the external evaluation routine.

use crate::config::{EvaluatorConfig, FailurePolicy};
use crate::error::{EtResult, EvalTableError};
use crate::ids::{Dataset, Method, Metric};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// What one evaluation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Non-empty standard output.
    Success(String),
    /// Clean exit with nothing on standard output.
    Empty,
    /// Non-zero exit, or killed by a signal (`code` is `None`). Whatever reached
    /// stdout before the failure is kept.
    Failure {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

/// Runs the evaluation routine for one (dataset, method, metric) triple.
pub trait Evaluator {
    fn evaluate(&self, dataset: Dataset, method: Method, metric: Metric) -> EtResult<Outcome>;
}

/// Spawns `<program> <script> --dataset D --exp_method M --metric X` and waits for it.
#[derive(Debug, Clone)]
pub struct ProcessEvaluator {
    program: String,
    script: Option<String>,
}

impl ProcessEvaluator {
    pub fn new(program: impl Into<String>, script: Option<String>) -> Self {
        Self {
            program: program.into(),
            script,
        }
    }

    pub fn from_config(config: &EvaluatorConfig) -> Self {
        let script = if config.script.is_empty() {
            None
        } else {
            Some(config.script.clone())
        };
        Self::new(config.program.clone(), script)
    }

    fn command(&self, dataset: Dataset, method: Method, metric: Metric) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(script) = &self.script {
            cmd.arg(script);
        }
        cmd.arg("--dataset")
            .arg(dataset.to_string())
            .arg("--exp_method")
            .arg(method.to_string())
            .arg("--metric")
            .arg(metric.to_string())
            .stdin(Stdio::null());
        cmd
    }
}

impl Evaluator for ProcessEvaluator {
    fn evaluate(&self, dataset: Dataset, method: Method, metric: Metric) -> EtResult<Outcome> {
        debug!("Evaluating {} {} {}", dataset, method, metric);
        let output = self.command(dataset, method, metric).output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            return Ok(Outcome::Failure {
                code: output.status.code(),
                stdout,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if stdout.is_empty() {
            Ok(Outcome::Empty)
        } else {
            Ok(Outcome::Success(stdout))
        }
    }
}

/// Raw text for one triple. An empty string means "no data".
///
/// Under `FailurePolicy::Nan` a failed run still yields whatever it printed on
/// stdout (empty when it printed nothing); under `FailurePolicy::Error` it becomes
/// `EvalTableError::Evaluation`.
pub fn fetch<E: Evaluator + ?Sized>(
    evaluator: &E,
    policy: FailurePolicy,
    dataset: Dataset,
    method: Method,
    metric: Metric,
) -> EtResult<String> {
    match evaluator.evaluate(dataset, method, metric)? {
        Outcome::Success(text) => Ok(text),
        Outcome::Empty => Ok(String::new()),
        Outcome::Failure {
            code,
            stdout,
            stderr,
        } => match policy {
            FailurePolicy::Nan => {
                if stdout.is_empty() {
                    warn!(
                        "⚠️  {} {} {}: evaluator exited with {:?}, treating as missing. {}",
                        dataset, method, metric, code, stderr
                    );
                } else {
                    warn!(
                        "⚠️  {} {} {}: evaluator exited with {:?}, using its output anyway. {}",
                        dataset, method, metric, code, stderr
                    );
                }
                Ok(stdout)
            }
            FailurePolicy::Error => Err(EvalTableError::Evaluation {
                dataset: dataset.to_string(),
                method: method.to_string(),
                metric: metric.to_string(),
                code,
                stderr,
            }),
        },
    }
}
