#![cfg(unix)]

use evaltable::config::FailurePolicy;
use evaltable::error::EvalTableError;
use evaltable::evaluator::{fetch, Evaluator, Outcome, ProcessEvaluator};
use evaltable::ids::{Dataset, Method, Metric};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

const FAKE_EVAL: &str = r#"#!/bin/sh
# usage: fake_eval.sh --dataset D --exp_method M --metric X
case "$2:$4:$6" in
  mutag:RAND:GEA) echo "GEA mean 0.044 std 0.007" ;;
  mutag:RAND:GEF) echo "0.590 +- 0.031" ;;
  mutag:GRAD:GEA) echo "Traceback: boom" >&2; exit 3 ;;
  mutag:GRAD:GEF) echo "partial 0.1 0.2"; exit 1 ;;
  *) ;;
esac
"#;

struct TestContext {
    _dir: TempDir,
    script: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let script = dir.path().join("fake_eval.sh");
        let mut file = File::create(&script).unwrap();
        file.write_all(FAKE_EVAL.as_bytes()).unwrap();
        Self { _dir: dir, script }
    }

    fn evaluator(&self) -> ProcessEvaluator {
        ProcessEvaluator::new("sh", Some(self.script.to_str().unwrap().to_string()))
    }
}

#[test]
fn test_process_success_returns_stdout() {
    let ctx = TestContext::new();
    let outcome = ctx
        .evaluator()
        .evaluate(Dataset::Mutag, Method::Rand, Metric::Gea)
        .unwrap();
    assert_eq!(outcome, Outcome::Success("GEA mean 0.044 std 0.007\n".to_string()));
}

#[test]
fn test_process_no_output_is_empty() {
    let ctx = TestContext::new();
    let outcome = ctx
        .evaluator()
        .evaluate(Dataset::Fc, Method::Subx, Metric::Gef)
        .unwrap();
    assert_eq!(outcome, Outcome::Empty);
}

#[test]
fn test_process_failure_carries_exit_info() {
    let ctx = TestContext::new();
    let outcome = ctx
        .evaluator()
        .evaluate(Dataset::Mutag, Method::Grad, Metric::Gea)
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Failure {
            code: Some(3),
            stdout: String::new(),
            stderr: "Traceback: boom".to_string(),
        }
    );
}

#[test]
fn test_failure_with_stdout_is_still_failure() {
    let ctx = TestContext::new();
    let outcome = ctx
        .evaluator()
        .evaluate(Dataset::Mutag, Method::Grad, Metric::Gef)
        .unwrap();
    assert_eq!(
        outcome,
        Outcome::Failure {
            code: Some(1),
            stdout: "partial 0.1 0.2\n".to_string(),
            stderr: String::new(),
        }
    );
}

#[test]
fn test_named_arguments_are_passed() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("echo_args.sh");
    std::fs::write(&script, "#!/bin/sh\necho \"$@\"\n").unwrap();

    let eval = ProcessEvaluator::new("sh", Some(script.to_str().unwrap().to_string()));
    let outcome = eval.evaluate(Dataset::Benzene, Method::Pgmex, Metric::Gef).unwrap();
    assert_eq!(
        outcome,
        Outcome::Success("--dataset benzene --exp_method PGMEX --metric GEF\n".to_string())
    );
}

#[test]
fn test_missing_program_is_io_error() {
    let eval = ProcessEvaluator::new("definitely-not-a-real-evaluator-binary", None);
    let err = eval
        .evaluate(Dataset::Mutag, Method::Rand, Metric::Gea)
        .unwrap_err();
    assert!(matches!(err, EvalTableError::Io(_)));
}

#[test]
fn test_fetch_maps_outcomes_to_text() {
    let ctx = TestContext::new();
    let eval = ctx.evaluator();

    let text = fetch(&eval, FailurePolicy::Nan, Dataset::Mutag, Method::Rand, Metric::Gef).unwrap();
    assert_eq!(text, "0.590 +- 0.031\n");

    let empty = fetch(&eval, FailurePolicy::Nan, Dataset::Fc, Method::Rand, Metric::Gea).unwrap();
    assert_eq!(empty, "");

    let failed = fetch(&eval, FailurePolicy::Nan, Dataset::Mutag, Method::Grad, Metric::Gea).unwrap();
    assert_eq!(failed, "");

    let err = fetch(&eval, FailurePolicy::Error, Dataset::Mutag, Method::Grad, Metric::Gea);
    assert!(matches!(err, Err(EvalTableError::Evaluation { code: Some(3), .. })));
}

#[test]
fn test_fetch_nan_policy_uses_stdout_of_failed_run() {
    let ctx = TestContext::new();
    let eval = ctx.evaluator();

    let text = fetch(&eval, FailurePolicy::Nan, Dataset::Mutag, Method::Grad, Metric::Gef).unwrap();
    assert_eq!(text, "partial 0.1 0.2\n");

    let err = fetch(&eval, FailurePolicy::Error, Dataset::Mutag, Method::Grad, Metric::Gef);
    assert!(matches!(err, Err(EvalTableError::Evaluation { code: Some(1), .. })));
}
