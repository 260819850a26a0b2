use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{Config, Op, OutputFormat};

/// A single evaluated operation, as rendered in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub op: Op,
    pub a: i64,
    pub b: i64,
    pub result: i64,
}

impl Evaluation {
    /// Apply the operation and capture the operands alongside the result
    pub fn evaluate(op: Op, a: i64, b: i64) -> Self {
        Self {
            op,
            a,
            b,
            result: op.apply(a, b),
        }
    }
}

/// Evaluate a single operation and print the result
pub fn run_eval(op: Op, a: i64, b: i64, config: &Config) -> Result<()> {
    debug!("Evaluating {} {} {}", a, op.symbol(), b);

    let evaluation = Evaluation::evaluate(op, a, b);

    match config.output.format {
        OutputFormat::Plain => {
            println!("{} {} {} = {}", a, op.symbol(), b, evaluation.result);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&evaluation)?);
        }
    }

    Ok(())
}
