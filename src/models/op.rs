//! Operation enumeration for the CLI and structured output

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::ops;
use crate::error::CalcError;

/// The four calculator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    /// Addition
    Add,
    /// Subtraction
    Subtract,
    /// Multiplication
    Multiply,
    /// Truncating division; a zero divisor yields zero
    Divide,
}

impl Op {
    /// Returns the display name for the operation
    pub fn display_name(&self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Multiply => "multiply",
            Op::Divide => "divide",
        }
    }

    /// Returns the infix symbol for the operation
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "*",
            Op::Divide => "/",
        }
    }

    /// Applies the operation to the given operands
    pub fn apply(&self, a: i64, b: i64) -> i64 {
        match self {
            Op::Add => ops::add(a, b),
            Op::Subtract => ops::subtract(a, b),
            Op::Multiply => ops::multiply(a, b),
            Op::Divide => ops::divide(a, b),
        }
    }

    /// Returns all operations
    pub fn all() -> &'static [Op] {
        &[Op::Add, Op::Subtract, Op::Multiply, Op::Divide]
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Op {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Op::Add),
            "subtract" => Ok(Op::Subtract),
            "multiply" => Ok(Op::Multiply),
            "divide" => Ok(Op::Divide),
            other => Err(CalcError::UnknownOperation(other.to_string())),
        }
    }
}
