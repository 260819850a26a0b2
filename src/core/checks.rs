//! Built-in self-check suite for the arithmetic operations.
//!
//! The suite evaluates the concrete scenarios for each operation plus the
//! algebraic properties (commutativity of add and multiply, subtract
//! antisymmetry, the divide-by-zero fallback) over a fixed operand grid.
//! Results are aggregated per group so the CLI can print one progress line
//! per operation.

use crate::core::ops;

/// Operand pairs exercised by the property checks
const SAMPLE_PAIRS: &[(i64, i64)] = &[
    (0, 0),
    (1, 1),
    (2, 3),
    (-1, 1),
    (-2, 3),
    (5, 0),
    (0, 5),
    (7, 3),
    (10, -10),
    (-9, -4),
    (123, 456),
];

/// Result of a single check group
#[derive(Debug, Clone)]
pub struct GroupResult {
    /// Group name, e.g. "addition"
    pub name: &'static str,
    /// Number of checks that passed
    pub passed: usize,
    /// Failure descriptions; empty when the group passed
    pub failures: Vec<String>,
}

impl GroupResult {
    /// Check if every case in the group passed
    pub fn is_pass(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of checks in the group
    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }
}

/// Aggregated report over all check groups
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub groups: Vec<GroupResult>,
}

impl CheckReport {
    /// Check if every group passed
    pub fn is_pass(&self) -> bool {
        self.groups.iter().all(GroupResult::is_pass)
    }

    /// Total number of checks across all groups
    pub fn total(&self) -> usize {
        self.groups.iter().map(GroupResult::total).sum()
    }

    /// Number of failed checks across all groups
    pub fn failed(&self) -> usize {
        self.groups.iter().map(|g| g.failures.len()).sum()
    }
}

/// Accumulator for one group of checks
struct GroupRun {
    name: &'static str,
    passed: usize,
    failures: Vec<String>,
}

impl GroupRun {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            passed: 0,
            failures: Vec::new(),
        }
    }

    fn expect_eq(&mut self, desc: &str, got: i64, want: i64) {
        if got == want {
            self.passed += 1;
        } else {
            self.failures
                .push(format!("{}: got {}, want {}", desc, got, want));
        }
    }

    fn finish(self) -> GroupResult {
        GroupResult {
            name: self.name,
            passed: self.passed,
            failures: self.failures,
        }
    }
}

fn addition_checks() -> GroupResult {
    let mut run = GroupRun::new("addition");
    run.expect_eq("add(2, 3)", ops::add(2, 3), 5);
    run.expect_eq("add(-1, 1)", ops::add(-1, 1), 0);
    run.expect_eq("add(0, 0)", ops::add(0, 0), 0);
    run.finish()
}

fn subtraction_checks() -> GroupResult {
    let mut run = GroupRun::new("subtraction");
    run.expect_eq("subtract(5, 3)", ops::subtract(5, 3), 2);
    run.expect_eq("subtract(0, 5)", ops::subtract(0, 5), -5);
    run.expect_eq("subtract(10, 10)", ops::subtract(10, 10), 0);
    run.finish()
}

fn multiplication_checks() -> GroupResult {
    let mut run = GroupRun::new("multiplication");
    run.expect_eq("multiply(3, 4)", ops::multiply(3, 4), 12);
    run.expect_eq("multiply(-2, 3)", ops::multiply(-2, 3), -6);
    run.expect_eq("multiply(0, 5)", ops::multiply(0, 5), 0);
    run.finish()
}

fn division_checks() -> GroupResult {
    let mut run = GroupRun::new("division");
    run.expect_eq("divide(10, 2)", ops::divide(10, 2), 5);
    run.expect_eq("divide(7, 3)", ops::divide(7, 3), 2);
    run.expect_eq("divide(5, 0)", ops::divide(5, 0), 0);
    run.finish()
}

fn property_checks() -> GroupResult {
    let mut run = GroupRun::new("properties");
    for &(a, b) in SAMPLE_PAIRS {
        run.expect_eq(
            &format!("add({}, {}) commutes", a, b),
            ops::add(a, b),
            ops::add(b, a),
        );
        run.expect_eq(
            &format!("multiply({}, {}) commutes", a, b),
            ops::multiply(a, b),
            ops::multiply(b, a),
        );
        run.expect_eq(
            &format!("subtract({}, {}) antisymmetric", a, b),
            ops::subtract(a, b),
            -ops::subtract(b, a),
        );
        run.expect_eq(&format!("divide({}, 0)", a), ops::divide(a, 0), 0);
    }
    run.finish()
}

/// Run every check group and collect the report
pub fn run_all() -> CheckReport {
    CheckReport {
        groups: vec![
            addition_checks(),
            subtraction_checks(),
            multiplication_checks(),
            division_checks(),
            property_checks(),
        ],
    }
}
