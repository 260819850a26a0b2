use tracing::debug;

use crate::core::checks::{self, CheckReport};

/// Run the built-in self-check suite
pub fn run_checks() -> CheckReport {
    debug!("Running self-check suite");
    checks::run_all()
}

/// Print the self-check report
pub fn print_check_report(report: &CheckReport) {
    println!("=== intcalc self-check ===\n");

    for group in &report.groups {
        if group.is_pass() {
            println!("{} ... ok ({} checks)", group.name, group.total());
        } else {
            println!(
                "{} ... FAILED ({}/{} checks passed)",
                group.name,
                group.passed,
                group.total()
            );
            for failure in &group.failures {
                println!("  - {}", failure);
            }
        }
    }
    println!();

    if report.is_pass() {
        println!("All checks passed!");
    } else {
        println!("{} of {} checks failed", report.failed(), report.total());
    }
}
