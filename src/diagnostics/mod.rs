//! Gesture classifier diagnostics
//!
//! Replays scripted contact sequences against a fresh
//! [`GestureManager`](crate::gesture::GestureManager) and reports whether the
//! emitted events and final mode match expectations.
//!
//! # Example
//!
//! ```no_run
//! use ar_runner::diagnostics;
//!
//! let report = diagnostics::run_builtin();
//! diagnostics::print_report(&report);
//! std::process::exit(report.exit_code());
//! ```

pub mod reporter;
pub mod runner;
pub mod scenario;

pub use reporter::{format_report, print_report};
pub use runner::{DiagnosticsReport, DiagnosticsRunner};
pub use scenario::{Scenario, ScenarioResult, ScenarioStatus, Step, builtin_scenarios};

/// Replays the built-in scenarios
pub fn run_builtin() -> DiagnosticsReport {
    DiagnosticsRunner::new()
        .add_scenarios(builtin_scenarios())
        .run()
}
