//! Runner for orchestrating gesture scenarios

use std::time::Instant;

use super::scenario::{Scenario, ScenarioResult, ScenarioStatus};

/// Results from replaying a scenario suite
#[derive(Debug)]
pub struct DiagnosticsReport {
    /// Each replayed scenario with its result
    pub results: Vec<(Scenario, ScenarioResult)>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl DiagnosticsReport {
    /// Returns true if no scenario failed
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    /// 0 = all pass, 1 = any fail
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 { 1 } else { 0 }
    }
}

/// Collects scenarios and replays them
#[derive(Default)]
pub struct DiagnosticsRunner {
    scenarios: Vec<Scenario>,
}

impl DiagnosticsRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    pub fn add_scenarios(mut self, scenarios: impl IntoIterator<Item = Scenario>) -> Self {
        self.scenarios.extend(scenarios);
        self
    }

    /// Replays every scenario and returns a report
    pub fn run(self) -> DiagnosticsReport {
        let mut results = Vec::with_capacity(self.scenarios.len());
        let mut passed = 0;
        let mut failed = 0;

        for scenario in self.scenarios {
            let start = Instant::now();
            let mut result = scenario.run();
            result.duration = start.elapsed();

            match result.status {
                ScenarioStatus::Pass => passed += 1,
                ScenarioStatus::Fail => failed += 1,
            }

            results.push((scenario, result));
        }

        DiagnosticsReport {
            total: results.len(),
            results,
            passed,
            failed,
        }
    }
}
