//! Scripted gesture scenarios

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::app::input::ContactPhase;
use crate::gesture::{ContactBatch, GestureManager, GesturePhase, SingleTouchEvent, TouchMode};

/// Outcome of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStatus {
    Pass,
    Fail,
}

impl ScenarioStatus {
    pub fn is_pass(&self) -> bool {
        matches!(self, ScenarioStatus::Pass)
    }

    /// Returns the status as a colored string
    pub fn as_colored_str(&self) -> String {
        use colored::Colorize;
        match self {
            ScenarioStatus::Pass => "PASS".green().to_string(),
            ScenarioStatus::Fail => "FAIL".red().to_string(),
        }
    }
}

/// Result of replaying one scenario
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub status: ScenarioStatus,
    pub message: String,
    /// Event phases the classifier emitted
    pub observed_events: Vec<GesturePhase>,
    /// Classifier mode after the last step
    pub observed_mode: TouchMode,
    /// Expected versus observed output, for failures
    pub details: Option<String>,
    pub duration: Duration,
}

/// One host callback in a scenario
#[derive(Debug, Clone)]
pub struct Step {
    pub phase: ContactPhase,
    pub batch: ContactBatch,
}

/// Sequence of host callbacks with the expected classifier output
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    /// What the scenario demonstrates, shown in reports
    pub description: String,
    pub steps: Vec<Step>,
    pub expected_events: Vec<GesturePhase>,
    pub expected_mode: TouchMode,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            steps: Vec::new(),
            expected_events: Vec::new(),
            expected_mode: TouchMode::None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn began(self, positions: &[[f32; 2]]) -> Self {
        self.step(ContactPhase::Began, positions)
    }

    pub fn moved(self, positions: &[[f32; 2]]) -> Self {
        self.step(ContactPhase::Moved, positions)
    }

    pub fn ended(self, positions: &[[f32; 2]]) -> Self {
        self.step(ContactPhase::Ended, positions)
    }

    pub fn cancelled(self, positions: &[[f32; 2]]) -> Self {
        self.step(ContactPhase::Cancelled, positions)
    }

    /// Sets the expected event phases and final mode
    pub fn expect(mut self, events: &[GesturePhase], mode: TouchMode) -> Self {
        self.expected_events = events.to_vec();
        self.expected_mode = mode;
        self
    }

    fn step(mut self, phase: ContactPhase, positions: &[[f32; 2]]) -> Self {
        self.steps.push(Step {
            phase,
            batch: ContactBatch::from_positions(positions.iter().copied()),
        });
        self
    }

    /// Replays the steps against a fresh classifier
    pub fn run(&self) -> ScenarioResult {
        let mut manager = GestureManager::new();
        let observed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&observed);
        manager.subscribe(move |event: &SingleTouchEvent| sink.borrow_mut().push(event.phase));

        for step in &self.steps {
            match step.phase {
                ContactPhase::Began => manager.touches_began(&step.batch),
                ContactPhase::Moved => manager.touches_moved(&step.batch),
                ContactPhase::Ended => manager.touches_ended(&step.batch),
                ContactPhase::Cancelled => manager.touches_cancelled(&step.batch),
            };
        }

        let observed_events = observed.borrow().clone();
        let observed_mode = manager.mode();

        let (status, message, details) =
            if observed_events == self.expected_events && observed_mode == self.expected_mode {
                (
                    ScenarioStatus::Pass,
                    format!("{} event(s), mode {:?}", observed_events.len(), observed_mode),
                    None,
                )
            } else {
                (
                    ScenarioStatus::Fail,
                    "Classifier output differs from expectation".to_string(),
                    Some(format!(
                        "  expected: {:?}, mode {:?}\n  observed: {:?}, mode {:?}",
                        self.expected_events, self.expected_mode, observed_events, observed_mode
                    )),
                )
            };

        ScenarioResult {
            status,
            message,
            observed_events,
            observed_mode,
            details,
            duration: Duration::ZERO,
        }
    }
}

/// Scenarios covering every row of the classifier's transition table
pub fn builtin_scenarios() -> Vec<Scenario> {
    use GesturePhase::{Cancelled, End, Start};

    vec![
        Scenario::new("single tap begins")
            .describe("One contact from idle emits Start")
            .began(&[[10.0, 20.0]])
            .expect(&[Start], TouchMode::SingleTouchActive),
        Scenario::new("second began cancels")
            .describe("A further began while active emits Cancelled")
            .began(&[[10.0, 20.0]])
            .began(&[[30.0, 40.0]])
            .expect(&[Start, Cancelled], TouchMode::SingleTouchActive),
        Scenario::new("ended keeps mode active")
            .describe("End does not return the mode to None")
            .began(&[[10.0, 20.0]])
            .ended(&[[10.0, 20.0]])
            .expect(&[Start, End], TouchMode::SingleTouchActive),
        Scenario::new("two-contact began ignored")
            .describe("Multi-contact batches never emit")
            .began(&[[0.0, 0.0], [5.0, 5.0]])
            .expect(&[], TouchMode::None),
        Scenario::new("moved and cancelled are silent")
            .describe("Moved and cancelled never emit or transition")
            .moved(&[[1.0, 1.0]])
            .cancelled(&[[1.0, 1.0]])
            .began(&[[1.0, 1.0]])
            .moved(&[[2.0, 2.0]])
            .cancelled(&[[2.0, 2.0]])
            .expect(&[Start], TouchMode::SingleTouchActive),
        Scenario::new("two-contact ended ignored")
            .describe("Multi-contact ended keeps the gesture open")
            .began(&[[1.0, 1.0]])
            .ended(&[[1.0, 1.0], [2.0, 2.0]])
            .expect(&[Start], TouchMode::SingleTouchActive),
    ]
}
