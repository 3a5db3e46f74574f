//! Demo stage progression driven by single-touch gestures

use tracing::{debug, info};

use crate::gesture::{GesturePhase, SingleTouchEvent};
use crate::overlay::OverlayScene;

/// Stage of the AR demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStage {
    /// Prompting the user to move the phone to find a surface
    Scanning,
    /// Showing the placement check mark
    Placement,
    /// Showing the drive controls
    Controls,
}

/// Advances the overlay through the demo stages on each completed touch
pub struct DemoFlow {
    stage: DemoStage,
    overlay: OverlayScene,
}

impl DemoFlow {
    /// Starts the demo in the scanning stage
    pub fn new(mut overlay: OverlayScene) -> Self {
        overlay.show_scan_action();
        Self {
            stage: DemoStage::Scanning,
            overlay,
        }
    }

    pub fn stage(&self) -> DemoStage {
        self.stage
    }

    pub fn overlay(&self) -> &OverlayScene {
        &self.overlay
    }

    /// Applies one gesture event; only `End` advances the stage
    pub fn handle(&mut self, event: &SingleTouchEvent) {
        if event.phase != GesturePhase::End {
            debug!(phase = ?event.phase, stage = ?self.stage, "Gesture ignored by demo");
            return;
        }

        let next = match self.stage {
            DemoStage::Scanning => {
                self.overlay.finish_scan_action();
                self.overlay.show_action_placement();
                DemoStage::Placement
            }
            DemoStage::Placement => {
                self.overlay.finish_action_placement();
                self.overlay.show_action_controls();
                DemoStage::Controls
            }
            DemoStage::Controls => DemoStage::Controls,
        };

        if next != self.stage {
            info!(from = ?self.stage, to = ?next, "Demo stage changed");
            self.stage = next;
        }
    }
}
