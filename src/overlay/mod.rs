//! Overlay scene model
//!
//! Describes the prompts and controls shown over the AR view in each demo
//! stage. Nothing here draws; a host scene-graph renders the nodes.

mod node;
mod scene;

pub use node::{Color, Label, NodeAction, OverlayNode, RoundedRect, Sprite};
pub use scene::{NodeSlot, OverlayScene};
