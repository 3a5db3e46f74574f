//! Overlay scene nodes
//!
//! Nodes are plain descriptions; drawing them is left to the host scene-graph.

/// RGBA colour, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const CLEAR: Color = Color([0.0, 0.0, 0.0, 0.0]);
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
}

/// Rounded rectangle path used for follow-path actions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub corner_radius: f32,
}

/// Action attached to a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeAction {
    /// Follow a path repeatedly, one loop every `duration_secs`
    FollowPathForever {
        path: RoundedRect,
        duration_secs: f32,
    },
}

/// Text label node
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font_name: String,
    pub font_size: f32,
    pub color: Color,
    pub position: [f32; 2],
}

/// Image sprite node
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub image: String,
    pub position: [f32; 2],
    pub actions: Vec<NodeAction>,
}

impl Sprite {
    pub fn new(image: impl Into<String>, position: [f32; 2]) -> Self {
        Self {
            image: image.into(),
            position,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: NodeAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn remove_all_actions(&mut self) {
        self.actions.clear();
    }
}

/// Any node attached to the overlay
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayNode {
    Label(Label),
    Sprite(Sprite),
}

impl OverlayNode {
    pub fn position(&self) -> [f32; 2] {
        match self {
            OverlayNode::Label(label) => label.position,
            OverlayNode::Sprite(sprite) => sprite.position,
        }
    }
}
