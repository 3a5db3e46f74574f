//! Overlay scene for the AR demo stages

use tracing::debug;

use super::node::{Color, Label, NodeAction, OverlayNode, RoundedRect, Sprite};

const FONT_NAME: &str = "AppleSDGothicNeo-Regular";
const FONT_SIZE: f32 = 30.0;

const PHONE_IMAGE: &str = "phone_scaled";
const CHECK_IMAGE: &str = "check_scaled";
const PISTON_IMAGE: &str = "piston_scaled";

/// Seconds for the phone sprite to complete one loop of its path
const PHONE_LOOP_SECS: f32 = 2.0;

/// Identifies a node slot in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeSlot {
    ScanTextTop,
    ScanTextBottom,
    Phone,
    Check,
    PistonLeft,
    PistonRight,
}

/// Passive overlay shown above the AR view
///
/// Holds the nodes for each demo stage. Positions use a bottom-left origin,
/// matching the host scene-graph.
#[derive(Debug, Clone)]
pub struct OverlayScene {
    size: [f32; 2],
    background: Color,
    nodes: Vec<(NodeSlot, OverlayNode)>,
    scan_action_showing: bool,
    scan_action_finished: bool,
}

impl OverlayScene {
    /// Creates an empty scene with a clear background
    pub fn new(size: [f32; 2]) -> Self {
        debug!(width = size[0], height = size[1], "Overlay scene created");
        Self {
            size,
            background: Color::CLEAR,
            nodes: Vec::new(),
            scan_action_showing: false,
            scan_action_finished: false,
        }
    }

    pub fn size(&self) -> [f32; 2] {
        self.size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Shows the "move your phone" prompt with the circling phone sprite
    pub fn show_scan_action(&mut self) {
        let center_x = self.size[0] / 2.0;

        self.attach(
            NodeSlot::ScanTextTop,
            OverlayNode::Label(scan_label("Move your phone", [center_x, 100.0])),
        );
        self.attach(
            NodeSlot::ScanTextBottom,
            OverlayNode::Label(scan_label("to find a surface", [center_x, 70.0])),
        );

        let circle = RoundedRect {
            origin: [center_x - 20.0, 190.0],
            size: [40.0, 40.0],
            corner_radius: 20.0,
        };
        let phone = Sprite::new(PHONE_IMAGE, [center_x, 190.0]).with_action(
            NodeAction::FollowPathForever {
                path: circle,
                duration_secs: PHONE_LOOP_SECS,
            },
        );
        self.attach(NodeSlot::Phone, OverlayNode::Sprite(phone));

        self.scan_action_showing = true;
        self.scan_action_finished = false;
    }

    /// Removes the scan prompt
    pub fn finish_scan_action(&mut self) {
        self.detach(NodeSlot::ScanTextTop);
        self.detach(NodeSlot::ScanTextBottom);
        if let Some(OverlayNode::Sprite(mut phone)) = self.detach(NodeSlot::Phone) {
            phone.remove_all_actions();
        }

        self.scan_action_showing = false;
        self.scan_action_finished = true;
    }

    pub fn scan_action_showing(&self) -> bool {
        self.scan_action_showing
    }

    pub fn scan_action_finished(&self) -> bool {
        self.scan_action_finished
    }

    /// Shows the placement check mark
    pub fn show_action_placement(&mut self) {
        let check = Sprite::new(CHECK_IMAGE, [self.size[0] / 2.0, 190.0]);
        self.attach(NodeSlot::Check, OverlayNode::Sprite(check));
    }

    pub fn finish_action_placement(&mut self) {
        self.detach(NodeSlot::Check);
    }

    /// Shows the two piston controls
    pub fn show_action_controls(&mut self) {
        let center_x = self.size[0] / 2.0;
        self.attach(
            NodeSlot::PistonLeft,
            OverlayNode::Sprite(Sprite::new(PISTON_IMAGE, [center_x - 45.0, 150.0])),
        );
        self.attach(
            NodeSlot::PistonRight,
            OverlayNode::Sprite(Sprite::new(PISTON_IMAGE, [center_x + 45.0, 150.0])),
        );
    }

    /// Attached nodes in attachment order
    pub fn nodes(&self) -> impl Iterator<Item = &OverlayNode> {
        self.nodes.iter().map(|(_, node)| node)
    }

    /// Node attached at a slot, if any
    pub fn node(&self, slot: NodeSlot) -> Option<&OverlayNode> {
        self.nodes
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, node)| node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Attaches a node, replacing whatever occupied the slot
    fn attach(&mut self, slot: NodeSlot, node: OverlayNode) {
        self.detach(slot);
        self.nodes.push((slot, node));
    }

    fn detach(&mut self, slot: NodeSlot) -> Option<OverlayNode> {
        let index = self.nodes.iter().position(|(s, _)| *s == slot)?;
        Some(self.nodes.remove(index).1)
    }
}

fn scan_label(text: &str, position: [f32; 2]) -> Label {
    Label {
        text: text.to_string(),
        font_name: FONT_NAME.to_string(),
        font_size: FONT_SIZE,
        color: Color::WHITE,
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_is_empty_and_clear() {
        let scene = OverlayScene::new([400.0, 800.0]);
        assert_eq!(scene.node_count(), 0);
        assert_eq!(scene.background(), Color::CLEAR);
        assert!(!scene.scan_action_showing());
        assert!(!scene.scan_action_finished());
    }

    #[test]
    fn test_show_scan_action_layout() {
        let mut scene = OverlayScene::new([400.0, 800.0]);
        scene.show_scan_action();

        assert_eq!(scene.node_count(), 3);
        assert!(scene.scan_action_showing());

        let Some(OverlayNode::Label(top)) = scene.node(NodeSlot::ScanTextTop) else {
            panic!("missing top scan label");
        };
        assert_eq!(top.text, "Move your phone");
        assert_eq!(top.position, [200.0, 100.0]);
        assert_eq!(top.font_size, 30.0);

        let Some(OverlayNode::Sprite(phone)) = scene.node(NodeSlot::Phone) else {
            panic!("missing phone sprite");
        };
        assert_eq!(phone.position, [200.0, 190.0]);
        assert_eq!(
            phone.actions,
            vec![NodeAction::FollowPathForever {
                path: RoundedRect {
                    origin: [180.0, 190.0],
                    size: [40.0, 40.0],
                    corner_radius: 20.0,
                },
                duration_secs: 2.0,
            }]
        );
    }

    #[test]
    fn test_finish_scan_action_removes_nodes() {
        let mut scene = OverlayScene::new([400.0, 800.0]);
        scene.show_scan_action();
        scene.finish_scan_action();

        assert_eq!(scene.node_count(), 0);
        assert!(!scene.scan_action_showing());
        assert!(scene.scan_action_finished());
    }

    #[test]
    fn test_finish_scan_action_without_show() {
        let mut scene = OverlayScene::new([400.0, 800.0]);
        scene.finish_scan_action();
        assert!(scene.scan_action_finished());
        assert_eq!(scene.node_count(), 0);
    }

    #[test]
    fn test_placement_then_controls() {
        let mut scene = OverlayScene::new([300.0, 600.0]);
        scene.show_action_placement();
        assert_eq!(
            scene.node(NodeSlot::Check).map(OverlayNode::position),
            Some([150.0, 190.0])
        );

        scene.finish_action_placement();
        assert!(scene.node(NodeSlot::Check).is_none());

        scene.show_action_controls();
        let positions: Vec<_> = scene.nodes().map(OverlayNode::position).collect();
        assert_eq!(positions, vec![[105.0, 150.0], [195.0, 150.0]]);
    }

    #[test]
    fn test_showing_twice_does_not_duplicate() {
        let mut scene = OverlayScene::new([300.0, 600.0]);
        scene.show_action_controls();
        scene.show_action_controls();
        assert_eq!(scene.node_count(), 2);
    }
}
