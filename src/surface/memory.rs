//! In-memory [`RenderSurface`] for headless hosts and tests.

use std::collections::BTreeMap;

use crate::surface::{RenderSurface, StyleProperty, StyleValue};

/// Identifier of a [`MemorySurface`] node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    client_width: f64,
    offset_width: f64,
    intrinsic_height: f64,
    detached: bool,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<StyleProperty, StyleValue>,
}

/// An element tree held entirely in memory.
///
/// Box metrics are not computed from a real layout; callers assign measured
/// widths and intrinsic heights per node. A node's rendered height follows
/// its inline `height` style when one is set and falls back to the
/// intrinsic height otherwise, which is enough to model height reset and
/// equalization.
#[derive(Debug)]
pub struct MemorySurface {
    nodes: Vec<Node>,
    root: NodeId,
    device_pixel_ratio: f64,
    avail_width: Option<f64>,
    window_inner_width: f64,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Create a surface holding only a document root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            root: NodeId(0),
            device_pixel_ratio: 1.0,
            avail_width: None,
            window_inner_width: 0.0,
        }
    }

    /// Append a child element under `parent` with the given class list.
    pub fn add_child(&mut self, parent: NodeId, classes: &[&str]) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Node::default()
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Assign both measured widths (client and offset) in physical pixels.
    pub fn set_measured_width(&mut self, el: NodeId, width: f64) {
        self.nodes[el.0].client_width = width;
        self.nodes[el.0].offset_width = width;
    }

    /// Assign distinct client/offset widths in physical pixels.
    pub fn set_measured_widths(&mut self, el: NodeId, client: f64, offset: f64) {
        self.nodes[el.0].client_width = client;
        self.nodes[el.0].offset_width = offset;
    }

    /// Assign the height the node renders at under automatic sizing.
    pub fn set_intrinsic_height(&mut self, el: NodeId, height: f64) {
        self.nodes[el.0].intrinsic_height = height;
    }

    /// Set the device pixel ratio reported to the engine.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.device_pixel_ratio = ratio;
    }

    /// Set the advertised available screen width.
    pub fn set_avail_width(&mut self, width: Option<f64>) {
        self.avail_width = width;
    }

    /// Set the hosting window's inner width in physical pixels.
    pub fn set_window_inner_width(&mut self, width: f64) {
        self.window_inner_width = width;
    }

    /// Remove `el` (and implicitly its subtree) from the tree. The
    /// identifier stays allocated but stops being a renderable element,
    /// modeling a stale discovery snapshot.
    pub fn detach(&mut self, el: NodeId) {
        if let Some(parent) = self.nodes[el.0].parent {
            self.nodes[parent.0].children.retain(|&c| c != el);
        }
        self.nodes[el.0].parent = None;
        self.nodes[el.0].detached = true;
    }

    /// Read back an attribute written by the engine.
    pub fn attribute(&self, el: NodeId, name: &str) -> Option<&str> {
        self.nodes[el.0].attributes.get(name).map(String::as_str)
    }

    /// Read back an inline style written by the engine.
    pub fn style(&self, el: NodeId, prop: StyleProperty) -> Option<StyleValue> {
        self.nodes[el.0].styles.get(&prop).copied()
    }

    fn collect_descendants(&self, el: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.nodes[el.0].children {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }
}

impl RenderSurface for MemorySurface {
    type Element = NodeId;

    fn document_root(&self) -> NodeId {
        self.root
    }

    fn is_element(&self, el: NodeId) -> bool {
        el.0 < self.nodes.len() && !self.nodes[el.0].detached
    }

    fn parent(&self, el: NodeId) -> Option<NodeId> {
        self.nodes.get(el.0).and_then(|n| n.parent)
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if root.0 < self.nodes.len() {
            self.collect_descendants(root, &mut out);
        }
        out
    }

    fn classes(&self, el: NodeId) -> Vec<String> {
        self.nodes.get(el.0).map(|n| n.classes.clone()).unwrap_or_default()
    }

    fn client_width(&self, el: NodeId) -> f64 {
        self.nodes.get(el.0).map_or(0.0, |n| n.client_width)
    }

    fn offset_width(&self, el: NodeId) -> f64 {
        self.nodes.get(el.0).map_or(0.0, |n| n.offset_width)
    }

    fn rendered_height(&self, el: NodeId) -> f64 {
        let Some(node) = self.nodes.get(el.0) else {
            return 0.0;
        };
        match node.styles.get(&StyleProperty::Height) {
            Some(StyleValue::Px(h)) => *h,
            _ => node.intrinsic_height,
        }
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn avail_width(&self) -> Option<f64> {
        self.avail_width
    }

    fn document_client_width(&self) -> f64 {
        self.client_width(self.root)
    }

    fn window_inner_width(&self) -> f64 {
        self.window_inner_width
    }

    fn set_attribute(&mut self, el: NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_style(&mut self, el: NodeId, prop: StyleProperty, value: StyleValue) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            match value {
                StyleValue::Auto => node.styles.remove(&prop),
                other => node.styles.insert(prop, other),
            };
        }
    }
}
