#![forbid(unsafe_code)]

//! In-memory element tree implementing [`HostDocument`].
//!
//! Elements live in an arena and are addressed by [`NodeId`]. Measurements
//! are plain stored values that tests (or the fixture's render step) set
//! explicitly; nothing is laid out.
//!
//! # Selectors
//!
//! `query_selector_all` understands a small CSS subset, enough for drag
//! selectors in tests:
//!
//! | Form | Example |
//! |------|---------|
//! | universal | `*` |
//! | type | `header` |
//! | id | `#title` |
//! | class (repeatable) | `.bar.active` |
//! | compound | `div.title#main` |
//! | descendant | `.panel .title` |
//! | list | `.title, .grip` |
//!
//! Anything else matches nothing.

use resizer_core::{Extent, Point, Rect};
use resizer_engine::HostDocument;
use serde::{Deserialize, Serialize};

/// Arena index of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    client: Extent,
    layout: Extent,
    offset: Point,
    rect: Option<Rect>,
}

/// Arena-backed element tree.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    elements: Vec<Element>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// A document holding only the `body` root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: vec![Element {
                tag: "body".into(),
                ..Element::default()
            }],
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.elements.push(Element {
            tag: tag.to_ascii_lowercase(),
            ..Element::default()
        });
        NodeId(self.elements.len() - 1)
    }

    /// Append `child` to `parent`, moving it if it was attached elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    /// Remove `node` (and its subtree) from its parent.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.elements[node.0].parent.take() {
            self.elements[parent.0].children.retain(|child| *child != node);
        }
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        let classes = &mut self.elements[node.0].classes;
        if !classes.iter().any(|existing| existing == class) {
            classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.elements[node.0].classes.retain(|existing| existing != class);
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.elements[node.0].id = Some(id.to_owned());
    }

    pub fn set_client_size(&mut self, node: NodeId, size: Extent) {
        self.elements[node.0].client = size;
    }

    pub fn set_layout_size(&mut self, node: NodeId, size: Extent) {
        self.elements[node.0].layout = size;
    }

    pub fn set_offset(&mut self, node: NodeId, offset: Point) {
        self.elements[node.0].offset = offset;
    }

    /// Set (or, with `None`, make unmeasurable) the rendered rectangle.
    pub fn set_bounding_rect(&mut self, node: NodeId, rect: Option<Rect>) {
        self.elements[node.0].rect = rect;
    }

    /// Set client and layout size together, as for an untransformed element
    /// without borders or scrollbars.
    pub fn set_size(&mut self, node: NodeId, size: Extent) {
        self.set_client_size(node, size);
        self.set_layout_size(node, size);
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.elements[node.0].tag
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.elements[node.0].children
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.elements[node.0].classes
    }

    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        node == self.root() || self.elements[node.0].parent.is_some()
    }

    fn matches_compound(&self, node: NodeId, compound: &Compound) -> bool {
        let element = &self.elements[node.0];
        compound.tag.as_ref().is_none_or(|tag| *tag == element.tag)
            && compound
                .id
                .as_ref()
                .is_none_or(|id| element.id.as_ref() == Some(id))
            && compound
                .classes
                .iter()
                .all(|class| element.classes.iter().any(|existing| existing == class))
    }

    /// Right-to-left match of a descendant chain.
    fn matches_chain(&self, node: NodeId, chain: &[Compound]) -> bool {
        let Some((last, ancestors)) = chain.split_last() else {
            return false;
        };
        if !self.matches_compound(node, last) {
            return false;
        }
        let mut remaining = ancestors;
        let mut cursor = self.elements[node.0].parent;
        while let Some((wanted, rest)) = remaining.split_last() {
            loop {
                let Some(current) = cursor else {
                    return false;
                };
                cursor = self.elements[current.0].parent;
                if self.matches_compound(current, wanted) {
                    break;
                }
            }
            remaining = rest;
        }
        true
    }

    fn collect_descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in &self.elements[node.0].children {
            out.push(*child);
            self.collect_descendants(*child, out);
        }
    }
}

impl HostDocument for MemoryDocument {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.elements[node.0].parent
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.elements[node.0]
            .classes
            .iter()
            .any(|existing| existing == class)
    }

    fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(groups) = parse_selector(selector) else {
            return Vec::new();
        };
        let mut descendants = Vec::new();
        self.collect_descendants(root, &mut descendants);
        descendants
            .into_iter()
            .filter(|node| groups.iter().any(|chain| self.matches_chain(*node, chain)))
            .collect()
    }

    fn client_size(&self, node: NodeId) -> Extent {
        self.elements[node.0].client
    }

    fn layout_size(&self, node: NodeId) -> Extent {
        self.elements[node.0].layout
    }

    fn offset_position(&self, node: NodeId) -> Point {
        self.elements[node.0].offset
    }

    fn bounding_rect(&self, node: NodeId) -> Option<Rect> {
        self.elements[node.0].rect
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

/// Parse a selector list into descendant chains, `None` if unsupported.
fn parse_selector(selector: &str) -> Option<Vec<Vec<Compound>>> {
    selector
        .split(',')
        .map(|group| {
            let chain = group
                .split_whitespace()
                .map(parse_compound)
                .collect::<Option<Vec<_>>>()?;
            (!chain.is_empty()).then_some(chain)
        })
        .collect()
}

fn parse_compound(text: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let mut rest = text;

    let tag_len = rest.find(['.', '#']).unwrap_or(rest.len());
    let tag = &rest[..tag_len];
    if tag != "*" && !tag.is_empty() {
        if !tag.chars().all(is_ident_char) {
            return None;
        }
        compound.tag = Some(tag.to_ascii_lowercase());
    }
    rest = &rest[tag_len..];

    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let len = body.find(['.', '#']).unwrap_or(body.len());
        let name = &body[..len];
        if name.is_empty() || !name.chars().all(is_ident_char) {
            return None;
        }
        match marker {
            '.' => compound.classes.push(name.to_owned()),
            '#' if compound.id.is_none() => compound.id = Some(name.to_owned()),
            _ => return None,
        }
        rest = &body[len..];
    }
    Some(compound)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
