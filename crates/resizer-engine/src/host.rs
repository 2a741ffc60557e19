#![forbid(unsafe_code)]

//! Host document abstraction.
//!
//! The engine never touches a real DOM. Everything it needs to know about the
//! element tree (ancestry, classes, measurements) is asked through
//! [`HostDocument`], so the same controller drives a browser binding, a
//! native toolkit, or the in-memory test document.

use std::fmt::Debug;

use resizer_core::{Extent, Point, Rect};

/// Read-only view of the element tree the container lives in.
///
/// Measurements follow DOM semantics:
/// - `client_size`: content box (`clientWidth`/`clientHeight`).
/// - `layout_size`: untransformed border box (`offsetWidth`/`offsetHeight`).
/// - `offset_position`: `offsetLeft`/`offsetTop`.
/// - `bounding_rect`: rendered rectangle after CSS transforms, or `None`
///   when the host cannot measure it.
pub trait HostDocument {
    /// Handle to one element.
    type Node: Copy + Eq + Debug;

    /// Containing element, `None` for detached nodes and the root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn has_class(&self, node: Self::Node, class: &str) -> bool;

    /// Descendants of `root` (excluding `root`) matching `selector`, in
    /// document order.
    fn query_selector_all(&self, root: Self::Node, selector: &str) -> Vec<Self::Node>;

    fn client_size(&self, node: Self::Node) -> Extent;

    fn layout_size(&self, node: Self::Node) -> Extent;

    fn offset_position(&self, node: Self::Node) -> Point;

    fn bounding_rect(&self, node: Self::Node) -> Option<Rect>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool
    where
        Self: Sized,
    {
        self.ancestors_or_self(node).any(|n| n == ancestor)
    }

    /// Nearest ancestor-or-self of `node` satisfying `pred`, never walking
    /// past `boundary`.
    fn closest_within<F>(
        &self,
        node: Self::Node,
        boundary: Self::Node,
        mut pred: F,
    ) -> Option<Self::Node>
    where
        Self: Sized,
        F: FnMut(Self::Node) -> bool,
    {
        for current in self.ancestors_or_self(node) {
            if pred(current) {
                return Some(current);
            }
            if current == boundary {
                break;
            }
        }
        None
    }

    /// `node` followed by each of its ancestors up to the root.
    fn ancestors_or_self(&self, node: Self::Node) -> Ancestors<'_, Self>
    where
        Self: Sized,
    {
        Ancestors {
            doc: self,
            next: Some(node),
        }
    }
}

/// Iterator returned by [`HostDocument::ancestors_or_self`].
#[derive(Debug)]
pub struct Ancestors<'a, D: HostDocument> {
    doc: &'a D,
    next: Option<D::Node>,
}

impl<D: HostDocument> Iterator for Ancestors<'_, D> {
    type Item = D::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}
