#![forbid(unsafe_code)]

//! Pointer-down target classification.
//!
//! A target is matched against the hotspots in [`Hotspot::SCAN_ORDER`]: the
//! eight handles first, then the drag region. The first hotspot whose marker
//! element is the target or one of its ancestors (without walking past the
//! container) wins.

use resizer_core::{CONTAINER_CLASS, DRAG_CLASS, Handle, Hotspot};

use crate::dispatch::IgnoredReason;
use crate::host::HostDocument;

/// What a pointer-down may engage, for one container.
#[derive(Debug, Clone, Copy)]
pub struct HotspotScan<'a, N> {
    pub host: N,
    /// Handles currently rendered.
    pub handles: &'a [Handle],
    /// Elements marked as drag initiators.
    pub drag_regions: &'a [N],
}

impl<N: Copy + Eq> HotspotScan<'_, N> {
    /// Classify `target`, or report why it engages nothing.
    pub fn classify<D>(&self, doc: &D, target: N) -> Result<Hotspot, IgnoredReason>
    where
        D: HostDocument<Node = N>,
    {
        if !doc.contains(self.host, target) {
            return Err(IgnoredReason::TargetOutsideHost);
        }
        if enclosing_container(doc, target, self.host) != Some(self.host) {
            return Err(IgnoredReason::NestedContainer);
        }

        Hotspot::SCAN_ORDER
            .into_iter()
            .find(|hotspot| self.matches(doc, target, *hotspot))
            .ok_or(IgnoredReason::NoHotspot)
    }

    fn matches<D>(&self, doc: &D, target: N, hotspot: Hotspot) -> bool
    where
        D: HostDocument<Node = N>,
    {
        match hotspot {
            Hotspot::Handle(handle) => {
                self.handles.contains(&handle)
                    && doc
                        .closest_within(target, self.host, |node| {
                            doc.has_class(node, handle.class_name())
                        })
                        .is_some()
            }
            Hotspot::DragRegion => doc
                .closest_within(target, self.host, |node| {
                    self.drag_regions.contains(&node) || doc.has_class(node, DRAG_CLASS)
                })
                .is_some(),
        }
    }
}

/// Nearest ancestor-or-self of `target` that is `host` or another container.
fn enclosing_container<D: HostDocument>(
    doc: &D,
    target: D::Node,
    host: D::Node,
) -> Option<D::Node> {
    doc.ancestors_or_self(target)
        .find(|node| *node == host || doc.has_class(*node, CONTAINER_CLASS))
}
