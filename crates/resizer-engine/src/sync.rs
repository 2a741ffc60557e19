#![forbid(unsafe_code)]

//! Dimension synchronization and drag-region discovery.

use std::fmt::Debug;

use resizer_core::{Extent, Length, geometry::AUTO};

use crate::controller::{ResizeController, finish};
use crate::dispatch::{Dispatch, IgnoredReason, LifecyclePhase};
use crate::host::HostDocument;

impl<N: Copy + Eq + Debug> ResizeController<N> {
    /// Reconcile the box with what actually rendered.
    ///
    /// - unset width/height fill the parent's content box;
    /// - raw width/height other than `auto` take the host's client size;
    /// - non-numeric left/top become the host's offset within the parent;
    /// - numeric width/height are then clamped into the bounds.
    pub fn sync_dimensions<D>(&mut self, doc: &D) -> Dispatch<N>
    where
        D: HostDocument<Node = N>,
    {
        let mode = self.state.mode;
        match self.sync_box(doc) {
            Ok(()) => finish(Dispatch::applied(LifecyclePhase::SyncDimensions, mode)),
            Err(reason) => finish(Dispatch::ignored(
                LifecyclePhase::SyncDimensions,
                reason,
                mode,
            )),
        }
    }

    pub(crate) fn sync_box<D>(&mut self, doc: &D) -> Result<(), IgnoredReason>
    where
        D: HostDocument<Node = N>,
    {
        let host = self.host.ok_or(IgnoredReason::NotMounted)?;
        let parent = doc.parent(host).ok_or(IgnoredReason::Detached)?;
        let parent_client = doc.client_size(parent);
        let host_client = doc.client_size(host);

        if let Some(width) = synced_size(
            self.config.width.as_ref(),
            parent_client.width,
            host_client.width,
        ) {
            self.state.width = Some(Length::Px(width));
        }
        if let Some(height) = synced_size(
            self.config.height.as_ref(),
            parent_client.height,
            host_client.height,
        ) {
            self.state.height = Some(Length::Px(height));
        }

        let host_offset = doc.offset_position(host);
        let parent_offset = doc.offset_position(parent);
        if !self.config.left.is_px() {
            self.state.left = Length::Px(host_offset.x - parent_offset.x);
        }
        if !self.config.top.is_px() {
            self.state.top = Length::Px(host_offset.y - parent_offset.y);
        }

        self.state.clamp_size();
        Ok(())
    }

    /// Re-evaluate the drag selector against the host's descendants.
    pub(crate) fn refresh_drag_regions<D>(&mut self, doc: &D)
    where
        D: HostDocument<Node = N>,
    {
        self.drag_regions = match (self.host, self.config.drag_selector()) {
            (Some(host), Some(selector)) => doc.query_selector_all(host, selector),
            _ => Vec::new(),
        };
    }
}

/// Measured size for a configured dimension, or `None` to keep it.
fn synced_size(input: Option<&Length>, parent: f64, host: f64) -> Option<f64> {
    match input {
        None => Some(parent),
        Some(Length::Raw(expr)) if expr != AUTO => Some(host),
        Some(_) => None,
    }
}

/// Client size of the host's parent; zero when detached.
pub(crate) fn parent_extent<D: HostDocument>(doc: &D, host: D::Node) -> Extent {
    doc.parent(host)
        .map_or(Extent::ZERO, |parent| doc.client_size(parent))
}
