#![forbid(unsafe_code)]

//! Maximize toggle and its interruption by a gesture.

use std::fmt::Debug;

use resizer_core::{Length, Notification, Point, debug};

use crate::controller::{ResizeController, finish};
use crate::dispatch::{Dispatch, IgnoredReason, LifecyclePhase};
use crate::host::HostDocument;
use crate::state::SavedBox;

impl<N: Copy + Eq + Debug> ResizeController<N> {
    /// Enter (`true`) or leave (`false`) maximize without notifying.
    ///
    /// Entering saves the current box and fills the parent's content box.
    /// Leaving restores the saved box exactly. The config's `maximize` flag
    /// follows the applied state.
    pub fn set_maximize<D>(&mut self, doc: &D, maximize: bool) -> Dispatch<N>
    where
        D: HostDocument<Node = N>,
    {
        let mode = self.state.mode;
        match self.apply_maximize(doc, maximize) {
            Ok(()) => {
                self.config.maximize = maximize;
                finish(Dispatch::applied(LifecyclePhase::Maximize, mode))
            }
            Err(reason) => finish(Dispatch::ignored(LifecyclePhase::Maximize, reason, mode)),
        }
    }

    pub(crate) fn apply_maximize<D>(
        &mut self,
        doc: &D,
        maximize: bool,
    ) -> Result<(), IgnoredReason>
    where
        D: HostDocument<Node = N>,
    {
        let host = self.host.ok_or(IgnoredReason::NotMounted)?;
        let parent = doc.parent(host).ok_or(IgnoredReason::Detached)?;
        let state = &mut self.state;

        if maximize {
            if state.saved.is_some() {
                return Err(IgnoredReason::AlreadyMaximized);
            }
            let fill = doc.client_size(parent);
            state.saved = Some(SavedBox {
                width: state.width.clone().unwrap_or(Length::Px(fill.width)),
                height: state.height.clone().unwrap_or(Length::Px(fill.height)),
                left: state.left.clone(),
                top: state.top.clone(),
            });
            state.left = Length::ZERO;
            state.top = Length::ZERO;
            state.width = Some(Length::Px(fill.width));
            state.height = Some(Length::Px(fill.height));
        } else {
            let saved = state.saved.take().ok_or(IgnoredReason::NotMaximized)?;
            state.left = saved.left;
            state.top = saved.top;
            state.width = Some(saved.width);
            state.height = Some(saved.height);
        }
        Ok(())
    }

    /// Leave maximize because a gesture started moving the box.
    ///
    /// The saved box is dropped. Each offset is anchored by the pointer's
    /// half of the parent: far half puts the box against the far edge, near
    /// half against 0.
    pub(crate) fn interrupt_maximize<D>(
        &mut self,
        doc: &D,
        host: N,
        pointer: Point,
    ) -> Option<Notification<N>>
    where
        D: HostDocument<Node = N>,
    {
        let parent = doc.parent(host)?;
        let extent = doc.client_size(parent);
        let origin = doc
            .bounding_rect(parent)
            .map_or(Point::ZERO, |rect| rect.origin());
        let local = Point::new(pointer.x - origin.x, pointer.y - origin.y);

        self.state.saved = None;
        self.config.maximize = false;

        let width = self.state.width_px().unwrap_or(0.0);
        let height = self.state.height_px().unwrap_or(0.0);
        self.state.left = Length::Px(anchor_offset(local.x, extent.width, width));
        self.state.top = Length::Px(anchor_offset(local.y, extent.height, height));
        debug!(left = %self.state.left, top = %self.state.top, "maximize interrupted");

        Some(Notification::maximize(false, self.state.snapshot(), host))
    }
}

fn anchor_offset(pointer: f64, parent: f64, size: f64) -> f64 {
    if pointer > parent / 2.0 {
        parent - size
    } else {
        0.0
    }
}
