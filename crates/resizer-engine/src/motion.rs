#![forbid(unsafe_code)]

//! Pointer-move handling: delta computation and per-axis solving.

use std::fmt::Debug;

use resizer_core::{AxisMask, Length, Point, PointerInput, trace};

use crate::constrain::{AxisBox, AxisLimits, apply_axis, horizontal, vertical};
use crate::controller::{ResizeController, finish};
use crate::dispatch::{Dispatch, IgnoredReason, LifecyclePhase};
use crate::host::HostDocument;
use crate::sync::parent_extent;

impl<N: Copy + Eq + Debug> ResizeController<N> {
    /// Pointer-move anywhere in the document.
    ///
    /// Deltas are consumed: the anchor moves to the current pointer after
    /// every processed event, and whatever a constraint rejected is carried
    /// into the next event as a pending correction.
    pub fn pointer_move<D>(&mut self, doc: &D, event: &PointerInput<N>) -> Dispatch<N>
    where
        D: HostDocument<Node = N>,
    {
        let mode = self.state.mode;
        let ignore = |reason| finish(Dispatch::ignored(LifecyclePhase::PointerMove, reason, mode));

        let Some([_, moved, _]) = mode.notifications() else {
            return ignore(IgnoredReason::NoActiveGesture);
        };
        let Some(host) = self.host else {
            return ignore(IgnoredReason::NotMounted);
        };
        let Some(pointer) = event.position() else {
            return ignore(IgnoredReason::NoPointerPosition);
        };

        let mut dispatch = Dispatch::applied(LifecyclePhase::PointerMove, mode);
        let dragging = mode.is_dragging();
        if !dragging {
            self.materialize_size(doc, host);
        }
        if self.state.is_maximized()
            && let Some(note) = self.interrupt_maximize(doc, host, pointer)
        {
            dispatch.notifications.push(note);
        }

        let scale = scale_ratio(doc, host);
        let anchor = self.state.anchor;
        let correction = self.state.correction;
        let delta = Point::new(
            (pointer.x - anchor.x + correction.x) / scale.x,
            (pointer.y - anchor.y + correction.y) / scale.y,
        );
        trace!(dx = delta.x, dy = delta.y, "resizer move delta");

        self.state.correction = Point::ZERO;
        self.state.parent_extent = parent_extent(doc, host);

        let edges = mode.edges();
        let mask = self.state.axis_mask;
        let bounds = self.state.bounds;
        let parent = self.state.parent_extent;
        let fit_parent = self.config.fit_parent;
        let state = &mut self.state;

        let (far, near) = horizontal(edges);
        if far || near {
            let limits = AxisLimits {
                min: bounds.min_width,
                max: bounds.max_width,
                parent: parent.width,
                fit_parent,
                dragging,
            };
            let mut axis = AxisBox {
                offset: &mut state.left,
                size: state.width.as_mut(),
                offset_axis: AxisMask::LEFT,
                size_axis: AxisMask::WIDTH,
            };
            state.correction.x += apply_axis(&mut axis, delta.x, far, near, &limits, mask);
        }

        let (far, near) = vertical(edges);
        if far || near {
            let limits = AxisLimits {
                min: bounds.min_height,
                max: bounds.max_height,
                parent: parent.height,
                fit_parent,
                dragging,
            };
            let mut axis = AxisBox {
                offset: &mut state.top,
                size: state.height.as_mut(),
                offset_axis: AxisMask::TOP,
                size_axis: AxisMask::HEIGHT,
            };
            state.correction.y += apply_axis(&mut axis, delta.y, far, near, &limits, mask);
        }

        state.anchor = pointer;
        dispatch.notifications.push(self.notification(host, moved));
        finish(dispatch)
    }

    /// Pin raw or unset sizes to the rendered client size.
    fn materialize_size<D>(&mut self, doc: &D, host: N)
    where
        D: HostDocument<Node = N>,
    {
        if self.state.width_px().is_some() && self.state.height_px().is_some() {
            return;
        }
        let client = doc.client_size(host);
        if self.state.width_px().is_none() {
            self.state.width = Some(Length::Px(client.width));
        }
        if self.state.height_px().is_none() {
            self.state.height = Some(Length::Px(client.height));
        }
    }
}

/// Rendered-to-layout size ratio per axis; 1 when it cannot be measured.
fn scale_ratio<D: HostDocument>(doc: &D, host: D::Node) -> Point {
    let Some(rect) = doc.bounding_rect(host) else {
        return Point::new(1.0, 1.0);
    };
    let layout = doc.layout_size(host);
    Point::new(ratio(rect.width, layout.width), ratio(rect.height, layout.height))
}

fn ratio(rendered: f64, layout: f64) -> f64 {
    let ratio = rendered / layout;
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}
