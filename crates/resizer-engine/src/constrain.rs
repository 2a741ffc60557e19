#![forbid(unsafe_code)]

//! Per-edge constraint resolution.
//!
//! A pointer move produces one raw delta per axis. For every engaged edge the
//! delta is clipped against the size bounds and, with fit-parent, the parent
//! extent. The part that was clipped off is returned as a remainder; the
//! controller carries it into the next move so that overshooting a boundary
//! and coming back restores the original trajectory.
//!
//! Far edges (right, bottom) grow the size. Near edges (left, top) move the
//! offset and shrink the size by the same amount, so the far edge stays put.
//! Each rule only applies when the quantities it reads are numeric; raw CSS
//! expressions pass through unconstrained.

use resizer_core::{AxisMask, Edges, Length};

/// Inputs for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub min: f64,
    pub max: Option<f64>,
    /// Parent content extent along the axis.
    pub parent: f64,
    pub fit_parent: bool,
    /// Whole-box drag: size rules are skipped.
    pub dragging: bool,
}

/// Clipped delta plus the part that was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    pub delta: f64,
    pub remainder: f64,
}

impl Clip {
    const fn unclipped(delta: f64) -> Self {
        Self {
            delta,
            remainder: 0.0,
        }
    }

    fn to(requested: f64, allowed: f64) -> Self {
        Self {
            delta: allowed,
            remainder: requested - allowed,
        }
    }
}

/// Resolve a delta applied to the right or bottom edge.
///
/// First applicable rule wins:
/// 1. resizing below `min` clips to `min`;
/// 2. resizing above `max` clips to `max`, unless fit-parent is on and the
///    maximum would not fit next to the current offset;
/// 3. with fit-parent, the far edge stops at the parent extent.
#[must_use]
pub fn resolve_far_edge(
    delta: f64,
    size: Option<f64>,
    offset: Option<f64>,
    limits: &AxisLimits,
) -> Clip {
    let resizing = !limits.dragging;

    if resizing && let Some(size) = size {
        if size + delta < limits.min {
            return Clip::to(delta, limits.min - size);
        }
        if let Some(max) = limits.max
            && size + delta > max
            && (!limits.fit_parent || offset.is_some_and(|offset| max + offset <= limits.parent))
        {
            return Clip::to(delta, max - size);
        }
    }

    if limits.fit_parent
        && let (Some(offset), Some(size)) = (offset, size)
        && offset + size + delta > limits.parent
    {
        return Clip::to(delta, limits.parent - offset - size);
    }

    Clip::unclipped(delta)
}

/// Resolve a delta applied to the left or top edge.
///
/// A positive delta moves the edge inwards. First applicable rule wins:
/// 1. resizing below `min` clips to `min`;
/// 2. resizing above `max` clips to `max` while the current offset is not
///    negative (a non-numeric offset counts as non-negative);
/// 3. with fit-parent, the near edge stops at 0.
///
/// Rule 2 does not consult the parent extent, unlike its far-edge
/// counterpart.
#[must_use]
pub fn resolve_near_edge(
    delta: f64,
    size: Option<f64>,
    offset: Option<f64>,
    limits: &AxisLimits,
) -> Clip {
    let resizing = !limits.dragging;

    if resizing && let Some(size) = size {
        if size - delta < limits.min {
            return Clip::to(delta, size - limits.min);
        }
        if let Some(max) = limits.max
            && size - delta > max
            && offset.is_none_or(|offset| offset >= 0.0)
        {
            return Clip::to(delta, size - max);
        }
    }

    if limits.fit_parent
        && let Some(offset) = offset
        && offset + delta < 0.0
    {
        return Clip::to(delta, -offset);
    }

    Clip::unclipped(delta)
}

/// One axis of the box as the solver sees it.
#[derive(Debug)]
pub struct AxisBox<'a> {
    pub offset: &'a mut Length,
    pub size: Option<&'a mut Length>,
    /// Axis-mask bit for the offset (`LEFT` or `TOP`).
    pub offset_axis: AxisMask,
    /// Axis-mask bit for the size (`WIDTH` or `HEIGHT`).
    pub size_axis: AxisMask,
}

impl AxisBox<'_> {
    fn offset_px(&self) -> Option<f64> {
        self.offset.as_px()
    }

    fn size_px(&self) -> Option<f64> {
        self.size.as_deref().and_then(Length::as_px)
    }

    fn grow(&mut self, delta: f64) {
        if let Some(Length::Px(size)) = self.size.as_deref_mut() {
            *size += delta;
        }
    }

    fn shift(&mut self, delta: f64) {
        if let Length::Px(offset) = &mut *self.offset {
            *offset += delta;
        }
    }
}

/// Apply `delta` along one axis for the engaged `far`/`near` edges.
///
/// Returns the total remainder rejected by the constraints. The far edge is
/// processed before the near edge, and the near edge sees the delta as
/// clipped by the far edge.
pub fn apply_axis(
    axis: &mut AxisBox<'_>,
    mut delta: f64,
    far: bool,
    near: bool,
    limits: &AxisLimits,
    mask: AxisMask,
) -> f64 {
    let mut remainder = 0.0;

    if far {
        let clip = resolve_far_edge(delta, axis.size_px(), axis.offset_px(), limits);
        delta = clip.delta;
        remainder += clip.remainder;
        if !limits.dragging && mask.contains(axis.size_axis) {
            axis.grow(delta);
        }
    }

    if near {
        let clip = resolve_near_edge(delta, axis.size_px(), axis.offset_px(), limits);
        delta = clip.delta;
        remainder += clip.remainder;
        if mask.contains(axis.offset_axis) {
            axis.shift(delta);
        }
        if !limits.dragging && mask.contains(axis.size_axis) {
            axis.grow(-delta);
        }
    }

    remainder
}

/// Split engaged edges into (far, near) flags for the horizontal axis.
#[must_use]
pub const fn horizontal(edges: Edges) -> (bool, bool) {
    (edges.contains(Edges::RIGHT), edges.contains(Edges::LEFT))
}

/// Split engaged edges into (far, near) flags for the vertical axis.
#[must_use]
pub const fn vertical(edges: Edges) -> (bool, bool) {
    (edges.contains(Edges::BOTTOM), edges.contains(Edges::TOP))
}
