#![forbid(unsafe_code)]

//! Geometry state: the authoritative box plus gesture bookkeeping.

use resizer_core::{
    AxisMask, Edges, Extent, GeometrySnapshot, Length, NotificationKind, Point, SizeBounds,
};
use serde::{Deserialize, Serialize};

use crate::config::ResizableConfig;
use crate::style::StyleProjection;

/// What the pointer is currently doing to the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "edges", rename_all = "snake_case")]
pub enum InteractionMode {
    #[default]
    Idle,
    /// A handle is held; the edges it engages.
    Resizing(Edges),
    /// The drag region is held; the whole box moves.
    Dragging,
}

impl InteractionMode {
    /// Edges engaged by the gesture; empty when idle.
    #[must_use]
    pub const fn edges(self) -> Edges {
        match self {
            Self::Idle => Edges::empty(),
            Self::Resizing(edges) => edges,
            Self::Dragging => Edges::all(),
        }
    }

    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// Start/move/end notifications for this gesture; `None` when idle.
    #[must_use]
    pub const fn notifications(self) -> Option<[NotificationKind; 3]> {
        match self {
            Self::Idle => None,
            Self::Resizing(_) => Some([
                NotificationKind::ResizeStart,
                NotificationKind::ResizeMove,
                NotificationKind::ResizeEnd,
            ]),
            Self::Dragging => Some([
                NotificationKind::DragStart,
                NotificationKind::DragMove,
                NotificationKind::DragEnd,
            ]),
        }
    }
}

/// Box captured on entering maximize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedBox {
    pub width: Length,
    pub height: Length,
    pub left: Length,
    pub top: Length,
}

/// Mutable geometry record owned by one controller.
///
/// Fields are only written by the controller; hosts read them through the
/// accessors or the [`StyleProjection`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryState {
    pub(crate) left: Length,
    pub(crate) top: Length,
    pub(crate) width: Option<Length>,
    pub(crate) height: Option<Length>,
    pub(crate) bounds: SizeBounds,
    pub(crate) mode: InteractionMode,
    pub(crate) anchor: Point,
    pub(crate) correction: Point,
    pub(crate) parent_extent: Extent,
    pub(crate) saved: Option<SavedBox>,
    pub(crate) axis_mask: AxisMask,
}

impl Default for GeometryState {
    fn default() -> Self {
        Self::from_config(&ResizableConfig::default())
    }
}

impl GeometryState {
    /// Initial state before mount: the configured box, idle.
    #[must_use]
    pub fn from_config(config: &ResizableConfig) -> Self {
        Self {
            left: config.left.clone(),
            top: config.top.clone(),
            width: config.width.clone(),
            height: config.height.clone(),
            bounds: config.bounds(),
            mode: InteractionMode::Idle,
            anchor: Point::ZERO,
            correction: Point::ZERO,
            parent_extent: Extent::ZERO,
            saved: None,
            axis_mask: config.axis_mask(),
        }
    }

    #[must_use]
    pub const fn left(&self) -> &Length {
        &self.left
    }

    #[must_use]
    pub const fn top(&self) -> &Length {
        &self.top
    }

    #[must_use]
    pub const fn width(&self) -> Option<&Length> {
        self.width.as_ref()
    }

    #[must_use]
    pub const fn height(&self) -> Option<&Length> {
        self.height.as_ref()
    }

    #[must_use]
    pub const fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    #[must_use]
    pub const fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Pointer position at the last processed event of the gesture.
    #[must_use]
    pub const fn anchor(&self) -> Point {
        self.anchor
    }

    /// Delta rejected by a constraint on the previous move, re-applied next.
    #[must_use]
    pub const fn pending_correction(&self) -> Point {
        self.correction
    }

    #[must_use]
    pub const fn parent_extent(&self) -> Extent {
        self.parent_extent
    }

    #[must_use]
    pub const fn saved_box(&self) -> Option<&SavedBox> {
        self.saved.as_ref()
    }

    #[must_use]
    pub const fn is_maximized(&self) -> bool {
        self.saved.is_some()
    }

    #[must_use]
    pub const fn axis_mask(&self) -> AxisMask {
        self.axis_mask
    }

    /// Numeric width, if any.
    #[must_use]
    pub fn width_px(&self) -> Option<f64> {
        self.width.as_ref().and_then(Length::as_px)
    }

    #[must_use]
    pub fn height_px(&self) -> Option<f64> {
        self.height.as_ref().and_then(Length::as_px)
    }

    /// Current box as carried by notifications.
    #[must_use]
    pub fn snapshot(&self) -> GeometrySnapshot {
        GeometrySnapshot {
            left: self.left.clone(),
            top: self.top.clone(),
            width: self.width.clone(),
            height: self.height.clone(),
        }
    }

    /// Style mapping for the enabled axes.
    #[must_use]
    pub fn style(&self) -> StyleProjection {
        StyleProjection::project(self)
    }

    pub(crate) fn clamp_size(&mut self) {
        if let Some(Length::Px(width)) = self.width.as_mut() {
            *width = self.bounds.clamp_width(*width);
        }
        if let Some(Length::Px(height)) = self.height.as_mut() {
            *height = self.bounds.clamp_height(*height);
        }
    }

    pub(crate) fn begin_gesture(&mut self, mode: InteractionMode, anchor: Point, parent: Extent) {
        self.mode = mode;
        self.anchor = anchor;
        self.correction = Point::ZERO;
        self.parent_extent = parent;
    }

    pub(crate) fn end_gesture(&mut self) -> InteractionMode {
        std::mem::take(&mut self.mode)
    }
}
