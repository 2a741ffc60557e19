#![forbid(unsafe_code)]

//! Core: geometry primitives, hotspot masks, pointer input and notifications.
//!
//! # Role in resizer
//! `resizer-core` is the leaf layer. It owns the value types every other
//! crate speaks in: box lengths that are either pixels or opaque CSS
//! expressions, the directional edge masks engaged by each resize handle,
//! the axis mask that hides fields from the style projection, and the
//! notification records emitted over a gesture.
//!
//! # How it fits in the system
//! `resizer-engine` consumes these types to run the pointer state machine
//! and constraint solver. Hosts (a DOM binding, a test harness) construct
//! [`PointerInput`] values and receive [`Notification`]s back.

pub mod axis;
pub mod error;
pub mod event;
pub mod geometry;
pub mod handle;
pub mod logging;
pub mod notification;

pub use axis::{AxisMask, DisabledAttribute};
pub use error::{ParseTokenError, TokenKind};
pub use event::{PointerInput, PointerSource};
pub use geometry::{Extent, GeometrySnapshot, Length, Point, Rect, SizeBounds};
pub use handle::{
    CONTAINER_CLASS, CursorHint, DRAG_CLASS, Edges, HANDLE_CLASS, HANDLE_CLASS_PREFIX, Handle,
    Hotspot,
};
pub use notification::{Notification, NotificationKind};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};
