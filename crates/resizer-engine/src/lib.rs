#![forbid(unsafe_code)]

//! `resizer-engine` turns pointer motion into a validated box.
//!
//! # Role in resizer
//! This crate holds the interaction state machine and the constraint solver
//! for one resizable, draggable container. It is host-agnostic: the element
//! tree is reached through [`HostDocument`], and every side effect (cursor,
//! `preventDefault`, notifications) is handed back in a [`Dispatch`].
//!
//! # Usage
//! ```rust,ignore
//! let mut controller = ResizeController::new(ResizableConfig::from_json_str(json)?);
//! let mounted = controller.mount(&doc, host);
//! let down = controller.pointer_down(&doc, &PointerInput::mouse(Some(handle), 10.0, 10.0));
//! let moved = controller.pointer_move(&doc, &PointerInput::mouse(None, 60.0, 10.0));
//! let up = controller.pointer_up();
//! apply_style(host, &controller.style().to_string());
//! ```

pub mod classify;
pub mod config;
pub mod constrain;
pub mod controller;
pub mod dispatch;
pub mod host;
mod maximize;
mod motion;
pub mod state;
pub mod style;
mod sync;

pub use classify::HotspotScan;
pub use config::{ConfigError, ResizableConfig};
pub use constrain::{AxisLimits, Clip, resolve_far_edge, resolve_near_edge};
pub use controller::ResizeController;
pub use dispatch::{
    CursorCommand, Dispatch, DispatchLog, DispatchOutcome, IgnoredReason, LifecyclePhase,
};
pub use host::HostDocument;
pub use state::{GeometryState, InteractionMode, SavedBox};
pub use style::{StyleProjection, StyleProperty};
