#![forbid(unsafe_code)]

//! Dispatch records returned by every controller operation.
//!
//! The controller never reaches into global state. Side effects the host must
//! perform (set the document cursor, call `preventDefault`, forward
//! notifications to listeners) are returned in a [`Dispatch`], together with
//! a [`DispatchLog`] describing what happened. Operations that do nothing
//! report a typed [`IgnoredReason`] instead of failing.

use resizer_core::{CursorHint, Hotspot, Notification, NotificationKind};
use serde::{Deserialize, Serialize};

use crate::state::InteractionMode;

/// Host command for the document-wide cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "cursor", rename_all = "snake_case")]
pub enum CursorCommand {
    Set(CursorHint),
    Clear,
}

/// Controller operation recorded for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    Mount,
    Unmount,
    PointerDown,
    PointerMove,
    PointerUp,
    Maximize,
    SyncDimensions,
    ConfigUpdate,
}

/// Deterministic reason why an operation was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    NotMounted,
    AlreadyMounted,
    /// The host has no containing element.
    Detached,
    TargetMissing,
    TargetOutsideHost,
    /// The target belongs to a container nested inside this one.
    NestedContainer,
    NoHotspot,
    /// Touch event without touches.
    NoPointerPosition,
    NoActiveGesture,
    AlreadyMaximized,
    NotMaximized,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Applied,
    Ignored(IgnoredReason),
}

/// Structured log record for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchLog {
    pub phase: LifecyclePhase,
    pub outcome: DispatchOutcome,
    pub mode_before: InteractionMode,
    pub mode_after: InteractionMode,
    /// Hotspot matched by a pointer-down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<Hotspot>,
}

/// Result of one controller operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispatch<N> {
    /// Notifications to deliver, in order.
    pub notifications: Vec<Notification<N>>,
    pub cursor: Option<CursorCommand>,
    /// The host should suppress the event's default action.
    pub prevent_default: bool,
    pub log: DispatchLog,
}

impl<N> Dispatch<N> {
    pub(crate) const fn applied(phase: LifecyclePhase, mode_before: InteractionMode) -> Self {
        Self {
            notifications: Vec::new(),
            cursor: None,
            prevent_default: false,
            log: DispatchLog {
                phase,
                outcome: DispatchOutcome::Applied,
                mode_before,
                mode_after: mode_before,
                hotspot: None,
            },
        }
    }

    pub(crate) const fn ignored(
        phase: LifecyclePhase,
        reason: IgnoredReason,
        mode: InteractionMode,
    ) -> Self {
        Self {
            notifications: Vec::new(),
            cursor: None,
            prevent_default: false,
            log: DispatchLog {
                phase,
                outcome: DispatchOutcome::Ignored(reason),
                mode_before: mode,
                mode_after: mode,
                hotspot: None,
            },
        }
    }

    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self.log.outcome, DispatchOutcome::Ignored(_))
    }

    /// Why the operation was a no-op, if it was.
    #[must_use]
    pub const fn ignored_reason(&self) -> Option<IgnoredReason> {
        match self.log.outcome {
            DispatchOutcome::Ignored(reason) => Some(reason),
            DispatchOutcome::Applied => None,
        }
    }

    /// Names of the emitted notifications, in order.
    #[must_use]
    pub fn notification_kinds(&self) -> Vec<NotificationKind> {
        self.notifications.iter().map(|note| note.kind).collect()
    }

    /// Last notification of the given kind.
    #[must_use]
    pub fn find(&self, kind: NotificationKind) -> Option<&Notification<N>> {
        self.notifications.iter().rev().find(|note| note.kind == kind)
    }
}
