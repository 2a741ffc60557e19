#![forbid(unsafe_code)]

//! Lifecycle and gesture notifications emitted to the host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::GeometrySnapshot;

/// Notification name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    #[serde(rename = "mount")]
    Mount,
    #[serde(rename = "destroy")]
    Destroy,
    #[serde(rename = "resize:start")]
    ResizeStart,
    #[serde(rename = "resize:move")]
    ResizeMove,
    #[serde(rename = "resize:end")]
    ResizeEnd,
    #[serde(rename = "drag:start")]
    DragStart,
    #[serde(rename = "drag:move")]
    DragMove,
    #[serde(rename = "drag:end")]
    DragEnd,
    #[serde(rename = "maximize")]
    Maximize,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::Destroy => "destroy",
            Self::ResizeStart => "resize:start",
            Self::ResizeMove => "resize:move",
            Self::ResizeEnd => "resize:end",
            Self::DragStart => "drag:start",
            Self::DragMove => "drag:move",
            Self::DragEnd => "drag:end",
            Self::Maximize => "maximize",
        }
    }

    /// Whether this notification belongs to a resize or drag gesture.
    #[must_use]
    pub const fn is_gesture(self) -> bool {
        !matches!(self, Self::Mount | Self::Destroy | Self::Maximize)
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One notification: current box plus the host container it concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification<N> {
    #[serde(rename = "eventName")]
    pub kind: NotificationKind,
    #[serde(flatten)]
    pub geometry: GeometrySnapshot,
    #[serde(rename = "eventEl")]
    pub host: N,
    /// Only set on [`NotificationKind::Maximize`].
    #[serde(rename = "state", default, skip_serializing_if = "Option::is_none")]
    pub maximize_state: Option<bool>,
}

impl<N> Notification<N> {
    #[must_use]
    pub const fn new(kind: NotificationKind, geometry: GeometrySnapshot, host: N) -> Self {
        Self {
            kind,
            geometry,
            host,
            maximize_state: None,
        }
    }

    #[must_use]
    pub const fn maximize(state: bool, geometry: GeometrySnapshot, host: N) -> Self {
        Self {
            kind: NotificationKind::Maximize,
            geometry,
            host,
            maximize_state: Some(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Length;

    #[test]
    fn gesture_names_are_namespaced() {
        assert_eq!(NotificationKind::ResizeMove.as_str(), "resize:move");
        assert_eq!(NotificationKind::DragEnd.to_string(), "drag:end");
        assert!(NotificationKind::DragStart.is_gesture());
        assert!(!NotificationKind::Maximize.is_gesture());
    }

    #[test]
    fn payload_serializes_flat() {
        let geometry = GeometrySnapshot {
            left: Length::Px(10.0),
            top: Length::raw("5%"),
            width: Some(Length::Px(200.0)),
            height: None,
        };
        let note = Notification::new(NotificationKind::ResizeEnd, geometry.clone(), 7_u32);
        let value = serde_json::to_value(&note).expect("serializes");
        assert_eq!(value["eventName"], "resize:end");
        assert_eq!(value["left"], 10.0);
        assert_eq!(value["top"], "5%");
        assert_eq!(value["eventEl"], 7);
        assert!(value.get("state").is_none());

        let max = Notification::maximize(true, geometry, 7_u32);
        let value = serde_json::to_value(&max).expect("serializes");
        assert_eq!(value["state"], true);
    }
}
