#![forbid(unsafe_code)]

//! Resize handles, the drag region, and the edge masks they engage.
//!
//! Hosts stamp [`HANDLE_CLASS`] plus the per-handle class from
//! [`Handle::class_name`] on the handle markup they render, and put
//! [`CONTAINER_CLASS`] on the container itself. Pointer-down classification
//! walks from the event target towards the container looking for these
//! classes.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{ParseTokenError, TokenKind};

/// Class carried by every engine container.
pub const CONTAINER_CLASS: &str = "rsz-container";
/// Class shared by all handle elements.
pub const HANDLE_CLASS: &str = "rsz-handle";
/// Prefix of the per-handle class (`rsz-handle--rb`).
pub const HANDLE_CLASS_PREFIX: &str = "rsz-handle--";
/// Class marking drag-initiator elements.
pub const DRAG_CLASS: &str = "rsz-drag-el";

bitflags! {
    /// Directional components engaged by the active hotspot.
    ///
    /// Right/Bottom move the far edge; Left/Top move the near edge while the
    /// far edge stays put.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Edges: u8 {
        const RIGHT  = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const TOP    = 0b1000;
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::empty()
    }
}

/// One of the eight resize handles, in declared scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    R,
    Rb,
    B,
    Lb,
    L,
    Lt,
    T,
    Rt,
}

impl Handle {
    /// All handles in declared order.
    pub const ALL: [Self; 8] = [
        Self::R,
        Self::Rb,
        Self::B,
        Self::Lb,
        Self::L,
        Self::Lt,
        Self::T,
        Self::Rt,
    ];

    /// Short identifier (`"r"`, `"rb"`, ...).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::R => "r",
            Self::Rb => "rb",
            Self::B => "b",
            Self::Lb => "lb",
            Self::L => "l",
            Self::Lt => "lt",
            Self::T => "t",
            Self::Rt => "rt",
        }
    }

    /// Per-handle class name.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::R => "rsz-handle--r",
            Self::Rb => "rsz-handle--rb",
            Self::B => "rsz-handle--b",
            Self::Lb => "rsz-handle--lb",
            Self::L => "rsz-handle--l",
            Self::Lt => "rsz-handle--lt",
            Self::T => "rsz-handle--t",
            Self::Rt => "rsz-handle--rt",
        }
    }

    /// Edges engaged while this handle is held.
    #[must_use]
    pub const fn edges(self) -> Edges {
        match self {
            Self::R => Edges::RIGHT,
            Self::Rb => Edges::RIGHT.union(Edges::BOTTOM),
            Self::B => Edges::BOTTOM,
            Self::Lb => Edges::BOTTOM.union(Edges::LEFT),
            Self::L => Edges::LEFT,
            Self::Lt => Edges::LEFT.union(Edges::TOP),
            Self::T => Edges::TOP,
            Self::Rt => Edges::RIGHT.union(Edges::TOP),
        }
    }

    /// Cursor shown while this handle is held.
    #[must_use]
    pub const fn cursor(self) -> CursorHint {
        match self {
            Self::R => CursorHint::EResize,
            Self::Rb => CursorHint::SeResize,
            Self::B => CursorHint::SResize,
            Self::Lb => CursorHint::SwResize,
            Self::L => CursorHint::WResize,
            Self::Lt => CursorHint::NwResize,
            Self::T => CursorHint::NResize,
            Self::Rt => CursorHint::NeResize,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Handle {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|handle| handle.token() == s)
            .ok_or_else(|| ParseTokenError::new(TokenKind::Handle, s))
    }
}

/// Something a pointer-down can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "hotspot", content = "handle", rename_all = "snake_case")]
pub enum Hotspot {
    Handle(Handle),
    DragRegion,
}

impl Hotspot {
    /// Fixed classification order: the eight handles, then the drag region.
    pub const SCAN_ORDER: [Self; 9] = [
        Self::Handle(Handle::R),
        Self::Handle(Handle::Rb),
        Self::Handle(Handle::B),
        Self::Handle(Handle::Lb),
        Self::Handle(Handle::L),
        Self::Handle(Handle::Lt),
        Self::Handle(Handle::T),
        Self::Handle(Handle::Rt),
        Self::DragRegion,
    ];

    /// Edges engaged; the drag region moves the whole box.
    #[must_use]
    pub const fn edges(self) -> Edges {
        match self {
            Self::Handle(handle) => handle.edges(),
            Self::DragRegion => Edges::all(),
        }
    }

    #[must_use]
    pub const fn cursor(self) -> CursorHint {
        match self {
            Self::Handle(handle) => handle.cursor(),
            Self::DragRegion => CursorHint::Pointer,
        }
    }

    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Handle(handle) => handle.class_name(),
            Self::DragRegion => DRAG_CLASS,
        }
    }
}

/// Global cursor shown for the duration of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorHint {
    EResize,
    SeResize,
    SResize,
    SwResize,
    WResize,
    NwResize,
    NResize,
    NeResize,
    Pointer,
}

impl CursorHint {
    /// CSS `cursor` keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::EResize => "e-resize",
            Self::SeResize => "se-resize",
            Self::SResize => "s-resize",
            Self::SwResize => "sw-resize",
            Self::WResize => "w-resize",
            Self::NwResize => "nw-resize",
            Self::NResize => "n-resize",
            Self::NeResize => "ne-resize",
            Self::Pointer => "pointer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_handles_engage_two_edges() {
        assert_eq!(Handle::Rb.edges(), Edges::RIGHT | Edges::BOTTOM);
        assert_eq!(Handle::Lt.edges(), Edges::LEFT | Edges::TOP);
        assert_eq!(Handle::Rt.edges().bits(), 0b1001);
        assert_eq!(Handle::Lb.edges().bits(), 0b0110);
        for handle in [Handle::R, Handle::B, Handle::L, Handle::T] {
            assert_eq!(handle.edges().bits().count_ones(), 1, "{handle}");
        }
    }

    #[test]
    fn class_names_share_prefix() {
        for handle in Handle::ALL {
            let class = handle.class_name();
            assert!(class.starts_with(HANDLE_CLASS_PREFIX));
            assert_eq!(&class[HANDLE_CLASS_PREFIX.len()..], handle.token());
        }
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for handle in Handle::ALL {
            assert_eq!(handle.token().parse::<Handle>(), Ok(handle));
        }
        let err = "x".parse::<Handle>().expect_err("unknown token");
        assert_eq!(err.kind(), TokenKind::Handle);
        assert_eq!(err.token(), "x");
    }

    #[test]
    fn drag_region_is_scanned_last_and_moves_everything() {
        assert_eq!(Hotspot::SCAN_ORDER.last(), Some(&Hotspot::DragRegion));
        assert_eq!(Hotspot::DragRegion.edges(), Edges::all());
        assert_eq!(Hotspot::DragRegion.cursor().as_css(), "pointer");
        assert_eq!(Hotspot::DragRegion.class_name(), DRAG_CLASS);
    }

    #[test]
    fn handles_deserialize_from_tokens() {
        let handles: Vec<Handle> =
            serde_json::from_str(r#"["r","rb","lt"]"#).expect("tokens should parse");
        assert_eq!(handles, vec![Handle::R, Handle::Rb, Handle::Lt]);
        assert!(serde_json::from_str::<Handle>(r#""q""#).is_err());
    }

    #[test]
    fn cursor_keywords() {
        assert_eq!(Handle::R.cursor().as_css(), "e-resize");
        assert_eq!(Handle::Lt.cursor().as_css(), "nw-resize");
        assert_eq!(Handle::Rt.cursor().as_css(), "ne-resize");
    }
}
