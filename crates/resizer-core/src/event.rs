#![forbid(unsafe_code)]

//! Pointer input as delivered by the host.
//!
//! The engine is generic over the host's node handle `N`; a DOM binding
//! would use its element handle, the test harness uses an arena index.

use crate::geometry::Point;

/// Where the coordinates of a pointer event come from.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSource {
    /// Mouse (or pen) with direct client coordinates.
    Mouse { position: Point },
    /// Touch event; only the first touch point is used.
    Touch { touches: Vec<Point> },
}

/// One pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerInput<N> {
    /// Element the event was dispatched to; `None` for synthetic moves.
    pub target: Option<N>,
    pub source: PointerSource,
}

impl<N> PointerInput<N> {
    /// Mouse event at client coordinates.
    #[must_use]
    pub const fn mouse(target: Option<N>, x: f64, y: f64) -> Self {
        Self {
            target,
            source: PointerSource::Mouse {
                position: Point::new(x, y),
            },
        }
    }

    /// Touch event with the given touch list.
    #[must_use]
    pub fn touch(target: Option<N>, touches: impl IntoIterator<Item = Point>) -> Self {
        Self {
            target,
            source: PointerSource::Touch {
                touches: touches.into_iter().collect(),
            },
        }
    }

    /// Pointer coordinates, or `None` for a touch event with no touches.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match &self.source {
            PointerSource::Mouse { position } => Some(*position),
            PointerSource::Touch { touches } => touches.first().copied(),
        }
    }

    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(self.source, PointerSource::Touch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_position_is_direct() {
        let event = PointerInput::mouse(Some(3_u32), 40.0, 60.0);
        assert_eq!(event.position(), Some(Point::new(40.0, 60.0)));
        assert!(!event.is_touch());
    }

    #[test]
    fn touch_uses_first_entry() {
        let event = PointerInput::<u32>::touch(
            None,
            [Point::new(75.0, 95.0), Point::new(1.0, 1.0)],
        );
        assert_eq!(event.position(), Some(Point::new(75.0, 95.0)));
        assert!(event.is_touch());
    }

    #[test]
    fn empty_touch_list_has_no_position() {
        let event = PointerInput::<u32>::touch(Some(1), []);
        assert_eq!(event.position(), None);
    }
}
