#![forbid(unsafe_code)]

//! Style projection: the box as CSS declarations.
//!
//! Recomputed from [`GeometryState`] on every read. Axes disabled in the
//! axis mask and fields that are still unset are omitted, so the host's own
//! stylesheet keeps control of them.

use std::fmt;

use resizer_core::{AxisMask, Length};
use serde::{Deserialize, Serialize};

use crate::state::GeometryState;

/// A projected CSS property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleProperty {
    Width,
    Height,
    Left,
    Top,
}

impl StyleProperty {
    /// Projection order.
    pub const ALL: [Self; 4] = [Self::Width, Self::Height, Self::Left, Self::Top];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Left => "left",
            Self::Top => "top",
        }
    }

    /// Axis-mask bit gating this property.
    #[must_use]
    pub const fn axis(self) -> AxisMask {
        match self {
            Self::Width => AxisMask::WIDTH,
            Self::Height => AxisMask::HEIGHT,
            Self::Left => AxisMask::LEFT,
            Self::Top => AxisMask::TOP,
        }
    }
}

/// Ordered property → CSS length mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProjection {
    entries: Vec<(StyleProperty, String)>,
}

impl StyleProjection {
    /// Project the enabled, set fields of `state`.
    #[must_use]
    pub fn project(state: &GeometryState) -> Self {
        let mask = state.axis_mask();
        let entries = StyleProperty::ALL
            .into_iter()
            .filter(|property| mask.contains(property.axis()))
            .filter_map(|property| {
                let value: Option<&Length> = match property {
                    StyleProperty::Width => state.width(),
                    StyleProperty::Height => state.height(),
                    StyleProperty::Left => Some(state.left()),
                    StyleProperty::Top => Some(state.top()),
                };
                value.map(|length| (property, length.to_css()))
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.entries
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Inline style text, e.g. `width: 200px; left: 10px`.
impl fmt::Display for StyleProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {value}", property.as_str())?;
        }
        Ok(())
    }
}
