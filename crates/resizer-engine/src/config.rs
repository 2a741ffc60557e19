#![forbid(unsafe_code)]

//! Container configuration.
//!
//! [`ResizableConfig`] is what the host wrapper passes in: initial box,
//! bounds, enabled handles and feature switches. It can be built in code or
//! loaded from JSON/TOML:
//!
//! ```toml
//! width = 320
//! height = "40vh"
//! minWidth = 120
//! maxWidth = 640
//! fitParent = true
//! dragSelector = ".title-bar"
//! active = ["r", "rb", "b"]
//! disableAttributes = ["t"]
//! ```
//!
//! Validation is advisory. [`ResizableConfig::validate`] reports suspicious
//! combinations (crossed bounds, negative minimums) which the controller logs
//! at mount; the engine still runs with the values as given.

use std::collections::BTreeSet;
use std::path::Path;

use resizer_core::{AxisMask, DisabledAttribute, Handle, Length, SizeBounds};
use serde::{Deserialize, Serialize};

/// Host-supplied container options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizableConfig {
    /// Initial width; `None` fills the parent on mount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Length>,
    /// Initial height; `None` fills the parent on mount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Length>,
    pub min_width: f64,
    pub min_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    pub left: Length,
    pub top: Length,
    /// Handles rendered while not maximized.
    pub active: Vec<Handle>,
    /// Keep the box inside the parent's content box while resizing.
    pub fit_parent: bool,
    /// Selector (relative to the container) of the drag initiators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag_selector: Option<String>,
    pub maximize: bool,
    /// Axes hidden from the style projection and frozen in the solver.
    pub disable_attributes: Vec<DisabledAttribute>,
}

impl Default for ResizableConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            min_width: 0.0,
            min_height: 0.0,
            max_width: None,
            max_height: None,
            left: Length::ZERO,
            top: Length::ZERO,
            active: Handle::ALL.to_vec(),
            fit_parent: false,
            drag_selector: None,
            maximize: false,
            disable_attributes: Vec::new(),
        }
    }
}

impl ResizableConfig {
    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Size bounds as used by the solver.
    #[must_use]
    pub const fn bounds(&self) -> SizeBounds {
        SizeBounds {
            min_width: self.min_width,
            min_height: self.min_height,
            max_width: self.max_width,
            max_height: self.max_height,
        }
    }

    /// Axes left enabled by `disable_attributes`.
    #[must_use]
    pub fn axis_mask(&self) -> AxisMask {
        AxisMask::enabled_except(&self.disable_attributes)
    }

    /// The drag selector, treating an empty string as unset.
    #[must_use]
    pub fn drag_selector(&self) -> Option<&str> {
        self.drag_selector
            .as_deref()
            .map(str::trim)
            .filter(|selector| !selector.is_empty())
    }

    /// Advisory checks. An empty list means nothing looks off.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, value) in [("minWidth", self.min_width), ("minHeight", self.min_height)] {
            if !value.is_finite() {
                errors.push(format!("{name} must be finite, got {value}"));
            } else if value < 0.0 {
                errors.push(format!("{name} must be >= 0, got {value}"));
            }
        }

        for (name, min, max) in [
            ("width", self.min_width, self.max_width),
            ("height", self.min_height, self.max_height),
        ] {
            if let Some(max) = max {
                if !max.is_finite() {
                    errors.push(format!("max {name} must be finite, got {max}"));
                } else if max < min {
                    errors.push(format!(
                        "max {name} ({max}) is below min {name} ({min}); max wins"
                    ));
                }
            }
        }

        for (name, length) in [
            ("width", self.width.as_ref()),
            ("height", self.height.as_ref()),
            ("left", Some(&self.left)),
            ("top", Some(&self.top)),
        ] {
            if let Some(px) = length.and_then(Length::as_px)
                && !px.is_finite()
            {
                errors.push(format!("{name} must be finite, got {px}"));
            }
        }

        let mut seen = BTreeSet::new();
        for handle in &self.active {
            if !seen.insert(*handle) {
                errors.push(format!("handle `{handle}` listed more than once"));
            }
        }

        if self.drag_selector.is_some() && self.drag_selector().is_none() {
            errors.push("dragSelector is empty".into());
        }

        errors
    }

    /// Reject the config if [`validate`](Self::validate) reports anything.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
