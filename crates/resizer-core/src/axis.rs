#![forbid(unsafe_code)]

//! Axis mask: which box fields the engine mutates and exposes.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{ParseTokenError, TokenKind};

bitflags! {
    /// Box fields that are solved for and reflected into the style projection.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AxisMask: u8 {
        const LEFT   = 0b0001;
        const TOP    = 0b0010;
        const WIDTH  = 0b0100;
        const HEIGHT = 0b1000;
    }
}

impl Default for AxisMask {
    fn default() -> Self {
        Self::all()
    }
}

impl AxisMask {
    /// Every axis except the disabled ones.
    #[must_use]
    pub fn enabled_except(disabled: &[DisabledAttribute]) -> Self {
        disabled
            .iter()
            .fold(Self::all(), |mask, attr| mask.difference(attr.mask()))
    }
}

/// Host-facing name of an axis that can be excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisabledAttribute {
    L,
    T,
    W,
    H,
}

impl DisabledAttribute {
    pub const ALL: [Self; 4] = [Self::L, Self::T, Self::W, Self::H];

    #[must_use]
    pub const fn mask(self) -> AxisMask {
        match self {
            Self::L => AxisMask::LEFT,
            Self::T => AxisMask::TOP,
            Self::W => AxisMask::WIDTH,
            Self::H => AxisMask::HEIGHT,
        }
    }

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::L => "l",
            Self::T => "t",
            Self::W => "w",
            Self::H => "h",
        }
    }
}

impl fmt::Display for DisabledAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for DisabledAttribute {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.token() == s)
            .ok_or_else(|| ParseTokenError::new(TokenKind::Attribute, s))
    }
}
