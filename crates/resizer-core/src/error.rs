#![forbid(unsafe_code)]

//! Token parse errors for host-supplied handle and attribute identifiers.

use std::fmt;

/// Vocabulary a token was parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `r`, `rb`, `b`, `lb`, `l`, `lt`, `t`, `rt`.
    Handle,
    /// `l`, `t`, `w`, `h`.
    Attribute,
}

impl TokenKind {
    const fn expected(self) -> &'static str {
        match self {
            Self::Handle => "r, rb, b, lb, l, lt, t, rt",
            Self::Attribute => "l, t, w, h",
        }
    }

    const fn noun(self) -> &'static str {
        match self {
            Self::Handle => "resize handle",
            Self::Attribute => "disable attribute",
        }
    }
}

/// A token outside its fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    kind: TokenKind,
    token: String,
}

impl ParseTokenError {
    pub(crate) fn new(kind: TokenKind, token: &str) -> Self {
        Self {
            kind,
            token: token.to_owned(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} `{}` (expected one of {})",
            self.kind.noun(),
            self.token,
            self.kind.expected()
        )
    }
}

impl std::error::Error for ParseTokenError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_vocabulary() {
        let err = ParseTokenError::new(TokenKind::Handle, "zz");
        assert_eq!(
            err.to_string(),
            "unknown resize handle `zz` (expected one of r, rb, b, lb, l, lt, t, rt)"
        );
    }
}
