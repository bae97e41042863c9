//! Eisenhower matrix quadrants.

use super::ParseQuadrantError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency/importance category a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    /// Urgent and important.
    DoFirst,
    /// Important, not urgent.
    DoLater,
    /// Urgent, not important.
    Delegate,
    /// Neither urgent nor important.
    Eliminate,
}

impl Quadrant {
    /// All quadrants in rendering order.
    pub const ALL: [Self; 4] = [Self::DoFirst, Self::DoLater, Self::Delegate, Self::Eliminate];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DoFirst => "do-first",
            Self::DoLater => "do-later",
            Self::Delegate => "delegate",
            Self::Eliminate => "eliminate",
        }
    }

    /// Returns the upper-case label used in headings and move notices.
    ///
    /// The hyphen of the storage form becomes a space.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::DoFirst => "DO FIRST",
            Self::DoLater => "DO LATER",
            Self::Delegate => "DELEGATE",
            Self::Eliminate => "ELIMINATE",
        }
    }

    /// Returns the title-case label used by statistics cards.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DoFirst => "Do First",
            Self::DoLater => "Do Later",
            Self::Delegate => "Delegate",
            Self::Eliminate => "Eliminate",
        }
    }
}

impl TryFrom<&str> for Quadrant {
    type Error = ParseQuadrantError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "do-first" => Ok(Self::DoFirst),
            "do-later" => Ok(Self::DoLater),
            "delegate" => Ok(Self::Delegate),
            "eliminate" => Ok(Self::Eliminate),
            _ => Err(ParseQuadrantError(value.to_owned())),
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
