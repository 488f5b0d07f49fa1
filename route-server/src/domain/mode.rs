//! Transport mode.

use std::fmt;

/// The transport mode of a leg.
///
/// Upstream providers report modes as free-form strings; anything that
/// is not a recognized mode is bucketed as `Other` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Train,
    Bus,
    Flight,
    Other,
}

impl Mode {
    /// Parse a mode string, case-insensitively. Never fails: unknown
    /// modes map to [`Mode::Other`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "train" => Mode::Train,
            "bus" => Mode::Bus,
            "flight" => Mode::Flight,
            _ => Mode::Other,
        }
    }

    /// Returns the canonical lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Train => "train",
            Mode::Bus => "bus",
            Mode::Flight => "flight",
            Mode::Other => "other",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
