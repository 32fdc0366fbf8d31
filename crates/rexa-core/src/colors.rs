//! ANSI color codes for terminal output.
//!
//! - Blue: state labels
//! - Green: edge symbols
//! - Bold: accepting states
//! - Dim: arrows, metadata

/// ANSI color palette for listings, traces and diagnostics.
///
/// Uses only standard 16-color ANSI codes so it reads on light and dark
/// themes alike.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub state: &'static str,
    pub symbol: &'static str,
    pub accept: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        state: "\x1b[34m",
        symbol: "\x1b[32m",
        accept: "\x1b[1;34m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        state: "",
        symbol: "",
        accept: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
