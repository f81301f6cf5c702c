use std::fmt;

use super::error::TimestampError;

/// A position inside a recording, in whole seconds.
///
/// Parsed from and displayed as `MM:SS`. The seconds component is not capped
/// at 59, so `"01:75"` is 135 seconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Timestamp(u32);

impl Timestamp {
    pub fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    pub fn as_secs(self) -> u32 {
        self.0
    }

    /// Parse an `MM:SS` string. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, TimestampError> {
        let malformed = || TimestampError::Malformed(raw.to_string());

        let mut parts = raw.trim().split(':');
        let (Some(mm), Some(ss), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let minutes = parse_component(mm).ok_or_else(malformed)?;
        let seconds = parse_component(ss).ok_or_else(malformed)?;

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(Self::from_secs)
            .ok_or_else(|| TimestampError::OutOfRange(raw.to_string()))
    }
}

// Digits only: no sign, no fraction, no inner whitespace.
fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Format a second count as `MM:SS`.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
