//! Text rendering of address ranges.

use crate::models::Interval;
use itertools::Itertools;

/// How a range is written out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `min - max` on one line.
    #[default]
    Pair,
    /// `min` and `max` on separate lines.
    Boundaries,
}

impl OutputMode {
    /// Map the `--newline` flag to a mode.
    pub fn from_newline(newline: bool) -> OutputMode {
        if newline {
            OutputMode::Boundaries
        } else {
            OutputMode::Pair
        }
    }
}

/// Render one interval.
pub fn format(interval: &Interval, mode: OutputMode) -> String {
    match mode {
        OutputMode::Pair => interval.to_string(),
        OutputMode::Boundaries => format!("{}\n{}", interval.min, interval.max),
    }
}

/// Render every interval, one per line, without a trailing newline.
pub fn format_all(intervals: &[Interval], mode: OutputMode) -> String {
    intervals.iter().map(|i| format(i, mode)).join("\n")
}
