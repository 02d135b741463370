//! Extraction of the JavaScript tick count from a tick processor report.
//!
//! The report contains a section like:
//!
//! ```text
//!  [Summary]:
//!    ticks  total  nonlib   name
//!    7000   35.0%   70.0%  JavaScript
//!     500    2.5%    5.0%  C++
//! ```
//!
//! The first field of the row whose fourth field is `JavaScript` is the result.

use clap::ValueEnum;

use crate::TickLogError;

pub const SUMMARY_MARKER: &str = "[Summary]:";
pub const JAVASCRIPT_ROW: &str = "JavaScript";

/// Offsets, relative to the marker line, of the rows read in [`SummaryScan::Fixed`] mode.
const FIXED_ROW_START: usize = 2;
const FIXED_ROW_END: usize = 6;

/// How the rows of the summary table are located.
#[derive(Clone, Copy, ValueEnum, Debug, Default, PartialEq, Eq)]
pub enum SummaryScan {
    /// Read the four lines that follow the line after the marker.
    #[default]
    Fixed,
    /// Read every line after the header until the first blank line.
    Section,
}

/// Returns the number of ticks attributed to JavaScript in `report`.
pub fn parse_javascript_ticks(report: &str, scan: SummaryScan) -> Result<u64, TickLogError> {
    let lines: Vec<&str> = report.lines().map(str::trim).collect();
    let start = lines
        .iter()
        .position(|line| *line == SUMMARY_MARKER)
        .ok_or(TickLogError::MissingSummary)?;

    let ticks = summary_rows(&lines[start..], scan)
        .iter()
        .map(|row| row.split_whitespace().collect::<Vec<_>>())
        .find(|fields| fields.get(3) == Some(&JAVASCRIPT_ROW))
        .map(|fields| fields[0])
        .ok_or(TickLogError::NoJavaScriptRow)?;

    ticks
        .parse()
        .map_err(|source| TickLogError::InvalidTickCount { value: ticks.to_string(), source })
}

/// `section` starts at the marker line.
fn summary_rows<'a, 'b>(section: &'b [&'a str], scan: SummaryScan) -> &'b [&'a str] {
    let start = FIXED_ROW_START.min(section.len());
    match scan {
        SummaryScan::Fixed => &section[start..FIXED_ROW_END.min(section.len())],
        SummaryScan::Section => {
            let rest = &section[start..];
            let end = rest.iter().position(|line| line.is_empty()).unwrap_or(rest.len());
            &rest[..end]
        }
    }
}
