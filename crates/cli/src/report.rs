use std::io::Write;

use anstyle::{AnsiColor, Style};

use crate::{Error, Result};

/// JavaScript ticks measured for one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileReport {
    pub name: String,
    pub ticks: u64,
}

/// Writes progress and results, one line at a time.
pub struct Reporter<W> {
    out: W,
    style: Style,
}

impl<W: Write> Reporter<W> {
    /// `color` enables the bold green status column.
    pub fn new(out: W, color: bool) -> Self {
        let style = if color {
            Style::new().bold().fg_color(Some(AnsiColor::Green.into()))
        } else {
            Style::new()
        };
        Self { out, style }
    }

    /// Writes `status` right-aligned in a fixed column, followed by `msg`.
    pub fn status(&mut self, status: &str, msg: &str) -> Result<()> {
        let style = self.style;
        writeln!(self.out, "{style}{status:>12}{style:#} {msg}").map_err(Error::Report)?;
        self.out.flush().map_err(Error::Report)
    }

    pub fn ticks(&mut self, report: &ProfileReport) -> Result<()> {
        writeln!(self.out, "{}: {} ticks", report.name, report.ticks).map_err(Error::Report)?;
        self.out.flush().map_err(Error::Report)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_output() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.status("Running", "script with reference v8").unwrap();
        reporter.ticks(&ProfileReport { name: "reference".to_string(), ticks: 7000 }).unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(out, "     Running script with reference v8\nreference: 7000 ticks\n");
    }

    #[test]
    fn test_colored_status() {
        let mut reporter = Reporter::new(Vec::new(), true);
        reporter.status("Parsing", "log for development v8").unwrap();

        let out = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(out.starts_with("\u{1b}["));
        assert!(out.contains("Parsing"));
        assert!(out.ends_with(" log for development v8\n"));
    }
}
