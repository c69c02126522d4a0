//! Side-channel error reporting for the callback environment.
//!
//! Post-construction failures never unwind toward the native caller; they
//! land here as records the embedding application inspects or drains
//! between emissions.

use std::collections::VecDeque;
use std::fmt;

/// The severity class of a recorded report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// A failure the marshal engine detected and aborted on. There is no
    /// handler to catch it; it exists only as this record.
    Uncatchable,
    /// A callback raised instead of returning a value.
    Raised,
}

/// A single recorded failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// The severity class.
    pub kind: ReportKind,
    /// Human-readable description.
    pub message: String,
}

/// A collection of failure reports from the callback environment.
///
/// Reports accumulate in emission order. The sink never drops records on
/// its own; clearing is the embedder's decision.
#[derive(Debug, Default)]
pub struct ErrorSink {
    reports: VecDeque<ErrorReport>,
    has_uncatchable: bool,
}

impl ErrorSink {
    /// Create a new, empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report.
    pub fn record(&mut self, kind: ReportKind, message: impl Into<String>) {
        if kind == ReportKind::Uncatchable {
            self.has_uncatchable = true;
        }
        self.reports.push_back(ErrorReport {
            kind,
            message: message.into(),
        });
    }

    /// Returns `true` if any uncatchable report has been recorded.
    pub fn has_uncatchable(&self) -> bool {
        self.has_uncatchable
    }

    /// Returns `true` if the sink holds no reports.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Total number of reports.
    pub fn count(&self) -> usize {
        self.reports.len()
    }

    /// Iterate over all reports in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &ErrorReport> {
        self.reports.iter()
    }

    /// Iterate over only the uncatchable reports.
    pub fn uncatchable(&self) -> impl Iterator<Item = &ErrorReport> {
        self.reports
            .iter()
            .filter(|r| r.kind == ReportKind::Uncatchable)
    }

    /// Iterate over only the raised reports.
    pub fn raised(&self) -> impl Iterator<Item = &ErrorReport> {
        self.reports.iter().filter(|r| r.kind == ReportKind::Raised)
    }

    /// Remove all reports.
    pub fn clear(&mut self) {
        self.reports.clear();
        self.has_uncatchable = false;
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_str = match self.kind {
            ReportKind::Uncatchable => "uncatchable",
            ReportKind::Raised => "raised",
        };
        write!(f, "{}: {}", kind_str, self.message)
    }
}

impl fmt::Display for ErrorSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            writeln!(f, "{}", report)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_accumulate_in_order() {
        let mut sink = ErrorSink::new();
        assert!(sink.is_empty());

        sink.record(ReportKind::Raised, "first");
        sink.record(ReportKind::Uncatchable, "second");

        assert_eq!(sink.count(), 2);
        let messages: Vec<_> = sink.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn uncatchable_flag_tracks_kind() {
        let mut sink = ErrorSink::new();
        sink.record(ReportKind::Raised, "handler raised");
        assert!(!sink.has_uncatchable());

        sink.record(ReportKind::Uncatchable, "conversion failed");
        assert!(sink.has_uncatchable());

        sink.clear();
        assert!(!sink.has_uncatchable());
        assert!(sink.is_empty());
    }

    #[test]
    fn kind_filters() {
        let mut sink = ErrorSink::new();
        sink.record(ReportKind::Raised, "a");
        sink.record(ReportKind::Uncatchable, "b");
        sink.record(ReportKind::Raised, "c");

        assert_eq!(sink.raised().count(), 2);
        assert_eq!(sink.uncatchable().count(), 1);
    }

    #[test]
    fn report_display_format() {
        let report = ErrorReport {
            kind: ReportKind::Uncatchable,
            message: "type mismatch".to_string(),
        };
        assert_eq!(report.to_string(), "uncatchable: type mismatch");
    }
}
