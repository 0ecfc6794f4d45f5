//! Fluent assertion API for scan reports
//!
//! Tests should verify reports through these builders instead of poking at
//! diagnostic vectors by hand; the failure messages carry the full report
//! context.

use crate::nestcheck::matching::{Diagnostic, ScanReport, Verdict};

/// Create an assertion builder for a scan report
pub fn assert_report(report: &ScanReport) -> ReportAssertion<'_> {
    ReportAssertion { report }
}

pub struct ReportAssertion<'a> {
    report: &'a ScanReport,
}

impl<'a> ReportAssertion<'a> {
    /// Assert the number of valid blocks
    pub fn valid(self, expected: usize) -> Self {
        assert_eq!(
            self.report.summary.valid, expected,
            "Expected {} valid blocks, found {} in {:?}",
            expected, self.report.summary.valid, self.report.diagnostics
        );
        self
    }

    /// Assert the number of errors
    pub fn errors(self, expected: usize) -> Self {
        assert_eq!(
            self.report.summary.errors, expected,
            "Expected {} errors, found {} in {:?}",
            expected, self.report.summary.errors, self.report.diagnostics
        );
        self
    }

    /// Assert the overall verdict
    pub fn verdict(self, expected: Verdict) -> Self {
        assert_eq!(
            self.report.summary.verdict(),
            expected,
            "Expected verdict {:?} for summary {:?}",
            expected,
            self.report.summary
        );
        self
    }

    /// Assert the total number of diagnostics
    pub fn diagnostic_count(self, expected: usize) -> Self {
        assert_eq!(
            self.report.diagnostics.len(),
            expected,
            "Expected {} diagnostics, found: {:?}",
            expected,
            self.report.diagnostics
        );
        self
    }

    /// Assert the diagnostic at a specific index
    pub fn diagnostic(self, index: usize, expected: Diagnostic) -> Self {
        assert!(
            index < self.report.diagnostics.len(),
            "Diagnostic index {} out of bounds (report has {} diagnostics)",
            index,
            self.report.diagnostics.len()
        );
        assert_eq!(
            self.report.diagnostics[index], expected,
            "Diagnostic mismatch at index {} in {:?}",
            index, self.report.diagnostics
        );
        self
    }
}
