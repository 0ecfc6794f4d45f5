//! Human-readable console format
//!
//! Renders a scan report as the classic console listing: one line per
//! diagnostic followed by a framed summary block with the overall verdict.

use super::registry::{FormatError, Formatter};
use crate::nestcheck::matching::{ScanReport, Verdict};

const RULER: &str = "========================================";

/// The default console formatter
pub struct SimpleFormatter;

impl SimpleFormatter {
    fn verdict_line(report: &ScanReport) -> String {
        match report.summary.verdict() {
            Verdict::AllNested => "All comment blocks are properly nested!".to_string(),
            Verdict::Failed => format!(
                "Validation failed with {} error(s)",
                report.summary.errors
            ),
            Verdict::NoBlocks => "No comment blocks found".to_string(),
        }
    }
}

impl Formatter for SimpleFormatter {
    fn name(&self) -> &str {
        "simple"
    }

    fn description(&self) -> &str {
        "Human-readable console report"
    }

    fn serialize(&self, report: &ScanReport) -> Result<String, FormatError> {
        let mut out = String::new();

        out.push_str(RULER);
        out.push_str("\n     VALIDATION RESULTS\n");
        out.push_str(RULER);
        out.push_str("\n\n");

        for diagnostic in &report.diagnostics {
            out.push_str(&format!("{}\n", diagnostic));
        }
        if !report.diagnostics.is_empty() {
            out.push('\n');
        }

        out.push_str(RULER);
        out.push_str("\n          SUMMARY\n");
        out.push_str(RULER);
        out.push('\n');
        out.push_str(&format!("Valid comment blocks: {}\n", report.summary.valid));
        out.push_str(&format!("Errors found: {}\n\n", report.summary.errors));
        out.push_str(&format!("{}\n", Self::verdict_line(report)));
        out.push_str(RULER);
        out.push('\n');

        Ok(out)
    }
}
