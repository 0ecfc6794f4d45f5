//! File processing API
//!
//! This module provides the glue between the matching core and the outside
//! world: reading a named file or an in-memory string, running the scan, and
//! rendering the report through a registered format.
//!
//! # Sample Sources
//!
//! The [`samples`] module provides the validator's canonical demo inputs.
//! Tests that need known-shape inputs should use these instead of copying
//! content around.

use crate::nestcheck::formats::{default_registry, FormatError};
use crate::nestcheck::matching::{scan, ScanError, ScanReport};
use std::fmt;
use std::fs;
use std::path::Path;

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    IoError(String),
    UnknownFormat(String),
    Scan(ScanError),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::UnknownFormat(name) => write!(f, "Unknown format: {}", name),
            ProcessingError::Scan(e) => write!(f, "Scan aborted: {}", e),
        }
    }
}

/// Scan a source string without rendering
pub fn scan_source(source: &str) -> Result<ScanReport, ProcessingError> {
    scan(source).map_err(ProcessingError::Scan)
}

/// Scan a source string and render the report in the given format
pub fn process_source(source: &str, format: &str) -> Result<String, ProcessingError> {
    let report = scan_source(source)?;
    render(&report, format)
}

/// Scan the contents of a file and render the report in the given format
pub fn process_file<P: AsRef<Path>>(file_path: P, format: &str) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();

    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, format)
}

/// Get all available format names
pub fn available_formats() -> Vec<String> {
    default_registry().list_formats()
}

fn render(report: &ScanReport, format: &str) -> Result<String, ProcessingError> {
    default_registry()
        .serialize(report, format)
        .map_err(|e| match e {
            FormatError::FormatNotFound(name) => ProcessingError::UnknownFormat(name),
            FormatError::SerializationError(msg) => ProcessingError::IoError(msg),
        })
}

/// Canonical sample inputs for demos and tests
pub mod samples {
    /// Properly nested same-family blocks
    pub const VALID_NESTED: &str = "/* Outer comment\n   /* Inner comment */\n   Still outer\n*/";
    /// An opener that never gets closed
    pub const UNCLOSED: &str = "/* This comment is not closed\nint main() {\n";
    /// A C-style opener closed by an HTML closer
    pub const MISMATCHED: &str = "/* C-style start --> HTML close";
    /// Three independent valid blocks across both families
    pub const MULTIPLE_VALID: &str = "/* First */\n<!-- Second -->\n/* Third */";

    /// All samples as (name, source) pairs, in demo order
    pub fn all() -> Vec<(&'static str, &'static str)> {
        vec![
            ("valid-nested", VALID_NESTED),
            ("unclosed", UNCLOSED),
            ("mismatched", MISMATCHED),
            ("multiple-valid", MULTIPLE_VALID),
        ]
    }

    /// Look up a sample by name
    pub fn get(name: &str) -> Option<&'static str> {
        all().iter()
            .find(|(sample_name, _)| *sample_name == name)
            .map(|(_, source)| *source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nestcheck::matching::Verdict;

    #[test]
    fn test_process_source_simple() {
        let output = process_source("/* a */", "simple").expect("processing");
        assert!(output.contains("All comment blocks are properly nested!"));
    }

    #[test]
    fn test_process_source_json() {
        let output = process_source("/* a */", "json").expect("processing");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(value["summary"]["valid"], 1);
    }

    #[test]
    fn test_unknown_format() {
        assert_eq!(
            process_source("", "xml"),
            Err(ProcessingError::UnknownFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_missing_file() {
        let result = process_file("definitely/not/a/real/file.txt", "simple");
        assert!(matches!(result, Err(ProcessingError::FileNotFound(_))));
    }

    #[test]
    fn test_available_formats() {
        assert_eq!(available_formats(), vec!["json", "simple"]);
    }

    #[test]
    fn test_sample_verdicts() {
        let expected = [
            ("valid-nested", Verdict::AllNested),
            ("unclosed", Verdict::Failed),
            ("mismatched", Verdict::Failed),
            ("multiple-valid", Verdict::AllNested),
        ];
        for (name, verdict) in expected {
            let source = samples::get(name).expect("sample exists");
            let report = scan_source(source).expect("samples scan cleanly");
            assert_eq!(report.summary.verdict(), verdict, "sample {}", name);
        }
    }

    #[test]
    fn test_sample_lookup_miss() {
        assert_eq!(samples::get("nonexistent"), None);
    }
}
