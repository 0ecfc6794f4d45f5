//! JSON report format
//!
//! Serializes the full scan report (diagnostics plus summary) as pretty
//! JSON, suitable for consumption by other tooling.

use super::registry::{FormatError, Formatter};
use crate::nestcheck::matching::ScanReport;

/// Machine-readable JSON formatter
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Machine-readable JSON report"
    }

    fn serialize(&self, report: &ScanReport) -> Result<String, FormatError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nestcheck::matching::scan;

    #[test]
    fn test_json_shape() {
        let report = scan("/* a */").expect("scan");
        let output = JsonFormatter.serialize(&report).expect("json format");

        let value: serde_json::Value =
            serde_json::from_str(&output).expect("formatter emits valid JSON");
        assert_eq!(value["summary"]["valid"], 1);
        assert_eq!(value["summary"]["errors"], 0);
        assert_eq!(value["diagnostics"].as_array().map(|d| d.len()), Some(2));
    }

    #[test]
    fn test_json_diagnostic_fields() {
        let report = scan("*/").expect("scan");
        let output = JsonFormatter.serialize(&report).expect("json format");

        let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        let diagnostic = &value["diagnostics"][0]["UnexpectedClose"];
        assert_eq!(diagnostic["token"], "*/");
        assert_eq!(diagnostic["line"], 1);
    }
}
