//! Delimiter matching engine
//!
//! This module is the core of the crate: a single left-to-right pass over the
//! token stream, driven by a last-in-first-out stack of open delimiters. The
//! pass emits an ordered diagnostic stream and finishes with aggregate counts.
//!
//! Matching Policy
//!
//!     Opening tokens always push a marker. A closing token against an empty
//!     stack is an error and leaves the stack untouched. A closing token whose
//!     spelling disagrees with the innermost pending opener is an error and
//!     still pops: the mismatched close resolves the abandoned opener so the
//!     scan resynchronizes instead of cascading one mistake into many.
//!
//!     At end of input the stack is flushed top-down, so the innermost
//!     unclosed delimiter is reported before outer ones.
//!
//! Content errors never stop the scan. The only fatal condition is
//! pathological over-nesting beyond [`MAX_NESTING_DEPTH`], which aborts with
//! [`ScanError::DepthExceeded`] because the scan could not faithfully
//! complete; that is different from the content merely being invalid.

use crate::nestcheck::lexer::{tokenize, DelimiterKind};
use serde::Serialize;
use std::fmt;

/// Maximum number of simultaneously open delimiters before the scan aborts
pub const MAX_NESTING_DEPTH: usize = 1000;

/// One currently-open, unresolved delimiter occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMarker {
    pub kind: DelimiterKind,
    pub opened_at_line: usize,
}

/// One emitted observation about the scan
///
/// Diagnostics are pure output values in source order; rendering them is the
/// job of the [formats](crate::nestcheck::formats) layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    /// An opening delimiter was recognized
    Opened { kind: DelimiterKind, line: usize },
    /// A block was closed by its matching closing token
    Closed {
        kind: DelimiterKind,
        open_line: usize,
        close_line: usize,
    },
    /// A closing token arrived with no pending opener
    UnexpectedClose { token: &'static str, line: usize },
    /// A closing token whose spelling disagrees with the innermost opener
    MismatchedClose {
        expected: &'static str,
        found: &'static str,
        line: usize,
    },
    /// An opener never matched before input ended
    Unclosed { kind: DelimiterKind, open_line: usize },
}

impl Diagnostic {
    /// Check if this diagnostic reports an error (as opposed to progress)
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Diagnostic::UnexpectedClose { .. }
                | Diagnostic::MismatchedClose { .. }
                | Diagnostic::Unclosed { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Opened { kind, line } => {
                write!(
                    f,
                    "Line {}: Opening {} comment '{}'",
                    line,
                    kind,
                    kind.open_token()
                )
            }
            Diagnostic::Closed {
                kind,
                open_line,
                close_line,
            } => {
                write!(
                    f,
                    "Line {}-{}: Valid {} comment block closed",
                    open_line, close_line, kind
                )
            }
            Diagnostic::UnexpectedClose { token, line } => {
                write!(
                    f,
                    "Line {}: ERROR - Unexpected closing '{}' without opening",
                    line, token
                )
            }
            Diagnostic::MismatchedClose {
                expected,
                found,
                line,
            } => {
                write!(
                    f,
                    "Line {}: ERROR - Expected '{}' but found '{}'",
                    line, expected, found
                )
            }
            Diagnostic::Unclosed { kind, open_line } => {
                write!(
                    f,
                    "Line {}: ERROR - Unclosed {} comment '{}'",
                    open_line,
                    kind,
                    kind.open_token()
                )
            }
        }
    }
}

/// Aggregate counts for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of blocks closed by their matching closing token
    pub valid: usize,
    /// Number of unexpected closes, mismatched closes and unclosed openers
    pub errors: usize,
}

impl Summary {
    /// The overall verdict for this scan
    pub fn verdict(&self) -> Verdict {
        if self.errors > 0 {
            Verdict::Failed
        } else if self.valid > 0 {
            Verdict::AllNested
        } else {
            Verdict::NoBlocks
        }
    }
}

/// Overall outcome of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// At least one block and no errors
    AllNested,
    /// At least one error
    Failed,
    /// No comment blocks found at all
    NoBlocks,
}

/// Fatal conditions that abort a scan
///
/// These surface as an `Err` from [`scan`], distinct from a summary with
/// errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Nesting exceeded [`MAX_NESTING_DEPTH`] open delimiters
    DepthExceeded { line: usize, max: usize },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::DepthExceeded { line, max } => write!(
                f,
                "Line {}: nesting depth exceeded the maximum of {} open delimiters",
                line, max
            ),
        }
    }
}

impl std::error::Error for ScanError {}

/// The full result of one scan: ordered diagnostics plus aggregate counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub diagnostics: Vec<Diagnostic>,
    pub summary: Summary,
}

/// Scan `source` once, left to right, and report every structural anomaly.
///
/// Returns the ordered diagnostic stream (in the order events occur in the
/// source) and the final summary. The scan owns all of its state; running it
/// twice on the same text yields identical reports.
pub fn scan(source: &str) -> Result<ScanReport, ScanError> {
    let mut stack: Vec<OpenMarker> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut summary = Summary::default();
    let mut current_line = 1usize;

    for token in tokenize(source) {
        if let Some(kind) = token.opens() {
            if stack.len() >= MAX_NESTING_DEPTH {
                return Err(ScanError::DepthExceeded {
                    line: current_line,
                    max: MAX_NESTING_DEPTH,
                });
            }
            stack.push(OpenMarker {
                kind,
                opened_at_line: current_line,
            });
            diagnostics.push(Diagnostic::Opened {
                kind,
                line: current_line,
            });
        } else if let Some(closing_kind) = token.closes() {
            let found = closing_kind.close_token();
            match stack.last().copied() {
                None => {
                    diagnostics.push(Diagnostic::UnexpectedClose {
                        token: found,
                        line: current_line,
                    });
                    summary.errors += 1;
                }
                Some(top) if top.kind == closing_kind => {
                    stack.pop();
                    diagnostics.push(Diagnostic::Closed {
                        kind: top.kind,
                        open_line: top.opened_at_line,
                        close_line: current_line,
                    });
                    summary.valid += 1;
                }
                Some(top) => {
                    // The mismatched close still resolves the innermost opener.
                    stack.pop();
                    diagnostics.push(Diagnostic::MismatchedClose {
                        expected: top.kind.close_token(),
                        found,
                        line: current_line,
                    });
                    summary.errors += 1;
                }
            }
        } else if token.is_newline() {
            current_line += 1;
        }
    }

    // Flush: innermost unclosed delimiters are reported first.
    while let Some(marker) = stack.pop() {
        diagnostics.push(Diagnostic::Unclosed {
            kind: marker.kind,
            open_line: marker.opened_at_line,
        });
        summary.errors += 1;
    }

    Ok(ScanReport {
        diagnostics,
        summary,
    })
}
