//! Token definitions for the comment-delimiter grammar
//!
//! This module defines the delimiter families recognized by the validator and
//! the logos token set that drives the scan.
//!
//! Delimiter Priority
//!
//!     Families are checked in declaration order of [`DelimiterKind`], C-style
//!     before HTML. The four delimiter spellings are pairwise disjoint in
//!     their first character (`/`, `<`, `*`, `-`), so no two delimiter tokens
//!     can ever start at the same source position and the declaration order
//!     never has to break a tie in practice.

use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A comment-delimiter family: a named pair of open/close token strings.
///
/// The set is closed and known at compile time; there is no runtime
/// registration. Adding a family means adding a variant here plus its two
/// literals to [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelimiterKind {
    /// `/*` ... `*/`
    CStyle,
    /// `<!--` ... `-->`
    Html,
}

impl DelimiterKind {
    /// All families in declaration (priority) order
    pub const ALL: [DelimiterKind; 2] = [DelimiterKind::CStyle, DelimiterKind::Html];

    /// The literal opening token of this family
    pub fn open_token(&self) -> &'static str {
        match self {
            DelimiterKind::CStyle => "/*",
            DelimiterKind::Html => "<!--",
        }
    }

    /// The literal closing token of this family
    pub fn close_token(&self) -> &'static str {
        match self {
            DelimiterKind::CStyle => "*/",
            DelimiterKind::Html => "-->",
        }
    }

    /// Human-readable family name used in diagnostics
    pub fn display_name(&self) -> &'static str {
        match self {
            DelimiterKind::CStyle => "C-style",
            DelimiterKind::Html => "HTML",
        }
    }
}

impl fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// All tokens the validator distinguishes
///
/// Everything that is neither a delimiter nor a newline is skipped. Newlines
/// are kept as tokens so the matching stage can track line numbers.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^\n]")]
pub enum Token {
    // Opening delimiters
    #[token("/*")]
    OpenCStyle,
    #[token("<!--")]
    OpenHtml,

    // Closing delimiters
    #[token("*/")]
    CloseCStyle,
    #[token("-->")]
    CloseHtml,

    // Line breaks
    #[token("\n")]
    Newline,
}

impl Token {
    /// The family this token opens, if it is an opening delimiter
    pub fn opens(&self) -> Option<DelimiterKind> {
        match self {
            Token::OpenCStyle => Some(DelimiterKind::CStyle),
            Token::OpenHtml => Some(DelimiterKind::Html),
            _ => None,
        }
    }

    /// The family this token closes, if it is a closing delimiter
    pub fn closes(&self) -> Option<DelimiterKind> {
        match self {
            Token::CloseCStyle => Some(DelimiterKind::CStyle),
            Token::CloseHtml => Some(DelimiterKind::Html),
            _ => None,
        }
    }

    /// The literal source text of this token
    pub fn text(&self) -> &'static str {
        match self {
            Token::OpenCStyle => "/*",
            Token::OpenHtml => "<!--",
            Token::CloseCStyle => "*/",
            Token::CloseHtml => "-->",
            Token::Newline => "\n",
        }
    }

    /// Check if this token is a newline
    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }
}
