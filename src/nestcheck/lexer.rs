//! Lexer module for the comment-delimiter grammar
//!
//! This module contains the tokenization logic for the validator, including
//! the delimiter-family definitions and the lexer implementation.
//!
//! Delimiter Handling
//!
//!     The grammar is deliberately tiny: two delimiter families, a newline
//!     marker for line tracking, and a skip rule for everything in between.
//!     The validator has no use for the text between delimiters, so the lexer
//!     drops it instead of producing text tokens.
//!
//!     The rationale for this approach is:
//!     - This allows us to use a vanilla logos lexer, no custom scanning code.
//!     - Line numbers fall out of counting newline tokens in stream order,
//!       which keeps the matching stage free of any character bookkeeping.
//!     - Adding a delimiter family is a new [`DelimiterKind`](tokens::DelimiterKind)
//!       variant plus its two tokens, not new branching logic in the matcher.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::{DelimiterKind, Token};
