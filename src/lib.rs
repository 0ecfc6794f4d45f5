//! # nestcheck
//!
//! A nesting validator for comment delimiters.
//!
//! nestcheck scans a text buffer for comment-delimiter pairs (C-style `/* */`
//! and HTML `<!-- -->`), verifies that openings and closings are correctly
//! nested and matched, and reports every structural anomaly with its
//! originating line number.
//!
//! ## Testing
//!
//! Report-level tests should use the fluent assertions in the
//! [testing module](nestcheck::testing) rather than poking at diagnostic
//! vectors by hand.

pub mod nestcheck;
