//! Main module for nestcheck library functionality

pub mod formats;
pub mod lexer;
pub mod matching;
pub mod processor;
pub mod testing;
