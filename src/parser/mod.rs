//! BrainF++ source parser
//!
//! This module transforms source text into a [`ast::FunctionTable`]:
//! - [`parse`]: the single-pass function extractor and its error types
//! - [`ast`]: function names, commands and the function table
//!
//! There is no separate tokenizer. The language has no multi-character tokens
//! other than two-letter names, so the extractor reads characters directly and
//! drops everything that is not a command.

pub mod ast;
pub mod parse;

pub use parse::{parse, ParseError, ParseErrorKind, Parser};
