//! Runtime error types for the interpreter
//!
//! This module defines [`RuntimeError`], which represents every way a run can
//! stop before `mn` returns (as opposed to parse errors, which stop a program
//! before it starts).
//!
//! All runtime errors are fatal. They unwind every live activation without
//! executing further commands; output produced so far is kept.

use crate::parser::ast::FunctionName;
use std::fmt;

/// Runtime errors that can occur during execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// A call named a function that was never declared
    UndefinedFunction { name: FunctionName },

    /// A called function has no commands in its body
    EmptyFunction { name: FunctionName },

    /// A `[` on a zero cell had no matching `]`
    UnmatchedBracket {
        function: FunctionName,
        position: usize,
    },

    /// The cell pointer left `0..limit`
    PointerOutOfBounds {
        function: FunctionName,
        pointer: isize,
        limit: usize,
    },

    /// No room left on the tape for a callee's window
    WindowExhausted {
        caller: FunctionName,
        callee: FunctionName,
    },

    /// Calls nested deeper than the host allows
    CallDepthExceeded { function: FunctionName, depth: usize },

    /// The step budget ran out
    StepLimitExceeded { limit: u64 },
}

impl RuntimeError {
    /// Whether this fault gets an explicit diagnostic appended to the output.
    ///
    /// Only the step budget does; every other fault truncates silently.
    pub fn is_reported(&self) -> bool {
        matches!(self, RuntimeError::StepLimitExceeded { .. })
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::UndefinedFunction { name } => {
                write!(f, "Undefined function '{}'", name)
            }
            RuntimeError::EmptyFunction { name } => {
                write!(f, "Function '{}' has an empty body", name)
            }
            RuntimeError::UnmatchedBracket { function, position } => {
                write!(
                    f,
                    "Unmatched '[' at command {} in function '{}'",
                    position, function
                )
            }
            RuntimeError::PointerOutOfBounds {
                function,
                pointer,
                limit,
            } => {
                write!(
                    f,
                    "Cell pointer {} out of bounds 0..{} in function '{}'",
                    pointer, limit, function
                )
            }
            RuntimeError::WindowExhausted { caller, callee } => {
                write!(
                    f,
                    "No cells left to call '{}' from '{}'",
                    callee, caller
                )
            }
            RuntimeError::CallDepthExceeded { function, depth } => {
                write!(
                    f,
                    "Call to '{}' exceeds maximum nesting depth {}",
                    function, depth
                )
            }
            RuntimeError::StepLimitExceeded { limit } => {
                write!(f, "Program exceeded maximum execution steps ({})", limit)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
