//! Activation records
//!
//! One [`Activation`] exists for every function invocation in progress. The
//! records are not kept in a separate stack: each one lives in the host frame
//! of the call that created it, so the guest call depth always equals the host
//! recursion depth.

use crate::parser::ast::FunctionName;

/// State of one in-progress function invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub function: FunctionName,
    /// Lowest cell of the private window; also the home cell
    pub start: usize,
    /// Read/write head
    pub pointer: usize,
    /// Highest cell this activation is known to use
    pub max_pointer: usize,
    /// Index of the next command in the body
    pub pc: usize,
    /// Positions of the `[` commands whose loops are running
    pub loop_starts: Vec<usize>,
}

impl Activation {
    pub fn new(function: FunctionName, start: usize) -> Self {
        Activation {
            function,
            start,
            pointer: start,
            max_pointer: start,
            pc: 0,
            loop_starts: Vec::new(),
        }
    }

    /// Move the head one cell left.
    ///
    /// Leaving the home cell continues into the last global cell. Returns
    /// `false` when the head would fall off the left end of the tape.
    pub fn move_left(&mut self, global: usize) -> bool {
        if self.pointer == self.start {
            self.pointer = global;
        }
        match self.pointer.checked_sub(1) {
            Some(pointer) => {
                self.pointer = pointer;
                true
            }
            None => false,
        }
    }

    /// Move the head one cell right.
    ///
    /// Leaving the last global cell re-enters the private window at its home
    /// cell. The caller checks the upper bound.
    pub fn move_right(&mut self, global: usize) {
        if global.checked_sub(1) == Some(self.pointer) {
            self.pointer = self.start;
        } else {
            self.pointer += 1;
        }
        self.max_pointer = self.max_pointer.max(self.pointer);
    }
}
