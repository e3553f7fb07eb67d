//! Memory model for the interpreter
//!
//! This module provides the core memory abstractions:
//! - [`cell`]: the stored value type and the store pipeline
//! - [`frame`]: per-invocation activation records
//! - [`Memory`]: the single tape shared by every activation
//!
//! # Layout
//!
//! ```text
//! 0 .. global          global region, reachable from every activation
//! global .. limit      private windows, one per live activation, stacked
//!                      left to right in call order
//! limit .. +global     allocated but never addressable
//! ```
//!
//! A callee's window starts just above the highest non-zero cell of its
//! caller, and everything from there to the end of the tape is zeroed when
//! the callee returns.

pub mod cell;
pub mod frame;

use cell::Cell;

/// The shared cell tape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<Cell>,
    limit: usize,
    global: usize,
}

impl Memory {
    /// Allocate a zeroed tape of `limit + global` cells
    pub fn new(limit: usize, global: usize) -> Self {
        Memory {
            cells: vec![0; limit + global],
            limit,
            global,
        }
    }

    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, value: Cell) {
        self.cells[index] = value;
    }

    /// Number of addressable cells
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Size of the global region
    pub fn global(&self) -> usize {
        self.global
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Find the highest cell in use at or below `from`.
    ///
    /// Scans down past zero cells and never reports anything below `floor`
    /// (the caller's current pointer).
    pub fn highest_in_use(&self, from: usize, floor: usize) -> usize {
        let mut top = Some(from);
        while let Some(index) = top {
            if self.cells[index] != 0 {
                break;
            }
            top = index.checked_sub(1);
        }
        top.map_or(floor, |index| index.max(floor))
    }

    /// Zero every addressable cell from `start` to the end of the tape
    pub fn clear_from(&mut self, start: usize) {
        if start < self.limit {
            self.cells[start..self.limit].fill(0);
        }
    }
}
