//! Execution parameters
//!
//! [`Config`] sizes the memory tape and caps the number of commands a run may
//! execute. The defaults reproduce the classic 26-cell tape with one global
//! cell.

use crate::interpreter::constants::{
    DEFAULT_GLOBAL, DEFAULT_LIMIT, GLOBAL_RANGE, LIMIT_RANGE, MAX_STEPS,
};
use std::fmt;

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    LimitOutOfRange(usize),
    GlobalOutOfRange(usize),
    ZeroStepBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LimitOutOfRange(limit) => write!(
                f,
                "cell limit {} outside {}..={}",
                limit,
                LIMIT_RANGE.start(),
                LIMIT_RANGE.end()
            ),
            ConfigError::GlobalOutOfRange(global) => write!(
                f,
                "global region size {} outside {}..={}",
                global,
                GLOBAL_RANGE.start(),
                GLOBAL_RANGE.end()
            ),
            ConfigError::ZeroStepBudget => write!(f, "step budget must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tape size and step budget for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    limit: usize,
    global: usize,
    max_steps: u64,
}

impl Config {
    pub fn new(limit: usize, global: usize) -> Result<Self, ConfigError> {
        if !LIMIT_RANGE.contains(&limit) {
            return Err(ConfigError::LimitOutOfRange(limit));
        }
        if !GLOBAL_RANGE.contains(&global) {
            return Err(ConfigError::GlobalOutOfRange(global));
        }
        Ok(Config {
            limit,
            global,
            max_steps: MAX_STEPS,
        })
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Result<Self, ConfigError> {
        if max_steps == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        self.max_steps = max_steps;
        Ok(self)
    }

    /// Total addressable cells
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Size of the global region
    pub fn global(&self) -> usize {
        self.global
    }

    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            limit: DEFAULT_LIMIT,
            global: DEFAULT_GLOBAL,
            max_steps: MAX_STEPS,
        }
    }
}
