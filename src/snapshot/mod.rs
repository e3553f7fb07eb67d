// Final state of a run

use crate::interpreter::constants::{EXECUTION_FAILED_MESSAGE, STEP_LIMIT_MESSAGE};
use crate::interpreter::errors::RuntimeError;
use crate::memory::cell::Cell;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `mn` returned normally
    Completed { value: Cell },
    /// A runtime error unwound every activation
    Faulted(RuntimeError),
}

/// Everything left behind by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Output accumulated up to the end of the run
    pub output: String,
    pub outcome: Outcome,
    /// Commands counted, including the one that hit the step budget
    pub steps: u64,
    /// Whole tape, including the unaddressable tail
    pub memory: Vec<Cell>,
    /// Addressable cells
    pub limit: usize,
    /// Global region size
    pub global: usize,
    /// Final pointer of `mn`; `None` if the run faulted
    pub pointer: Option<usize>,
    /// Deepest activation nesting reached (1 = `mn` only)
    pub max_depth: usize,
}

impl Snapshot {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Completed { .. })
    }

    pub fn error(&self) -> Option<&RuntimeError> {
        match &self.outcome {
            Outcome::Faulted(err) => Some(err),
            Outcome::Completed { .. } => None,
        }
    }

    /// The result string handed back to callers of [`crate::interpret`].
    ///
    /// - completed: the output
    /// - step budget exhausted: the output plus a diagnostic line
    /// - any other fault: the output, or a fixed message if it is empty
    pub fn render(&self) -> String {
        match &self.outcome {
            Outcome::Completed { .. } => self.output.clone(),
            Outcome::Faulted(err) if err.is_reported() => {
                format!("{}\n{}", self.output, STEP_LIMIT_MESSAGE)
            }
            Outcome::Faulted(_) if self.output.is_empty() => EXECUTION_FAILED_MESSAGE.to_string(),
            Outcome::Faulted(_) => self.output.clone(),
        }
    }
}
