// Constants for the BrainF++ interpreter

/// Addressable cells when no configuration is given
pub const DEFAULT_LIMIT: usize = 26;

/// Global region size when no configuration is given
pub const DEFAULT_GLOBAL: usize = 1;

/// Commands counted before a run is aborted
pub const MAX_STEPS: u64 = 1_000_000;

/// Deepest call nesting allowed. Calls made with the pointer in the global
/// region do not grow the window, so a program can nest as deep as a global
/// cell counts.
pub const MAX_CALL_DEPTH: usize = 40_000;

/// Stack reserved for the interpreter thread; sized for `MAX_CALL_DEPTH`
/// nested calls in an unoptimized build
pub const CALL_STACK_SIZE: usize = 512 * 1024 * 1024;

/// Accepted range for the cell limit
pub const LIMIT_RANGE: std::ops::RangeInclusive<usize> = 1..=99;

/// Accepted range for the global region size
pub const GLOBAL_RANGE: std::ops::RangeInclusive<usize> = 0..=99;

/// Diagnostic appended when the step budget runs out
pub const STEP_LIMIT_MESSAGE: &str = "ERROR: Program exceeded maximum execution steps";

/// Returned when a run faults before printing anything
pub const EXECUTION_FAILED_MESSAGE: &str = "ERROR: execution failed";
