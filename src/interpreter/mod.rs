//! BrainF++ execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the interpreter, the call protocol and the step budget
//! - [`errors`]: runtime error types
//! - [`io`]: the I/O context the engine reads from and writes to
//! - [`constants`]: default tape sizes, the step ceiling and diagnostics
//!
//! # Execution Model
//!
//! Every function invocation runs its flat command list against one shared
//! [`Memory`](crate::memory::Memory) tape. A call is a host-level recursive
//! call, so nesting in the guest program is nesting on the host stack.
//! [`engine::with_call_stack`] provides a stack deep enough for
//! [`constants::MAX_CALL_DEPTH`] nested calls; the step budget bounds loops
//! and everything else.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod io;
