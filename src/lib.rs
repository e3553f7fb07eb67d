//! # Introduction
//!
//! `brainfpp` parses and executes BrainF++, a Brainfuck dialect with
//! two-letter named functions, call and return, a region of global cells and
//! a debug-print command.
//!
//! ```
//! let program = "{mn ++++++++[>++++++++<-]>+.}";
//! assert_eq!(brainfpp::interpret(program, ""), "A");
//! ```
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Parser → FunctionTable → Interpreter → Snapshot → String
//! ```
//!
//! 1. [`parser`]: splits the source into named function bodies and
//!    validates declarations.
//! 2. [`interpreter`]: runs `mn` and every function it calls against one
//!    shared tape, under a global step budget.
//! 3. [`memory`]: the tape, activation records and 16-bit cell arithmetic.
//! 4. [`snapshot`]: the state left behind by a run and its rendering into
//!    the result string.
//! 5. [`ui`]: a ratatui viewer for a finished run; not part of the stable
//!    library API.
//!
//! ## The language
//!
//! | Command | Effect |
//! |---------|--------|
//! | `+` `-` | increment / decrement the current cell |
//! | `<` `>` | move the pointer; left of home is the global region |
//! | `.` `,` | print the cell as a character / read one input character |
//! | `"`     | print the cell as a number followed by a space |
//! | `[` `]` | loop while the current cell is non-zero |
//! | `;`     | return the current cell |
//! | `(xy)`  | call `xy` with the current cell; the result replaces it |
//!
//! A program is a list of `{xy ...}` declarations and must declare `{mn ...}`.
//! Anything else inside a body is a comment.

pub mod config;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod snapshot;
pub mod ui;

pub use config::{Config, ConfigError};
pub use parser::{ParseError, ParseErrorKind};
pub use snapshot::{Outcome, Snapshot};

use interpreter::engine::{with_call_stack, Interpreter};
use interpreter::io::BufferedIo;
use parser::ast::FunctionTable;
use tracing::warn;

/// Run `source` on `input` with the default tape and step budget.
///
/// Never fails: parse errors come back as `"ERROR: <message>"`, runtime
/// faults as described on [`Snapshot::render`].
pub fn interpret(source: &str, input: &str) -> String {
    interpret_with(source, input, &Config::default())
}

/// [`interpret`] with an explicit configuration
pub fn interpret_with(source: &str, input: &str, config: &Config) -> String {
    match execute(source, input, config) {
        Ok(snapshot) => snapshot.render(),
        Err(err) => format!("ERROR: {}", err),
    }
}

/// Parse and run `source`, keeping the full final state.
///
/// Only parse errors are returned as `Err`; a runtime fault still yields a
/// [`Snapshot`] whose outcome is [`Outcome::Faulted`]. The run happens on a
/// dedicated thread with a stack deep enough for heavily nested calls.
pub fn execute(source: &str, input: &str, config: &Config) -> Result<Snapshot, ParseError> {
    let functions = parser::parse(source)?;

    let run = || run_program(&functions, input, config);
    let snapshot = match with_call_stack(run) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("cannot spawn interpreter thread ({}), running on the current stack", err);
            run()
        }
    };
    Ok(snapshot)
}

fn run_program(functions: &FunctionTable, input: &str, config: &Config) -> Snapshot {
    let mut interpreter = Interpreter::new(functions, config, BufferedIo::new(input));
    let result = interpreter.run();

    let steps = interpreter.steps();
    let max_depth = interpreter.max_depth();
    let memory = interpreter.memory().cells().to_vec();
    let output = interpreter.into_io().into_output();

    let (outcome, pointer) = match result {
        Ok(done) => (Outcome::Completed { value: done.value }, Some(done.pointer)),
        Err(err) => (Outcome::Faulted(err), None),
    };

    Snapshot {
        output,
        outcome,
        steps,
        memory,
        limit: config.limit(),
        global: config.global(),
        pointer,
        max_depth,
    }
}
