// Execution engine for the BrainF++ interpreter

use crate::config::Config;
use crate::interpreter::constants::{CALL_STACK_SIZE, MAX_CALL_DEPTH};
use crate::interpreter::errors::RuntimeError;
use crate::interpreter::io::{self, Io};
use crate::memory::cell::{self, Cell};
use crate::memory::frame::Activation;
use crate::memory::Memory;
use crate::parser::ast::{Command, FunctionName, FunctionTable};
use std::{panic, thread};
use tracing::{debug, trace, warn};

/// Command counter shared by every activation of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepBudget {
    used: u64,
    limit: u64,
}

impl StepBudget {
    pub fn new(limit: u64) -> Self {
        StepBudget { used: 0, limit }
    }

    /// Count one command. Fails once the count reaches the limit, so the
    /// command that hits it is never executed.
    pub fn tick(&mut self) -> Result<(), RuntimeError> {
        self.used += 1;
        if self.used >= self.limit {
            return Err(RuntimeError::StepLimitExceeded { limit: self.limit });
        }
        Ok(())
    }

    pub fn used(&self) -> u64 {
        self.used
    }
}

/// How `mn` finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Value of the cell under the pointer when `mn` returned
    pub value: Cell,
    /// Final position of `mn`'s pointer
    pub pointer: usize,
}

/// Runs one program against one I/O context
pub struct Interpreter<'p, I: Io> {
    /// Parsed program
    functions: &'p FunctionTable,

    /// Tape shared by all activations
    memory: Memory,

    /// Commands executed so far, across every activation
    budget: StepBudget,

    /// Program input and output
    io: I,

    /// Live activations
    depth: usize,

    /// Deepest nesting reached
    max_depth: usize,
}

impl<'p, I: Io> Interpreter<'p, I> {
    /// Create an interpreter with a fresh zeroed tape
    pub fn new(functions: &'p FunctionTable, config: &Config, io: I) -> Self {
        Interpreter {
            functions,
            memory: Memory::new(config.limit(), config.global()),
            budget: StepBudget::new(config.max_steps()),
            io,
            depth: 0,
            max_depth: 0,
        }
    }

    /// Run `mn` from the first cell after the global region.
    ///
    /// Guest calls recurse on the host stack. Deeply nested programs need the
    /// stack provided by [`with_call_stack`].
    pub fn run(&mut self) -> Result<Completion, RuntimeError> {
        let start = self.memory.global();
        debug!(
            limit = self.memory.limit(),
            global = start,
            functions = self.functions.len(),
            "starting execution"
        );

        let mut frame = Activation::new(FunctionName::MAIN, start);
        match self.enter(&mut frame) {
            Ok(value) => {
                debug!(steps = self.budget.used(), value, "execution finished");
                Ok(Completion {
                    value,
                    pointer: frame.pointer,
                })
            }
            Err(err) => {
                warn!(steps = self.budget.used(), "execution aborted: {}", err);
                Err(err)
            }
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Commands counted so far
    pub fn steps(&self) -> u64 {
        self.budget.used()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn into_io(self) -> I {
        self.io
    }

    /// Invoke `function` with its window starting at `start`
    fn run_function(&mut self, function: FunctionName, start: usize) -> Result<Cell, RuntimeError> {
        let mut frame = Activation::new(function, start);
        self.enter(&mut frame)
    }

    fn enter(&mut self, frame: &mut Activation) -> Result<Cell, RuntimeError> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::CallDepthExceeded {
                function: frame.function,
                depth: MAX_CALL_DEPTH,
            });
        }
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        let result = self.execute(frame);
        self.depth -= 1;
        result
    }

    /// Execute a function body until `;`, the end of the body, or a fault
    fn execute(&mut self, frame: &mut Activation) -> Result<Cell, RuntimeError> {
        let functions = self.functions;
        let body = &functions
            .get(frame.function)
            .ok_or(RuntimeError::UndefinedFunction {
                name: frame.function,
            })?
            .body;
        if body.is_empty() {
            return Err(RuntimeError::EmptyFunction {
                name: frame.function,
            });
        }
        let global = self.memory.global();
        let limit = self.memory.limit();

        while let Some(&command) = body.get(frame.pc) {
            self.budget.tick()?;

            let value = self.memory.get(frame.pointer);
            match command {
                Command::Return => return Ok(value),
                Command::Increment => {
                    self.memory
                        .set(frame.pointer, cell::normalize(i32::from(value) + 1));
                }
                Command::Decrement => {
                    self.memory
                        .set(frame.pointer, cell::normalize(i32::from(value) - 1));
                }
                Command::Left => {
                    if !frame.move_left(global) {
                        return Err(RuntimeError::PointerOutOfBounds {
                            function: frame.function,
                            pointer: -1,
                            limit,
                        });
                    }
                }
                Command::Right => frame.move_right(global),
                Command::Output => io::emit_cell(&mut self.io, value),
                Command::Input => {
                    let read = if self.io.has_input() {
                        cell::normalize(i32::from(self.io.read_input()))
                    } else {
                        0
                    };
                    self.memory.set(frame.pointer, read);
                }
                Command::Debug => self.io.write_debug(value),
                Command::LoopStart => {
                    if value == 0 {
                        frame.pc = matching_loop_end(body, frame.pc).ok_or(
                            RuntimeError::UnmatchedBracket {
                                function: frame.function,
                                position: frame.pc,
                            },
                        )?;
                    } else {
                        frame.loop_starts.push(frame.pc);
                    }
                }
                Command::LoopEnd => {
                    if value != 0 {
                        match frame.loop_starts.last() {
                            Some(&start) => frame.pc = start,
                            // A stray `]` on a live cell ends the function
                            None => return Ok(value),
                        }
                    } else {
                        frame.loop_starts.pop();
                    }
                }
                Command::Call(callee) => self.call(frame, callee)?,
            }

            frame.pc += 1;

            if frame.pointer >= limit {
                return Err(RuntimeError::PointerOutOfBounds {
                    function: frame.function,
                    pointer: frame.pointer as isize,
                    limit,
                });
            }
        }

        Ok(self.memory.get(frame.pointer))
    }

    /// Call `callee` from `frame`.
    ///
    /// The callee's window starts just above the highest cell the caller
    /// uses, receives the caller's current cell as its argument, and is wiped
    /// (along with everything above it) once the callee returns.
    fn call(&mut self, frame: &mut Activation, callee: FunctionName) -> Result<(), RuntimeError> {
        frame.max_pointer = self.memory.highest_in_use(frame.max_pointer, frame.pointer);
        let start = frame.max_pointer + 1;
        if start >= self.memory.limit() {
            return Err(RuntimeError::WindowExhausted {
                caller: frame.function,
                callee,
            });
        }

        self.memory.set(start, self.memory.get(frame.pointer));
        trace!(caller = %frame.function, callee = %callee, start, "call");

        let returned = self.run_function(callee, start)?;
        trace!(callee = %callee, returned, "return");

        self.memory
            .set(frame.pointer, cell::normalize(i32::from(returned)));
        self.memory.clear_from(start);
        Ok(())
    }
}

/// Run `job` on a thread whose stack holds `MAX_CALL_DEPTH` nested calls.
///
/// Fails only if the thread cannot be spawned. A panic in `job` is resumed on
/// the calling thread.
pub fn with_call_stack<R, F>(job: F) -> std::io::Result<R>
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    thread::scope(|scope| {
        let handle = thread::Builder::new()
            .name("brainfpp-interpreter".to_string())
            .stack_size(CALL_STACK_SIZE)
            .spawn_scoped(scope, job)?;
        match handle.join() {
            Ok(result) => Ok(result),
            Err(payload) => panic::resume_unwind(payload),
        }
    })
}

/// Position of the `]` closing the `[` at `open`, if there is one
fn matching_loop_end(body: &[Command], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, command) in body.iter().enumerate().skip(open) {
        match command {
            Command::LoopStart => depth += 1,
            Command::LoopEnd => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::io::BufferedIo;
    use crate::parser::parse;

    fn run(source: &str, input: &str) -> (Result<Completion, RuntimeError>, String) {
        run_with(source, input, &Config::default())
    }

    fn run_with(
        source: &str,
        input: &str,
        config: &Config,
    ) -> (Result<Completion, RuntimeError>, String) {
        let table = parse(source).unwrap();
        let mut interpreter = Interpreter::new(&table, config, BufferedIo::new(input));
        let result = interpreter.run();
        (result, interpreter.into_io().into_output())
    }

    #[test]
    fn test_matching_loop_end() {
        let table = parse("{mn [+[-]>]<}").unwrap();
        let body = &table.get(FunctionName::MAIN).unwrap().body;
        assert_eq!(matching_loop_end(body, 0), Some(6));
        assert_eq!(matching_loop_end(body, 2), Some(4));

        let table = parse("{mn [[]}").unwrap();
        let body = &table.get(FunctionName::MAIN).unwrap().body;
        assert_eq!(matching_loop_end(body, 0), None);
    }

    #[test]
    fn test_step_budget_tick() {
        let mut budget = StepBudget::new(3);
        assert!(budget.tick().is_ok());
        assert!(budget.tick().is_ok());
        assert_eq!(
            budget.tick(),
            Err(RuntimeError::StepLimitExceeded { limit: 3 })
        );
        assert_eq!(budget.used(), 3);
    }

    #[test]
    fn test_main_returns_current_cell() {
        let (result, _) = run("{mn +++;+++}", "");
        assert_eq!(result, Ok(Completion { value: 3, pointer: 1 }));

        let (result, _) = run("{mn +++>++}", "");
        assert_eq!(result, Ok(Completion { value: 2, pointer: 2 }));
    }

    #[test]
    fn test_call_replaces_current_cell() {
        // fn moves right, adds two and returns 2; mn prints chr(2)
        let (result, output) = run("{fn >++}{mn ,(fn)+(fn).}", "A");
        assert_eq!(output, "\u{2}");
        assert_eq!(result.unwrap().value, 2);
    }

    #[test]
    fn test_callee_receives_argument() {
        let (_, output) = run("{id ;}{mn ,(id).}", "Z");
        assert_eq!(output, "Z");
    }

    #[test]
    fn test_recursion() {
        let (result, output) = run("{cd \"[-(cd)];}{mn +++(cd)}", "");
        assert_eq!(output, "3 2 1 0 ");
        assert!(result.is_ok());
    }

    #[test]
    fn test_callee_window_is_cleared() {
        // The callee writes to cells above its home; none of it survives.
        let table = parse("{fl >+++>+++;}{mn +(fl)}").unwrap();
        let config = Config::default();
        let mut interpreter = Interpreter::new(&table, &config, BufferedIo::new(""));
        interpreter.run().unwrap();
        let cells = interpreter.memory().cells();
        assert_eq!(cells[1], 3);
        assert!(cells[2..26].iter().all(|&c| c == 0));
    }

    #[test]
    fn test_global_cell_is_shared() {
        let source = format!("{{gt <;}}{{mn <{}>(gt).}}", "+".repeat(65));
        let (_, output) = run(&source, "");
        assert_eq!(output, "A");
    }

    #[test]
    fn test_undefined_function() {
        let (result, output) = run("{mn +.(zz).}", "");
        assert_eq!(
            result,
            Err(RuntimeError::UndefinedFunction {
                name: FunctionName::new('z', 'z').unwrap()
            })
        );
        assert_eq!(output, "\u{1}");
    }

    #[test]
    fn test_window_exhaustion() {
        let (result, _) = run("{rc +(rc)}{mn (rc)}", "");
        assert!(matches!(result, Err(RuntimeError::WindowExhausted { .. })));
    }

    #[test]
    fn test_pointer_out_of_bounds() {
        let (result, _) = run("{mn <<}", "");
        assert!(matches!(
            result,
            Err(RuntimeError::PointerOutOfBounds { pointer: -1, .. })
        ));

        let (result, _) = run(&format!("{{mn {}}}", ">".repeat(25)), "");
        assert!(matches!(
            result,
            Err(RuntimeError::PointerOutOfBounds { pointer: 26, .. })
        ));
    }

    #[test]
    fn test_unmatched_bracket_only_faults_when_skipped() {
        let (result, _) = run("{mn [}", "");
        assert!(matches!(result, Err(RuntimeError::UnmatchedBracket { .. })));

        // Entered loops never scan forward
        let (result, _) = run("{mn +[-}", "");
        assert!(result.is_ok());
    }

    #[test]
    fn test_skipped_loop_needs_balanced_brackets() {
        // The scan reaches the last `]` still one level deep
        let (result, _) = run("{mn [-[-]}", "");
        assert_eq!(
            result,
            Err(RuntimeError::UnmatchedBracket {
                function: FunctionName::MAIN,
                position: 0,
            })
        );
    }

    #[test]
    fn test_empty_body_faults() {
        let (result, output) = run("{mn}", "");
        assert_eq!(
            result,
            Err(RuntimeError::EmptyFunction {
                name: FunctionName::MAIN
            })
        );
        assert_eq!(output, "");

        // Comments leave no commands behind
        let (result, _) = run("{mn only words here}", "");
        assert!(matches!(result, Err(RuntimeError::EmptyFunction { .. })));

        // Calling an empty function aborts the caller before its next command
        let (result, output) = run("{no}{mn +.(no).}", "");
        assert_eq!(
            result,
            Err(RuntimeError::EmptyFunction {
                name: FunctionName::new('n', 'o').unwrap()
            })
        );
        assert_eq!(output, "\u{1}");
    }

    #[test]
    fn test_deep_recursion_through_global_cell() {
        // Each level reads exhausted input to clear its home cell, then
        // recurses from the global cell, so the window never grows
        let source = format!("{{cd ,<[-(cd)]}}{{mn <{}>(cd)<\"}}", "+".repeat(2000));
        let (result, output) = with_call_stack(|| {
            let table = parse(&source).unwrap();
            let config = Config::default();
            let mut interpreter = Interpreter::new(&table, &config, BufferedIo::new(""));
            let result = interpreter.run();
            let depth = interpreter.max_depth();
            (result.map(|_| depth), interpreter.into_io().into_output())
        })
        .unwrap();
        assert_eq!(result, Ok(2002));
        assert_eq!(output, "0 ");
    }

    #[test]
    fn test_stray_loop_end() {
        let (result, output) = run("{mn +]\"}", "");
        assert_eq!(result.unwrap().value, 1);
        assert_eq!(output, "");

        let (_, output) = run("{mn ]\"}", "");
        assert_eq!(output, "0 ");
    }

    #[test]
    fn test_step_limit() {
        let config = Config::default().with_max_steps(10).unwrap();
        let (result, _) = run_with("{mn +[]}", "", &config);
        assert_eq!(result, Err(RuntimeError::StepLimitExceeded { limit: 10 }));
    }

    #[test]
    fn test_step_count_and_depth() {
        let table = parse("{id ;}{mn +(id)(id)}").unwrap();
        let config = Config::default();
        let mut interpreter = Interpreter::new(&table, &config, BufferedIo::new(""));
        interpreter.run().unwrap();
        // + (id) ; (id) ;
        assert_eq!(interpreter.steps(), 5);
        assert_eq!(interpreter.max_depth(), 2);
    }

    #[test]
    fn test_call_depth_is_bounded() {
        // Each call starts just above the global cell, so the window never grows
        let (result, _) = with_call_stack(|| run("{lp <(lp)}{mn (lp)}", "")).unwrap();
        assert_eq!(
            result,
            Err(RuntimeError::CallDepthExceeded {
                function: FunctionName::new('l', 'p').unwrap(),
                depth: MAX_CALL_DEPTH,
            })
        );
    }

    #[test]
    fn test_no_global_region() {
        let config = Config::new(4, 0).unwrap();
        let (result, output) = run_with("{mn +++\">+\"}", "", &config);
        assert_eq!(output, "3 1 ");
        assert_eq!(result.unwrap().pointer, 1);

        let (result, _) = run_with("{mn <}", "", &config);
        assert!(matches!(result, Err(RuntimeError::PointerOutOfBounds { .. })));
    }
}
