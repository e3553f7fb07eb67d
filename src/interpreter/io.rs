//! Program input and output
//!
//! The engine never touches a stream directly. It reads and writes through
//! the [`Io`] trait, so output can be collected in a string, forwarded to a
//! terminal, or inspected by tests. [`BufferedIo`] is the string-backed
//! implementation used by [`crate::interpret`].

use crate::memory::cell::{self, Cell};

/// I/O context handed to the interpreter
pub trait Io {
    /// Whether `,` still has input to consume
    fn has_input(&self) -> bool;

    /// Next input code unit, or 0 once input is exhausted
    fn read_input(&mut self) -> u16;

    /// Output for `.`
    fn write_char(&mut self, c: char);

    /// Output for `"`: the raw cell value
    fn write_debug(&mut self, value: Cell);
}

/// Input from a string, output collected into a string
#[derive(Debug, Clone, Default)]
pub struct BufferedIo {
    input: Vec<u16>,
    cursor: usize,
    output: String,
}

impl BufferedIo {
    /// Input is consumed as UTF-16 code units, so characters outside the
    /// basic plane arrive as two surrogate reads.
    pub fn new(input: &str) -> Self {
        BufferedIo {
            input: input.encode_utf16().collect(),
            cursor: 0,
            output: String::new(),
        }
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl Io for BufferedIo {
    fn has_input(&self) -> bool {
        self.cursor < self.input.len()
    }

    fn read_input(&mut self) -> u16 {
        match self.input.get(self.cursor) {
            Some(&unit) => {
                self.cursor += 1;
                unit
            }
            None => 0,
        }
    }

    fn write_char(&mut self, c: char) {
        self.output.push(c);
    }

    fn write_debug(&mut self, value: Cell) {
        self.output.push_str(&value.to_string());
        self.output.push(' ');
    }
}

/// Write the character for a cell through `io`
pub(crate) fn emit_cell<I: Io + ?Sized>(io: &mut I, value: Cell) {
    io.write_char(cell::output_char(value));
}
