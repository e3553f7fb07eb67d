// Program representation produced by the parser

use rustc_hash::FxHashMap;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Two ASCII letters naming a function, case-sensitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionName([u8; 2]);

impl FunctionName {
    /// The entry point every program must declare
    pub const MAIN: FunctionName = FunctionName(*b"mn");

    /// Build a name from two characters, or `None` unless both are ASCII letters.
    pub fn new(first: char, second: char) -> Option<Self> {
        if first.is_ascii_alphabetic() && second.is_ascii_alphabetic() {
            Some(FunctionName([first as u8, second as u8]))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        // Both bytes are ASCII letters
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single executable command in a function body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Increment,       // +
    Decrement,       // -
    Left,            // <
    Right,           // >
    Output,          // .
    Input,           // ,
    Debug,           // "
    LoopStart,       // [
    LoopEnd,         // ]
    Return,          // ;
    Call(FunctionName), // (xy)
}

impl Command {
    /// Map a body character to its command. Characters without a meaning
    /// return `None` and are dropped by the parser.
    pub fn from_symbol(c: char) -> Option<Self> {
        let command = match c {
            '+' => Command::Increment,
            '-' => Command::Decrement,
            '<' => Command::Left,
            '>' => Command::Right,
            '.' => Command::Output,
            ',' => Command::Input,
            '"' => Command::Debug,
            '[' => Command::LoopStart,
            ']' => Command::LoopEnd,
            ';' => Command::Return,
            _ => return None,
        };
        Some(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Increment => f.write_str("+"),
            Command::Decrement => f.write_str("-"),
            Command::Left => f.write_str("<"),
            Command::Right => f.write_str(">"),
            Command::Output => f.write_str("."),
            Command::Input => f.write_str(","),
            Command::Debug => f.write_str("\""),
            Command::LoopStart => f.write_str("["),
            Command::LoopEnd => f.write_str("]"),
            Command::Return => f.write_str(";"),
            Command::Call(name) => write!(f, "({})", name),
        }
    }
}

/// A declared function: its name, filtered body and declaration site
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: FunctionName,
    pub body: Vec<Command>,
    pub location: SourceLocation,
}

impl Function {
    /// Body rendered back to its compact command form, e.g. `,(fn)+.`
    pub fn compact_body(&self) -> String {
        self.body.iter().map(|c| c.to_string()).collect()
    }
}

/// Name to function mapping; immutable once parsing succeeds
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: FxHashMap<FunctionName, Function>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a function. Returns the rejected function if the name is taken.
    pub(crate) fn insert(&mut self, function: Function) -> Result<(), Function> {
        if self.functions.contains_key(&function.name) {
            return Err(function);
        }
        self.functions.insert(function.name, function);
        Ok(())
    }

    pub fn get(&self, name: FunctionName) -> Option<&Function> {
        self.functions.get(&name)
    }

    pub fn contains(&self, name: FunctionName) -> bool {
        self.functions.contains_key(&name)
    }

    /// Number of declared functions
    pub(crate) fn len(&self) -> usize {
        self.functions.len()
    }
}
