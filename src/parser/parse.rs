//! Function extractor
//!
//! This module provides the [`Parser`] struct, which turns BrainF++ source text
//! into a [`FunctionTable`] in a single forward scan.
//!
//! # Grammar
//!
//! ```text
//! program     := (ignored | declaration)*
//! declaration := '{' ws* letter letter body* '}'
//! body        := command | call | ignored
//! call        := '(' ws* letter letter          (a following ')' is ignored)
//! command     := '+' | '-' | '<' | '>' | '.' | ',' | '"' | '[' | ']' | ';'
//! ```
//!
//! Outside a declaration every character except `{` is ignored. Inside one,
//! any character that is not a command or a call is dropped, which is how
//! comments are written. Declarations do not nest.

use crate::parser::ast::*;
use std::fmt;

/// The reasons a program can be rejected before execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A declaration or call is not followed by exactly two letters
    InvalidName,
    /// `{` appeared inside an open declaration
    NestedDeclaration,
    /// The same name was declared twice
    DuplicateFunction(FunctionName),
    /// Input ended inside a declaration
    UnclosedFunction,
    /// No `{mn ...}` declaration
    MissingMain,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::InvalidName => write!(f, "function name must be two letters"),
            ParseErrorKind::NestedDeclaration => {
                write!(f, "'{{' found inside function declaration")
            }
            ParseErrorKind::DuplicateFunction(name) => {
                write!(f, "function {} defined twice", name)
            }
            ParseErrorKind::UnclosedFunction => write!(f, "unclosed function"),
            ParseErrorKind::MissingMain => write!(f, "main function {{mn}} not found"),
        }
    }
}

/// Parser error type
///
/// `Display` renders only the message; the location is kept for tools that
/// want to point at the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ParseError {}

/// A declaration that has been opened but not yet closed
struct OpenDeclaration {
    name: FunctionName,
    body: Vec<Command>,
    location: SourceLocation,
}

/// Single-pass function extractor
pub struct Parser {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            input: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scan the whole source and build the function table
    pub fn parse_program(&mut self) -> Result<FunctionTable, ParseError> {
        let mut table = FunctionTable::new();
        let mut open: Option<OpenDeclaration> = None;

        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
                continue;
            }

            let Some(declaration) = open.as_mut() else {
                let location = self.current_location();
                self.advance();
                if c == '{' {
                    self.skip_whitespace();
                    let name = self.read_name()?;
                    open = Some(OpenDeclaration {
                        name,
                        body: Vec::new(),
                        location,
                    });
                }
                continue;
            };

            match c {
                '}' => {
                    let location = self.current_location();
                    self.advance();
                    if let Some(done) = open.take() {
                        let function = Function {
                            name: done.name,
                            body: done.body,
                            location: done.location,
                        };
                        table.insert(function).map_err(|rejected| ParseError {
                            kind: ParseErrorKind::DuplicateFunction(rejected.name),
                            location,
                        })?;
                    }
                }
                '(' => {
                    self.advance();
                    self.skip_whitespace();
                    let callee = self.read_name()?;
                    declaration.body.push(Command::Call(callee));
                }
                '{' => {
                    return Err(self.error(ParseErrorKind::NestedDeclaration));
                }
                _ => {
                    if let Some(command) = Command::from_symbol(c) {
                        declaration.body.push(command);
                    }
                    self.advance();
                }
            }
        }

        if open.is_some() {
            return Err(self.error(ParseErrorKind::UnclosedFunction));
        }

        if !table.contains(FunctionName::MAIN) {
            return Err(self.error(ParseErrorKind::MissingMain));
        }

        Ok(table)
    }

    // ===== Helper methods =====

    /// Read exactly two consecutive letters
    fn read_name(&mut self) -> Result<FunctionName, ParseError> {
        let first = self.expect_letter()?;
        let second = self.expect_letter()?;
        FunctionName::new(first, second).ok_or_else(|| self.error(ParseErrorKind::InvalidName))
    }

    fn expect_letter(&mut self) -> Result<char, ParseError> {
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.advance();
                Ok(c)
            }
            _ => Err(self.error(ParseErrorKind::InvalidName)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            location: self.current_location(),
        }
    }
}

/// Parse `source` into a function table
pub fn parse(source: &str) -> Result<FunctionTable, ParseError> {
    Parser::new(source).parse_program()
}
