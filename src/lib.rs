#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Locates a byte offset inside `source`.
///
/// Returns the 1-based line number, the full text of that line and the
/// column of `position` within the line, counted in characters. An offset at
/// or past the end of the source resolves to the end of the last line, which
/// is where "end of input" errors point.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = line[..pos - start].chars().count();
            return (line_number, line.to_string(), column);
        }

        last = (line_number, line.to_string(), line.chars().count());
        start = end;
        line_number += 1;
    }

    // Past the final line; point just after its last character.
    if last.1.ends_with('\n') {
        (line_number, String::new(), 0)
    } else {
        last
    }
}
