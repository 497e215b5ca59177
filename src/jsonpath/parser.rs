//! Path string parser.
//!
//! Grammar, applied to every piece after splitting on `.`:
//!
//! ```text
//! segment      := propertyName indexSuffix*
//! propertyName := one or more characters, none of which is '['
//! indexSuffix  := '[' digits ']'
//! ```
//!
//! The whole path is validated before anything is returned, so a bad piece
//! anywhere fails the query before any tree is touched.

use super::ast::{JsonPath, Segment};
use super::error::PathError;

/// Parser for dot/bracket path strings such as `staff.groups[0].name`.
pub struct Parser {
    input: Vec<char>,
    position: usize,
}

impl Parser {
    /// Creates a new parser for the given path string.
    pub fn new(path: &str) -> Self {
        Self {
            input: path.chars().collect(),
            position: 0,
        }
    }

    /// Parses the path string into a `JsonPath`.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonnav::jsonpath::Parser;
    ///
    /// let path = Parser::parse("a[2][0].b").unwrap();
    /// assert_eq!(path.segments()[0].indices, vec![2, 0]);
    /// assert!(Parser::parse("a[x]").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<JsonPath, PathError> {
        let mut parser = Parser::new(path);
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<JsonPath, PathError> {
        let mut segments = Vec::new();

        loop {
            segments.push(self.parse_segment()?);
            match self.next() {
                Some('.') => continue,
                None => break,
                Some(ch) => {
                    return Err(PathError::UnexpectedToken {
                        position: self.position - 1,
                        found: ch.to_string(),
                        expected: "'.'".to_string(),
                    })
                }
            }
        }

        JsonPath::new(segments).ok_or_else(|| PathError::InvalidSyntax {
            message: "path has no segments".to_string(),
        })
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// Expects a specific character and advances, or returns an error.
    fn expect(&mut self, expected: char) -> Result<(), PathError> {
        let pos = self.position;
        match self.next() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(PathError::UnexpectedToken {
                position: pos,
                found: ch.to_string(),
                expected: format!("'{}'", expected),
            }),
            None => Err(PathError::UnexpectedEnd {
                expected: format!("'{}'", expected),
            }),
        }
    }

    /// Parses one dot-delimited piece.
    fn parse_segment(&mut self) -> Result<Segment, PathError> {
        let property = self.parse_property_name()?;

        let mut indices = Vec::new();
        while self.peek() == Some('[') {
            indices.push(self.parse_index_suffix()?);
        }

        // Only another piece or the end of the path may follow the suffixes.
        match self.peek() {
            None | Some('.') => Ok(Segment { property, indices }),
            Some(ch) => Err(PathError::UnexpectedToken {
                position: self.position,
                found: ch.to_string(),
                expected: "'[', '.' or end of path".to_string(),
            }),
        }
    }

    /// Parses a property name: everything up to the next `.` or `[`.
    fn parse_property_name(&mut self) -> Result<String, PathError> {
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch == '.' || ch == '[' {
                break;
            }
            name.push(ch);
            self.next();
        }

        if !name.is_empty() {
            return Ok(name);
        }
        match self.peek() {
            Some(ch) => Err(PathError::UnexpectedToken {
                position: self.position,
                found: ch.to_string(),
                expected: "property name".to_string(),
            }),
            None => Err(PathError::UnexpectedEnd {
                expected: "property name".to_string(),
            }),
        }
    }

    /// Parses `[digits]`.
    fn parse_index_suffix(&mut self) -> Result<usize, PathError> {
        self.expect('[')?;

        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.next();
            } else {
                break;
            }
        }

        if digits.is_empty() {
            return match self.peek() {
                Some(ch) => Err(PathError::UnexpectedToken {
                    position: self.position,
                    found: ch.to_string(),
                    expected: "array index digits".to_string(),
                }),
                None => Err(PathError::UnexpectedEnd {
                    expected: "array index digits".to_string(),
                }),
            };
        }

        self.expect(']')?;

        digits
            .parse::<usize>()
            .map_err(|_| PathError::InvalidSyntax {
                message: format!("array index {} is too large", digits),
            })
    }
}
