//! Errors raised while parsing or consuming N-Quads statements.

use crate::model::{Quad, QuadRef};
use std::error::Error;
use std::ops::Range;
use std::{fmt, io};

/// An error raised while parsing N-Quads.
///
/// The three failure categories are kept apart: I/O failures of the
/// underlying reader, syntax errors in the parsed document and failures
/// raised by the [`QuadConsumer`](crate::QuadConsumer) the statements are
/// pushed into. All of them are fatal: the parser does not resynchronize and
/// must not be used after returning an error.
#[derive(Debug, thiserror::Error)]
pub enum NQuadsParseError {
    /// I/O error during parsing (from the [`Read`](io::Read) implementation).
    #[error(transparent)]
    Io(#[from] io::Error),
    /// An error in the syntax of the parsed document.
    #[error(transparent)]
    Syntax(#[from] NQuadsSyntaxError),
    /// The consumer failed to process a statement.
    #[error(transparent)]
    Consumer(#[from] QuadConsumerError),
}

impl From<NQuadsParseError> for io::Error {
    #[inline]
    fn from(error: NQuadsParseError) -> Self {
        match error {
            NQuadsParseError::Io(error) => error,
            NQuadsParseError::Syntax(error) => error.into(),
            NQuadsParseError::Consumer(error) => Self::new(io::ErrorKind::Other, error),
        }
    }
}

/// An error in the syntax of the parsed document.
///
/// It is composed of a message and a location inside the document.
#[derive(Debug)]
pub struct NQuadsSyntaxError {
    location: Range<TextPosition>,
    message: String,
}

impl NQuadsSyntaxError {
    pub(crate) fn new(location: Range<TextPosition>, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }

    /// The location of the error inside of the document.
    #[inline]
    pub fn location(&self) -> Range<TextPosition> {
        self.location.clone()
    }

    /// The error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for NQuadsSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.start.offset + 1 >= self.location.end.offset {
            write!(
                f,
                "Parser error at line {}, column {}: {}",
                self.location.start.line + 1,
                self.location.start.column + 1,
                self.message
            )
        } else if self.location.start.line == self.location.end.line {
            write!(
                f,
                "Parser error at line {} between columns {} and {}: {}",
                self.location.start.line + 1,
                self.location.start.column + 1,
                self.location.end.column + 1,
                self.message
            )
        } else {
            write!(
                f,
                "Parser error between line {}, column {} and line {}, column {}: {}",
                self.location.start.line + 1,
                self.location.start.column + 1,
                self.location.end.line + 1,
                self.location.end.column + 1,
                self.message
            )
        }
    }
}

impl Error for NQuadsSyntaxError {}

impl From<NQuadsSyntaxError> for io::Error {
    #[inline]
    fn from(error: NQuadsSyntaxError) -> Self {
        Self::new(io::ErrorKind::InvalidData, error)
    }
}

/// A position in a text, with a `line` number starting from 0, a `column`
/// number starting from 0 (in number of code points) and a global `offset`
/// starting from 0 (in number of bytes).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct TextPosition {
    pub line: u64,
    pub column: u64,
    pub offset: u64,
}

/// An error raised by a [`QuadConsumer`](crate::QuadConsumer) while
/// processing a statement.
///
/// It carries the statement that could not be processed together with the
/// underlying cause.
#[derive(Debug, thiserror::Error)]
#[error("Failed to process the statement `{quad} .`: {source}")]
pub struct QuadConsumerError {
    quad: Quad,
    #[source]
    source: Box<dyn Error + Send + Sync>,
}

impl QuadConsumerError {
    /// Builds an error from the statement being processed and the failure cause.
    pub fn new(quad: QuadRef<'_>, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            quad: quad.into_owned(),
            source: source.into(),
        }
    }

    /// The statement that could not be processed.
    #[inline]
    pub fn quad(&self) -> QuadRef<'_> {
        self.quad.as_ref()
    }

    /// Consumes the error and returns the statement that could not be processed.
    #[inline]
    pub fn into_quad(self) -> Quad {
        self.quad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_display() {
        let error = NQuadsSyntaxError::new(
            TextPosition {
                line: 0,
                column: 4,
                offset: 4,
            }..TextPosition {
                line: 0,
                column: 10,
                offset: 10,
            },
            "something bad",
        );
        assert_eq!(
            error.to_string(),
            "Parser error at line 1 between columns 5 and 11: something bad"
        );
    }

    #[test]
    fn consumer_error_keeps_the_statement() {
        let error = QuadConsumerError::new(
            QuadRef {
                subject: "http://example.com/s",
                predicate: "http://example.com/p",
                object: "http://example.com/o",
                datatype: None,
                language: None,
                direction: None,
                graph: None,
            },
            "sink closed",
        );
        assert_eq!(error.quad().subject, "http://example.com/s");
        assert!(error.to_string().contains("sink closed"));
    }
}
