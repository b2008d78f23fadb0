//! A [N-Quads](https://www.w3.org/TR/n-quads/) serializer.

use crate::alphabet::write_escaped;
use crate::error::QuadConsumerError;
use crate::model::{BaseDirection, QuadConsumer, QuadRef};
use crate::vocab::{i18n, xsd};
use std::fmt;
use std::io::{self, Write};

/// A [N-Quads](https://www.w3.org/TR/n-quads/) serializer.
///
/// ```
/// use oxnquads::{NQuadsSerializer, QuadRef};
///
/// let mut serializer = NQuadsSerializer::new().for_writer(Vec::new());
/// serializer.serialize_quad(QuadRef {
///     subject: "http://example.com#me",
///     predicate: "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
///     object: "http://schema.org/Person",
///     datatype: None,
///     language: None,
///     direction: None,
///     graph: None,
/// })?;
/// assert_eq!(
///     serializer.finish().as_slice(),
///     b"<http://example.com#me> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://schema.org/Person> .\n"
/// );
/// # Result::<_, std::io::Error>::Ok(())
/// ```
#[derive(Default, Clone)]
#[must_use]
pub struct NQuadsSerializer;

impl NQuadsSerializer {
    /// Builds a new [`NQuadsSerializer`].
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Writes to a [`Write`] implementation.
    ///
    /// This writer does unbuffered writes. You might want to use
    /// [`BufWriter`](io::BufWriter) to avoid that.
    #[allow(clippy::unused_self)]
    pub fn for_writer<W: Write>(self, writer: W) -> WriterNQuadsSerializer<W> {
        WriterNQuadsSerializer { writer }
    }
}

/// Writes quads to a [`Write`] implementation.
///
/// Can be built using [`NQuadsSerializer::for_writer`].
///
/// It implements [`QuadConsumer`], so a parser can pipe a document straight
/// into it:
///
/// ```
/// use oxnquads::{NQuadsParser, NQuadsSerializer};
///
/// let file = b"<http://example.com/s> <http://example.com/p> \"o\"@en <http://example.com/g> .\n";
/// let mut serializer = NQuadsSerializer::new().for_writer(Vec::new());
/// NQuadsParser::new()
///     .for_slice(file)
///     .parse_all(&mut serializer)?;
/// assert_eq!(serializer.finish().as_slice(), file);
/// # Result::<_, oxnquads::NQuadsParseError>::Ok(())
/// ```
#[must_use]
pub struct WriterNQuadsSerializer<W: Write> {
    writer: W,
}

impl<W: Write> WriterNQuadsSerializer<W> {
    /// Writes an extra quad.
    pub fn serialize_quad<'a>(&mut self, quad: impl Into<QuadRef<'a>>) -> io::Result<()> {
        let quad = quad.into();
        writeln!(self.writer, "{quad} .")
    }

    /// Ends the write and returns the underlying [`Write`] implementation.
    pub fn finish(self) -> W {
        self.writer
    }
}

impl<W: Write> QuadConsumer for WriterNQuadsSerializer<W> {
    fn quad(&mut self, quad: QuadRef<'_>) -> Result<(), QuadConsumerError> {
        self.serialize_quad(quad)
            .map_err(|e| QuadConsumerError::new(quad, e))
    }
}

/// Writes an IRI or a blank node using the N-Quads syntax.
///
/// Blank nodes are recognized by their `_:` prefix, everything else is
/// written as an IRI reference.
pub fn write_term(term: &str, f: &mut impl fmt::Write) -> fmt::Result {
    if term.starts_with("_:") {
        f.write_str(term)
    } else {
        write!(f, "<{term}>")
    }
}

/// Writes a literal using the N-Quads syntax.
///
/// The datatype is omitted when it is implied by the rest of the literal:
/// `xsd:string` for simple literals and `rdf:langString` for language tagged
/// ones. A base direction is folded into an `i18n` datatype together with the
/// language tag.
pub fn write_literal(
    value: &str,
    datatype: Option<&str>,
    language: Option<&str>,
    direction: Option<BaseDirection>,
    f: &mut impl fmt::Write,
) -> fmt::Result {
    f.write_char('"')?;
    write_escaped(value, f)?;
    f.write_char('"')?;
    if let Some(direction) = direction {
        write!(f, "^^<{}>", i18n::encode(language, direction))
    } else if let Some(language) = language {
        write!(f, "@{language}")
    } else if let Some(datatype) = datatype.filter(|&datatype| datatype != xsd::STRING) {
        write!(f, "^^<{datatype}>")
    } else {
        Ok(())
    }
}
