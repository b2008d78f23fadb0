//! Flat statement records and the consumer contract parsed statements are
//! pushed through.

use crate::error::QuadConsumerError;
use crate::serializer::{write_literal, write_term};
use crate::vocab::i18n;
use std::fmt;

/// A possible [base direction](https://www.w3.org/TR/rdf12-concepts/#dfn-base-direction) of a literal.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub enum BaseDirection {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

impl fmt::Display for BaseDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        })
    }
}

/// A borrowed view of one N-Quads statement.
///
/// Terms stay plain strings: a blank node is distinguished from an IRI only
/// by its reserved `_:` prefix. The object is a literal if and only if at
/// least one of `datatype`, `language` and `direction` is set; a missing
/// `graph` means the default graph.
///
/// [`Display`](fmt::Display) writes the statement body without the
/// terminating ` .`:
///
/// ```
/// use oxnquads::QuadRef;
///
/// let quad = QuadRef {
///     subject: "http://example.com/s",
///     predicate: "http://schema.org/name",
///     object: "Foo",
///     datatype: Some("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"),
///     language: Some("en"),
///     direction: None,
///     graph: Some("_:g"),
/// };
/// assert_eq!(
///     quad.to_string(),
///     "<http://example.com/s> <http://schema.org/name> \"Foo\"@en _:g"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadRef<'a> {
    /// The subject: an IRI or a `_:` prefixed blank node label.
    pub subject: &'a str,
    /// The predicate IRI.
    pub predicate: &'a str,
    /// The object: an IRI, a `_:` prefixed blank node label or a literal
    /// lexical value.
    pub object: &'a str,
    /// The literal datatype IRI, `None` when the object is not a literal.
    pub datatype: Option<&'a str>,
    /// The literal language tag.
    pub language: Option<&'a str>,
    /// The literal base direction.
    pub direction: Option<BaseDirection>,
    /// The graph name: an IRI or a `_:` prefixed blank node label, `None`
    /// for the default graph.
    pub graph: Option<&'a str>,
}

impl QuadRef<'_> {
    /// Returns whether the object of this statement is a literal.
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.datatype.is_some() || self.language.is_some() || self.direction.is_some()
    }

    /// Copies all components into an owned [`Quad`].
    pub fn into_owned(self) -> Quad {
        Quad {
            subject: self.subject.to_owned(),
            predicate: self.predicate.to_owned(),
            object: self.object.to_owned(),
            datatype: self.datatype.map(ToOwned::to_owned),
            language: self.language.map(ToOwned::to_owned),
            direction: self.direction,
            graph: self.graph.map(ToOwned::to_owned),
        }
    }
}

impl fmt::Display for QuadRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_term(self.subject, f)?;
        f.write_str(" ")?;
        write_term(self.predicate, f)?;
        f.write_str(" ")?;
        if self.is_literal() {
            write_literal(self.object, self.datatype, self.language, self.direction, f)?;
        } else {
            write_term(self.object, f)?;
        }
        if let Some(graph) = self.graph {
            f.write_str(" ")?;
            write_term(graph, f)?;
        }
        Ok(())
    }
}

impl<'a> From<&'a Quad> for QuadRef<'a> {
    #[inline]
    fn from(quad: &'a Quad) -> Self {
        quad.as_ref()
    }
}

/// An owned N-Quads statement. See [`QuadRef`] for the field semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    /// The subject: an IRI or a `_:` prefixed blank node label.
    pub subject: String,
    /// The predicate IRI.
    pub predicate: String,
    /// The object: an IRI, a `_:` prefixed blank node label or a literal
    /// lexical value.
    pub object: String,
    /// The literal datatype IRI, `None` when the object is not a literal.
    pub datatype: Option<String>,
    /// The literal language tag.
    pub language: Option<String>,
    /// The literal base direction.
    pub direction: Option<BaseDirection>,
    /// The graph name, `None` for the default graph.
    pub graph: Option<String>,
}

impl Quad {
    /// Borrows this statement as a [`QuadRef`].
    #[inline]
    pub fn as_ref(&self) -> QuadRef<'_> {
        QuadRef {
            subject: &self.subject,
            predicate: &self.predicate,
            object: &self.object,
            datatype: self.datatype.as_deref(),
            language: self.language.as_deref(),
            direction: self.direction,
            graph: self.graph.as_deref(),
        }
    }
}

impl fmt::Display for Quad {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

impl From<QuadRef<'_>> for Quad {
    #[inline]
    fn from(quad: QuadRef<'_>) -> Self {
        quad.into_owned()
    }
}

/// A sink the parser pushes statements into, one call per statement.
///
/// A failure aborts the parse: it is reported as
/// [`NQuadsParseError::Consumer`](crate::NQuadsParseError::Consumer) and the
/// parser must not be used afterwards.
///
/// Closures taking a [`QuadRef`] implement this trait, and so does
/// [`WriterNQuadsSerializer`](crate::WriterNQuadsSerializer), which lets a
/// parser be piped straight into a serializer.
///
/// ```
/// use oxnquads::{NQuadsParser, QuadConsumer, QuadConsumerError, QuadRef};
///
/// struct GraphCounter(usize);
///
/// impl QuadConsumer for GraphCounter {
///     fn quad(&mut self, quad: QuadRef<'_>) -> Result<(), QuadConsumerError> {
///         if quad.graph.is_some() {
///             self.0 += 1;
///         }
///         Ok(())
///     }
/// }
///
/// let file = br#"<http://example.com/s> <http://example.com/p> "o" <http://example.com/g> .
/// <http://example.com/s> <http://example.com/p> "o" .
/// "#;
/// let mut counter = GraphCounter(0);
/// NQuadsParser::new().for_slice(file).parse_all(&mut counter)?;
/// assert_eq!(counter.0, 1);
/// # Result::<_, oxnquads::NQuadsParseError>::Ok(())
/// ```
pub trait QuadConsumer {
    /// Processes one statement.
    fn quad(&mut self, quad: QuadRef<'_>) -> Result<(), QuadConsumerError>;
}

impl<F: FnMut(QuadRef<'_>) -> Result<(), QuadConsumerError>> QuadConsumer for F {
    fn quad(&mut self, quad: QuadRef<'_>) -> Result<(), QuadConsumerError> {
        self(quad)
    }
}

/// A consumer adapter folding the base direction of literals into their
/// datatype, for consumers that have no native direction field.
///
/// Direction tagged literals are forwarded with the datatype set to the
/// [`i18n` encoding](i18n::encode) of their language and direction, and with
/// empty language and direction fields. All other statements pass through
/// unchanged.
///
/// ```
/// use oxnquads::{BaseDirection, I18nEncoder, QuadConsumer, QuadConsumerError, QuadRef};
///
/// let mut datatypes = Vec::new();
/// let mut encoder = I18nEncoder::new(|quad: QuadRef<'_>| -> Result<(), QuadConsumerError> {
///     datatypes.push(quad.datatype.unwrap_or("").to_owned());
///     Ok(())
/// });
/// encoder.quad(QuadRef {
///     subject: "http://example.com/s",
///     predicate: "http://example.com/p",
///     object: "\u{633}\u{644}\u{627}\u{645}",
///     datatype: Some("https://www.w3.org/ns/i18n#"),
///     language: Some("ar"),
///     direction: Some(BaseDirection::Rtl),
///     graph: None,
/// })?;
/// assert_eq!(datatypes, ["https://www.w3.org/ns/i18n#ar_rtl"]);
/// # Result::<_, oxnquads::QuadConsumerError>::Ok(())
/// ```
pub struct I18nEncoder<C> {
    inner: C,
}

impl<C: QuadConsumer> I18nEncoder<C> {
    /// Wraps the consumer the rewritten statements are forwarded to.
    #[inline]
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Unwraps the inner consumer.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: QuadConsumer> QuadConsumer for I18nEncoder<C> {
    fn quad(&mut self, quad: QuadRef<'_>) -> Result<(), QuadConsumerError> {
        if let Some(direction) = quad.direction {
            let datatype = i18n::encode(quad.language, direction);
            self.inner.quad(QuadRef {
                datatype: Some(&datatype),
                language: None,
                direction: None,
                ..quad
            })
        } else {
            self.inner.quad(quad)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(datatype: Option<&'static str>, language: Option<&'static str>, direction: Option<BaseDirection>) -> QuadRef<'static> {
        QuadRef {
            subject: "http://example.com/s",
            predicate: "http://example.com/p",
            object: "o",
            datatype,
            language,
            direction,
            graph: None,
        }
    }

    #[test]
    fn display_object_kinds() {
        assert_eq!(
            literal(None, None, None).to_string(),
            "<http://example.com/s> <http://example.com/p> <o>"
        );
        assert_eq!(
            literal(Some("http://www.w3.org/2001/XMLSchema#string"), None, None).to_string(),
            "<http://example.com/s> <http://example.com/p> \"o\""
        );
        assert_eq!(
            literal(Some("https://www.w3.org/ns/i18n#"), Some("cz"), Some(BaseDirection::Ltr))
                .to_string(),
            "<http://example.com/s> <http://example.com/p> \"o\"^^<https://www.w3.org/ns/i18n#cz_ltr>"
        );
    }

    #[test]
    fn i18n_encoder_passes_undirected_statements_through() {
        let mut quads = Vec::new();
        let mut encoder = I18nEncoder::new(|quad: QuadRef<'_>| -> Result<(), QuadConsumerError> {
            quads.push(quad.into_owned());
            Ok(())
        });
        encoder
            .quad(literal(
                Some("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString"),
                Some("en"),
                None,
            ))
            .unwrap();
        encoder
            .quad(literal(None, None, None))
            .unwrap();
        assert_eq!(quads[0].language.as_deref(), Some("en"));
        assert_eq!(quads[1].datatype, None);
    }

    #[test]
    fn i18n_encoder_folds_direction_only_literals() {
        let mut quads = Vec::new();
        let mut encoder = I18nEncoder::new(|quad: QuadRef<'_>| -> Result<(), QuadConsumerError> {
            quads.push(quad.into_owned());
            Ok(())
        });
        encoder
            .quad(literal(
                Some("https://www.w3.org/ns/i18n#"),
                None,
                Some(BaseDirection::Rtl),
            ))
            .unwrap();
        assert_eq!(
            quads[0].datatype.as_deref(),
            Some("https://www.w3.org/ns/i18n#_rtl")
        );
        assert_eq!(quads[0].language, None);
        assert_eq!(quads[0].direction, None);
    }
}
