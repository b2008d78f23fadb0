//! A [N-Quads](https://www.w3.org/TR/n-quads/) streaming parser.

use crate::error::{NQuadsParseError, NQuadsSyntaxError, QuadConsumerError};
use crate::model::{BaseDirection, Quad, QuadConsumer, QuadRef};
use crate::tokenizer::{Token, TokenKind, Tokenizer};
use crate::vocab::{i18n, rdf, xsd};
use oxilangtag::LanguageTag;
use oxiri::Iri;
use std::io::Read;
use std::sync::Arc;

/// A [N-Quads](https://www.w3.org/TR/n-quads/) streaming parser.
///
/// Datatypes from the [`i18n` namespace](crate::vocab::i18n) are decoded into
/// the language and base direction fields of the emitted statements.
///
/// ```
/// use oxnquads::NQuadsParser;
///
/// let file = br#"<http://example.com/foo> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://schema.org/Person> .
/// <http://example.com/foo> <http://schema.org/name> "Foo" .
/// <http://example.com/bar> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://schema.org/Person> .
/// <http://example.com/bar> <http://schema.org/name> "Bar" ."#;
///
/// let rdf_type = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// let schema_person = "http://schema.org/Person";
/// let mut count = 0;
/// for quad in NQuadsParser::new().for_slice(file) {
///     let quad = quad?;
///     if quad.predicate == rdf_type && quad.object == schema_person {
///         count += 1;
///     }
/// }
/// assert_eq!(2, count);
/// # Result::<_, oxnquads::NQuadsParseError>::Ok(())
/// ```
#[derive(Default, Clone)]
#[must_use]
pub struct NQuadsParser {
    iri_check: IriCheck,
    check_languages: bool,
}

#[derive(Default, Clone)]
enum IriCheck {
    /// IRIs must carry a scheme
    #[default]
    Scheme,
    /// IRIs are taken as written
    Skip,
    /// IRIs must match the RFC 3987 grammar
    Rfc3987,
    Custom(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl NQuadsParser {
    /// Builds a new [`NQuadsParser`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips IRI validation.
    ///
    /// The default parser only checks that IRIs are absolute. This parser
    /// takes any IRI reference as it is written, including relative ones.
    ///
    /// ```
    /// use oxnquads::NQuadsParser;
    ///
    /// let file = b"<s> <p> <o> .";
    /// let quad = NQuadsParser::new()
    ///     .unchecked()
    ///     .for_slice(file)
    ///     .next()
    ///     .unwrap()?;
    /// assert_eq!(quad.subject, "s");
    /// # Result::<_, oxnquads::NQuadsParseError>::Ok(())
    /// ```
    #[inline]
    pub fn unchecked(mut self) -> Self {
        self.iri_check = IriCheck::Skip;
        self
    }

    /// Validates IRIs against [RFC 3987](https://datatracker.ietf.org/doc/html/rfc3987)
    /// and language tags against [BCP 47](https://datatracker.ietf.org/doc/html/bcp47)
    /// instead of the cheaper default checks.
    ///
    /// ```
    /// use oxnquads::NQuadsParser;
    ///
    /// let file = b"<http://example.com/s> <http://example.com/p> \"o\"@toolongtobealanguage .";
    /// assert!(NQuadsParser::new().for_slice(file).next().unwrap().is_ok());
    /// assert!(NQuadsParser::new()
    ///     .strict()
    ///     .for_slice(file)
    ///     .next()
    ///     .unwrap()
    ///     .is_err());
    /// ```
    #[inline]
    pub fn strict(mut self) -> Self {
        self.iri_check = IriCheck::Rfc3987;
        self.check_languages = true;
        self
    }

    /// Validates IRIs with a custom check.
    ///
    /// ```
    /// use oxnquads::NQuadsParser;
    ///
    /// let parser =
    ///     NQuadsParser::new().with_iri_check(|iri| iri.starts_with("http://example.com/"));
    ///
    /// let file = b"<http://example.com/s> <http://example.com/p> <http://example.com/o> .";
    /// assert!(parser.clone().for_slice(file).next().unwrap().is_ok());
    ///
    /// let file = b"<http://other.org/s> <http://example.com/p> <http://example.com/o> .";
    /// assert!(parser.for_slice(file).next().unwrap().is_err());
    /// ```
    pub fn with_iri_check(mut self, check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.iri_check = IriCheck::Custom(Arc::new(check));
        self
    }

    /// Parses from a [`Read`] implementation.
    ///
    /// Reads are buffered.
    ///
    /// ```
    /// use oxnquads::NQuadsParser;
    ///
    /// let file = b"<http://example.com/s> <http://example.com/p> <http://example.com/o> <http://example.com/g> .";
    /// let quad = NQuadsParser::new()
    ///     .for_reader(file.as_slice())
    ///     .next()
    ///     .unwrap()?;
    /// assert_eq!(quad.graph.as_deref(), Some("http://example.com/g"));
    /// # Result::<_, oxnquads::NQuadsParseError>::Ok(())
    /// ```
    pub fn for_reader<R: Read>(self, reader: R) -> ReaderNQuadsParser<R> {
        ReaderNQuadsParser {
            tokenizer: Tokenizer::new(reader),
            iri_check: self.iri_check,
            check_languages: self.check_languages,
            is_end: false,
        }
    }

    /// Parses from a byte slice.
    ///
    /// ```
    /// use oxnquads::NQuadsParser;
    ///
    /// let file = b"<http://example.com/s> <http://example.com/p> \"o\"@en .";
    /// let quad = NQuadsParser::new().for_slice(file).next().unwrap()?;
    /// assert_eq!(quad.language.as_deref(), Some("en"));
    /// # Result::<_, oxnquads::NQuadsParseError>::Ok(())
    /// ```
    pub fn for_slice(self, slice: &(impl AsRef<[u8]> + ?Sized)) -> SliceNQuadsParser<'_> {
        self.for_reader(slice.as_ref())
    }
}

/// Parses a N-Quads document from a [`Read`] implementation.
///
/// Can be built using [`NQuadsParser::for_reader`].
#[must_use]
pub struct ReaderNQuadsParser<R: Read> {
    tokenizer: Tokenizer<R>,
    iri_check: IriCheck,
    check_languages: bool,
    is_end: bool,
}

/// Parses a N-Quads document from a byte slice.
///
/// Can be built using [`NQuadsParser::for_slice`].
pub type SliceNQuadsParser<'a> = ReaderNQuadsParser<&'a [u8]>;

impl<R: Read> ReaderNQuadsParser<R> {
    /// Parses the next statement of the document and feeds it to the consumer.
    ///
    /// Returns `true` if a statement has been parsed and `false` when the end
    /// of the document has been reached. Errors are fatal: the parser must not
    /// be used again after one has been returned.
    pub fn parse_next(
        &mut self,
        consumer: &mut impl QuadConsumer,
    ) -> Result<bool, NQuadsParseError> {
        while self.tokenizer.has_next()? {
            if self.tokenizer.accept(TokenKind::EndOfLine)?
                || self.tokenizer.accept(TokenKind::Whitespace)?
                || self.tokenizer.accept(TokenKind::Comment)?
            {
                continue;
            }
            self.parse_statement(consumer)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Parses the complete document, feeding each statement to the consumer.
    ///
    /// ```
    /// use oxnquads::{NQuadsParser, QuadConsumerError, QuadRef};
    ///
    /// let file = br#"<http://example.com/foo> <http://schema.org/name> "Foo" .
    /// <http://example.com/bar> <http://schema.org/name> "Bar" ."#;
    ///
    /// let mut count = 0;
    /// NQuadsParser::new().for_slice(file).parse_all(
    ///     &mut |_: QuadRef<'_>| -> Result<(), QuadConsumerError> {
    ///         count += 1;
    ///         Ok(())
    ///     },
    /// )?;
    /// assert_eq!(2, count);
    /// # Result::<_, oxnquads::NQuadsParseError>::Ok(())
    /// ```
    pub fn parse_all(&mut self, consumer: &mut impl QuadConsumer) -> Result<(), NQuadsParseError> {
        while self.parse_next(consumer)? {}
        Ok(())
    }

    fn parse_statement(
        &mut self,
        consumer: &mut impl QuadConsumer,
    ) -> Result<(), NQuadsParseError> {
        let subject = self.parse_resource("subject")?;
        self.skip_whitespace()?;
        let predicate = self.parse_resource("predicate")?;
        self.skip_whitespace()?;
        let object = self.parse_object()?;
        self.skip_whitespace()?;
        let graph = self.parse_graph_name()?;
        if !self.tokenizer.accept(TokenKind::EndOfStatement)? {
            let token = self.tokenizer.next()?;
            return Err(self.syntax_error(format!(
                "Statements must be followed by a dot, found {token}"
            )));
        }
        self.skip_whitespace()?;
        if !self.tokenizer.accept(TokenKind::Comment)? {
            match self.tokenizer.token()?.kind() {
                TokenKind::EndOfLine | TokenKind::EndOfInput => (),
                _ => {
                    let token = self.tokenizer.next()?;
                    return Err(self.syntax_error(format!(
                        "Only a single statement can be written in a line, found {token}"
                    )));
                }
            }
        }
        consumer.quad(QuadRef {
            subject: &subject,
            predicate: &predicate,
            object: &object.value,
            datatype: object.datatype.as_deref(),
            language: object.language.as_deref(),
            direction: object.direction,
            graph: graph.as_deref(),
        })?;
        Ok(())
    }

    fn parse_resource(&mut self, what: &str) -> Result<String, NQuadsParseError> {
        match self.tokenizer.next()? {
            Token::IriRef(iri) => {
                self.check_iri(&iri, what)?;
                Ok(iri)
            }
            Token::BlankNodeLabel(label) => Ok(format!("_:{label}")),
            token => Err(self.syntax_error(format!(
                "The {what} of a statement must be an IRI or a blank node, found {token}"
            ))),
        }
    }

    fn parse_object(&mut self) -> Result<ParsedObject, NQuadsParseError> {
        match self.tokenizer.next()? {
            Token::IriRef(iri) => {
                self.check_iri(&iri, "object")?;
                Ok(ParsedObject::resource(iri))
            }
            Token::BlankNodeLabel(label) => Ok(ParsedObject::resource(format!("_:{label}"))),
            Token::StringLiteral(value) => self.parse_literal_suffix(value),
            token => Err(self.syntax_error(format!(
                "The object of a statement must be an IRI, a blank node or a literal, found {token}"
            ))),
        }
    }

    fn parse_literal_suffix(&mut self, value: String) -> Result<ParsedObject, NQuadsParseError> {
        self.skip_whitespace()?;
        if let Some(Token::LangTag(language)) = self.tokenizer.next_if(TokenKind::LangTag)? {
            self.check_language(&language)?;
            return Ok(ParsedObject {
                value,
                datatype: Some(rdf::LANG_STRING.to_owned()),
                language: Some(language),
                direction: None,
            });
        }
        if self.tokenizer.accept(TokenKind::DatatypeMarker)? {
            self.skip_whitespace()?;
            let datatype = match self.tokenizer.next()? {
                Token::IriRef(datatype) => datatype,
                token => {
                    return Err(self.syntax_error(format!(
                        "A literal datatype must be an IRI, found {token}"
                    )));
                }
            };
            self.check_iri(&datatype, "datatype")?;
            if let Some((language, direction)) = i18n::decode(&datatype) {
                let language = language.map(ToOwned::to_owned);
                return Ok(ParsedObject {
                    value,
                    datatype: Some(i18n::BASE.to_owned()),
                    language,
                    direction,
                });
            }
            return Ok(ParsedObject {
                value,
                datatype: Some(datatype),
                language: None,
                direction: None,
            });
        }
        Ok(ParsedObject {
            value,
            datatype: Some(xsd::STRING.to_owned()),
            language: None,
            direction: None,
        })
    }

    fn parse_graph_name(&mut self) -> Result<Option<String>, NQuadsParseError> {
        Ok(match self.tokenizer.token()?.kind() {
            TokenKind::IriRef | TokenKind::BlankNodeLabel => {
                let graph = self.parse_resource("graph name")?;
                self.skip_whitespace()?;
                Some(graph)
            }
            _ => None,
        })
    }

    fn check_iri(&self, iri: &str, what: &str) -> Result<(), NQuadsParseError> {
        match &self.iri_check {
            IriCheck::Scheme => {
                if starts_with_scheme(iri) {
                    Ok(())
                } else {
                    Err(self.syntax_error(format!(
                        "The {what} must be an absolute IRI, found <{iri}>"
                    )))
                }
            }
            IriCheck::Skip => Ok(()),
            IriCheck::Rfc3987 => match Iri::parse(iri) {
                Ok(_) => Ok(()),
                Err(e) => Err(self.syntax_error(format!("The {what} IRI <{iri}> is invalid: {e}"))),
            },
            IriCheck::Custom(check) => {
                if check(iri) {
                    Ok(())
                } else {
                    Err(self.syntax_error(format!("The {what} IRI <{iri}> is invalid")))
                }
            }
        }
    }

    fn check_language(&self, language: &str) -> Result<(), NQuadsParseError> {
        if !self.check_languages {
            return Ok(());
        }
        if let Err(e) = LanguageTag::parse(language) {
            return Err(self.syntax_error(format!("The language tag '{language}' is invalid: {e}")));
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) -> Result<(), NQuadsParseError> {
        while self.tokenizer.accept(TokenKind::Whitespace)? {}
        Ok(())
    }

    fn syntax_error(&self, message: impl Into<String>) -> NQuadsParseError {
        NQuadsSyntaxError::new(self.tokenizer.location(), message).into()
    }
}

impl<R: Read> Iterator for ReaderNQuadsParser<R> {
    type Item = Result<Quad, NQuadsParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end {
            return None;
        }
        let mut quad = None;
        let result = self.parse_next(&mut |q: QuadRef<'_>| -> Result<(), QuadConsumerError> {
            quad = Some(q.into_owned());
            Ok(())
        });
        match result {
            Ok(true) => quad.map(Ok),
            Ok(false) => {
                self.is_end = true;
                None
            }
            Err(e) => {
                self.is_end = true;
                Some(Err(e))
            }
        }
    }
}

struct ParsedObject {
    value: String,
    datatype: Option<String>,
    language: Option<String>,
    direction: Option<BaseDirection>,
}

impl ParsedObject {
    fn resource(value: String) -> Self {
        Self {
            value,
            datatype: None,
            language: None,
            direction: None,
        }
    }
}

// [scheme] ::= ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"
fn starts_with_scheme(iri: &str) -> bool {
    let mut chars = iri.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    for c in chars {
        match c {
            ':' => return true,
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') => (),
            _ => return false,
        }
    }
    false
}
