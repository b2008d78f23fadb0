//! Tokenizer for the N-Quads language, exposing a single token of lookahead.

use crate::alphabet::{is_eol, is_pn_chars, is_pn_chars_u, is_whitespace};
use crate::error::{NQuadsParseError, NQuadsSyntaxError, TextPosition};
use std::fmt;
use std::io::Read;
use std::ops::Range;

const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// A token of the N-Quads language.
///
/// Value carrying tokens hold decoded text: escape sequences inside IRI
/// references and string literals are already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An IRI reference, without the wrapping `<` and `>`.
    IriRef(String),
    /// A string literal, without the wrapping quotes.
    StringLiteral(String),
    /// A language tag, without the leading `@`.
    LangTag(String),
    /// A blank node label, without the leading `_:`.
    BlankNodeLabel(String),
    /// The `^^` marker introducing a literal datatype.
    DatatypeMarker,
    /// The `.` terminating a statement.
    EndOfStatement,
    /// A run of space and tab characters.
    Whitespace,
    /// A run of line feed and carriage return characters.
    EndOfLine,
    /// A comment, without the leading `#` and the line jump ending it.
    Comment(String),
    /// The end of the input.
    EndOfInput,
}

impl Token {
    /// The [`TokenKind`] of this token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::IriRef(_) => TokenKind::IriRef,
            Self::StringLiteral(_) => TokenKind::StringLiteral,
            Self::LangTag(_) => TokenKind::LangTag,
            Self::BlankNodeLabel(_) => TokenKind::BlankNodeLabel,
            Self::DatatypeMarker => TokenKind::DatatypeMarker,
            Self::EndOfStatement => TokenKind::EndOfStatement,
            Self::Whitespace => TokenKind::Whitespace,
            Self::EndOfLine => TokenKind::EndOfLine,
            Self::Comment(_) => TokenKind::Comment,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IriRef(value) => write!(f, "the IRI reference <{value}>"),
            Self::StringLiteral(value) => write!(f, "the string literal \"{value}\""),
            Self::LangTag(value) => write!(f, "the language tag @{value}"),
            Self::BlankNodeLabel(value) => write!(f, "the blank node label _:{value}"),
            _ => self.kind().fmt(f),
        }
    }
}

/// The kind of a [`Token`], without the carried value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    IriRef,
    StringLiteral,
    LangTag,
    BlankNodeLabel,
    DatatypeMarker,
    EndOfStatement,
    Whitespace,
    EndOfLine,
    Comment,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::IriRef => "an IRI reference",
            Self::StringLiteral => "a string literal",
            Self::LangTag => "a language tag",
            Self::BlankNodeLabel => "a blank node label",
            Self::DatatypeMarker => "'^^'",
            Self::EndOfStatement => "'.'",
            Self::Whitespace => "a whitespace",
            Self::EndOfLine => "an end of line",
            Self::Comment => "a comment",
            Self::EndOfInput => "the end of input",
        })
    }
}

/// A streaming N-Quads tokenizer with a single token of lookahead.
///
/// Tokens are pulled one by one with [`next`](Self::next) while
/// [`token`](Self::token) gives access to the upcoming token without
/// consuming it. Once the end of the input has been reached,
/// [`next`](Self::next) keeps returning [`Token::EndOfInput`].
///
/// ```
/// use oxnquads::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new(b"<http://example.com/s> .".as_slice());
/// assert_eq!(
///     tokenizer.next()?,
///     Token::IriRef("http://example.com/s".to_owned())
/// );
/// assert_eq!(tokenizer.next()?, Token::Whitespace);
/// assert_eq!(tokenizer.next()?, Token::EndOfStatement);
/// assert_eq!(tokenizer.next()?, Token::EndOfInput);
/// assert!(!tokenizer.has_next()?);
/// # Result::<_, oxnquads::NQuadsParseError>::Ok(())
/// ```
#[must_use]
pub struct Tokenizer<R: Read> {
    reader: CharReader<R>,
    current: Option<Token>,
    current_location: Range<TextPosition>,
    // Statement dot stripped from the end of a blank node label, still to be
    // emitted as a token of its own
    pending_dot: Option<Range<TextPosition>>,
}

impl<R: Read> Tokenizer<R> {
    /// Builds a tokenizer reading from the given input.
    ///
    /// Reads are buffered.
    pub fn new(reader: R) -> Self {
        Self {
            reader: CharReader::new(reader),
            current: None,
            current_location: TextPosition::default()..TextPosition::default(),
            pending_dot: None,
        }
    }

    /// The upcoming token, without consuming it.
    pub fn token(&mut self) -> Result<&Token, NQuadsParseError> {
        self.fill()?;
        Ok(self.current.get_or_insert(Token::EndOfInput))
    }

    /// Consumes and returns the upcoming token.
    ///
    /// Once [`Token::EndOfInput`] has been returned, every following call
    /// returns it again.
    pub fn next(&mut self) -> Result<Token, NQuadsParseError> {
        self.fill()?;
        Ok(self.current.take().unwrap_or(Token::EndOfInput))
    }

    /// Consumes the upcoming token if it has the given kind and returns
    /// whether it did.
    pub fn accept(&mut self, kind: TokenKind) -> Result<bool, NQuadsParseError> {
        Ok(self.next_if(kind)?.is_some())
    }

    /// Consumes and returns the upcoming token if it has the given kind.
    pub fn next_if(&mut self, kind: TokenKind) -> Result<Option<Token>, NQuadsParseError> {
        if self.token()?.kind() == kind {
            Ok(self.current.take())
        } else {
            Ok(None)
        }
    }

    /// Returns whether the upcoming token is something else than
    /// [`Token::EndOfInput`].
    pub fn has_next(&mut self) -> Result<bool, NQuadsParseError> {
        Ok(*self.token()? != Token::EndOfInput)
    }

    /// The location of the token returned by the last [`next`](Self::next)
    /// call, or of the upcoming token right after a [`token`](Self::token)
    /// call.
    pub fn location(&self) -> Range<TextPosition> {
        self.current_location.clone()
    }

    fn fill(&mut self) -> Result<(), NQuadsParseError> {
        if self.current.is_some() {
            return Ok(());
        }
        if let Some(location) = self.pending_dot.take() {
            self.current = Some(Token::EndOfStatement);
            self.current_location = location;
            return Ok(());
        }
        let start = self.reader.position;
        let token = self.read_token()?;
        self.current = Some(token);
        self.current_location = start..self.reader.position;
        Ok(())
    }

    fn read_token(&mut self) -> Result<Token, NQuadsParseError> {
        let Some(c) = self.reader.next()? else {
            return Ok(Token::EndOfInput);
        };
        match c {
            c if is_whitespace(c) => self.read_whitespace(),
            c if is_eol(c) => self.read_end_of_line(),
            '#' => self.read_comment(),
            '<' => self.read_iri_ref(),
            '"' => self.read_string_literal(),
            '@' => self.read_lang_tag(),
            '_' => self.read_blank_node_label(),
            '^' => self.read_datatype_marker(),
            '.' => Ok(Token::EndOfStatement),
            _ => Err(syntax_error(
                self.reader.last_location(),
                format!(
                    "Unexpected character '{c}', expected '<', '\"', '_', '@', '^', '.', '#', a whitespace or an end of line"
                ),
            )),
        }
    }

    fn read_whitespace(&mut self) -> Result<Token, NQuadsParseError> {
        while let Some(c) = self.reader.next()? {
            if !is_whitespace(c) {
                self.reader.push_back(c);
                break;
            }
        }
        Ok(Token::Whitespace)
    }

    fn read_end_of_line(&mut self) -> Result<Token, NQuadsParseError> {
        while let Some(c) = self.reader.next()? {
            if !is_eol(c) {
                self.reader.push_back(c);
                break;
            }
        }
        Ok(Token::EndOfLine)
    }

    fn read_comment(&mut self) -> Result<Token, NQuadsParseError> {
        let mut value = String::new();
        while let Some(c) = self.reader.next()? {
            if is_eol(c) {
                // Consumed but not part of the comment
                break;
            }
            value.push(c);
        }
        Ok(Token::Comment(value))
    }

    // [8] IRIREF ::= '<' ([^#x00-#x20<>"{}|^`\] | UCHAR)* '>'
    fn read_iri_ref(&mut self) -> Result<Token, NQuadsParseError> {
        let mut value = String::new();
        loop {
            let Some(c) = self.reader.next()? else {
                return Err(self.unexpected_end_of_file());
            };
            match c {
                '>' => return Ok(Token::IriRef(value)),
                '\\' => value.push(self.read_escape(false)?),
                '\u{00}'..='\u{20}' | '<' | '"' | '{' | '}' | '|' | '^' | '`' => {
                    return Err(syntax_error(
                        self.reader.last_location(),
                        format!("Unexpected character '{c}' in an IRI reference"),
                    ));
                }
                _ => value.push(c),
            }
        }
    }

    // [9] STRING_LITERAL_QUOTE ::= '"' ([^#x22#x5C#xA#xD] | ECHAR | UCHAR)* '"'
    fn read_string_literal(&mut self) -> Result<Token, NQuadsParseError> {
        let mut value = String::new();
        loop {
            let Some(c) = self.reader.next()? else {
                return Err(self.unexpected_end_of_file());
            };
            match c {
                '"' => return Ok(Token::StringLiteral(value)),
                '\\' => value.push(self.read_escape(true)?),
                '\n' | '\r' => {
                    return Err(syntax_error(
                        self.reader.last_location(),
                        format!(
                            "Unexpected character '{}', line jumps are not allowed in string literals",
                            if c == '\n' { "\\n" } else { "\\r" }
                        ),
                    ));
                }
                _ => value.push(c),
            }
        }
    }

    // [144s] LANGTAG ::= '@' [a-zA-Z]+ ('-' [a-zA-Z0-9]+)*
    fn read_lang_tag(&mut self) -> Result<Token, NQuadsParseError> {
        let Some(first) = self.reader.next()? else {
            return Err(self.unexpected_end_of_file());
        };
        if !first.is_ascii_alphabetic() {
            return Err(syntax_error(
                self.reader.last_location(),
                "A language code should always start with a letter",
            ));
        }
        let mut value = String::new();
        value.push(first);
        let mut separator = None;
        loop {
            let Some(c) = self.reader.next()? else {
                return Err(self.unexpected_end_of_file());
            };
            if c == '-' {
                separator = Some(self.reader.last_location());
                value.push(c);
            } else if c.is_ascii_alphanumeric() {
                separator = None;
                value.push(c);
            } else {
                self.reader.push_back(c);
                break;
            }
        }
        if let Some(location) = separator {
            return Err(syntax_error(
                location,
                format!("The language tag '{value}' must not end with '-'"),
            ));
        }
        Ok(Token::LangTag(value))
    }

    // [141s] BLANK_NODE_LABEL ::= '_:' (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?
    fn read_blank_node_label(&mut self) -> Result<Token, NQuadsParseError> {
        let Some(c) = self.reader.next()? else {
            return Err(self.unexpected_end_of_file());
        };
        if c != ':' {
            return Err(syntax_error(
                self.reader.last_location(),
                format!("Unexpected character '{c}', expected ':'"),
            ));
        }
        let Some(first) = self.reader.next()? else {
            return Err(self.unexpected_end_of_file());
        };
        if !is_pn_chars_u(first) && !first.is_ascii_digit() {
            return Err(syntax_error(
                self.reader.last_location(),
                format!("Unexpected character '{first}', expected a blank node label"),
            ));
        }
        let mut value = String::new();
        value.push(first);
        let mut dot_location = None;
        loop {
            let Some(c) = self.reader.next()? else {
                return Err(self.unexpected_end_of_file());
            };
            if c == '.' {
                dot_location = Some(self.reader.last_location());
                value.push(c);
            } else if is_pn_chars(c) {
                dot_location = None;
                value.push(c);
            } else {
                self.reader.push_back(c);
                break;
            }
        }
        if let Some(location) = dot_location {
            // The label does not end with a dot: it is the statement terminator
            value.pop();
            self.pending_dot = Some(location);
        }
        Ok(Token::BlankNodeLabel(value))
    }

    fn read_datatype_marker(&mut self) -> Result<Token, NQuadsParseError> {
        let Some(c) = self.reader.next()? else {
            return Err(self.unexpected_end_of_file());
        };
        if c == '^' {
            Ok(Token::DatatypeMarker)
        } else {
            Err(syntax_error(
                self.reader.last_location(),
                format!("Unexpected character '{c}', expected '^'"),
            ))
        }
    }

    // [10]   UCHAR ::= '\u' HEX HEX HEX HEX | '\U' HEX HEX HEX HEX HEX HEX HEX HEX
    // [153s] ECHAR ::= '\' [tbnrf"'\]
    fn read_escape(&mut self, with_echar: bool) -> Result<char, NQuadsParseError> {
        let start = self.reader.previous_position;
        let Some(c) = self.reader.next()? else {
            return Err(self.unexpected_end_of_file());
        };
        match c {
            'u' => self.read_hex_char(4, 'u', start),
            'U' => self.read_hex_char(8, 'U', start),
            't' if with_echar => Ok('\t'),
            'b' if with_echar => Ok('\u{08}'),
            'n' if with_echar => Ok('\n'),
            'r' if with_echar => Ok('\r'),
            'f' if with_echar => Ok('\u{0C}'),
            '"' if with_echar => Ok('"'),
            '\'' if with_echar => Ok('\''),
            '\\' if with_echar => Ok('\\'),
            _ => Err(syntax_error(
                start..self.reader.position,
                format!("Unexpected escape character '\\{c}'"),
            )),
        }
    }

    fn read_hex_char(
        &mut self,
        len: usize,
        escape_char: char,
        start: TextPosition,
    ) -> Result<char, NQuadsParseError> {
        let mut codepoint = 0_u32;
        let mut val = String::with_capacity(len);
        for _ in 0..len {
            let Some(c) = self.reader.next()? else {
                return Err(self.unexpected_end_of_file());
            };
            val.push(c);
            codepoint = codepoint * 16
                + match c {
                    '0'..='9' => u32::from(c) - u32::from('0'),
                    'a'..='f' => u32::from(c) - u32::from('a') + 10,
                    'A'..='F' => u32::from(c) - u32::from('A') + 10,
                    _ => {
                        return Err(syntax_error(
                            self.reader.last_location(),
                            format!(
                                "The escape sequence '\\{escape_char}{val}' is not a valid hexadecimal string"
                            ),
                        ));
                    }
                };
        }
        char::from_u32(codepoint).ok_or_else(|| {
            syntax_error(
                start..self.reader.position,
                format!(
                    "The escape sequence '\\{escape_char}{val}' is encoding {codepoint:X} that is not a valid unicode character"
                ),
            )
        })
    }

    fn unexpected_end_of_file(&self) -> NQuadsParseError {
        syntax_error(
            self.reader.position..self.reader.position,
            "Unexpected end of file",
        )
    }
}

fn syntax_error(location: Range<TextPosition>, message: impl Into<String>) -> NQuadsParseError {
    NQuadsSyntaxError::new(location, message).into()
}

/// Streaming UTF-8 decoder over a [`Read`] implementation with a single
/// character of pushback.
///
/// Decoding is done directly on the byte buffer so that invalid input is
/// reported with its location instead of being replaced or panicking.
struct CharReader<R: Read> {
    reader: R,
    buffer: Vec<u8>,
    start: usize,
    is_ending: bool,
    position: TextPosition,
    previous_position: TextPosition,
    pushed_back: Option<char>,
}

impl<R: Read> CharReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            start: 0,
            is_ending: false,
            position: TextPosition::default(),
            previous_position: TextPosition::default(),
            pushed_back: None,
        }
    }

    fn next(&mut self) -> Result<Option<char>, NQuadsParseError> {
        if let Some(c) = self.pushed_back.take() {
            self.advance(c);
            return Ok(Some(c));
        }
        loop {
            match self.decode_next() {
                Some(Ok((c, length))) => {
                    self.start += length;
                    self.advance(c);
                    return Ok(Some(c));
                }
                Some(Err(e)) => return Err(e),
                None => {
                    if self.is_ending {
                        if self.start == self.buffer.len() {
                            return Ok(None);
                        }
                        // Truncated character at the end of the input
                        return Err(self.invalid_utf8());
                    }
                    self.fill_buffer()?;
                }
            }
        }
    }

    /// Pushes the last read character back so that it is returned again.
    ///
    /// Only a single character can be pushed back at a time.
    fn push_back(&mut self, c: char) {
        self.pushed_back = Some(c);
        self.position = self.previous_position;
    }

    fn last_location(&self) -> Range<TextPosition> {
        self.previous_position..self.position
    }

    fn decode_next(&self) -> Option<Result<(char, usize), NQuadsParseError>> {
        let data = &self.buffer[self.start..];
        let mut code_point: u32;
        let bytes_needed: usize;
        let mut lower_boundary = 0x80;
        let mut upper_boundary = 0xBF;

        let byte = *data.first()?;
        match byte {
            0x00..=0x7F => return Some(Ok((char::from(byte), 1))),
            0xC2..=0xDF => {
                bytes_needed = 1;
                code_point = u32::from(byte) & 0x1F;
            }
            0xE0..=0xEF => {
                if byte == 0xE0 {
                    lower_boundary = 0xA0;
                }
                if byte == 0xED {
                    upper_boundary = 0x9F;
                }
                bytes_needed = 2;
                code_point = u32::from(byte) & 0xF;
            }
            0xF0..=0xF4 => {
                if byte == 0xF0 {
                    lower_boundary = 0x90;
                }
                if byte == 0xF4 {
                    upper_boundary = 0x8F;
                }
                bytes_needed = 3;
                code_point = u32::from(byte) & 0x7;
            }
            _ => return Some(Err(self.invalid_utf8())),
        }

        for i in 1..=bytes_needed {
            let byte = *data.get(i)?;
            if byte < lower_boundary || upper_boundary < byte {
                return Some(Err(self.invalid_utf8()));
            }
            lower_boundary = 0x80;
            upper_boundary = 0xBF;
            code_point = (code_point << 6) | (u32::from(byte) & 0x3F);
        }

        Some(
            char::from_u32(code_point)
                .map(|c| (c, bytes_needed + 1))
                .ok_or_else(|| {
                    syntax_error(
                        self.position..self.position,
                        format!("The codepoint {code_point:X} is not a valid unicode character"),
                    )
                }),
        )
    }

    fn fill_buffer(&mut self) -> Result<(), NQuadsParseError> {
        if self.start > 0 {
            self.buffer.copy_within(self.start.., 0);
            self.buffer.truncate(self.buffer.len() - self.start);
            self.start = 0;
        }
        let new_start = self.buffer.len();
        self.buffer.resize(new_start + DEFAULT_BUFFER_SIZE, 0);
        let read = self.reader.read(&mut self.buffer[new_start..])?;
        self.buffer.truncate(new_start + read);
        self.is_ending = read == 0;
        Ok(())
    }

    fn advance(&mut self, c: char) {
        self.previous_position = self.position;
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        self.position.offset += c.len_utf8() as u64;
    }

    fn invalid_utf8(&self) -> NQuadsParseError {
        syntax_error(
            self.position..self.position,
            "Invalid UTF-8 character encoding",
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;

    fn tokens(input: impl AsRef<[u8]>) -> Result<Vec<Token>, NQuadsParseError> {
        let mut tokenizer = Tokenizer::new(input.as_ref());
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.next()?;
            if token == Token::EndOfInput {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }

    fn error_message(input: &str) -> String {
        tokens(input).unwrap_err().to_string()
    }

    #[test]
    fn simple_statement() -> Result<(), NQuadsParseError> {
        assert_eq!(
            tokens("<http://example.com/s> <http://example.com/p> \"o\"@en-US . # done\n")?,
            [
                Token::IriRef("http://example.com/s".to_owned()),
                Token::Whitespace,
                Token::IriRef("http://example.com/p".to_owned()),
                Token::Whitespace,
                Token::StringLiteral("o".to_owned()),
                Token::LangTag("en-US".to_owned()),
                Token::Whitespace,
                Token::EndOfStatement,
                Token::Whitespace,
                Token::Comment(" done".to_owned()),
            ]
        );
        Ok(())
    }

    #[test]
    fn datatyped_literal() -> Result<(), NQuadsParseError> {
        assert_eq!(
            tokens("\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>")?,
            [
                Token::StringLiteral("1".to_owned()),
                Token::DatatypeMarker,
                Token::IriRef("http://www.w3.org/2001/XMLSchema#integer".to_owned()),
            ]
        );
        Ok(())
    }

    #[test]
    fn blank_node_label_trailing_dots() -> Result<(), NQuadsParseError> {
        assert_eq!(
            tokens("_:b1 .")?,
            [
                Token::BlankNodeLabel("b1".to_owned()),
                Token::Whitespace,
                Token::EndOfStatement,
            ]
        );
        assert_eq!(
            tokens("_:b1. ")?,
            [
                Token::BlankNodeLabel("b1".to_owned()),
                Token::EndOfStatement,
                Token::Whitespace,
            ]
        );
        assert_eq!(
            tokens("_:b1.2 ")?,
            [Token::BlankNodeLabel("b1.2".to_owned()), Token::Whitespace]
        );
        assert_eq!(
            tokens("_:b1..x ")?,
            [Token::BlankNodeLabel("b1..x".to_owned()), Token::Whitespace]
        );
        Ok(())
    }

    #[test]
    fn unterminated_blank_node_label() {
        assert!(error_message("_:b1").contains("Unexpected end of file"));
        assert!(error_message("_:b1.").contains("Unexpected end of file"));
        assert_eq!(
            error_message("_x"),
            "Parser error at line 1, column 2: Unexpected character 'x', expected ':'"
        );
        assert_eq!(
            error_message("_:-"),
            "Parser error at line 1, column 3: Unexpected character '-', expected a blank node label"
        );
    }

    #[test]
    fn string_escapes() -> Result<(), NQuadsParseError> {
        assert_eq!(
            tokens("\"a\\tb\\u0041\\U00010348\\\"\"")?,
            [Token::StringLiteral("a\tbA\u{10348}\"".to_owned())]
        );
        Ok(())
    }

    #[test]
    fn invalid_escapes() {
        assert_eq!(
            error_message("\"\\q\""),
            "Parser error at line 1 between columns 2 and 4: Unexpected escape character '\\q'"
        );
        assert_eq!(
            error_message("<http://example.com/\\n>"),
            "Parser error at line 1 between columns 21 and 23: Unexpected escape character '\\n'"
        );
        assert_eq!(
            error_message("\"\\u00g0\""),
            "Parser error at line 1, column 6: The escape sequence '\\u00g' is not a valid hexadecimal string"
        );
        assert_eq!(
            error_message("\"\\uD800\""),
            "Parser error at line 1 between columns 2 and 8: The escape sequence '\\uD800' is encoding D800 that is not a valid unicode character"
        );
    }

    #[test]
    fn language_tags() {
        assert_eq!(
            error_message("\"o\"@1 "),
            "Parser error at line 1, column 5: A language code should always start with a letter"
        );
        assert_eq!(
            error_message("\"o\"@en- "),
            "Parser error at line 1, column 7: The language tag 'en-' must not end with '-'"
        );
        assert!(error_message("\"o\"@en").contains("Unexpected end of file"));
    }

    #[test]
    fn iri_forbidden_characters() {
        assert_eq!(
            error_message("<http://example.com/a b>"),
            "Parser error at line 1, column 22: Unexpected character ' ' in an IRI reference"
        );
        assert!(error_message("<http://example.com/s").contains("Unexpected end of file"));
    }

    #[test]
    fn line_jump_in_string_literal() {
        assert_eq!(
            error_message("\"a\nb\""),
            "Parser error at line 1, column 3: Unexpected character '\\n', line jumps are not allowed in string literals"
        );
    }

    #[test]
    fn unexpected_leading_character() {
        assert_eq!(
            error_message("x"),
            "Parser error at line 1, column 1: Unexpected character 'x', expected '<', '\"', '_', '@', '^', '.', '#', a whitespace or an end of line"
        );
        assert_eq!(
            error_message("^x"),
            "Parser error at line 1, column 2: Unexpected character 'x', expected '^'"
        );
    }

    #[test]
    fn comments_and_line_jumps() -> Result<(), NQuadsParseError> {
        assert_eq!(
            tokens("# first\r\n\n# last")?,
            [
                Token::Comment(" first".to_owned()),
                Token::EndOfLine,
                Token::Comment(" last".to_owned()),
            ]
        );
        Ok(())
    }

    #[test]
    fn multi_byte_characters_positions() -> Result<(), NQuadsParseError> {
        let mut tokenizer = Tokenizer::new("\"\u{10348}\" .".as_bytes());
        assert_eq!(
            tokenizer.next()?,
            Token::StringLiteral("\u{10348}".to_owned())
        );
        let location = tokenizer.location();
        assert_eq!(
            location.start,
            TextPosition {
                line: 0,
                column: 0,
                offset: 0,
            }
        );
        assert_eq!(
            location.end,
            TextPosition {
                line: 0,
                column: 3,
                offset: 6,
            }
        );
        Ok(())
    }

    #[test]
    fn lookahead_contract() -> Result<(), NQuadsParseError> {
        let mut tokenizer = Tokenizer::new(b"<http://example.com/s> .".as_slice());
        assert!(tokenizer.has_next()?);
        assert_eq!(
            *tokenizer.token()?,
            Token::IriRef("http://example.com/s".to_owned())
        );
        assert_eq!(
            tokenizer.next()?,
            Token::IriRef("http://example.com/s".to_owned())
        );
        assert!(!tokenizer.accept(TokenKind::EndOfStatement)?);
        assert!(tokenizer.accept(TokenKind::Whitespace)?);
        assert_eq!(
            tokenizer.next_if(TokenKind::EndOfStatement)?,
            Some(Token::EndOfStatement)
        );
        assert_eq!(tokenizer.next_if(TokenKind::IriRef)?, None);
        assert!(!tokenizer.has_next()?);
        assert_eq!(tokenizer.next()?, Token::EndOfInput);
        assert_eq!(tokenizer.next()?, Token::EndOfInput);
        Ok(())
    }

    #[test]
    fn invalid_utf8_input() {
        assert_eq!(
            tokens([b'<', 0xFF, b'>']).unwrap_err().to_string(),
            "Parser error at line 1, column 2: Invalid UTF-8 character encoding"
        );
        tokens([0xE2, 0x82]).unwrap_err();
    }

    #[test]
    fn long_input_crossing_buffer_boundaries() -> Result<(), NQuadsParseError> {
        let long = "a".repeat(20_000);
        let input = format!("<http://example.com/{long}> \"{long}\"");
        assert_eq!(
            tokens(input.as_str())?,
            [
                Token::IriRef(format!("http://example.com/{long}")),
                Token::Whitespace,
                Token::StringLiteral(long),
            ]
        );
        Ok(())
    }
}
