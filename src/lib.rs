#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod alphabet;
mod error;
mod model;
mod parser;
mod serializer;
mod tokenizer;
pub mod vocab;

pub use crate::error::{NQuadsParseError, NQuadsSyntaxError, QuadConsumerError, TextPosition};
pub use crate::model::{BaseDirection, I18nEncoder, Quad, QuadConsumer, QuadRef};
pub use crate::parser::{NQuadsParser, ReaderNQuadsParser, SliceNQuadsParser};
pub use crate::serializer::{NQuadsSerializer, WriterNQuadsSerializer, write_literal, write_term};
pub use crate::tokenizer::{Token, TokenKind, Tokenizer};
