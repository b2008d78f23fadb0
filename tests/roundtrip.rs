#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use oxnquads::{I18nEncoder, NQuadsParser, NQuadsSerializer, QuadConsumerError, QuadRef};
use std::error::Error;
use std::fmt::Write as _;
use std::io::{self, Read, Seek, Write as _};
use std::thread;
use tempfile::tempfile;

/// Hands out input a single byte per read to exercise incremental decoding.
struct OneByteAtATime<R: Read>(R);

impl<R: Read> Read for OneByteAtATime<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len().min(1);
        self.0.read(&mut buf[..len])
    }
}

#[test]
fn test_round_trip() -> Result<(), Box<dyn Error>> {
    let file = br#"<http://example.com/s> <http://example.com/p> <http://example.com/o> .
<http://example.com/s> <http://example.com/p> "a\tb\nc" .
_:b0 <http://example.com/p> "o"@en-US _:b1 .
<http://example.com/s> <http://example.com/p> "hello"^^<https://www.w3.org/ns/i18n#ar_rtl> <http://example.com/g> .
<http://example.com/s> <http://example.com/p> "1"^^<http://www.w3.org/2001/XMLSchema#integer> .
"#;
    let mut serializer = NQuadsSerializer::new().for_writer(Vec::new());
    NQuadsParser::new()
        .for_slice(file)
        .parse_all(&mut serializer)?;
    assert_eq!(serializer.finish(), file);
    Ok(())
}

#[test]
fn test_language_only_i18n_datatypes_become_language_tags() -> Result<(), Box<dyn Error>> {
    let file =
        b"<http://example.com/s> <http://example.com/p> \"o\"^^<https://www.w3.org/ns/i18n#de> .\n";
    let mut serializer = NQuadsSerializer::new().for_writer(Vec::new());
    NQuadsParser::new()
        .for_slice(file)
        .parse_all(&mut serializer)?;
    assert_eq!(
        serializer.finish().as_slice(),
        b"<http://example.com/s> <http://example.com/p> \"o\"@de .\n"
    );
    Ok(())
}

#[test]
fn test_direction_folding_for_plain_consumers() -> Result<(), Box<dyn Error>> {
    let file =
        b"<http://example.com/s> <http://example.com/p> \"o\"^^<https://www.w3.org/ns/i18n#ar_rtl> .\n";
    let mut quads = Vec::new();
    let mut encoder = I18nEncoder::new(|quad: QuadRef<'_>| -> Result<(), QuadConsumerError> {
        quads.push(quad.into_owned());
        Ok(())
    });
    NQuadsParser::new().for_slice(file).parse_all(&mut encoder)?;
    assert_eq!(
        quads[0].datatype.as_deref(),
        Some("https://www.w3.org/ns/i18n#ar_rtl")
    );
    assert_eq!(quads[0].language, None);
    assert_eq!(quads[0].direction, None);
    Ok(())
}

#[test]
fn test_parsing_from_file() -> Result<(), Box<dyn Error>> {
    let mut file = tempfile()?;
    file.write_all(b"<http://example.com/s> <http://example.com/p> \"o\" .\n")?;
    file.rewind()?;
    let quads = NQuadsParser::new()
        .for_reader(file)
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(quads.len(), 1);
    assert_eq!(quads[0].subject, "http://example.com/s");
    Ok(())
}

#[test]
fn test_incremental_reads() -> Result<(), Box<dyn Error>> {
    let file = b"<http://example.com/s> <http://example.com/p> \"a\\tb\"@en .\n";
    let quads = NQuadsParser::new()
        .for_reader(OneByteAtATime(file.as_slice()))
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(quads.len(), 1);
    assert_eq!(quads[0].object, "a\tb");
    assert_eq!(quads[0].language.as_deref(), Some("en"));
    Ok(())
}

#[test]
fn test_large_document_streaming() -> Result<(), Box<dyn Error>> {
    let mut file = String::new();
    for i in 0..1_000 {
        writeln!(
            &mut file,
            "<http://example.com/s/{i}> <http://example.com/p> \"value {i}\" <http://example.com/g> ."
        )?;
    }
    let mut count = 0;
    NQuadsParser::new().for_slice(file.as_bytes()).parse_all(
        &mut |_: QuadRef<'_>| -> Result<(), QuadConsumerError> {
            count += 1;
            Ok(())
        },
    )?;
    assert_eq!(count, 1_000);
    Ok(())
}

#[test]
fn test_parser_sharing_across_threads() {
    let parser = NQuadsParser::new().with_iri_check(|iri| iri.starts_with("http://example.com/"));
    let workers: Vec<_> = (0..2)
        .map(|i| {
            let parser = parser.clone();
            thread::spawn(move || {
                let file = format!("<http://example.com/{i}> <http://example.com/p> \"o\" .");
                parser
                    .for_slice(file.as_bytes())
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect();
    for worker in workers {
        let quads = worker.join().unwrap().unwrap();
        assert_eq!(quads.len(), 1);
    }
}
