use crate::bio::sequence::Sequence;
use crate::{AsvcleanError, Result};
use flate2::read::GzDecoder;
use memmap2::Mmap;
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{line_ending, not_line_ending},
    combinator::{map, opt},
    sequence::preceded,
    IResult,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Parse a FASTA header line
fn parse_header(input: &[u8]) -> IResult<&[u8], (&str, Option<&str>)> {
    let (input, _) = tag(b">")(input)?;
    let (input, id) = map(
        take_till(|c: u8| c == b' ' || c == b'\t' || c == b'\n' || c == b'\r'),
        |s| std::str::from_utf8(s).unwrap_or(""),
    )(input)?;
    let (input, description) = opt(preceded(
        tag(b" "),
        map(not_line_ending, |s| std::str::from_utf8(s).unwrap_or("")),
    ))(input)?;
    let (input, _) = opt(line_ending)(input)?;
    Ok((input, (id, description)))
}

/// Parse sequence lines until the next header or EOF
fn parse_sequence(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let mut sequence = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() && remaining[0] != b'>' {
        let (rest, line) =
            take_till::<_, _, nom::error::Error<_>>(|c: u8| c == b'\n' || c == b'\r')(remaining)?;
        let (rest, _) = opt(line_ending)(rest)?;

        for &c in line {
            if !c.is_ascii_whitespace() {
                sequence.push(c);
            }
        }

        if rest.len() == remaining.len() {
            // lone '\r' that line_ending does not accept; skip it
            remaining = &rest[1..];
        } else {
            remaining = rest;
        }
    }

    Ok((remaining, sequence))
}

/// Parse a single FASTA record
fn parse_record(input: &[u8]) -> IResult<&[u8], Sequence> {
    let (input, (id, description)) = parse_header(input)?;
    let (input, sequence) = parse_sequence(input)?;

    let mut seq = Sequence::new(id.to_string(), sequence);
    if let Some(desc) = description.filter(|d| !d.is_empty()) {
        seq = seq.with_description(desc.to_string());
    }

    Ok((input, seq))
}

/// Parse a whole FASTA collection from bytes. Records with an empty body are
/// kept so that every input identifier is classified exactly once downstream.
pub fn parse_fasta_from_bytes(data: &[u8]) -> Result<Vec<Sequence>> {
    let mut input = data;
    let mut sequences = Vec::new();

    loop {
        while !input.is_empty() && input[0].is_ascii_whitespace() {
            input = &input[1..];
        }
        if input.is_empty() {
            break;
        }
        if input[0] != b'>' {
            return Err(AsvcleanError::Parse(
                "expected '>' at the start of a FASTA record".to_string(),
            ));
        }

        match parse_record(input) {
            Ok((rest, seq)) => {
                sequences.push(seq);
                input = rest;
            }
            Err(e) => {
                return Err(AsvcleanError::Parse(format!(
                    "malformed FASTA record: {:?}",
                    e
                )));
            }
        }
    }

    Ok(sequences)
}

/// Parse a FASTA file into sequences (supports .gz compression)
pub fn parse_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>> {
    let path = path.as_ref();

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let file = File::open(path)?;
        let mut decoder = GzDecoder::new(BufReader::new(file));
        let mut buffer = Vec::new();
        decoder.read_to_end(&mut buffer)?;
        parse_fasta_from_bytes(&buffer)
    } else {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Vec::new());
        }
        let mmap = unsafe { Mmap::map(&file)? };
        parse_fasta_from_bytes(&mmap[..])
    }
}

/// Append one record to a writer. The body stays on a single line, the way
/// dada2 exports ASV sequences.
pub fn write_record<W: Write>(writer: &mut W, seq: &Sequence) -> Result<()> {
    writeln!(writer, "{}", seq.header())?;
    writer.write_all(&seq.sequence)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write a whole collection to a FASTA file
pub fn write_fasta<P: AsRef<Path>>(path: P, sequences: &[Sequence]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for seq in sequences {
        write_record(&mut writer, seq)?;
    }
    writer.flush()?;
    Ok(())
}
