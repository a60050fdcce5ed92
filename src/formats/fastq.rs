//! FASTQ adapter
//!
//! Parses 4-line FASTQ records and filters them by sequence length.
//! Surviving records are written back out as valid FASTQ, untouched.

use crate::core::io::open_input;
use crate::core::FastqParseError;
use std::io::{BufRead, Write};
use std::path::Path;

/// One FASTQ record, all four lines retained verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    /// Identifier line, including the leading '@'
    pub id: String,
    /// Sequence line
    pub sequence: String,
    /// Separator line, usually "+"
    pub plus: String,
    /// Quality line
    pub quality: String,
}

impl FastqRecord {
    /// Sequence length in bases
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True for a zero-length sequence
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Write the record as four FASTQ lines
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        writeln!(writer, "{}", self.id)?;
        writeln!(writer, "{}", self.sequence)?;
        writeln!(writer, "{}", self.plus)?;
        writeln!(writer, "{}", self.quality)
    }
}

fn next_record_line<I>(
    lines: &mut I,
    line_number: &mut usize,
    record_start: usize,
    lines_seen: usize,
) -> Result<String, FastqParseError>
where
    I: Iterator<Item = Result<String, std::io::Error>>,
{
    match lines.next() {
        Some(line_result) => {
            *line_number += 1;
            Ok(line_result?.trim_end().to_string())
        }
        None => Err(FastqParseError::TruncatedRecord {
            line: record_start,
            found: lines_seen,
        }),
    }
}

/// Parse a FASTQ stream into records
///
/// Records are strictly 4 lines each; a record cut short by end of file is
/// an error carrying the record's starting line number. Blank lines
/// between records are tolerated.
pub fn parse_fastq_reader<R: BufRead>(reader: R) -> Result<Vec<FastqRecord>, FastqParseError> {
    let mut records = Vec::new();
    let mut lines = reader.lines();
    let mut line_number: usize = 0;

    loop {
        let id = match lines.next() {
            None => break,
            Some(line_result) => {
                line_number += 1;
                line_result?.trim_end().to_string()
            }
        };
        if id.is_empty() {
            continue;
        }

        let record_start = line_number;
        if !id.starts_with('@') {
            return Err(FastqParseError::MissingHeader {
                line: record_start,
                content: id.chars().take(60).collect(),
            });
        }

        let sequence = next_record_line(&mut lines, &mut line_number, record_start, 1)?;
        let plus = next_record_line(&mut lines, &mut line_number, record_start, 2)?;
        let quality = next_record_line(&mut lines, &mut line_number, record_start, 3)?;

        records.push(FastqRecord {
            id,
            sequence,
            plus,
            quality,
        });
    }

    log::debug!("parsed {} FASTQ records", records.len());
    Ok(records)
}

/// Keep only records whose sequence length is at least `min_length`
pub fn filter_by_length(records: Vec<FastqRecord>, min_length: usize) -> Vec<FastqRecord> {
    records
        .into_iter()
        .filter(|record| record.len() >= min_length)
        .collect()
}

/// Filter statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Records parsed
    pub total: usize,
    /// Records written
    pub kept: usize,
    /// Records below the length cutoff
    pub dropped: usize,
}

/// Filter a FASTQ file by minimum sequence length
///
/// # Arguments
/// * `input` - FASTQ file path (plain, gzip or bzip2)
/// * `writer` - Sink for surviving records, written as 4-line FASTQ
/// * `min_length` - Minimum sequence length to keep
pub fn filter_fastq<P: AsRef<Path>, W: Write>(
    input: P,
    writer: &mut W,
    min_length: usize,
) -> Result<FilterStats, FastqParseError> {
    let reader = open_input(input.as_ref())?;
    let records = parse_fastq_reader(reader)?;

    let total = records.len();
    let kept_records = filter_by_length(records, min_length);
    let kept = kept_records.len();

    for record in &kept_records {
        record.write_to(writer)?;
    }
    writer.flush()?;

    Ok(FilterStats {
        total,
        kept,
        dropped: total - kept,
    })
}
