//! Annotation file parsing
//!
//! Parses GTF-style annotation files into the records the gene index is
//! built from.
//!
//! # Row Format
//!
//! ```text
//! chr1  havana  gene  11869  14409  .  +  .  gene_id "DDX11L1"; ...
//! ```
//!
//! Rows are split on arbitrary whitespace. Only four fields matter here:
//! field 0 (chromosome), field 3 (start), field 4 (end) and field 9 (the
//! gene name, i.e. the value token after the `gene_id` key). A row must
//! carry at least 10 fields; start and end may arrive in either order and
//! are not reordered at parse time.

use crate::core::error::GtfParseError;
use crate::core::io::open_input;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Index of the chromosome field
const FIELD_CHROM: usize = 0;
/// Index of the start coordinate field
const FIELD_START: usize = 3;
/// Index of the end coordinate field
const FIELD_END: usize = 4;
/// Index of the gene name field
const FIELD_GENE: usize = 9;
/// Minimum number of whitespace-delimited fields per data row
const MIN_FIELDS: usize = 10;

/// One parsed annotation row
///
/// Transient: rows exist only long enough to be folded into a
/// [`LocusIndexBuilder`](crate::core::LocusIndexBuilder). The gene name is
/// already cleaned of quote and semicolon decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GtfRecord {
    /// Chromosome name, matched by exact string equality at query time
    pub chrom: String,
    /// First coordinate of the row, not necessarily <= `end`
    pub start: u64,
    /// Second coordinate of the row
    pub end: u64,
    /// Gene name, decoration stripped
    pub gene: String,
}

/// Strip attribute decoration from a raw gene name field
///
/// Removes surrounding whitespace, then trailing semicolons, then
/// surrounding quote characters. Idempotent: cleaning an already clean
/// name changes nothing.
///
/// # Examples
/// ```
/// use locusmap::clean_gene_name;
/// assert_eq!(clean_gene_name("\"DDX11L1\";"), "DDX11L1");
/// assert_eq!(clean_gene_name("DDX11L1"), "DDX11L1");
/// ```
pub fn clean_gene_name(raw: &str) -> &str {
    raw.trim().trim_end_matches(';').trim_matches('"')
}

/// Parse an annotation stream from a reader
///
/// Blank lines and `#` comment lines are skipped. Any malformed data row
/// aborts the parse: the index reduction step depends on every endpoint
/// being a valid integer, so nothing partially parsed may reach it.
pub fn parse_gtf_reader<R: BufRead>(reader: R) -> Result<Vec<GtfRecord>, GtfParseError> {
    let mut records = Vec::new();
    let mut line_number: usize = 0;

    for line_result in reader.lines() {
        line_number += 1;
        let line = line_result?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return Err(GtfParseError::TooFewFields {
                line: line_number,
                expected: MIN_FIELDS,
                found: fields.len(),
            });
        }

        let start = fields[FIELD_START]
            .parse::<u64>()
            .map_err(|_| GtfParseError::InvalidCoordinate {
                line: line_number,
                field: "start",
                value: fields[FIELD_START].to_string(),
            })?;

        let end = fields[FIELD_END]
            .parse::<u64>()
            .map_err(|_| GtfParseError::InvalidCoordinate {
                line: line_number,
                field: "end",
                value: fields[FIELD_END].to_string(),
            })?;

        records.push(GtfRecord {
            chrom: fields[FIELD_CHROM].to_string(),
            start,
            end,
            gene: clean_gene_name(fields[FIELD_GENE]).to_string(),
        });
    }

    log::debug!("parsed {} annotation rows", records.len());
    Ok(records)
}

/// Parse an annotation file from a path
///
/// Automatically detects and handles gzip and bzip2 compression.
pub fn parse_gtf_file(path: &Path) -> Result<Vec<GtfRecord>, GtfParseError> {
    if !path.exists() {
        return Err(GtfParseError::FileNotFound(path.to_path_buf()));
    }
    let reader = open_input(path)?;
    parse_gtf_reader(reader)
}

/// Parse an annotation stream from bytes (for testing)
pub fn parse_gtf_bytes(data: &[u8]) -> Result<Vec<GtfRecord>, GtfParseError> {
    parse_gtf_reader(BufReader::new(data))
}
