//! Coordinate query adapter
//!
//! Reads query rows (chromosome, coordinate), looks each one up in a
//! frozen [`LocusIndex`], and writes one tab-separated output line per
//! query that matched at least one gene:
//!
//! ```text
//! chr1<TAB>11900<TAB>DDX11L1<TAB>WASH7P
//! ```
//!
//! Queries with no match, whether from an unknown chromosome or a
//! coordinate outside every interval, produce no output at all.

use crate::core::io::{create_output, open_input};
use crate::core::{LocusIndex, QueryParseError};
use rayon::prelude::*;
use std::io::{BufRead, Write};
use std::path::Path;

/// Chunk size for parallel processing
const CHUNK_SIZE: usize = 10000;

/// One parsed query row, borrowed from its input line
///
/// Query rows carry at least two whitespace-delimited fields:
/// field 0 = chromosome, field 1 = coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRecordView<'a> {
    /// Chromosome name, matched against the index by exact equality
    pub chrom: &'a str,
    /// Queried genomic position
    pub coordinate: u64,
}

impl<'a> QueryRecordView<'a> {
    /// Parse a query line
    pub fn parse(line: &'a str) -> Result<Self, QueryParseError> {
        let mut fields = line.split_whitespace();

        let chrom = fields.next().ok_or(QueryParseError::EmptyLine)?;
        let coordinate_field = fields.next().ok_or(QueryParseError::TooFewFields {
            expected: 2,
            found: 1,
        })?;

        let coordinate =
            coordinate_field
                .parse::<u64>()
                .map_err(|_| QueryParseError::InvalidCoordinate {
                    value: coordinate_field.to_string(),
                })?;

        Ok(Self { chrom, coordinate })
    }
}

/// Result of one matching query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub chrom: String,
    pub coordinate: u64,
    /// Matched gene names, ascending by interval low bound
    pub genes: Vec<String>,
}

impl MatchResult {
    /// Render as a tab-separated output line (no trailing newline)
    pub fn to_line(&self) -> String {
        format!("{}\t{}\t{}", self.chrom, self.coordinate, self.genes.join("\t"))
    }
}

/// Look one query up in the index
///
/// Returns `None` when no gene interval contains the coordinate; an empty
/// match set is an ordinary outcome, not an error.
pub fn lookup(index: &LocusIndex, query: &QueryRecordView) -> Option<MatchResult> {
    let genes: Vec<String> = index
        .query(query.chrom, query.coordinate)
        .into_iter()
        .map(String::from)
        .collect();

    if genes.is_empty() {
        return None;
    }

    Some(MatchResult {
        chrom: query.chrom.to_string(),
        coordinate: query.coordinate,
        genes,
    })
}

/// Search statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Query rows processed (comments and blank lines excluded)
    pub total: usize,
    /// Rows that produced an output line
    pub matched: usize,
    /// Well-formed rows with no matching gene
    pub unmatched: usize,
    /// Malformed rows, skipped
    pub failed: usize,
}

/// Per-line outcome, computed before anything is written
enum LineOutcome {
    Emit(String),
    NoMatch,
    Malformed,
}

fn classify(index: &LocusIndex, line: &str) -> LineOutcome {
    match QueryRecordView::parse(line) {
        Ok(query) => match lookup(index, &query) {
            Some(result) => LineOutcome::Emit(result.to_line()),
            None => LineOutcome::NoMatch,
        },
        Err(e) => {
            log::warn!("skipping malformed query row '{}': {}", line, e);
            LineOutcome::Malformed
        }
    }
}

/// Run a query file against a frozen index
///
/// The output sink is opened once, written through a buffer, and closed
/// when the driver returns; matched lines appear in input order. With
/// `threads > 1` the lookups run in parallel chunks against the shared
/// index while writes stay sequential. Malformed rows are skipped and
/// counted, everything else continues.
///
/// # Arguments
/// * `index` - Frozen gene interval index
/// * `input` - Query file path (plain, gzip or bzip2)
/// * `output` - Output file path
/// * `threads` - Number of threads (1 = sequential)
pub fn search_coordinates<P: AsRef<Path>>(
    index: &LocusIndex,
    input: P,
    output: P,
    threads: usize,
) -> Result<SearchStats, std::io::Error> {
    let reader = open_input(input.as_ref())?;
    let mut writer = create_output(output.as_ref())?;

    let mut stats = SearchStats::default();

    // Collect data lines, dropping comments and blanks up front
    let mut data_lines: Vec<String> = Vec::new();
    for line_result in reader.lines() {
        let line = line_result?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        data_lines.push(trimmed.to_string());
    }

    let outcomes: Vec<LineOutcome> = if threads <= 1 {
        data_lines.iter().map(|line| classify(index, line)).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("failed to build rayon thread pool");
        pool.install(|| {
            data_lines
                .par_chunks(CHUNK_SIZE)
                .flat_map(|chunk| {
                    chunk
                        .iter()
                        .map(|line| classify(index, line))
                        .collect::<Vec<_>>()
                })
                .collect()
        })
    };

    for outcome in outcomes {
        stats.total += 1;
        match outcome {
            LineOutcome::Emit(line) => {
                writeln!(writer, "{}", line)?;
                stats.matched += 1;
            }
            LineOutcome::NoMatch => stats.unmatched += 1,
            LineOutcome::Malformed => stats.failed += 1,
        }
    }

    writer.flush()?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_gtf_bytes;

    fn create_test_index() -> LocusIndex {
        let gtf_data = b"\
chr1 . exon 100 200 . + . gene_id \"geneA\";
chr1 . exon 500 600 . + . gene_id \"geneA\";
chr1 . gene 50 150 . - . gene_id \"geneB\";
";
        LocusIndex::from_records(parse_gtf_bytes(gtf_data).unwrap())
    }

    #[test]
    fn test_parse_query_row() {
        let query = QueryRecordView::parse("chr1\t300").unwrap();
        assert_eq!(query.chrom, "chr1");
        assert_eq!(query.coordinate, 300);
    }

    #[test]
    fn test_parse_query_row_extra_fields_ignored() {
        let query = QueryRecordView::parse("chr2 42 extra fields here").unwrap();
        assert_eq!(query.chrom, "chr2");
        assert_eq!(query.coordinate, 42);
    }

    #[test]
    fn test_parse_query_row_too_few_fields() {
        assert!(matches!(
            QueryRecordView::parse("chr1"),
            Err(QueryParseError::TooFewFields { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_parse_query_row_bad_coordinate() {
        assert!(matches!(
            QueryRecordView::parse("chr1\tabc"),
            Err(QueryParseError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_parse_query_row_empty() {
        assert!(matches!(
            QueryRecordView::parse("   "),
            Err(QueryParseError::EmptyLine)
        ));
    }

    #[test]
    fn test_lookup_match() {
        let index = create_test_index();
        let query = QueryRecordView { chrom: "chr1", coordinate: 120 };

        let result = lookup(&index, &query).unwrap();
        assert_eq!(result.chrom, "chr1");
        assert_eq!(result.coordinate, 120);
        assert_eq!(result.genes, vec!["geneB", "geneA"]);
    }

    #[test]
    fn test_lookup_no_match_is_none() {
        let index = create_test_index();

        let outside = QueryRecordView { chrom: "chr1", coordinate: 5000 };
        assert!(lookup(&index, &outside).is_none());

        let unknown = QueryRecordView { chrom: "chr9", coordinate: 120 };
        assert!(lookup(&index, &unknown).is_none());
    }

    #[test]
    fn test_match_result_line_format() {
        let result = MatchResult {
            chrom: "chr1".to_string(),
            coordinate: 120,
            genes: vec!["geneB".to_string(), "geneA".to_string()],
        };
        assert_eq!(result.to_line(), "chr1\t120\tgeneB\tgeneA");
    }

    #[test]
    fn test_match_result_single_gene_line() {
        let result = MatchResult {
            chrom: "chr1".to_string(),
            coordinate: 300,
            genes: vec!["geneA".to_string()],
        };
        assert_eq!(result.to_line(), "chr1\t300\tgeneA");
    }
}
