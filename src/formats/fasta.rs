//! FASTA frequency adapter
//!
//! Counts how often each exact sequence line occurs in a FASTA file and
//! reports the most frequent ones, tab-separated:
//!
//! ```text
//! ACGTACGT<TAB>42
//! ```

use crate::core::io::open_input;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::Path;

/// Default number of sequences reported
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Frequency report statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FastaStats {
    /// Sequence lines counted (headers and blanks excluded)
    pub total: usize,
    /// Distinct sequences observed
    pub distinct: usize,
    /// Sequences written to the report
    pub reported: usize,
}

/// Count occurrences of each sequence line
///
/// Header lines (`>`) and blank lines are skipped; everything else is
/// counted verbatim, one line at a time.
pub fn count_sequences<R: BufRead>(reader: R) -> Result<HashMap<String, u64>, std::io::Error> {
    let mut counts: HashMap<String, u64> = HashMap::new();

    for line_result in reader.lines() {
        let line = line_result?;
        let sequence = line.trim_end();
        if sequence.is_empty() || sequence.starts_with('>') {
            continue;
        }
        *counts.entry(sequence.to_string()).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Rank sequences by descending count, keeping the top `limit`
///
/// Equal counts are ordered by sequence so the report is deterministic.
pub fn top_sequences(counts: &HashMap<String, u64>, limit: usize) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = counts
        .iter()
        .map(|(sequence, &count)| (sequence.clone(), count))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Write a top-sequences report for a FASTA file
///
/// # Arguments
/// * `input` - FASTA file path (plain, gzip or bzip2)
/// * `writer` - Report sink, one `sequence<TAB>count` line per entry
/// * `limit` - Maximum number of sequences reported
pub fn report_top_sequences<P: AsRef<Path>, W: Write>(
    input: P,
    writer: &mut W,
    limit: usize,
) -> Result<FastaStats, std::io::Error> {
    let reader = open_input(input.as_ref())?;
    let counts = count_sequences(reader)?;

    let total = counts.values().map(|&c| c as usize).sum();
    let ranked = top_sequences(&counts, limit);

    for (sequence, count) in &ranked {
        writeln!(writer, "{}\t{}", sequence, count)?;
    }
    writer.flush()?;

    Ok(FastaStats {
        total,
        distinct: counts.len(),
        reported: ranked.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    const FASTA: &[u8] = b"\
>read1
ACGT
>read2
ACGT
>read3
TTTT
";

    #[test]
    fn test_count_sequences() {
        let counts = count_sequences(BufReader::new(FASTA)).unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["ACGT"], 2);
        assert_eq!(counts["TTTT"], 1);
    }

    #[test]
    fn test_count_skips_headers_and_blanks() {
        let data = b">only headers\n\n>another\n";
        let counts = count_sequences(BufReader::new(&data[..])).unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_top_sequences_ordering() {
        let counts = count_sequences(BufReader::new(FASTA)).unwrap();
        let ranked = top_sequences(&counts, 10);

        assert_eq!(
            ranked,
            vec![("ACGT".to_string(), 2), ("TTTT".to_string(), 1)]
        );
    }

    #[test]
    fn test_top_sequences_tie_broken_by_sequence() {
        let mut counts = HashMap::new();
        counts.insert("GGGG".to_string(), 3);
        counts.insert("AAAA".to_string(), 3);
        counts.insert("CCCC".to_string(), 3);

        let ranked = top_sequences(&counts, 10);
        assert_eq!(
            ranked,
            vec![
                ("AAAA".to_string(), 3),
                ("CCCC".to_string(), 3),
                ("GGGG".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_top_sequences_truncates_to_limit() {
        let counts = count_sequences(BufReader::new(FASTA)).unwrap();
        let ranked = top_sequences(&counts, 1);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].0, "ACGT");
    }

    #[test]
    fn test_report_top_sequences() {
        let mut temp = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut temp, FASTA).unwrap();
        std::io::Write::flush(&mut temp).unwrap();

        let mut out = Vec::new();
        let stats = report_top_sequences(temp.path(), &mut out, 10).unwrap();

        assert_eq!(stats, FastaStats { total: 3, distinct: 2, reported: 2 });
        assert_eq!(String::from_utf8(out).unwrap(), "ACGT\t2\nTTTT\t1\n");
    }
}
