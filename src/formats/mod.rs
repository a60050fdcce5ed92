//! File format adapters
//!
//! Adapters for the input and output streams the CLI consumes: coordinate
//! query files, FASTA frequency reports, and FASTQ length filtering.

pub mod fasta;
pub mod fastq;
pub mod query;

pub use fasta::{count_sequences, report_top_sequences, top_sequences, FastaStats};
pub use fastq::{filter_by_length, filter_fastq, parse_fastq_reader, FastqRecord, FilterStats};
pub use query::{lookup, search_coordinates, MatchResult, QueryRecordView, SearchStats};
