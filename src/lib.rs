//! Locusmap - gene locus indexing and coordinate lookup
//!
//! Builds a per-chromosome gene interval index from GTF-style annotation
//! files and answers "which genes contain this coordinate" queries against
//! it. Also ships small companions for FASTA sequence frequency reports,
//! FASTQ length filtering, and extension-based file discovery.
//!
//! # Features
//!
//! - One bounding interval per (chromosome, gene), covering every
//!   coordinate observed across all annotation rows for that gene
//! - O(log n + k) point queries via an interval tree per chromosome
//! - Transparent gzip/bzip2 input support
//! - Optional parallel query processing with rayon
//!
//! # Example
//!
//! ```ignore
//! use locusmap::{LocusIndex, formats};
//!
//! // Build the index from an annotation file
//! let index = LocusIndex::from_gtf_file("annotations.gtf.gz")?;
//!
//! // Point lookup
//! let genes = index.query("chr1", 11_900);
//!
//! // Batch lookup, one output line per matching query row
//! let stats = formats::search_coordinates(&index, "queries.txt", "output.txt", 1)?;
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use crate::core::{
    clean_gene_name, find_files, parse_gtf_bytes, parse_gtf_file, parse_gtf_reader,
    FastqParseError, GtfParseError, GtfRecord, LocusIndex, LocusIndexBuilder, LocusmapError,
    QueryParseError,
};
pub use crate::formats::{fasta, fastq, query};
