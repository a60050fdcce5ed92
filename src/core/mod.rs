//! Core indexing and lookup functionality
//!
//! This module contains the annotation parser, the gene interval index,
//! and the shared input/discovery utilities.

mod error;
pub mod files;
mod gtf;
mod index;
pub mod io;

pub use error::{
    FastqParseError, GtfParseError, GtfResult, LocusmapError, QueryParseError, Result,
};
pub use files::find_files;
pub use gtf::{clean_gene_name, parse_gtf_bytes, parse_gtf_file, parse_gtf_reader, GtfRecord};
pub use index::{LocusIndex, LocusIndexBuilder};
pub use io::{detect_compression, open_input, CompressionFormat, DEFAULT_BUFFER_SIZE};
