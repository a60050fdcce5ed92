//! Error types for locusmap
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for locusmap operations
#[derive(Debug, Error)]
pub enum LocusmapError {
    /// Annotation file parsing errors
    #[error("Annotation parse error: {0}")]
    Gtf(#[from] GtfParseError),

    /// Query row parsing errors
    #[error("Query parse error: {0}")]
    Query(#[from] QueryParseError),

    /// FASTQ parsing errors
    #[error("FASTQ parse error: {0}")]
    Fastq(#[from] FastqParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing an annotation file
#[derive(Debug, Error)]
pub enum GtfParseError {
    /// A data row with fewer fields than the format requires
    #[error("Too few fields at line {line}: expected at least {expected}, found {found}")]
    TooFewFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A coordinate field that is not a non-negative integer
    #[error("Invalid {field} value '{value}' at line {line}: expected a non-negative integer")]
    InvalidCoordinate {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Annotation file not found
    #[error("Annotation file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error during parsing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while parsing a query row
#[derive(Debug, Error)]
pub enum QueryParseError {
    /// Blank input line
    #[error("Empty line")]
    EmptyLine,

    /// A query row with fewer fields than required
    #[error("Too few fields: expected at least {expected}, found {found}")]
    TooFewFields { expected: usize, found: usize },

    /// A coordinate field that is not a non-negative integer
    #[error("Invalid coordinate '{value}': expected a non-negative integer")]
    InvalidCoordinate { value: String },
}

/// Errors that can occur while parsing a FASTQ file
#[derive(Debug, Error)]
pub enum FastqParseError {
    /// A record whose identifier line does not start with '@'
    #[error("Record at line {line} does not start with '@': {content}")]
    MissingHeader { line: usize, content: String },

    /// A record cut short by end of file
    #[error("Truncated record starting at line {line}: expected 4 lines, found {found}")]
    TruncatedRecord { line: usize, found: usize },

    /// I/O error during parsing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for locusmap operations
pub type Result<T> = std::result::Result<T, LocusmapError>;

/// Result type alias for annotation parsing operations
pub type GtfResult<T> = std::result::Result<T, GtfParseError>;
