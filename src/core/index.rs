//! Gene interval index
//!
//! Two-phase structure: a [`LocusIndexBuilder`] accumulates every start/end
//! coordinate observed per (chromosome, gene) pair, then [`freeze`]
//! collapses each accumulation into a single bounding interval and yields
//! a read-only [`LocusIndex`] backed by one interval tree per chromosome.
//!
//! The bounding interval is a deliberate over-approximation: a gene whose
//! rows describe disjoint sub-features (exons at opposite ends of a long
//! intron, multiple transcripts sharing a name) still collapses to the one
//! smallest interval covering every observed endpoint, so a coordinate
//! falling between the sub-features counts as a hit.
//!
//! [`freeze`]: LocusIndexBuilder::freeze

use crate::core::error::GtfParseError;
use crate::core::gtf::{parse_gtf_file, GtfRecord};
use rust_lapper::{Interval, Lapper};
use std::collections::HashMap;
use std::path::Path;

/// Type alias for the per-chromosome interval tree
pub type GeneInterval = Interval<u64, String>;

/// Accumulates raw coordinate endpoints per (chromosome, gene) pair
///
/// Endpoints are kept exactly as observed: unordered, duplicates included.
/// A builder is scoped to one build pass; start a new builder per run
/// rather than reusing one across inputs.
#[derive(Debug, Default)]
pub struct LocusIndexBuilder {
    /// chromosome -> gene -> every endpoint seen so far
    endpoints: HashMap<String, HashMap<String, Vec<u64>>>,
}

impl LocusIndexBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one annotation row into the accumulation
    ///
    /// Both coordinates of the row are appended as raw endpoint
    /// observations; chromosome- and gene-level entries are created on
    /// first sight. Rows with start > end are accepted as-is, ordering is
    /// resolved when the builder is frozen.
    pub fn accumulate(&mut self, record: &GtfRecord) {
        let observations = self
            .endpoints
            .entry(record.chrom.clone())
            .or_default()
            .entry(record.gene.clone())
            .or_default();
        observations.push(record.start);
        observations.push(record.end);
    }

    /// Number of (chromosome, gene) pairs seen so far
    pub fn gene_count(&self) -> usize {
        self.endpoints.values().map(|genes| genes.len()).sum()
    }

    /// True if no rows have been accumulated
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Reduce every accumulation to its bounding interval and freeze
    ///
    /// For each (chromosome, gene) pair the bounding interval is
    /// `[min(endpoints), max(endpoints)]`; the raw endpoint collections
    /// are discarded. Consuming the builder makes the reduction a one-way
    /// state transition: the frozen index cannot be accumulated into, and
    /// re-reducing it is unrepresentable.
    pub fn freeze(self) -> LocusIndex {
        let mut maps = HashMap::with_capacity(self.endpoints.len());

        for (chrom, genes) in self.endpoints {
            let mut intervals: Vec<GeneInterval> = Vec::with_capacity(genes.len());
            for (gene, observations) in genes {
                let mut low = u64::MAX;
                let mut high = 0u64;
                for &endpoint in &observations {
                    low = low.min(endpoint);
                    high = high.max(endpoint);
                }
                // Inclusive [low, high] stored half-open as [low, high + 1)
                intervals.push(Interval {
                    start: low,
                    stop: high + 1,
                    val: gene,
                });
            }
            maps.insert(chrom, Lapper::new(intervals));
        }

        let index = LocusIndex { maps };
        log::debug!(
            "indexed {} genes across {} chromosomes",
            index.total_genes(),
            index.chrom_count()
        );
        index
    }
}

/// Frozen gene interval index
///
/// Maps chromosome name -> interval tree of gene bounding intervals.
/// Read-only after construction; queries never mutate it, so a shared
/// reference may be used from multiple threads at once.
pub struct LocusIndex {
    /// Chromosome -> interval tree (using Lapper)
    maps: HashMap<String, Lapper<u64, String>>,
}

impl LocusIndex {
    /// Build an index from an annotation file
    ///
    /// Automatically handles gzip and bzip2 compression. The build runs to
    /// completion before the index is returned, so every interval already
    /// covers all endpoints its gene contributed.
    ///
    /// # Example
    /// ```ignore
    /// let index = LocusIndex::from_gtf_file("annotations.gtf.gz")?;
    /// ```
    pub fn from_gtf_file<P: AsRef<Path>>(path: P) -> Result<Self, GtfParseError> {
        let records = parse_gtf_file(path.as_ref())?;
        Ok(Self::from_records(records))
    }

    /// Build an index from already parsed annotation rows
    pub fn from_records<I: IntoIterator<Item = GtfRecord>>(records: I) -> Self {
        let mut builder = LocusIndexBuilder::new();
        for record in records {
            builder.accumulate(&record);
        }
        builder.freeze()
    }

    /// Find every gene whose bounding interval contains a coordinate
    ///
    /// Containment is inclusive on both ends: a gene with bounds
    /// `[low, high]` matches when `low <= coord <= high`. A chromosome
    /// absent from the index yields an empty result, as does a coordinate
    /// outside every interval; neither case is an error.
    ///
    /// Matches are returned ascending by interval low bound; ties between
    /// identical intervals are in no further specified order.
    pub fn query(&self, chrom: &str, coord: u64) -> Vec<&str> {
        match self.maps.get(chrom) {
            Some(lapper) => lapper
                .find(coord, coord + 1)
                .map(|iv| iv.val.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Check if a chromosome exists in the index
    pub fn has_chrom(&self, chrom: &str) -> bool {
        self.maps.contains_key(chrom)
    }

    /// Get all chromosome names
    pub fn chroms(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(|s| s.as_str())
    }

    /// Number of chromosomes in the index
    pub fn chrom_count(&self) -> usize {
        self.maps.len()
    }

    /// Number of genes indexed on a chromosome
    pub fn gene_count(&self, chrom: &str) -> usize {
        self.maps.get(chrom).map(|l| l.len()).unwrap_or(0)
    }

    /// Total number of genes across all chromosomes
    pub fn total_genes(&self) -> usize {
        self.maps.values().map(|l| l.len()).sum()
    }

    /// Get the bounding interval of a gene, inclusive on both ends
    pub fn gene_bounds(&self, chrom: &str, gene: &str) -> Option<(u64, u64)> {
        self.maps
            .get(chrom)?
            .iter()
            .find(|iv| iv.val == gene)
            .map(|iv| (iv.start, iv.stop - 1))
    }

    /// Iterate a chromosome's (gene, low, high) triples, ascending by low
    pub fn gene_intervals(&self, chrom: &str) -> Vec<(&str, u64, u64)> {
        match self.maps.get(chrom) {
            Some(lapper) => lapper
                .iter()
                .map(|iv| (iv.val.as_str(), iv.start, iv.stop - 1))
                .collect(),
            None => Vec::new(),
        }
    }
}
