//! Locusmap CLI entry point
//!
//! Gene locus indexing and coordinate-to-gene lookup for annotation files.

use clap::{Parser, Subcommand};
use locusmap::core::{find_files, LocusIndex};
use locusmap::formats;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "locusmap")]
#[command(about = "Gene locus indexing and coordinate-to-gene lookup")]
#[command(version)]
#[command(author = "Locusmap Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the genes containing each queried coordinate
    Locate {
        /// Annotation file (GTF-style, plain/gzip/bzip2)
        annotation: PathBuf,
        /// Query file: one "chromosome coordinate" row per line
        queries: PathBuf,
        /// Output file (default: output.txt)
        output: Option<PathBuf>,
        /// Number of threads for the query phase
        #[arg(short = 't', long, default_value = "1")]
        threads: usize,
    },
    /// Report the most frequent sequences in a FASTA file
    TopSeqs {
        /// Input FASTA file (plain/gzip/bzip2)
        input: PathBuf,
        /// Output file (optional, stdout if not specified)
        output: Option<PathBuf>,
        /// Number of sequences to report
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },
    /// Drop FASTQ records with sequences below a length cutoff
    FilterFastq {
        /// Input FASTQ file (plain/gzip/bzip2)
        input: PathBuf,
        /// Output file (optional, stdout if not specified)
        output: Option<PathBuf>,
        /// Minimum sequence length to keep
        #[arg(short = 'l', long = "min-length", default_value = "30")]
        min_length: usize,
    },
    /// List files with a given extension under a directory
    Scan {
        /// Directory to walk recursively
        directory: PathBuf,
        /// File extension to match (e.g. gtf, fastq)
        #[arg(short = 'e', long)]
        extension: String,
    },
}

fn load_index(annotation: &PathBuf) -> anyhow::Result<LocusIndex> {
    let start = Instant::now();
    eprintln!("Loading annotation file: {:?}", annotation);

    let index = LocusIndex::from_gtf_file(annotation)
        .map_err(|e| anyhow::anyhow!("Failed to load annotation file: {}", e))?;

    eprintln!(
        "Indexed {} genes on {} chromosomes in {:.2}s",
        index.total_genes(),
        index.chrom_count(),
        start.elapsed().as_secs_f64()
    );
    Ok(index)
}

/// Open the chosen sink, or fall back to stdout
fn open_sink(output: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(std::fs::File::create(path)?)),
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Commands::Locate { annotation, queries, output, threads } => {
            let index = load_index(&annotation)?;
            let output_path = output.unwrap_or_else(|| PathBuf::from("output.txt"));

            eprintln!("Searching coordinates: {:?} -> {:?}", queries, output_path);
            let stats = formats::search_coordinates(&index, &queries, &output_path, threads)?;

            eprintln!("\n=== Search Statistics ===");
            eprintln!("Total queries:   {}", stats.total);
            eprintln!("Matched:         {}", stats.matched);
            eprintln!("Unmatched:       {}", stats.unmatched);
            eprintln!("Malformed:       {}", stats.failed);
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::TopSeqs { input, output, limit } => {
            eprintln!("Counting sequences: {:?}", input);
            let mut sink = open_sink(output.as_ref())?;
            let stats = formats::report_top_sequences(&input, &mut sink, limit)?;

            eprintln!("\n=== Frequency Statistics ===");
            eprintln!("Total sequences: {}", stats.total);
            eprintln!("Distinct:        {}", stats.distinct);
            eprintln!("Reported:        {}", stats.reported);
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::FilterFastq { input, output, min_length } => {
            eprintln!("Filtering FASTQ: {:?} (min length {})", input, min_length);
            let mut sink = open_sink(output.as_ref())?;
            let stats = formats::filter_fastq(&input, &mut sink, min_length)?;

            eprintln!("\n=== Filter Statistics ===");
            eprintln!("Total records:   {}", stats.total);
            eprintln!("Kept:            {}", stats.kept);
            eprintln!("Dropped:         {}", stats.dropped);
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Scan { directory, extension } => {
            let found = find_files(&directory, &extension);
            for path in &found {
                println!("{}", path.display());
            }
            eprintln!("\nFound {} .{} file(s) under {:?}", found.len(), extension.trim_start_matches('.'), directory);
        }
    }

    Ok(())
}
