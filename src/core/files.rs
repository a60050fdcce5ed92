//! Extension-based file discovery
//!
//! Recursively walks a directory and collects files matching an extension,
//! so batch jobs can pick up every annotation or read file under a data
//! directory in one pass.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively find files with the given extension under a directory
///
/// The extension is matched case-insensitively against the final `.ext`
/// component of each file name; a leading dot in the argument is accepted
/// and ignored. Results are sorted for deterministic output. Unreadable
/// directory entries are skipped.
pub fn find_files<P: AsRef<Path>>(root: P, extension: &str) -> Vec<PathBuf> {
    let wanted = extension.trim_start_matches('.');

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(wanted))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    found.sort();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_find_files_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();

        touch(&dir.path().join("a.fastq"));
        touch(&dir.path().join("b.gtf"));
        touch(&sub.join("c.fastq"));

        let found = find_files(dir.path(), "fastq");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], dir.path().join("a.fastq"));
        assert_eq!(found[1], sub.join("c.fastq"));
    }

    #[test]
    fn test_find_files_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("reads.FASTQ"));

        assert_eq!(find_files(dir.path(), "fastq").len(), 1);
    }

    #[test]
    fn test_find_files_accepts_leading_dot() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("annotations.gtf"));

        assert_eq!(find_files(dir.path(), ".gtf").len(), 1);
    }

    #[test]
    fn test_find_files_ignores_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.fasta"));
        touch(&dir.path().join("b.txt"));
        touch(&dir.path().join("noext"));

        assert!(find_files(dir.path(), "gtf").is_empty());
    }
}
