// Writing report files for a processed corpus.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::RunConfig;
use crate::decode;
use crate::error::Result;
use crate::frequency::RootIndex;
use crate::output;
use crate::stemmer::MalayStemmer;

/// Timestamp format used in report file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Paths of the files written by [`write_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub wordlist: PathBuf,
    pub statistics: PathBuf,
    pub roots_only: PathBuf,
    pub json: PathBuf,
}

impl ReportPaths {
    fn new(dir: &Path, timestamp: &str) -> Self {
        Self {
            wordlist: dir.join(format!("wordlist_{timestamp}.tsv")),
            statistics: dir.join(format!("statistics_{timestamp}.tsv")),
            roots_only: dir.join(format!("roots_only_{timestamp}.txt")),
            json: dir.join(format!("wordlist_{timestamp}.json")),
        }
    }

    pub fn all(&self) -> [&Path; 4] {
        [
            self.wordlist.as_path(),
            self.statistics.as_path(),
            self.roots_only.as_path(),
            self.json.as_path(),
        ]
    }
}

/// Current local time formatted for report file names.
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Write the word list, statistics, roots-only list and JSON report into
/// `output_dir`, creating it if needed.
pub fn write_report(index: &RootIndex, output_dir: &Path, timestamp: &str) -> Result<ReportPaths> {
    fs::create_dir_all(output_dir)?;
    let paths = ReportPaths::new(output_dir, timestamp);

    let entries = index.entries();
    let stats = index.statistics();

    fs::write(&paths.wordlist, output::to_wordlist_tsv(&entries)?)?;
    fs::write(&paths.statistics, output::to_statistics_tsv(&stats)?)?;
    fs::write(&paths.roots_only, output::to_roots_only(&entries))?;
    fs::write(&paths.json, output::to_json(&entries, &stats, true)?)?;

    for path in paths.all() {
        tracing::info!(path = %path.display(), "wrote report file");
    }

    Ok(paths)
}

/// Read `config.input`, group its words by root and write the report into
/// `config.output_dir`.
pub fn process_file(config: &RunConfig, stemmer: &MalayStemmer) -> Result<(RootIndex, ReportPaths)> {
    tracing::info!(input = %config.input.display(), "processing file");
    let decoded = decode::read_text(&config.input)?;
    let index = RootIndex::from_text(&decoded.text, stemmer);
    let paths = write_report(&index, &config.output_dir, &timestamp_now())?;
    Ok((index, paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_write_report_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        let index = RootIndex::from_text("Raja membaca kitab. Raja pergi.", &MalayStemmer::new());

        let paths = write_report(&index, &out, "20240101_120000").unwrap();

        assert_eq!(paths.wordlist, out.join("wordlist_20240101_120000.tsv"));
        for path in paths.all() {
            assert!(path.is_file(), "{} not written", path.display());
        }
        let roots = fs::read_to_string(&paths.roots_only).unwrap();
        assert!(roots.contains("raja [2]\n"), "unexpected roots file:\n{roots}");
    }

    #[test]
    fn test_process_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("teks.txt");
        fs::write(&input, "Mata-mata itu menulis surat. Dia menulis lagi.").unwrap();
        let config = RunConfig {
            input,
            output_dir: dir.path().join("out"),
        };

        let (index, paths) = process_file(&config, &MalayStemmer::new()).unwrap();

        assert_eq!(index.root_frequency("tulis"), 2);
        assert!(paths.statistics.starts_with(dir.path().join("out")));
        assert!(paths.json.is_file());
    }

    #[test]
    fn test_process_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            input: dir.path().join("missing.txt"),
            output_dir: dir.path().join("out"),
        };
        let err = process_file(&config, &MalayStemmer::new()).unwrap_err();
        assert!(matches!(err, Error::InputNotFound(_)));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), 15);
        assert_eq!(ts.as_bytes()[8], b'_');
    }
}
