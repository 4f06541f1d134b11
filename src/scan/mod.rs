//! Source tree scan: walk, parse, collect, segment, count, persist
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): configuration, stats and entry points
//! - Internal implementation: walking and per-file work in internal.rs
//!
//! A scan is single-threaded and single-pass. Files that cannot be read or
//! parsed are reported and skipped; only a missing root or a failed write
//! of the word table ends the run with an error.
//!
//! # Example
//!
//! ```no_run
//! use lexicon::scan::{build_digest, DigestConfig};
//!
//! let stats = build_digest(&DigestConfig::new("./src")).expect("digest failed");
//! println!("{} distinct words", stats.distinct_words);
//! ```

mod internal;

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::collect::IdentKind;
use crate::index::FrequencyIndex;
use crate::paths;

/// What to scan and where the word table goes
#[derive(Debug, Clone)]
pub struct DigestConfig {
    pub root: PathBuf,
    pub output: PathBuf,
}

impl DigestConfig {
    /// Scan `root`, writing to `{cwd}/.lexicon/word_list.txt`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: paths::word_list_path(),
        }
    }

    /// Write `word_list.txt` into `dir` instead
    pub fn with_output_dir(mut self, dir: &Path) -> Self {
        self.output = paths::word_list_in(dir);
        self
    }
}

/// Counters reported at the end of a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Source files found under the root
    pub files_scanned: usize,
    /// Files skipped because they could not be read or parsed
    pub files_failed: usize,
    pub identifiers: usize,
    pub identifiers_by_kind: BTreeMap<IdentKind, usize>,
    /// Words recorded, counting repeats
    pub words_recorded: u64,
    pub distinct_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub elapsed_ms: u64,
}

/// Index and stats of a scan that has not been persisted
#[derive(Debug)]
pub struct ScanOutcome {
    pub index: FrequencyIndex,
    pub stats: ScanStats,
}

/// Scan every source file under `root` into a fresh index
pub fn scan_tree(root: &Path) -> Result<ScanOutcome> {
    let start = Instant::now();

    let metadata = std::fs::metadata(root)
        .with_context(|| format!("Cannot read scan root: {}", root.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("Scan root is not a directory: {}", root.display());
    }

    let mut analyzer = lexicon_metal::Analyzer::new()?;
    let mut index = FrequencyIndex::new();
    let mut stats = ScanStats::default();

    let files = internal::discover_files(root);
    tracing::info!(root = %root.display(), files = files.len(), "scanning source tree");

    for path in &files {
        stats.files_scanned += 1;
        if let Err(e) = internal::scan_file(&mut analyzer, path, &mut index, &mut stats) {
            tracing::warn!("Skipping {}: {:#}", path.display(), e);
            stats.files_failed += 1;
        }
    }

    stats.words_recorded = index.total();
    stats.distinct_words = index.len();
    stats.elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(ScanOutcome { index, stats })
}

/// Scan `config.root` and replace the word table at `config.output`
pub fn build_digest(config: &DigestConfig) -> Result<ScanStats> {
    let start = Instant::now();

    let ScanOutcome { index, mut stats } = scan_tree(&config.root)?;
    index.persist(&config.output)?;

    stats.output = Some(config.output.clone());
    stats.elapsed_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        output = %config.output.display(),
        distinct_words = stats.distinct_words,
        "word table written"
    );
    Ok(stats)
}
