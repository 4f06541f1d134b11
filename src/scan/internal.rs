//! Internal implementation for the scan module

use anyhow::{Context, Result};
use lexicon_metal::{Analyzer, Metal};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::ScanStats;
use crate::collect::for_each_identifier;
use crate::index::FrequencyIndex;

/// Every source file under `root`, depth-first in file-name order.
///
/// Directories that cannot be listed are skipped along with their subtree.
pub(super) fn discover_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if Metal::from_path(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }

    files
}

/// Parse one file and record its identifiers.
///
/// Nothing is recorded unless the whole file parsed cleanly.
pub(super) fn scan_file(
    analyzer: &mut Analyzer,
    path: &Path,
    index: &mut FrequencyIndex,
    stats: &mut ScanStats,
) -> Result<()> {
    let parsed = analyzer.parse_file(path)?;
    parsed
        .check_syntax()
        .with_context(|| format!("Syntax error in {}", path.display()))?;

    for_each_identifier(&parsed, |ident| {
        tracing::debug!(
            file = %path.display(),
            line = ident.line,
            kind = %ident.kind,
            name = ident.name,
            "identifier"
        );

        index.record_identifier(ident.name);
        stats.identifiers += 1;
        *stats.identifiers_by_kind.entry(ident.kind).or_insert(0) += 1;
    });

    Ok(())
}
