//! Word frequency index and its sorted table form
//!
//! One [`FrequencyIndex`] is built per scan, then rendered as lines of
//! `"<word> <count>\n"` in ascending byte order of the word.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::segment::segments;

/// Occurrence count for every word seen during one scan
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyIndex {
    counts: HashMap<String, u64>,
}

impl FrequencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`
    pub fn record(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_string(), 1);
        }
    }

    /// Segment an identifier and record each of its words.
    /// Returns how many words were recorded.
    pub fn record_identifier(&mut self, ident: &str) -> usize {
        let mut recorded = 0;
        for word in segments(ident) {
            *self.counts.entry(word).or_insert(0) += 1;
            recorded += 1;
        }
        recorded
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in ascending byte order of the word
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Render the sorted table
    pub fn write_table<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (word, count) in self.sorted() {
            writeln!(out, "{} {}", word, count)?;
        }
        Ok(())
    }

    /// Replace the table at `path` with this index.
    ///
    /// The table is written to a temporary file next to `path` and renamed
    /// over it, so a failed write leaves any previous table untouched.
    pub fn persist(&self, path: &Path) -> Result<()> {
        let parent_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;

        let temp_file = NamedTempFile::new_in(parent_dir).with_context(|| {
            format!("Failed to open temporary file in: {}", parent_dir.display())
        })?;

        {
            let mut writer = BufWriter::new(temp_file.as_file());
            self.write_table(&mut writer)
                .and_then(|_| writer.flush())
                .with_context(|| format!("Failed to write word table for: {}", path.display()))?;
        }

        temp_file
            .persist(path)
            .with_context(|| format!("Failed to replace word table: {}", path.display()))?;
        Ok(())
    }
}
