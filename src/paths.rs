//! Single source of truth for lexicon's filesystem layout.
//!
//! This module defines WHERE data lives. It has no I/O and no validation.
//!
//! ```text
//! {cwd}/.lexicon/
//! └── word_list.txt    # Sorted `word count` table, rewritten by every digest
//! ```

use std::path::{Path, PathBuf};

/// Tool directory name, created beneath the working directory
pub const LEXICON_DIR: &str = ".lexicon";

/// Word table file name
pub const WORD_LIST_FILE: &str = "word_list.txt";

/// Tool directory under `base`: `{base}/.lexicon/`
pub fn lexicon_dir(base: &Path) -> PathBuf {
    base.join(LEXICON_DIR)
}

/// Word table under an output directory: `{dir}/word_list.txt`
pub fn word_list_in(dir: &Path) -> PathBuf {
    dir.join(WORD_LIST_FILE)
}

/// Default word table: `{cwd}/.lexicon/word_list.txt`
///
/// Falls back to a relative path when the working directory cannot be read.
pub fn word_list_path() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    word_list_in(&lexicon_dir(&cwd))
}
