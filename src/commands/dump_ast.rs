//! `lexicon dump-ast <FILE> <OUTPUT>`: write a file's parse tree for inspection

use anyhow::Result;
use lexicon_metal::{dump, Analyzer};
use std::path::Path;

/// Parse `file` and dump its tree to `output`.
///
/// Syntax errors are reported but do not stop the dump; the recovered tree
/// (with its ERROR and MISSING nodes) is what there is to look at.
pub fn execute(file: &Path, output: &Path) -> Result<()> {
    let mut analyzer = Analyzer::new()?;
    let parsed = analyzer.parse_file(file)?;

    if let Err(e) = parsed.check_syntax() {
        tracing::warn!("Syntax error in {}: {}", file.display(), e);
    }

    dump::dump_to_path(&parsed, output)?;

    println!("✅ Parse tree of {} written to {}", file.display(), output.display());
    Ok(())
}
