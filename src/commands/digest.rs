//! `lexicon digest <ROOT>`: build the word table for a source tree

use anyhow::Result;
use std::path::PathBuf;

use lexicon::scan::{self, DigestConfig, ScanStats};

/// Scan `root` and rewrite the word table
pub fn execute(root: PathBuf, out_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let mut config = DigestConfig::new(root);
    if let Some(dir) = out_dir {
        config = config.with_output_dir(&dir);
    }

    if !json {
        println!("🔄 Building word digest for {}...", config.root.display());
    }

    let stats = scan::build_digest(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_summary(&stats);
    }

    Ok(())
}

fn print_summary(stats: &ScanStats) {
    println!("\n📊 Digest Summary:");
    println!("  • Files scanned: {}", stats.files_scanned);
    if stats.files_failed > 0 {
        println!("  • ⚠️  Files skipped: {}", stats.files_failed);
    }
    println!("  • Identifiers: {}", stats.identifiers);
    for (kind, count) in &stats.identifiers_by_kind {
        println!("      {:<17} {}", kind.as_str(), count);
    }
    println!("  • Words recorded: {}", stats.words_recorded);
    println!("  • Distinct words: {}", stats.distinct_words);
    println!("  • Time elapsed: {} ms", stats.elapsed_ms);
    if let Some(output) = &stats.output {
        println!("\n✅ Word table written to {}", output.display());
    }
}
