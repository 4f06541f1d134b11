//! Indented plain-text rendering of a parsed tree, for eyeballing what the
//! grammar produced for a given file.
//!
//! ```text
//! source_file [1:1-4:1]
//!   package_clause [1:1-1:13]
//!     package_identifier [1:9-1:13] 'main'
//! ```

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tree_sitter::TreeCursor;

use crate::ParsedFile;

/// Write every named node of the tree, one per line, indented by depth
pub fn write_tree<W: Write>(file: &ParsedFile, out: &mut W) -> std::io::Result<()> {
    let mut cursor = file.tree.walk();
    write_node(&mut cursor, file.source.as_bytes(), 0, out)
}

/// Dump the tree to `path`, creating or truncating it
pub fn dump_to_path(file: &ParsedFile, path: &Path) -> Result<()> {
    let out = File::create(path)
        .with_context(|| format!("Failed to create dump file: {}", path.display()))?;
    let mut writer = BufWriter::new(out);

    write_tree(file, &mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write dump file: {}", path.display()))
}

fn write_node<W: Write>(
    cursor: &mut TreeCursor,
    source: &[u8],
    depth: usize,
    out: &mut W,
) -> std::io::Result<()> {
    let node = cursor.node();

    let mut child_depth = depth;
    if node.is_named() || node.is_missing() {
        let start = node.start_position();
        let end = node.end_position();

        write!(out, "{}", "  ".repeat(depth))?;
        if let Some(field) = cursor.field_name() {
            write!(out, "{}: ", field)?;
        }
        if node.is_missing() {
            write!(out, "MISSING ")?;
        }
        write!(
            out,
            "{} [{}:{}-{}:{}]",
            node.kind(),
            start.row + 1,
            start.column + 1,
            end.row + 1,
            end.column + 1
        )?;
        if node.named_child_count() == 0 {
            let text = node.utf8_text(source).unwrap_or_default();
            if !text.is_empty() {
                write!(out, " '{}'", text.escape_debug())?;
            }
        }
        writeln!(out)?;
        child_depth += 1;
    }

    if cursor.goto_first_child() {
        loop {
            write_node(cursor, source, child_depth, out)?;
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }

    Ok(())
}
