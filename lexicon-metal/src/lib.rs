use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

pub mod dump;
pub mod grammars;
pub mod metal;

pub use metal::Metal;

/// Unified interface for parsing source files of every supported metal
pub struct Analyzer {
    parsers: HashMap<Metal, Parser>,
}

/// Parsed file with its AST
pub struct ParsedFile {
    pub tree: Tree,
    pub metal: Metal,
    pub source: String,
}

/// First error or missing node reported by tree-sitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// 1-based line
    pub line: usize,
    /// 1-based column, in bytes
    pub column: usize,
    pub detail: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.detail)
    }
}

impl std::error::Error for SyntaxError {}

impl Analyzer {
    /// Create a new analyzer with all supported languages
    pub fn new() -> Result<Self> {
        let mut parsers = HashMap::new();

        for metal in Metal::all() {
            let language = metal.tree_sitter_language();
            let mut parser = Parser::new();
            parser
                .set_language(&language)
                .with_context(|| format!("Failed to set language for {:?}", metal))?;
            parsers.insert(metal, parser);
        }

        Ok(Self { parsers })
    }

    /// Check if a parser is available for a given metal
    pub fn has_parser(&self, metal: Metal) -> bool {
        self.parsers.contains_key(&metal)
    }

    /// Get all available metals (ones with working parsers)
    pub fn available_metals(&self) -> Vec<Metal> {
        self.parsers.keys().copied().collect()
    }

    /// Parse source code into an AST.
    ///
    /// tree-sitter recovers from syntax errors, so this only fails when no
    /// tree is produced at all. Use [`ParsedFile::check_syntax`] to reject
    /// files that did not parse cleanly.
    pub fn parse(&mut self, source: &str, metal: Metal) -> Result<ParsedFile> {
        let available = self.available_metals();
        let parser = self.parsers.get_mut(&metal).ok_or_else(|| {
            anyhow::anyhow!(
                "No parser available for {:?}. Available: {:?}",
                metal,
                available
            )
        })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse source"))?;

        Ok(ParsedFile {
            tree,
            metal,
            source: source.to_string(),
        })
    }

    /// Read and parse a file, detecting its metal from the extension
    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedFile> {
        let metal = Metal::from_path(path)
            .ok_or_else(|| anyhow::anyhow!("Unsupported file type: {}", path.display()))?;

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        self.parse(&source, metal)
            .with_context(|| format!("Failed to parse file: {}", path.display()))
    }
}

impl ParsedFile {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by a node of this file's tree
    pub fn text(&self, node: Node<'_>) -> &str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    /// Locate the first ERROR or MISSING node in document order
    pub fn first_syntax_error(&self) -> Option<SyntaxError> {
        let root = self.root();
        if !root.has_error() {
            return None;
        }

        let mut cursor = root.walk();
        find_error(&mut cursor, &self.source)
    }

    /// Fail if tree-sitter had to recover from any syntax error
    pub fn check_syntax(&self) -> Result<(), SyntaxError> {
        match self.first_syntax_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn find_error(cursor: &mut tree_sitter::TreeCursor, source: &str) -> Option<SyntaxError> {
    let node = cursor.node();

    if node.is_error() || node.is_missing() {
        let position = node.start_position();
        let detail = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            let snippet = source
                .get(node.byte_range())
                .and_then(|text| text.lines().next())
                .unwrap_or_default();
            format!("unexpected `{}`", snippet.trim())
        };

        return Some(SyntaxError {
            line: position.row + 1,
            column: position.column + 1,
            detail,
        });
    }

    // Only descend into subtrees that contain an error
    if node.has_error() && cursor.goto_first_child() {
        loop {
            if let Some(err) = find_error(cursor, source) {
                return Some(err);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }

    None
}
