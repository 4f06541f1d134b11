use std::path::Path;
use tree_sitter::Language as TSLanguage;

use crate::grammars;

/// Source languages (metals) the analyzer can parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metal {
    Go,
}

impl Metal {
    /// Get all supported metals
    pub fn all() -> Vec<Metal> {
        vec![Metal::Go]
    }

    /// Detect metal from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Detect metal from extension string
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "go" => Some(Metal::Go),
            _ => None,
        }
    }

    /// Human-readable language name
    pub fn name(&self) -> &'static str {
        match self {
            Metal::Go => "go",
        }
    }

    /// File extensions (without the dot) that belong to this metal
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Metal::Go => &["go"],
        }
    }

    /// Get the tree-sitter language for this metal
    pub fn tree_sitter_language(&self) -> TSLanguage {
        match self {
            Metal::Go => grammars::language_go(),
        }
    }
}
