//! Single forward pass over the grammar source collecting directives.

use std::collections::HashMap;

use itertools::Itertools;

use crate::directive::{self, Directive};
use crate::keyword;
use crate::mapping::MappingTable;

/// Everything collected from one grammar source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Internal to public rule names.
    pub mappings: MappingTable,
    /// Captured ABNF lines in source order, not yet mapped.
    pub lines: Vec<String>,
    /// Keyword name to its rendered definition line.
    pub keywords: HashMap<String, String>,
}

impl Extraction {
    /// Rendered keyword lines ordered by keyword name.
    pub fn sorted_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(_, line)| line.as_str())
    }

    /// Captured lines with rule name mappings applied.
    pub fn mapped_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|line| self.mappings.apply(line))
    }
}

/// Scan `source` line by line. Keyword lines are rendered as they are found,
/// with trailing comments aligned against `keyword_indent`.
pub fn scan(source: &str, keyword_indent: usize) -> Extraction {
    let mut extraction = Extraction::default();
    for line in source.lines() {
        match directive::classify(line) {
            Directive::Mapping { name, replacement } => {
                extraction.mappings.insert(name, replacement);
            }
            Directive::Grammar(text) => {
                extraction.lines.push(text.to_string());
            }
            Directive::Keyword {
                name,
                separator,
                label,
            } => {
                let rendered = keyword::render(name, separator, label, keyword_indent);
                extraction.keywords.insert(name.to_string(), rendered);
            }
            Directive::Other => {}
        }
    }
    tracing::debug!(
        mappings = extraction.mappings.len(),
        lines = extraction.lines.len(),
        keywords = extraction.keywords.len(),
        "Scanned grammar source"
    );
    extraction
}
