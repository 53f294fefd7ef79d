//! Run configuration: input/output paths and the column layout of the
//! rendered grammar.

use std::path::PathBuf;

/// Grammar source read when no path is given.
pub const DEFAULT_SOURCE: &str = "../lib/jcr/parser.rb";

/// Rendered ABNF written when no path is given.
pub const DEFAULT_OUTPUT: &str = "jcr-abnf.txt";

/// Column widths used when printing the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Blank columns printed before definitions and block comments.
    pub margin: usize,
    /// Column at which ` = ` ends on a definition line. Local comments and
    /// continuation lines are indented to this column.
    pub indent: usize,
    /// Column used to right-align the trailing comment on keyword lines.
    pub keyword_indent: usize,
}

impl Layout {
    pub const MARGIN: usize = 0;
    pub const INDENT: usize = 19;
    pub const KEYWORD_INDENT: usize = 30;
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            margin: Self::MARGIN,
            indent: Self::INDENT,
            keyword_indent: Self::KEYWORD_INDENT,
        }
    }
}

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub output: PathBuf,
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            layout: Layout::default(),
        }
    }
}
