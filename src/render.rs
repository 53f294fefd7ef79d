//! Column-aligned printing of the ABNF document.
//!
//! Each line is printed according to its shape:
//!
//! | Shape         | Printed as                                       |
//! |---------------|--------------------------------------------------|
//! | blank         | empty line                                       |
//! | `;; title`    | margin, then the line verbatim                   |
//! | `; comment`   | indent, then the comment                         |
//! | `name = exp`  | margin, name padded so ` = ` ends at indent, exp |
//! | anything else | indent, then the line verbatim                   |

use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

use crate::config::Layout;
use crate::core_rules::CORE_RULES;
use crate::scanner::Extraction;

pub const KEYWORDS_TITLE: &str = ";; Keywords";
pub const CORE_RULES_TITLE: &str = ";; Referenced RFC 5234 Core Rules";

const EQUALS: &str = " = ";

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*;;").unwrap());

static LOCAL_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(;.*)$").unwrap());

static DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\w\-]+)\s*=\s*(.*)$").unwrap());

/// The printing shape of a single grammar line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'a> {
    Blank,
    BlockComment(&'a str),
    LocalComment(&'a str),
    Definition { name: &'a str, expansion: &'a str },
    Continuation(&'a str),
}

impl<'a> LineShape<'a> {
    /// Classify `line`, testing shapes in table order.
    pub fn of(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return LineShape::Blank;
        }
        if BLOCK_COMMENT.is_match(line) {
            return LineShape::BlockComment(line);
        }
        if let Some(comment) = LOCAL_COMMENT.captures(line).and_then(|c| c.get(1)) {
            return LineShape::LocalComment(comment.as_str());
        }
        if let Some(caps) = DEFINITION.captures(line)
            && let (Some(name), Some(expansion)) = (caps.get(1), caps.get(2))
        {
            return LineShape::Definition {
                name: name.as_str(),
                expansion: expansion.as_str(),
            };
        }
        LineShape::Continuation(line)
    }
}

/// Accumulates printed lines into a document.
#[derive(Debug)]
pub struct Printer {
    layout: Layout,
    out: String,
}

impl Printer {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            out: String::new(),
        }
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Print one line according to its shape.
    pub fn print(&mut self, line: &str) {
        let margin = " ".repeat(self.layout.margin);
        let indent = " ".repeat(self.layout.indent);
        let _ = match LineShape::of(line) {
            LineShape::Blank => writeln!(self.out),
            LineShape::BlockComment(text) => writeln!(self.out, "{margin}{text}"),
            LineShape::LocalComment(text) => writeln!(self.out, "{indent}{text}"),
            LineShape::Definition { name, expansion } => {
                let width = name.chars().count() + EQUALS.len();
                let padding = " ".repeat(self.layout.indent.saturating_sub(width));
                writeln!(self.out, "{margin}{name}{padding}{EQUALS}{expansion}")
            }
            LineShape::Continuation(text) => writeln!(self.out, "{indent}{text}"),
        };
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Render the complete document: mapped grammar lines, the keyword block and
/// the core rule block.
pub fn render_document(extraction: &Extraction, layout: Layout) -> String {
    let mut printer = Printer::new(layout);

    for line in extraction.mapped_lines() {
        printer.print(&line);
    }

    printer.blank();
    printer.print(KEYWORDS_TITLE);
    for line in extraction.sorted_keywords() {
        printer.print(line);
    }

    printer.blank();
    printer.print(CORE_RULES_TITLE);
    for rule in CORE_RULES {
        printer.print(rule);
    }

    printer.finish()
}
