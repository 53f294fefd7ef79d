//! End-to-end generation: grammar source in, ABNF document out.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{Config, Layout};
use crate::render;
use crate::scanner;

/// What a file-to-file run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub grammar_lines: usize,
    pub keywords: usize,
}

/// Extract and render the grammar held in `source`.
pub fn generate(source: &str, layout: Layout) -> String {
    let extraction = scanner::scan(source, layout.keyword_indent);
    render::render_document(&extraction, layout)
}

/// Read `config.source`, render it, and write the result to `config.output`.
///
/// The source is read in full before the output is opened. Any I/O failure
/// ends the run; the output file may then be missing or incomplete.
pub fn run(config: &Config) -> Result<Summary> {
    let source = fs::read_to_string(&config.source)
        .with_context(|| format!("Failed to read {}", config.source.display()))?;

    let extraction = scanner::scan(&source, config.layout.keyword_indent);
    let document = render::render_document(&extraction, config.layout);

    tracing::info!(path = %config.output.display(), "Writing ABNF");
    fs::write(&config.output, document)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    Ok(Summary {
        output: config.output.clone(),
        grammar_lines: extraction.lines.len(),
        keywords: extraction.keywords.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PARSER_SOURCE: &str = r#"
require 'parslet'

module JCR

  class Parser < Parslet::Parser

    root(:jcr)

    #! jcr = *( sp-cmt / directive ) [ root_rule ]
    #!       *( sp-cmt / directive / rule )
    #!
    rule(:jcr) { ( spcCmnt | directive ).repeat >> root_rule.maybe }

        #/ spcCmnt -> sp-cmt
        #! spcCmnt = spaces / comment
    rule(:spcCmnt) { spaces | comment }
        #/ spcCmnt? -> *sp-cmt
    rule(:spcCmnt?) { spcCmnt.repeat }
        #! spaces = 1*( WSP / CR / LF )
    rule(:spaces) { match('\s').repeat(1) }
        #/ spaces? -> [ spaces ]
    rule(:spaces?) { spaces.maybe }
        #! comment_char = HTAB / %x20-3A / %x3C-10FFFF
        #!            ; Any char other than ";" / CR / LF
        #!
        #! import_d = import-kw spaces? ruleset_id
        #> import-kw = "import"
        #> as-kw = "as"
  end
end
"#;

    fn def(name: &str, expansion: &str) -> String {
        let padding = " ".repeat(19usize.saturating_sub(name.len() + 3));
        format!("{name}{padding} = {expansion}\n")
    }

    fn indented(text: &str) -> String {
        format!("{}{text}\n", " ".repeat(19))
    }

    #[test]
    fn generates_full_document() {
        let doc = generate(PARSER_SOURCE, Layout::default());
        let mut expected = [
            def("jcr", "*( sp-cmt / directive ) [ root-rule ]"),
            indented("*( sp-cmt / directive / rule )"),
            "\n".to_string(),
            def("sp-cmt", "spaces / comment"),
            def("spaces", "1*( WSP / CR / LF )"),
            def("comment-char", "HTAB / %x20-3A / %x3C-10FFFF"),
            indented("; Any char other than \";\" / CR / LF"),
            "\n".to_string(),
            def("import-d", "import-kw [ spaces ] ruleset-id"),
            "\n".to_string(),
            ";; Keywords\n".to_string(),
            def("as-kw", &format!("%x61.73{} ; \"as\"", " ".repeat(24))),
            def("import-kw", &format!("%x69.6D.70.6F.72.74{} ; \"import\"", " ".repeat(12))),
            "\n".to_string(),
            ";; Referenced RFC 5234 Core Rules\n".to_string(),
        ]
        .concat();
        for rule in crate::core_rules::CORE_RULES {
            let (name, expansion) = rule.split_once('=').unwrap_or_default();
            expected.push_str(&def(name.trim(), expansion.trim_start()));
        }
        assert_eq!(doc, expected);
    }

    #[test]
    fn generation_is_idempotent() {
        let first = generate(PARSER_SOURCE, Layout::default());
        let second = generate(PARSER_SOURCE, Layout::default());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_source_still_lists_core_rules() {
        let doc = generate("", Layout::default());
        assert!(doc.starts_with("\n;; Keywords\n\n;; Referenced RFC 5234 Core Rules\n"));
        assert_eq!(doc.lines().count(), 4 + 8);
        for name in ["ALPHA", "CR", "DIGIT", "HEXDIG", "HTAB", "LF", "SP", "WSP"] {
            assert!(doc.lines().any(|l| l.starts_with(name)), "missing {name}");
        }
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("parser.rb");
        let output = dir.path().join("grammar.abnf");
        fs::write(&source, PARSER_SOURCE).unwrap();

        let config = Config {
            source,
            output: output.clone(),
            layout: Layout::default(),
        };
        let summary = run(&config).unwrap();

        assert_eq!(
            summary,
            Summary {
                output: output.clone(),
                grammar_lines: 9,
                keywords: 2,
            }
        );
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            generate(PARSER_SOURCE, Layout::default())
        );
    }

    #[test]
    fn run_reports_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            source: dir.path().join("missing.rb"),
            output: dir.path().join("out.abnf"),
            layout: Layout::default(),
        };
        let msg = run(&config).unwrap_err().to_string();
        assert!(msg.contains("Failed to read"), "got: {}", msg);
        assert!(msg.contains("missing.rb"), "got: {}", msg);
        assert!(!config.output.exists());
    }

    #[test]
    fn run_reports_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("parser.rb");
        fs::write(&source, "#! a = b\n").unwrap();
        let config = Config {
            source,
            output: dir.path().join("no-such-dir").join("out.abnf"),
            layout: Layout::default(),
        };
        let msg = run(&config).unwrap_err().to_string();
        assert!(msg.contains("Failed to write"), "got: {}", msg);
    }
}
