//! Classification of source lines into grammar directives.
//!
//! Directives live in ordinary comments of the grammar source and are told
//! apart by a two-character marker:
//!
//! | Marker | Directive | Example                                  |
//! |--------|-----------|------------------------------------------|
//! | `#/`   | Mapping   | `#/ spcCmnt -> sp-cmt`                   |
//! | `#!`   | Grammar   | `#! spcCmnt = spaces / comment`          |
//! | `#>`   | Keyword   | `#> jcr-version-kw = "jcr-version"`      |
//!
//! Leading whitespace before the marker is ignored. Anything else, including
//! a marked line whose body does not have the expected shape, is
//! [`Directive::Other`].

use phf::{Map, phf_map};
use regex::Regex;
use std::sync::LazyLock;

/// A single classified source line. Borrowed slices point into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Rename an internal rule name to its public ABNF name.
    Mapping { name: &'a str, replacement: &'a str },
    /// One line of ABNF, possibly blank.
    Grammar(&'a str),
    /// A keyword rule whose literal is rendered as a hex string.
    Keyword {
        name: &'a str,
        separator: &'a str,
        label: &'a str,
    },
    /// Not a directive.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Mapping,
    Grammar,
    Keyword,
}

const MARKERS: Map<&'static str, Marker> = phf_map! {
    "#/" => Marker::Mapping,
    "#!" => Marker::Grammar,
    "#>" => Marker::Keyword,
};

static MARKED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(#.)(.*)$").unwrap());

static MAPPING_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([\w?]+)\s*->\s*(.*)$").unwrap());

static KEYWORD_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*([\w\-]+kw)(\s*=\s*)"([^"]+)""#).unwrap());

/// Classify one source line (without its line terminator).
pub fn classify(line: &str) -> Directive<'_> {
    let Some(caps) = MARKED_LINE.captures(line) else {
        return Directive::Other;
    };
    let (Some(marker), Some(body)) = (caps.get(1), caps.get(2)) else {
        return Directive::Other;
    };
    match MARKERS.get(marker.as_str()) {
        Some(Marker::Mapping) => classify_mapping(body.as_str()),
        Some(Marker::Grammar) => Directive::Grammar(body.as_str().trim_start()),
        Some(Marker::Keyword) => classify_keyword(body.as_str()),
        None => Directive::Other,
    }
}

fn classify_mapping(body: &str) -> Directive<'_> {
    match MAPPING_BODY.captures(body) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(name), Some(replacement)) => Directive::Mapping {
                name: name.as_str(),
                replacement: replacement.as_str(),
            },
            _ => Directive::Other,
        },
        None => Directive::Other,
    }
}

fn classify_keyword(body: &str) -> Directive<'_> {
    match KEYWORD_BODY.captures(body) {
        Some(caps) => match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(name), Some(separator), Some(label)) => Directive::Keyword {
                name: name.as_str(),
                separator: separator.as_str(),
                label: label.as_str(),
            },
            _ => Directive::Other,
        },
        None => Directive::Other,
    }
}
