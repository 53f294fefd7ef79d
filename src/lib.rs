//! Extracts ABNF embedded in comments of a grammar source and renders it as
//! a column-aligned grammar document.
//!
//! Three comment directives drive the extraction: `#/` renames internal rule
//! names, `#!` captures a line of ABNF, and `#>` declares a keyword rule that
//! is rendered as a hex string. The document ends with the RFC 5234 core
//! rules the grammar refers to.
//!
//! # Example
//!
//! ```rust
//! use make_abnf::{Layout, generate};
//!
//! let source = "\
//!     #/ greetingRule -> greeting
//!     #! greetingRule = hello-kw
//!     #> hello-kw = \"hi\"
//! ";
//! let doc = generate(source, Layout::default());
//!
//! assert!(doc.lines().next().unwrap().ends_with(" = hello-kw"));
//! assert!(doc.lines().next().unwrap().starts_with("greeting "));
//! assert!(doc.contains("%x68.69"));
//! assert!(doc.contains(";; Referenced RFC 5234 Core Rules"));
//! ```

pub mod config;
mod core_rules;
pub mod directive;
mod generate;
mod keyword;
mod mapping;
pub mod render;
mod scanner;

pub use config::{Config, DEFAULT_OUTPUT, DEFAULT_SOURCE, Layout};
pub use core_rules::CORE_RULES;
pub use directive::{Directive, classify};
pub use generate::{Summary, generate, run};
pub use keyword::hex_string;
pub use mapping::MappingTable;
pub use scanner::{Extraction, scan};
