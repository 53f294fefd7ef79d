//! RFC 5234 Appendix B core rules referenced by the generated grammar.

/// Emitted last in every document, in this order.
pub const CORE_RULES: [&str; 8] = [
    "ALPHA          =  %x41-5A / %x61-7A   ; A-Z / a-z",
    "CR             =  %x0D         ; carriage return",
    "DIGIT          =  %x30-39      ; 0-9",
    "HEXDIG         =  DIGIT / \"A\" / \"B\" / \"C\" / \"D\" / \"E\" / \"F\"",
    "HTAB           =  %x09         ; horizontal tab",
    "LF             =  %x0A         ; linefeed",
    "SP             =  %x20         ; space",
    "WSP            =  SP / HTAB    ; white space",
];
