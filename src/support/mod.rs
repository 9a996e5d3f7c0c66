//! Parsing of supported-on expressions
//!
//! A `supported_on` entry encodes product, platform and version range as a
//! compact string, e.g. `chrome.win:8-`. Malformed entries are a hard
//! error: they abort the generation pass instead of being skipped.

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::{SupportedOn, VersionRange};
pub use grammar::parse;
