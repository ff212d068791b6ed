//! # jdoc-core
//!
//! An embeddable JSON reader: raw JSON text in, a mutable document tree out,
//! and back to displayable text. The parsing pipeline itself carries no
//! third-party JSON machinery, so the crate suits applications that want
//! structured access to JSON data without a serialization framework.
//!
//! Parsing is a two-stage pipeline: a buffered [`CharReader`] feeds a lexer
//! that emits a flat token sequence, and a recursive-descent parser walks
//! that sequence with an expected-token set, materializing the [`Value`]
//! tree. The lexer builds no structure; the parser re-reads no characters.
//!
//! ## Quick start
//!
//! ```rust
//! use jdoc_core::{parse, Value};
//!
//! let doc = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! let root = doc.as_object().unwrap();
//! assert_eq!(root.get("name").and_then(Value::as_str), Some("Alice"));
//! assert_eq!(root.get_array("scores").unwrap().len(), 3);
//!
//! // Back to text: compact via `Display`, indented via `pretty`.
//! assert_eq!(doc.to_string(), r#"{"name":"Alice","scores":[95,87,92]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`reader`] — buffered character source with single-character pushback
//! - [`lexer`] — token classification and the replayable token sequence
//! - [`parser`] — grammar-validated recursive descent ([`parse`], [`parse_reader`])
//! - [`value`] — the document tree and its typed accessors
//! - [`printer`] — human-readable re-serialization
//! - [`error`] — error types for failed parses

pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod reader;
pub mod value;

pub use error::{JsonError, Result};
pub use parser::{parse, parse_reader};
pub use printer::pretty;
pub use reader::CharReader;
pub use value::{JsonArray, JsonObject, Value};
