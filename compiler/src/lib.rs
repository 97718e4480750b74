//! flatview-compiler
//!
//! This crate implements:
//!  1) A cursor-style scanner + recursive-descent parser for compact layout
//!     schema strings (`"u[ffff]f*{speed}u{font}"`),
//!  2) Error types (`SchemaError`).
//!
//! Compilation is pure: it returns an immutable descriptor tree that can be
//! shared freely across decode call sites, with no hidden state anywhere.

pub mod error;
pub mod parser;

mod scanner;

pub use error::SchemaError;
pub use parser::compile_schema;
