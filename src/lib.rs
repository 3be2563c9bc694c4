//! # Introduction
//!
//! The front end of the TyC language: a lexer that turns source text into a
//! token stream, and a recursive-descent parser that turns that stream into
//! a syntax tree or a single descriptive error.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Token Stream → Parser → (AST | CompileError)
//! ```
//!
//! 1. [`parser::lexer`] tokenises the source on demand, preserving exact
//!    lexemes (undecoded escapes, unnormalized numbers).
//! 2. [`parser::parse`] pulls tokens through a one-token-lookahead cursor
//!    and builds the [`parser::ast`] tree; the first failure wins.
//!
//! Everything here is pure and synchronous: no shared state between calls,
//! and a given source string always produces the same result.
//!
//! ## Entry points
//!
//! [`parser::parse`] returns the AST; [`parser::parse_outcome`] and
//! [`parser::tokenize_outcome`] are the string projections (`success` /
//! formatted error, and the `KIND,LEXEME` token rendering) used by the CLI
//! and the compatibility test corpus.

pub mod parser;
