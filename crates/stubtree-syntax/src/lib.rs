//! `stubtree-syntax` - Concrete syntax tree for IEC 61131-3 Structured Text declarations.
//!
//! This crate provides the syntax tree that stub building walks over:
//!
//! - **Syntax Tree**: `rowan`-based lossless tree with a `SyntaxKind` per node and token
//! - **AST**: Typed wrappers for the declarations an index cares about
//! - **Fixtures**: An indented text notation for writing trees by hand
//!
//! # Design Principles
//!
//! This crate follows the design of `rust-analyzer` and uses the `rowan` library
//! for the tree itself. Parsing source text is not part of this crate; trees are
//! produced by a host parser or by the fixture notation.
//!
//! # Example
//!
//! ```
//! use stubtree_syntax::fixture::parse_fixture;
//! use stubtree_syntax::SyntaxKind;
//!
//! let root = parse_fixture(
//!     r#"
//! SourceFile
//!   Program
//!     Name
//!       Ident "Main"
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(root.kind(), SyntaxKind::SourceFile);
//! assert_eq!(root.first_child().unwrap().kind(), SyntaxKind::Program);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod ast;
pub mod fixture;
pub mod syntax;

pub use syntax::{StLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
