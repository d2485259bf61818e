//! `stubtree-core` - Stub trees for IEC 61131-3 Structured Text.
//!
//! A stub tree is a coarse index tree derived from a full syntax tree. It
//! keeps one record per declaration an indexer cares about (POUs, types,
//! methods, variables, ...) and nothing else:
//!
//! - **Builder**: Walks the syntax tree and decides per node whether to create
//!   a stub and whether to prune a subtree
//! - **Registry**: Maps element types to their stub capability
//! - **Stub Tree**: Arena of stub records with parent and child links
//! - **Index**: Case-insensitive name lookup over a stub tree
//!
//! # Example
//!
//! ```
//! use stubtree_core::{render_stub_tree, DefaultStubBuilder, StubBuilder};
//! use stubtree_syntax::fixture::parse_fixture;
//!
//! let file = parse_fixture(
//!     r#"
//! SourceFile
//!   Class
//!     Name
//!       Ident "Motor"
//!     Method
//!       Name
//!         Ident "Start"
//! "#,
//! )
//! .unwrap();
//!
//! let build = DefaultStubBuilder::new().build_stub_tree(&file);
//! assert_eq!(
//!     render_stub_tree(build.tree()),
//!     "SourceFile\n  Class Motor\n    Method Start\n"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod element_type;
pub mod index;
pub mod registry;
mod render;
pub mod skip;
pub mod source;
pub mod stub;

pub use builder::{DefaultStubBuilder, StubBuild, StubBuilder, StubTreeBuilder};
pub use config::{ConfigError, StubConfig};
pub use diagnostics::{DiagnosticCode, DiagnosticSeverity, StubDiagnostic};
pub use element_type::StubElementType;
pub use index::{qualified_name, StubIndex};
pub use registry::StubTypeRegistry;
pub use render::render_stub_tree;
pub use skip::SkipRules;
pub use source::StubSource;
pub use stub::{StubData, StubId, StubRecord, StubTree};
