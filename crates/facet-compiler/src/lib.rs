//! Faceted Search Query Compiler
//!
//! This crate turns a flat map of named search options into an Elasticsearch
//! boolean query. It performs no I/O: the output is an index name and a JSON
//! request body for whatever client sends it.
//!
//! # Features
//!
//! - **Two Collections**: purchases (`transactions`) and seller messages (`messages`)
//! - **Inert Defaults**: an option that was not supplied never emits a clause
//! - **Strict Schema**: unknown option names are rejected, not ignored
//! - **Deterministic Output**: the same options always compile to the same query
//! - **Free-Text Heuristics**: quoted phrases, email addresses and license serials
//!
//! # Architecture
//!
//! - [`types`] - Caller inputs and the compiled output
//! - [`schema`] - Option shapes, inert defaults and normalization
//! - [`collections`] - The static dimension table of each collection
//! - [`query`] - Clause builders and the compiler that folds them
//! - [`config`] - Index naming and match fuzziness
//! - [`error`] - Error types for all operations
//!
//! # Quick Start
//!
//! ```
//! use facet_compiler::{Collection, SearchCompiler, SearchOptions};
//! use serde_json::json;
//!
//! let compiler = SearchCompiler::default();
//!
//! let options = SearchOptions::new()
//!     .with("seller", 42)
//!     .with("archived", false)
//!     .with("limit", 20);
//!
//! let compiled = compiler.compile(Collection::Transactions, &options).unwrap();
//!
//! assert_eq!(compiled.index(), "commerce_transactions");
//! assert_eq!(
//!     compiled.body(),
//!     json!({
//!         "query": {
//!             "bool": {
//!                 "filter": [{ "terms": { "seller_id": [42] } }],
//!                 "must_not": [{ "term": { "is_archived": true } }]
//!             }
//!         },
//!         "size": 20
//!     })
//! );
//! ```
//!
//! # Entities
//!
//! Identifier options accept raw identifiers or any value implementing
//! [`Identified`](types::Identified):
//!
//! ```
//! use std::sync::Arc;
//! use facet_compiler::types::{IdRef, Identified, SearchId};
//! use facet_compiler::{SearchCompiler, SearchOptions};
//!
//! #[derive(Debug)]
//! struct Product {
//!     id: i64,
//! }
//!
//! impl Identified for Product {
//!     fn search_id(&self) -> SearchId {
//!         SearchId::Int(self.id)
//!     }
//! }
//!
//! let options = SearchOptions::new().with(
//!     "exclude_product",
//!     vec![IdRef::Entity(Arc::new(Product { id: 7 })), IdRef::from(3)],
//! );
//! let compiled = SearchCompiler::default().transactions(&options).unwrap();
//! assert_eq!(compiled.query().must_not.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod collections;
pub mod config;
pub mod error;
pub mod query;
pub mod schema;
pub mod types;

// Re-export commonly used types at crate root
pub use collections::Collection;
pub use config::CompilerConfig;
pub use error::{CompileError, CompileResult};
pub use query::SearchCompiler;
pub use types::{BoolQuery, Clause, CompiledQuery, IdRef, OptionValue, SearchId, SearchOptions};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
