//! Core types for the compiler.
//!
//! - [`SearchOptions`], [`OptionValue`], [`IdRef`], [`SearchId`] - caller inputs
//! - [`BoolQuery`], [`Clause`] - the draft query and its clauses
//! - [`NativeParams`], [`CompiledQuery`] - the compiled output
//!
//! # Examples
//!
//! ```
//! use facet_compiler::types::{IdRef, OptionValue, SearchId, SearchOptions};
//!
//! let options = SearchOptions::new()
//!     .with("seller", 42)
//!     .with("product", vec![IdRef::from(7), IdRef::from("ext_9")])
//!     .with("archived", false)
//!     .with("limit", 20);
//!
//! assert_eq!(options.len(), 4);
//! assert!(matches!(options.get("archived"), Some(OptionValue::Bool(false))));
//! assert_eq!(IdRef::from(7).search_id(), SearchId::Int(7));
//! ```

mod options;
mod query;

pub use options::{IdRef, Identified, OptionValue, SearchId, SearchOptions};
pub use query::{BoolQuery, Clause, CompiledQuery, MatchOperator, NativeParams, Occur, RangeOp};
