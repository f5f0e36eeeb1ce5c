//! Search compiler.
//!
//! Normalizes the caller's options against the collection schema, runs every
//! dimension builder in the collection's fixed order and folds their
//! contributions into one root [`BoolQuery`].

use crate::collections::Collection;
use crate::config::CompilerConfig;
use crate::error::CompileResult;
use crate::types::{BoolQuery, CompiledQuery, SearchOptions};

use super::handlers::native;

/// Compiles faceted search options into Elasticsearch requests.
#[derive(Debug, Clone, Default)]
pub struct SearchCompiler {
    config: CompilerConfig,
}

impl SearchCompiler {
    /// Creates a compiler with the given configuration.
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compiles options for one collection.
    ///
    /// The result depends only on the inputs; the same options always yield
    /// the same query. Nothing is executed.
    pub fn compile(
        &self,
        collection: Collection,
        options: &SearchOptions,
    ) -> CompileResult<CompiledQuery> {
        let normalized = collection.schema().normalize(options)?;

        let mut query = BoolQuery::new();
        for dimension in collection.dimensions() {
            query.merge(dimension.build(&normalized, &self.config));
        }

        let native = native::extract(&normalized);
        let index = self.config.index_name(collection);

        tracing::debug!(
            "Compiled {} search on '{}' from {} options: {} filter, {} must, {} must_not clauses",
            collection,
            index,
            options.len(),
            query.filter.len(),
            query.must.len(),
            query.must_not.len()
        );

        Ok(CompiledQuery::new(collection, index, query, native))
    }

    /// Compiles options for the transactions collection.
    pub fn transactions(&self, options: &SearchOptions) -> CompileResult<CompiledQuery> {
        self.compile(Collection::Transactions, options)
    }

    /// Compiles options for the messages collection.
    pub fn messages(&self, options: &SearchOptions) -> CompileResult<CompiledQuery> {
        self.compile(Collection::Messages, options)
    }
}
