//! Sales analytics facade
//!
//! Owns read access to the sales table and runs the select-then-aggregate
//! pipeline for each request. The computation is synchronous, CPU-bound
//! and side-effect free; an abandoned request leaves nothing behind.

use std::sync::Arc;

use vend_dataset::SalesStore;

use crate::aggregate::{self, SalesTotals};
use crate::builder::FilterSet;
use crate::error::Result;
use crate::query;

/// Query entry point over the cached sales table
pub struct SalesEngine {
    store: Arc<SalesStore>,
}

impl SalesEngine {
    /// Create an engine over a snapshot store
    pub fn new(store: Arc<SalesStore>) -> Self {
        Self { store }
    }

    /// Total revenue over the rows matching the filters
    pub fn period_total(&self, filters: &FilterSet) -> Result<f64> {
        let rows = query::apply(self.store.frame()?, filters)?;
        tracing::debug!(
            matched = rows.height(),
            filters = filters.len(),
            "computing period total"
        );
        aggregate::sum_total(&rows)
    }

    /// Total and average revenue over the rows matching the filters
    pub fn totals(&self, filters: &FilterSet) -> Result<SalesTotals> {
        let rows = query::apply(self.store.frame()?, filters)?;
        tracing::debug!(
            matched = rows.height(),
            filters = filters.len(),
            "computing totals"
        );
        aggregate::total_and_average(&rows)
    }
}
