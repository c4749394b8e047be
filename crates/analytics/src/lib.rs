//! Vend Analytics Engine
//!
//! Filtering and revenue aggregation over the sales table.
//!
//! # Overview
//!
//! This crate is the computational core of Vend, built on top of
//! `vend-dataset`. It includes:
//!
//! - **Filters**: typed predicates over the sales columns
//! - **Builder**: assembles a validated, conjunctive `FilterSet` per request
//! - **Query**: applies a `FilterSet` to the table as polars expressions
//! - **Aggregate**: per-row revenue, totals and averages
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use vend_analytics::{FilterSet, SalesEngine};
//! use vend_dataset::SalesStore;
//!
//! let store = Arc::new(SalesStore::new("data/"));
//! let engine = SalesEngine::new(store);
//!
//! let filters = FilterSet::builder()
//!     .start_date(start)
//!     .end_date(end)
//!     .employee("E42")
//!     .build()?;
//!
//! let amount = engine.period_total(&filters)?;
//! ```
//!
//! Every query must be scoped by at least one employee, product or store
//! key; the builder rejects date-only queries before any data is touched.

pub mod aggregate;
pub mod builder;
pub mod engine;
pub mod error;
pub mod filter;
pub mod query;

#[cfg(test)]
mod builder_test;
#[cfg(test)]
mod engine_test;
#[cfg(test)]
mod filter_test;

// Re-exports for convenience
pub use aggregate::{SalesTotals, COL_REVENUE};
pub use builder::{FilterSet, FilterSetBuilder};
pub use engine::SalesEngine;
pub use error::{AnalyticsError, Result};
pub use filter::{Filter, FilterKey, FilterValue, Operator};
