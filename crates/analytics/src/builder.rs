//! FilterSet construction
//!
//! Assembles a validated, conjunctive list of filters from independent
//! optional inputs. A query must always be scoped by at least one business
//! key; a date range alone is rejected here, before any data is touched.

use chrono::NaiveDate;

use crate::error::{AnalyticsError, Result};
use crate::filter::{Filter, FilterKey};

/// An immutable, ordered, conjunctive list of filters
///
/// Built per request, discarded when the request completes. Filter order
/// carries no meaning; conjunction is commutative.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Start building a filter set
    pub fn builder() -> FilterSetBuilder {
        FilterSetBuilder::default()
    }

    /// Assemble a set from pre-built filters, skipping validation.
    ///
    /// Only for exercising the engine with shapes the builder refuses.
    #[cfg(test)]
    pub(crate) fn from_filters(filters: Vec<Filter>) -> Self {
        Self { filters }
    }

    /// Iterate the filters in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    /// Number of filters in the set
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when the set holds no filters
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

/// Fluent builder for a `FilterSet`
///
/// Each input is independent and optional. A missing date bound means no
/// constraint on that side of the range.
#[derive(Debug, Clone, Default)]
pub struct FilterSetBuilder {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    employee: Option<String>,
    product: Option<String>,
    store: Option<String>,
}

impl FilterSetBuilder {
    /// Include records dated on or after the given day
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Include records dated on or before the given day
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Scope to a single employee
    pub fn employee(mut self, key: impl Into<String>) -> Self {
        self.employee = Some(key.into());
        self
    }

    /// Scope to a single product
    pub fn product(mut self, key: impl Into<String>) -> Self {
        self.product = Some(key.into());
        self
    }

    /// Scope to a single store
    pub fn store(mut self, key: impl Into<String>) -> Self {
        self.store = Some(key.into());
        self
    }

    /// Validate and assemble the filter set.
    ///
    /// # Errors
    ///
    /// Returns `MissingBusinessKey` when none of employee/product/store
    /// was provided, whether or not a date range is present.
    pub fn build(self) -> Result<FilterSet> {
        if self.employee.is_none() && self.product.is_none() && self.store.is_none() {
            tracing::debug!("query rejected: no business key supplied");
            return Err(AnalyticsError::MissingBusinessKey);
        }

        let mut filters = Vec::new();

        if let Some(start) = self.start_date {
            filters.push(Filter::date_gte(start));
        }
        if let Some(end) = self.end_date {
            filters.push(Filter::date_lte(end));
        }
        if let Some(key) = self.employee {
            filters.push(Filter::key_eq(FilterKey::Employee, key));
        }
        if let Some(key) = self.product {
            filters.push(Filter::key_eq(FilterKey::Product, key));
        }
        if let Some(key) = self.store {
            filters.push(Filter::key_eq(FilterKey::Store, key));
        }

        Ok(FilterSet { filters })
    }
}
