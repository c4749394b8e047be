//! Filter value objects
//!
//! A filter is one typed predicate over the sales table: the column it
//! applies to, the comparison, and a typed value. Date filters carry a
//! `NaiveDate` so the engine compares dates to dates, never strings.

use chrono::NaiveDate;

use vend_dataset::schema;

/// Column a filter applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    /// Sale date
    Date,
    /// Employee identifier
    Employee,
    /// Product identifier
    Product,
    /// Store identifier
    Store,
}

impl FilterKey {
    /// Snapshot column backing this key
    pub fn column(&self) -> &'static str {
        match self {
            Self::Date => schema::COL_DATE,
            Self::Employee => schema::COL_EMPLOYEE,
            Self::Product => schema::COL_PRODUCT,
            Self::Store => schema::COL_STORE,
        }
    }

    /// True for the employee/product/store identifier keys
    pub fn is_business_key(&self) -> bool {
        !matches!(self, Self::Date)
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Comparison operators supported by the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Equal
    Eq,
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
}

impl Operator {
    /// Operator as written in a comparison
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed value a column is compared against
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Calendar date (for the date column)
    Date(NaiveDate),
    /// Identifier, matched verbatim and case-sensitive
    Key(String),
}

/// A single immutable predicate
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Column to filter on
    pub key: FilterKey,
    /// Comparison operator
    pub operator: Operator,
    /// Value to compare against
    pub value: FilterValue,
}

impl Filter {
    /// Create a filter from its parts
    pub fn new(key: FilterKey, operator: Operator, value: FilterValue) -> Self {
        Self {
            key,
            operator,
            value,
        }
    }

    /// Equality on a business key
    pub fn key_eq(key: FilterKey, value: impl Into<String>) -> Self {
        Self::new(key, Operator::Eq, FilterValue::Key(value.into()))
    }

    /// Sale date on or after the given day
    pub fn date_gte(date: NaiveDate) -> Self {
        Self::new(FilterKey::Date, Operator::Gte, FilterValue::Date(date))
    }

    /// Sale date on or before the given day
    pub fn date_lte(date: NaiveDate) -> Self {
        Self::new(FilterKey::Date, Operator::Lte, FilterValue::Date(date))
    }
}
