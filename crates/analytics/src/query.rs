//! Row selection
//!
//! Applies a `FilterSet` to the sales table by folding every filter into
//! one typed polars expression. Date filters compare the date column
//! against a date literal; key filters are verbatim string equality. No
//! part of a query is ever built or evaluated as text.

use polars::prelude::*;

use crate::builder::FilterSet;
use crate::error::{AnalyticsError, Result};
use crate::filter::{Filter, FilterKey, FilterValue, Operator};

/// Select the rows satisfying every filter in the set.
///
/// Filters combine with logical AND; their order does not affect the
/// result. An empty set selects the whole table.
pub fn apply(data: &DataFrame, filters: &FilterSet) -> Result<DataFrame> {
    let mut predicate: Option<Expr> = None;
    for filter in filters {
        let expr = to_expr(filter)?;
        predicate = Some(match predicate {
            Some(acc) => acc.and(expr),
            None => expr,
        });
    }

    let Some(predicate) = predicate else {
        return Ok(data.clone());
    };

    data.clone()
        .lazy()
        .filter(predicate)
        .collect()
        .map_err(AnalyticsError::from)
}

/// Translate one filter into a polars expression.
///
/// Combinations the builder cannot produce (a range comparison on an
/// identifier column, or a value typed for the wrong column) are reported
/// as `MalformedQuery` rather than silently coerced.
fn to_expr(filter: &Filter) -> Result<Expr> {
    let column = col(filter.key.column());

    match &filter.value {
        FilterValue::Date(date) => {
            if filter.key != FilterKey::Date {
                return Err(AnalyticsError::MalformedQuery(format!(
                    "date value on column {}",
                    filter.key
                )));
            }
            // Cast is a no-op on an already typed date column; it keeps
            // the comparison date-to-date if a snapshot sneaks in a
            // datetime column.
            Ok(compare(column.cast(DataType::Date), filter.operator, lit(*date)))
        }
        FilterValue::Key(value) => {
            if !filter.key.is_business_key() {
                return Err(AnalyticsError::MalformedQuery(format!(
                    "identifier value on column {}",
                    filter.key
                )));
            }
            if filter.operator != Operator::Eq {
                return Err(AnalyticsError::MalformedQuery(format!(
                    "operator {} not supported on column {}",
                    filter.operator, filter.key
                )));
            }
            Ok(column.eq(lit(value.clone())))
        }
    }
}

fn compare(column: Expr, operator: Operator, value: Expr) -> Expr {
    match operator {
        Operator::Eq => column.eq(value),
        Operator::Gt => column.gt(value),
        Operator::Gte => column.gt_eq(value),
        Operator::Lt => column.lt(value),
        Operator::Lte => column.lt_eq(value),
    }
}
