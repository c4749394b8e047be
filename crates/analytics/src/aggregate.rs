//! Revenue aggregation
//!
//! Revenue is derived per row (quantity times unit cost); only the final
//! aggregates are rounded. Rounding per row would compound error across a
//! large row-set.

use polars::prelude::*;
use serde::Serialize;

use vend_dataset::schema::{COL_QUANTITY, COL_UNIT_COST};

use crate::error::Result;

/// Name of the derived per-row revenue column
pub const COL_REVENUE: &str = "Total";

/// Total and average revenue over a row-set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesTotals {
    /// Sum of per-row revenue, rounded to cents
    pub total: f64,
    /// Mean per-row revenue, rounded to cents; 0.0 for an empty row-set
    pub average: f64,
}

/// Attach the derived revenue column to a row-set.
///
/// The input is left untouched; the sales table itself is never mutated.
pub fn with_revenue(rows: &DataFrame) -> Result<DataFrame> {
    rows.clone()
        .lazy()
        .with_column(
            (col(COL_QUANTITY).cast(DataType::Float64)
                * col(COL_UNIT_COST).cast(DataType::Float64))
            .alias(COL_REVENUE),
        )
        .collect()
        .map_err(Into::into)
}

/// Sum of per-row revenue, rounded to cents.
///
/// An empty row-set sums to 0.0; this is a result, not an error.
pub fn sum_total(rows: &DataFrame) -> Result<f64> {
    if rows.height() == 0 {
        return Ok(0.0);
    }

    Ok(round2(revenue_sum(rows)?))
}

/// Total plus mean revenue over a row-set.
///
/// An empty row-set yields zeros for both figures; the division is
/// short-circuited, never attempted with a zero count.
pub fn total_and_average(rows: &DataFrame) -> Result<SalesTotals> {
    let count = rows.height();
    if count == 0 {
        return Ok(SalesTotals {
            total: 0.0,
            average: 0.0,
        });
    }

    let total = round2(revenue_sum(rows)?);
    let average = round2(total / count as f64);

    Ok(SalesTotals { total, average })
}

/// Unrounded revenue sum over a non-empty row-set
fn revenue_sum(rows: &DataFrame) -> Result<f64> {
    let derived = with_revenue(rows)?;
    let revenue = derived
        .column(COL_REVENUE)?
        .as_materialized_series()
        .f64()?;
    Ok(revenue.sum().unwrap_or(0.0))
}

/// Round to 2 decimal places, halves away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
