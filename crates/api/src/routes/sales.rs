//! Sales query endpoints
//!
//! Both endpoints require a bearer token and at least one business key;
//! the period endpoint also requires both date bounds. Dates are parsed
//! here so the core only ever sees typed values.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vend_analytics::{FilterSet, FilterSetBuilder, SalesTotals};

use crate::auth::AuthUser;
use crate::error::{ApiError, Result};
use crate::response::Envelope;
use crate::state::AppState;

/// Sales routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(totals))
        .route("/sales/period", get(by_period))
}

/// Query parameters accepted by the sales endpoints
#[derive(Debug, Deserialize)]
pub struct SalesParams {
    /// Range start, YYYY-MM-DD (period endpoint)
    pub start_period: Option<String>,
    /// Range end, YYYY-MM-DD (period endpoint)
    pub end_period: Option<String>,
    /// Employee to scope to
    pub employee_key: Option<String>,
    /// Product to scope to
    pub product_key: Option<String>,
    /// Store to scope to
    pub store_key: Option<String>,
}

/// Amount payload for the period endpoint
#[derive(Debug, Serialize)]
pub struct PeriodSales {
    /// Total revenue in the period
    pub amount: f64,
}

/// Total and average revenue for the matching records
///
/// GET /sales
async fn totals(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<SalesParams>,
) -> Result<Json<Envelope<SalesTotals>>> {
    let filters = business_filters(FilterSet::builder(), params).build()?;
    let totals = state.engine.totals(&filters)?;

    Ok(Json(Envelope::data(totals)))
}

/// Total revenue inside an inclusive date range
///
/// GET /sales/period
async fn by_period(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<SalesParams>,
) -> Result<Json<Envelope<PeriodSales>>> {
    let start = require_date("start_period", params.start_period.as_deref())?;
    let end = require_date("end_period", params.end_period.as_deref())?;

    let builder = FilterSet::builder().start_date(start).end_date(end);
    let filters = business_filters(builder, params).build()?;
    let amount = state.engine.period_total(&filters)?;

    Ok(Json(Envelope::data(PeriodSales { amount })))
}

/// Layer the optional business keys onto a builder
fn business_filters(mut builder: FilterSetBuilder, params: SalesParams) -> FilterSetBuilder {
    if let Some(key) = params.employee_key {
        builder = builder.employee(key);
    }
    if let Some(key) = params.product_key {
        builder = builder.product(key);
    }
    if let Some(key) = params.store_key {
        builder = builder.store(key);
    }
    builder
}

/// Parse a required date parameter
fn require_date(name: &str, value: Option<&str>) -> Result<NaiveDate> {
    let raw = value.ok_or_else(|| {
        ApiError::BadRequest(format!("missing required query param '{}'", name))
    })?;

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ApiError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_date() {
        assert_eq!(
            require_date("start_period", Some("2024-01-02")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert!(matches!(
            require_date("start_period", None),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            require_date("start_period", Some("02/01/2024")),
            Err(ApiError::InvalidDate(_))
        ));
        assert!(matches!(
            require_date("start_period", Some("2024-13-40")),
            Err(ApiError::InvalidDate(_))
        ));
    }
}
