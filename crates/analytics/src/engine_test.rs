//! Tests for the sales engine against a real snapshot on disk

use std::fs::File;
use std::sync::Arc;

use chrono::NaiveDate;
use polars::prelude::*;
use tempfile::TempDir;

use vend_dataset::{schema, SalesStore};

use crate::builder::FilterSet;
use crate::engine::SalesEngine;
use crate::error::AnalyticsError;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn write_snapshot(dir: &TempDir) {
    let mut frame = df!(
        schema::COL_QUANTITY => [10i64, 5, 2, 1, 3],
        schema::COL_UNIT_COST => [2500.00f64, 9730.00, 15750.99, 1237.00, 3420.10],
        schema::COL_DATE => ["2024-01-01", "2024-01-01", "2024-01-02", "2024-01-03", "2024-01-03"],
        schema::COL_EMPLOYEE => ["E1", "E1", "E2", "E3", "E3"],
        schema::COL_PRODUCT => ["P1", "P2", "P3", "P4", "P5"],
        schema::COL_STORE => ["S1", "S1", "S1", "S2", "S2"],
    )
    .unwrap()
    .lazy()
    .with_column(col(schema::COL_DATE).cast(DataType::Date))
    .collect()
    .unwrap();

    let file = File::create(dir.path().join("sales.parquet")).unwrap();
    ParquetWriter::new(file).finish(&mut frame).unwrap();
}

fn engine(dir: &TempDir) -> SalesEngine {
    SalesEngine::new(Arc::new(SalesStore::new(dir.path())))
}

#[test]
fn test_period_total_by_employee() {
    let dir = TempDir::new().unwrap();
    write_snapshot(&dir);

    let filters = FilterSet::builder()
        .start_date(day(2))
        .end_date(day(3))
        .employee("E3")
        .build()
        .unwrap();

    // 1 x 1237.00 + 3 x 3420.10
    assert_eq!(engine(&dir).period_total(&filters).unwrap(), 11497.30);
}

#[test]
fn test_totals_by_store() {
    let dir = TempDir::new().unwrap();
    write_snapshot(&dir);

    let filters = FilterSet::builder()
        .start_date(day(2))
        .end_date(day(3))
        .store("S2")
        .build()
        .unwrap();

    let totals = engine(&dir).totals(&filters).unwrap();
    assert_eq!(totals.total, 11497.30);
    assert_eq!(totals.average, 5748.65);
}

#[test]
fn test_range_excluding_all_rows_yields_zeros() {
    let dir = TempDir::new().unwrap();
    write_snapshot(&dir);

    // S2 has no sales on Jan 1
    let filters = FilterSet::builder()
        .start_date(day(1))
        .end_date(day(1))
        .store("S2")
        .build()
        .unwrap();

    let engine = engine(&dir);
    assert_eq!(engine.period_total(&filters).unwrap(), 0.0);

    let totals = engine.totals(&filters).unwrap();
    assert_eq!(totals.total, 0.0);
    assert_eq!(totals.average, 0.0);
}

#[test]
fn test_missing_snapshot_surfaces_dataset_error() {
    let dir = TempDir::new().unwrap();
    let filters = FilterSet::builder().store("S1").build().unwrap();

    assert!(matches!(
        engine(&dir).period_total(&filters),
        Err(AnalyticsError::Dataset(_))
    ));
}

#[test]
fn test_requests_share_the_cached_frame() {
    let dir = TempDir::new().unwrap();
    write_snapshot(&dir);

    let engine = engine(&dir);
    let filters = FilterSet::builder().employee("E1").build().unwrap();

    // 10 x 2500.00 + 5 x 9730.00
    assert_eq!(engine.period_total(&filters).unwrap(), 73650.0);

    // Snapshot deleted after the first query; the cached frame answers
    std::fs::remove_file(dir.path().join("sales.parquet")).unwrap();
    assert_eq!(engine.period_total(&filters).unwrap(), 73650.0);
}
