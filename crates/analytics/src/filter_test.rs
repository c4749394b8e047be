//! Tests for filter value objects

use chrono::NaiveDate;

use crate::filter::{Filter, FilterKey, FilterValue, Operator};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn test_key_columns() {
    assert_eq!(FilterKey::Date.column(), "KeyDate");
    assert_eq!(FilterKey::Employee.column(), "KeyEmployee");
    assert_eq!(FilterKey::Product.column(), "KeyProduct");
    assert_eq!(FilterKey::Store.column(), "KeyStore");
}

#[test]
fn test_business_keys() {
    assert!(!FilterKey::Date.is_business_key());
    assert!(FilterKey::Employee.is_business_key());
    assert!(FilterKey::Product.is_business_key());
    assert!(FilterKey::Store.is_business_key());
}

#[test]
fn test_operator_display() {
    assert_eq!(Operator::Eq.to_string(), "==");
    assert_eq!(Operator::Gt.to_string(), ">");
    assert_eq!(Operator::Gte.to_string(), ">=");
    assert_eq!(Operator::Lt.to_string(), "<");
    assert_eq!(Operator::Lte.to_string(), "<=");
}

#[test]
fn test_key_eq() {
    let filter = Filter::key_eq(FilterKey::Employee, "E1");
    assert_eq!(filter.key, FilterKey::Employee);
    assert_eq!(filter.operator, Operator::Eq);
    assert_eq!(filter.value, FilterValue::Key("E1".to_string()));
}

#[test]
fn test_date_bounds() {
    let start = Filter::date_gte(day(2));
    assert_eq!(start.key, FilterKey::Date);
    assert_eq!(start.operator, Operator::Gte);
    assert_eq!(start.value, FilterValue::Date(day(2)));

    let end = Filter::date_lte(day(3));
    assert_eq!(end.operator, Operator::Lte);
    assert_eq!(end.value, FilterValue::Date(day(3)));
}
