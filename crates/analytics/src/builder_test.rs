//! Tests for FilterSet construction

use chrono::NaiveDate;

use crate::builder::FilterSet;
use crate::error::AnalyticsError;
use crate::filter::{Filter, FilterKey, FilterValue, Operator};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn test_missing_business_key_rejected() {
    let result = FilterSet::builder().build();
    assert!(matches!(result, Err(AnalyticsError::MissingBusinessKey)));
}

#[test]
fn test_date_range_alone_rejected() {
    let result = FilterSet::builder()
        .start_date(day(1))
        .end_date(day(31))
        .build();
    assert!(matches!(result, Err(AnalyticsError::MissingBusinessKey)));
}

#[test]
fn test_single_business_key_suffices() {
    for filters in [
        FilterSet::builder().employee("E1").build().unwrap(),
        FilterSet::builder().product("P1").build().unwrap(),
        FilterSet::builder().store("S1").build().unwrap(),
    ] {
        assert_eq!(filters.len(), 1);
        assert_eq!(filters.iter().next().unwrap().operator, Operator::Eq);
    }
}

#[test]
fn test_full_query_shape() {
    let filters = FilterSet::builder()
        .start_date(day(2))
        .end_date(day(3))
        .employee("E3")
        .build()
        .unwrap();

    let collected: Vec<&Filter> = filters.iter().collect();
    assert_eq!(collected.len(), 3);

    assert_eq!(collected[0].key, FilterKey::Date);
    assert_eq!(collected[0].operator, Operator::Gte);
    assert_eq!(collected[0].value, FilterValue::Date(day(2)));

    assert_eq!(collected[1].key, FilterKey::Date);
    assert_eq!(collected[1].operator, Operator::Lte);

    assert_eq!(collected[2].key, FilterKey::Employee);
    assert_eq!(collected[2].value, FilterValue::Key("E3".to_string()));
}

#[test]
fn test_each_key_maps_to_its_column() {
    let filters = FilterSet::builder()
        .employee("E1")
        .product("P1")
        .store("S1")
        .build()
        .unwrap();

    let keys: Vec<FilterKey> = filters.iter().map(|f| f.key).collect();
    assert_eq!(
        keys,
        vec![FilterKey::Employee, FilterKey::Product, FilterKey::Store]
    );
}

#[test]
fn test_call_order_does_not_matter() {
    let a = FilterSet::builder()
        .store("S1")
        .start_date(day(1))
        .build()
        .unwrap();
    let b = FilterSet::builder()
        .start_date(day(1))
        .store("S1")
        .build()
        .unwrap();

    let a: Vec<&Filter> = a.iter().collect();
    let b: Vec<&Filter> = b.iter().collect();
    assert_eq!(a, b);
}

#[test]
fn test_single_sided_range_permitted() {
    let filters = FilterSet::builder()
        .start_date(day(2))
        .store("S2")
        .build()
        .unwrap();

    assert_eq!(filters.len(), 2);
    assert_eq!(filters.iter().next().unwrap().operator, Operator::Gte);
}

#[test]
fn test_empty_set_default() {
    let filters = FilterSet::default();
    assert!(filters.is_empty());
    assert_eq!(filters.len(), 0);
}
