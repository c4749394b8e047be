//! Snapshot schema contract
//!
//! Column names shared between the loader and the query layer. The
//! snapshot is produced by an upstream pipeline; these names are fixed.

/// Quantity sold per record (integer, >= 0)
pub const COL_QUANTITY: &str = "Qty";

/// Unit cost per record (non-negative)
pub const COL_UNIT_COST: &str = "CostAmount";

/// Sale date (calendar date)
pub const COL_DATE: &str = "KeyDate";

/// Employee identifier (opaque string)
pub const COL_EMPLOYEE: &str = "KeyEmployee";

/// Product identifier (opaque string)
pub const COL_PRODUCT: &str = "KeyProduct";

/// Store identifier (opaque string)
pub const COL_STORE: &str = "KeyStore";

/// Columns every snapshot must carry
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_QUANTITY,
    COL_UNIT_COST,
    COL_DATE,
    COL_EMPLOYEE,
    COL_PRODUCT,
    COL_STORE,
];
