//! Vend Dataset - sales snapshot loading
//!
//! Loads the read-only sales table from a local directory of Parquet files
//! and caches it in memory for the lifetime of the process.
//!
//! # Snapshot layout
//!
//! Any nesting of Parquet files under the snapshot directory works; all
//! files are scanned into a single table:
//!
//! ```text
//! {path}/
//! ├── sales_2023.parquet
//! └── 2024/
//!     ├── q1.parquet
//!     └── q2.parquet
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use vend_dataset::SalesStore;
//!
//! let store = SalesStore::new("data/");
//! let frame = store.frame()?; // loads on first call, cached afterwards
//! println!("{} sales records", frame.height());
//! ```

pub mod error;
pub mod schema;
pub mod store;


pub use error::{DatasetError, Result};
pub use store::SalesStore;
