//! Core business logic module
//!
//! This module contains the school store components:
//! - `traits` - The data-access interface
//! - `storage` - In-memory implementation of that interface
//! - `entity_table` - Id-keyed record table backing each entity kind
//! - `reports` - Recent receipts, defaulters and dashboard aggregation
//! - `seed` - Demonstration data set

pub mod entity_table;
pub mod reports;
pub mod seed;
pub mod storage;
pub mod traits;

pub use entity_table::EntityTable;
pub use reports::{DashboardStats, Defaulter, RecentReceipt};
pub use seed::{demo_school_profile, seed_demo_data};
pub use storage::MemStorage;
pub use traits::SchoolStorage;
