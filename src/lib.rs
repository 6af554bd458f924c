//! School Fees Engine Library
//! # Overview
//!
//! This library provides an in-memory record store for a school's fee
//! administration: students, the per-grade fee structure, fee dues,
//! receipts and their line items, staff users, transportation routes and
//! a singleton school settings record.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Entity records with their insert and patch shapes
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - The `SchoolStorage` data-access interface
//!   - [`core::storage`] - In-memory implementation
//!   - [`core::reports`] - Recent receipts, defaulters and dashboard figures
//!   - [`core::seed`] - Demonstration data set
//! - [`form`] - Student search form validation
//! - [`io`] - Roster CSV import and listing output
//! - [`config`] - Layered configuration
//! - [`logging`] - Tracing subscriber setup
//! - [`cli`] - CLI arguments parsing and command dispatch
//!
//! # Updates
//!
//! Every entity kind has a `*Patch` type. Applying a patch overwrites only
//! the fields it carries; nullable fields use `Some(None)` to clear a value.
//! Updating or deleting an id that does not exist changes nothing.
//!
//! # Reports
//!
//! - **Recent receipts**: newest receipts first, joined with student name,
//!   grade and section
//! - **Defaulters**: fee dues in Due or Overdue status, joined with the
//!   student's name, grade and admission number
//! - **Dashboard**: the day's collection, receipt and student counts, and
//!   the number of dues not yet fully paid

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod form;
pub mod io;
pub mod logging;
pub mod types;

pub use config::Config;
pub use core::{DashboardStats, Defaulter, MemStorage, RecentReceipt, SchoolStorage};
pub use form::{SearchCriteria, SearchForm};
pub use io::{import_roster, RosterReader};
pub use types::SchoolError;
