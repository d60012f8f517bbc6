//! Billing Domain - Prorated Monthly Bills
//!
//! This crate turns a list of time-bounded, rated item records into the
//! bill for one calendar month.
//!
//! # Proration
//!
//! Each item is charged for the days of its active range that fall inside
//! the target month, both endpoints included:
//!
//! ```text
//! amount = rate * qty * (active_days / days_in_month)
//! ```
//!
//! # Aggregation
//!
//! Items sharing the same code, rate, and active range within the month are
//! merged into one line item. Lines keep the order in which their key was
//! first seen, amounts are rounded to cents once after merging, and the
//! total revenue is the rounded sum of the rounded lines.
//!
//! Records with missing or malformed fields are skipped, never reported as
//! errors. Only an unparsable target month fails the call.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{generate_monthly_bill, ItemRecord};
//!
//! let items = vec![
//!     ItemRecord::new("Executive Desk (4*2)", "10", "1080", "2024-10-18", "2025-10-31"),
//! ];
//!
//! let bill = generate_monthly_bill(&items, "2024-11")?;
//! assert_eq!(bill.total_revenue, 10800.0);
//! ```

pub mod item;
pub mod bill;
pub mod generator;
pub mod error;

pub use item::{FieldValue, ItemCode, ItemRecord};
pub use bill::{BillResult, Bucket, GroupingKey, LineItem};
pub use generator::{generate_monthly_bill, BillGenerator, ProratedCharge, SkipReason};
pub use error::{BillingError, FieldError};
