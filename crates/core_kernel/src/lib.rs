//! Core Kernel - Foundational types and utilities for the billing system
//!
//! This crate provides the building blocks shared by the billing domain and
//! the API layer:
//! - Calendar months and inclusive date ranges for proration
//! - Amount rounding with decimal-exact midpoint handling
//! - Common error types

pub mod money;
pub mod temporal;
pub mod error;

pub use money::{round_dp, round_to_cents, CENT_PLACES};
pub use temporal::{parse_date, BillingMonth, DateRange, TemporalError, DATE_FORMAT, YEAR_RANGE};
pub use error::CoreError;
