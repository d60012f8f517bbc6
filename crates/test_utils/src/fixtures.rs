//! Pre-built Test Fixtures
//!
//! Provides ready-to-use item records and months. These fixtures are
//! consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::BillingMonth;
use domain_billing::ItemRecord;

/// Item code shared by the desk rental fixtures
pub const DESK_CODE: &str = "Executive Desk (4*2)";

/// Fixture for item records
pub struct ItemFixtures;

impl ItemFixtures {
    /// Desk rental that ended on 2024-10-17 at rate 1000
    pub fn desk_expired() -> ItemRecord {
        ItemRecord::new(DESK_CODE, 10, "1000", "2023-11-01", "2024-10-17")
    }

    /// Desk rental renewed on 2024-10-18 at rate 1080, quantity as text
    pub fn desk_renewed() -> ItemRecord {
        ItemRecord::new(DESK_CODE, "10", "1080", "2024-10-18", "2025-10-31")
    }

    /// The expired and renewed desk rentals, in that order
    pub fn desk_rentals() -> Vec<ItemRecord> {
        vec![Self::desk_expired(), Self::desk_renewed()]
    }

    /// A record active for the whole of 2024
    pub fn full_year_2024(code: &str, qty: i64, rate: f64) -> ItemRecord {
        ItemRecord::new(code, qty, rate, "2024-01-01", "2024-12-31")
    }

    /// A record whose start date cannot be parsed
    pub fn unparsable_start() -> ItemRecord {
        ItemRecord::new("Broken Chair", 1, "100", "not-a-date", "2024-12-31")
    }

    /// A record whose rate is not a number
    pub fn non_numeric_rate() -> ItemRecord {
        ItemRecord::new("Broken Lamp", 1, "free", "2024-01-01", "2024-12-31")
    }

    /// A record with no item code
    pub fn missing_code() -> ItemRecord {
        ItemRecord {
            item_code: None,
            ..Self::full_year_2024("unused", 1, 100.0)
        }
    }
}

/// Fixture for billing months
pub struct MonthFixtures;

impl MonthFixtures {
    /// November 2024 (30 days)
    pub fn november_2024() -> BillingMonth {
        BillingMonth::new(2024, 11).unwrap()
    }

    /// February 2024 (leap year, 29 days)
    pub fn february_2024() -> BillingMonth {
        BillingMonth::new(2024, 2).unwrap()
    }

    /// February 2023 (28 days)
    pub fn february_2023() -> BillingMonth {
        BillingMonth::new(2023, 2).unwrap()
    }

    /// Calendar date shorthand
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
