//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating item records and months.

use chrono::{Duration, NaiveDate};
use core_kernel::{BillingMonth, DATE_FORMAT};
use domain_billing::ItemRecord;
use proptest::prelude::*;

/// Strategy for generating billing months between 1990 and 2060
pub fn billing_month_strategy() -> impl Strategy<Value = BillingMonth> {
    (1990i32..2060, 1u32..=12).prop_map(|(year, month)| BillingMonth::new(year, month).unwrap())
}

/// Strategy for generating item codes from a small pool so keys collide
pub fn item_code_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["Desk", "Chair", "Lamp", "Locker"])
}

/// Strategy for generating rates with at most two decimals
pub fn rate_strategy() -> impl Strategy<Value = f64> {
    (0i64..500_000).prop_map(|minor| minor as f64 / 100.0)
}

/// Strategy for generating quantities, including credits
pub fn qty_strategy() -> impl Strategy<Value = i64> {
    -10i64..100
}

/// Strategy for generating active date ranges around `anchor`
pub fn active_range_strategy(anchor: NaiveDate) -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (-90i64..90, 0i64..180).prop_map(move |(offset, length)| {
        let start = anchor + Duration::days(offset);
        (start, start + Duration::days(length))
    })
}

/// Strategy for generating well-formed item records active around `anchor`
pub fn item_record_strategy(anchor: NaiveDate) -> impl Strategy<Value = ItemRecord> {
    (
        item_code_strategy(),
        qty_strategy(),
        rate_strategy(),
        active_range_strategy(anchor),
    )
        .prop_map(|(code, qty, rate, (start, stop))| {
            ItemRecord::new(
                code,
                qty,
                rate,
                start.format(DATE_FORMAT).to_string(),
                stop.format(DATE_FORMAT).to_string(),
            )
        })
}

/// Strategy for generating a list of item records active around `anchor`
pub fn item_list_strategy(anchor: NaiveDate, max_len: usize) -> impl Strategy<Value = Vec<ItemRecord>> {
    prop::collection::vec(item_record_strategy(anchor), 0..max_len)
}
