//! Monthly bill generation
//!
//! The generator walks the item records in order. Each record is validated,
//! clipped to the target month, prorated by its share of the month's days,
//! and added to the bucket of its grouping key. Buckets are finalized into
//! line items in the order their keys were first created.

use chrono::NaiveDate;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use core_kernel::{round_to_cents, BillingMonth};

use crate::bill::{BillResult, Bucket, GroupingKey, LineItem};
use crate::error::{BillingError, FieldError};
use crate::item::ItemRecord;

/// Why an item record contributed nothing to a bill
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SkipReason {
    /// A required field is missing or malformed
    #[error(transparent)]
    InvalidField(#[from] FieldError),

    /// The active range shares no day with the target month
    #[error("active range {start} to {stop} does not overlap {month}")]
    NoOverlap {
        start: NaiveDate,
        stop: NaiveDate,
        month: BillingMonth,
    },
}

/// The contribution of a single item record to a bill
#[derive(Debug, Clone, PartialEq)]
pub struct ProratedCharge {
    pub key: GroupingKey,
    pub qty: i64,
    /// Unrounded prorated amount
    pub amount: f64,
    /// Active days divided by days in the month
    pub fraction: f64,
}

/// Generates prorated bills for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillGenerator {
    month: BillingMonth,
}

impl BillGenerator {
    pub fn new(month: BillingMonth) -> Self {
        Self { month }
    }

    /// Creates a generator from a `YYYY-MM` month string
    pub fn for_month(target_month: &str) -> Result<Self, BillingError> {
        Ok(Self::new(target_month.parse()?))
    }

    pub fn month(&self) -> BillingMonth {
        self.month
    }

    /// Computes the charge of one record for this month
    ///
    /// Checks run in billing order: dates, overlap, rate and quantity, then
    /// item code. The first failure is returned.
    pub fn prorate(&self, item: &ItemRecord) -> Result<ProratedCharge, SkipReason> {
        let start = item.start()?;
        let stop = item.stop()?;

        let active = self
            .month
            .overlap(start, stop)
            .ok_or(SkipReason::NoOverlap {
                start,
                stop,
                month: self.month,
            })?;

        let fraction = active.days() as f64 / self.month.days() as f64;

        let rate = item.unit_rate()?;
        let qty = item.quantity()?;
        let amount = rate * qty as f64 * fraction;

        let item_code = item.code()?;

        Ok(ProratedCharge {
            key: GroupingKey::new(item_code, rate, active.to_string()),
            qty,
            amount,
            fraction,
        })
    }

    /// Generates the bill for `items`
    ///
    /// Records that cannot be billed are skipped and logged at debug level.
    pub fn generate(&self, items: &[ItemRecord]) -> BillResult {
        let mut buckets: IndexMap<GroupingKey, Bucket> = IndexMap::new();
        let mut skipped = 0usize;

        for (index, item) in items.iter().enumerate() {
            match self.prorate(item) {
                Ok(charge) => {
                    buckets.entry(charge.key).or_default().add(charge.qty, charge.amount);
                }
                Err(reason) => {
                    skipped += 1;
                    debug!(index, %reason, month = %self.month, "Skipping item record");
                }
            }
        }

        let bill = finalize(buckets);

        debug!(
            month = %self.month,
            items = items.len(),
            skipped,
            line_items = bill.line_items.len(),
            total_revenue = bill.total_revenue,
            "Generated monthly bill"
        );

        bill
    }
}

/// Generates the bill for `items` in the `YYYY-MM` month `target_month`
///
/// # Errors
///
/// Returns `BillingError::InvalidTargetMonth` if `target_month` is not a
/// valid month. Malformed item records are skipped, not reported.
pub fn generate_monthly_bill(
    items: &[ItemRecord],
    target_month: &str,
) -> Result<BillResult, BillingError> {
    Ok(BillGenerator::for_month(target_month)?.generate(items))
}

fn finalize(buckets: IndexMap<GroupingKey, Bucket>) -> BillResult {
    let line_items: Vec<LineItem> = buckets
        .into_iter()
        .map(|(key, bucket)| LineItem {
            item_code: key.item_code,
            rate: key.rate.into_inner(),
            qty: bucket.qty,
            amount: round_to_cents(bucket.amount),
            billing_period: key.billing_period,
        })
        .collect();

    // Sum the rounded amounts, then round again.
    let total = line_items.iter().fold(0.0, |acc, line| acc + line.amount);

    BillResult {
        line_items,
        total_revenue: round_to_cents(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(month: &str) -> BillGenerator {
        BillGenerator::for_month(month).unwrap()
    }

    #[test]
    fn test_full_month_fraction_is_one() {
        let item = ItemRecord::new("Desk", "10", "1080", "2024-10-18", "2025-10-31");
        let charge = generator("2024-11").prorate(&item).unwrap();

        assert_eq!(charge.fraction, 1.0);
        assert_eq!(charge.amount, 10800.0);
        assert_eq!(charge.key.billing_period, "2024-11-01 to 2024-11-30");
    }

    #[test]
    fn test_no_overlap_reason() {
        let item = ItemRecord::new("Desk", 10, "1000", "2023-11-01", "2024-10-17");
        let reason = generator("2024-11").prorate(&item).unwrap_err();

        assert!(matches!(reason, SkipReason::NoOverlap { .. }));
    }

    #[test]
    fn test_dates_checked_before_rate() {
        let item = ItemRecord::new("Desk", 10, "abc", "not-a-date", "2024-10-17");
        let reason = generator("2024-11").prorate(&item).unwrap_err();

        assert!(matches!(
            reason,
            SkipReason::InvalidField(FieldError::Invalid { field: "start_date", .. })
        ));
    }

    #[test]
    fn test_empty_input_yields_zero_total() {
        let bill = generator("2024-11").generate(&[]);

        assert!(bill.is_empty());
        assert_eq!(bill.total_revenue, 0.0);
        assert!(bill.total_revenue.is_sign_positive());
    }
}
