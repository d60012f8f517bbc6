//! Bill result types
//!
//! Prorated charges are accumulated into [`Bucket`]s keyed by
//! [`GroupingKey`], then finalized into a [`BillResult`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::item::ItemCode;

/// Identity of one line item on a bill
///
/// Two charges merge iff they share the item code (kind included), the
/// numeric rate, and the billing period text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupingKey {
    pub item_code: ItemCode,
    pub rate: OrderedFloat<f64>,
    pub billing_period: String,
}

impl GroupingKey {
    pub fn new(item_code: impl Into<ItemCode>, rate: f64, billing_period: impl Into<String>) -> Self {
        Self {
            item_code: item_code.into(),
            rate: OrderedFloat(rate),
            billing_period: billing_period.into(),
        }
    }
}

/// Running totals for one grouping key
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bucket {
    pub qty: i64,
    /// Unrounded sum of prorated amounts
    pub amount: f64,
}

impl Bucket {
    pub fn add(&mut self, qty: i64, amount: f64) {
        self.qty = self.qty.saturating_add(qty);
        self.amount += amount;
    }
}

/// One consolidated line of a bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_code: ItemCode,
    pub rate: f64,
    pub qty: i64,
    /// Prorated amount, rounded to cents
    pub amount: f64,
    /// `YYYY-MM-DD to YYYY-MM-DD`
    pub billing_period: String,
}

/// The bill for one month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillResult {
    /// Lines in first-seen order of their grouping key
    pub line_items: Vec<LineItem>,
    /// Rounded sum of the rounded line amounts
    pub total_revenue: f64,
}

impl BillResult {
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Total quantity billed across all lines
    pub fn total_quantity(&self) -> i64 {
        self.line_items
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.qty))
    }

    /// Finds the lines billed for an item code
    pub fn lines_for<'a>(
        &'a self,
        item_code: &'a ItemCode,
    ) -> impl Iterator<Item = &'a LineItem> + 'a {
        self.line_items
            .iter()
            .filter(move |line| &line.item_code == item_code)
    }
}
