//! Test Data Builders
//!
//! Provides a builder for item records with sensible defaults. Tests set
//! only the fields they care about.

use chrono::NaiveDate;
use core_kernel::DATE_FORMAT;
use domain_billing::{FieldValue, ItemRecord};

/// Builder for constructing test item records
///
/// Defaults to one desk at rate 100, active for the whole of 2024.
pub struct ItemRecordBuilder {
    item_code: Option<FieldValue>,
    qty: Option<FieldValue>,
    rate: Option<FieldValue>,
    start_date: Option<FieldValue>,
    stop_date: Option<FieldValue>,
}

impl Default for ItemRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRecordBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            item_code: Some("Desk".into()),
            qty: Some(1i64.into()),
            rate: Some("100".into()),
            start_date: Some("2024-01-01".into()),
            stop_date: Some("2024-12-31".into()),
        }
    }

    /// Sets the item code
    pub fn with_code(mut self, code: impl Into<FieldValue>) -> Self {
        self.item_code = Some(code.into());
        self
    }

    /// Sets the quantity
    pub fn with_qty(mut self, qty: impl Into<FieldValue>) -> Self {
        self.qty = Some(qty.into());
        self
    }

    /// Sets the rate
    pub fn with_rate(mut self, rate: impl Into<FieldValue>) -> Self {
        self.rate = Some(rate.into());
        self
    }

    /// Sets both active dates from calendar dates
    pub fn active(mut self, start: NaiveDate, stop: NaiveDate) -> Self {
        self.start_date = Some(start.format(DATE_FORMAT).to_string().into());
        self.stop_date = Some(stop.format(DATE_FORMAT).to_string().into());
        self
    }

    /// Sets the raw start date value
    pub fn with_start_date(mut self, start: impl Into<FieldValue>) -> Self {
        self.start_date = Some(start.into());
        self
    }

    /// Sets the raw stop date value
    pub fn with_stop_date(mut self, stop: impl Into<FieldValue>) -> Self {
        self.stop_date = Some(stop.into());
        self
    }

    /// Sets a field from an arbitrary JSON value
    pub fn with_raw(mut self, field: &str, value: serde_json::Value) -> Self {
        let value = Some(FieldValue::from(value));
        match field {
            "item_code" => self.item_code = value,
            "qty" => self.qty = value,
            "rate" => self.rate = value,
            "start_date" => self.start_date = value,
            "stop_date" => self.stop_date = value,
            other => panic!("Unknown item record field: {}", other),
        }
        self
    }

    /// Removes a field
    pub fn without(mut self, field: &str) -> Self {
        match field {
            "item_code" => self.item_code = None,
            "qty" => self.qty = None,
            "rate" => self.rate = None,
            "start_date" => self.start_date = None,
            "stop_date" => self.stop_date = None,
            other => panic!("Unknown item record field: {}", other),
        }
        self
    }

    /// Builds the item record
    pub fn build(self) -> ItemRecord {
        ItemRecord {
            item_code: self.item_code,
            qty: self.qty,
            rate: self.rate,
            start_date: self.start_date,
            stop_date: self.stop_date,
        }
    }
}
