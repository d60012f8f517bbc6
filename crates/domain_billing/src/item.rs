//! Item records
//!
//! An item record is one rated charge with an active date range, as supplied
//! by the caller. Its fields arrive loosely typed (a quantity may be `10` or
//! `"10"`), so they are kept as [`FieldValue`] and converted on demand. A
//! conversion failure is a [`FieldError`], which the generator treats as a
//! reason to skip the record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::parse_date;

use crate::error::FieldError;

/// A loosely-typed field value of an item record
///
/// Any JSON shape deserializes into some variant, so a malformed field never
/// rejects the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Converts to a unit rate
    ///
    /// Integers, floats, and numeric text (surrounding whitespace allowed)
    /// convert. Non-finite rates are rejected.
    pub fn to_rate(&self, field: &'static str) -> Result<f64, FieldError> {
        let rate = match self {
            FieldValue::Integer(n) => *n as f64,
            FieldValue::Float(f) => *f,
            FieldValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| FieldError::invalid(field, "number", self))?,
            FieldValue::Other(_) => return Err(FieldError::invalid(field, "number", self)),
        };

        if !rate.is_finite() {
            return Err(FieldError::invalid(field, "number", self));
        }
        Ok(rate)
    }

    /// Converts to an integer quantity
    ///
    /// Floats truncate toward zero; text must be an integer literal.
    pub fn to_quantity(&self, field: &'static str) -> Result<i64, FieldError> {
        match self {
            FieldValue::Integer(n) => Ok(*n),
            FieldValue::Float(f) => {
                let truncated = f.trunc();
                if truncated.is_finite()
                    && truncated >= i64::MIN as f64
                    && truncated < i64::MAX as f64
                {
                    Ok(truncated as i64)
                } else {
                    Err(FieldError::invalid(field, "integer", self))
                }
            }
            FieldValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| FieldError::invalid(field, "integer", self)),
            FieldValue::Other(_) => Err(FieldError::invalid(field, "integer", self)),
        }
    }

    /// Converts to a `YYYY-MM-DD` calendar date
    pub fn to_date(&self, field: &'static str) -> Result<NaiveDate, FieldError> {
        match self {
            FieldValue::Text(s) => parse_date(s).map_err(|_| FieldError::invalid(field, "date", self)),
            _ => Err(FieldError::invalid(field, "date", self)),
        }
    }

    /// Converts to an item code
    ///
    /// Integer and text codes keep their kind, so `1` and `"1"` differ.
    pub fn to_code(&self, field: &'static str) -> Result<ItemCode, FieldError> {
        match self {
            FieldValue::Text(s) => Ok(ItemCode::Text(s.clone())),
            FieldValue::Integer(n) => Ok(ItemCode::Integer(*n)),
            _ => Err(FieldError::invalid(field, "item code", self)),
        }
    }
}

/// The identity of a billed item
///
/// Serializes back to the JSON shape it was supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemCode {
    Integer(i64),
    Text(String),
}

impl ItemCode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ItemCode::Text(s) => Some(s.as_str()),
            ItemCode::Integer(_) => None,
        }
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemCode::Integer(n) => write!(f, "{}", n),
            ItemCode::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemCode {
    fn from(value: i64) -> Self {
        ItemCode::Integer(value)
    }
}

impl From<&str> for ItemCode {
    fn from(value: &str) -> Self {
        ItemCode::Text(value.to_string())
    }
}

impl From<String> for ItemCode {
    fn from(value: String) -> Self {
        ItemCode::Text(value)
    }
}

impl PartialEq<str> for ItemCode {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for ItemCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Text(s) => write!(f, "{:?}", s),
            FieldValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(FieldValue::Other(value))
    }
}

/// A rated, time-bounded charge supplied by the caller
///
/// Every field is optional at this level; absence is detected when the
/// record is billed. Unknown fields in the payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item identity used for grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_code: Option<FieldValue>,
    /// Quantity, convertible to an integer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<FieldValue>,
    /// Unit rate for a full month, convertible to a number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<FieldValue>,
    /// First active day, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<FieldValue>,
    /// Last active day, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_date: Option<FieldValue>,
}

impl ItemRecord {
    /// Creates a record with every field present
    pub fn new(
        item_code: impl Into<FieldValue>,
        qty: impl Into<FieldValue>,
        rate: impl Into<FieldValue>,
        start_date: impl Into<FieldValue>,
        stop_date: impl Into<FieldValue>,
    ) -> Self {
        Self {
            item_code: Some(item_code.into()),
            qty: Some(qty.into()),
            rate: Some(rate.into()),
            start_date: Some(start_date.into()),
            stop_date: Some(stop_date.into()),
        }
    }

    pub fn code(&self) -> Result<ItemCode, FieldError> {
        required(&self.item_code, "item_code")?.to_code("item_code")
    }

    pub fn quantity(&self) -> Result<i64, FieldError> {
        required(&self.qty, "qty")?.to_quantity("qty")
    }

    pub fn unit_rate(&self) -> Result<f64, FieldError> {
        required(&self.rate, "rate")?.to_rate("rate")
    }

    pub fn start(&self) -> Result<NaiveDate, FieldError> {
        required(&self.start_date, "start_date")?.to_date("start_date")
    }

    pub fn stop(&self) -> Result<NaiveDate, FieldError> {
        required(&self.stop_date, "stop_date")?.to_date("stop_date")
    }
}

fn required<'a>(
    value: &'a Option<FieldValue>,
    field: &'static str,
) -> Result<&'a FieldValue, FieldError> {
    value.as_ref().ok_or(FieldError::Missing(field))
}
