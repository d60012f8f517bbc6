//! Bill DTOs

use domain_billing::ItemRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateBillRequest {
    /// `YYYY-MM`
    pub target_month: String,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SampleBillQuery {
    pub month: Option<String>,
}
