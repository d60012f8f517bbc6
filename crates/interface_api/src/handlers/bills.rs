//! Bill handlers

use axum::{extract::{rejection::JsonRejection, Query, State}, Json};
use domain_billing::{generate_monthly_bill, BillResult, ItemRecord};
use tracing::info;

use crate::{AppState, error::ApiError};
use crate::dto::bill::*;

/// Generates the prorated bill for the submitted items
pub async fn generate_bill(
    payload: Result<Json<GenerateBillRequest>, JsonRejection>,
) -> Result<Json<BillResult>, ApiError> {
    let Json(request) = payload?;
    let bill = generate_monthly_bill(&request.items, &request.target_month)?;

    info!(
        target_month = %request.target_month,
        items = request.items.len(),
        line_items = bill.line_items.len(),
        total_revenue = bill.total_revenue,
        "Bill generated"
    );

    Ok(Json(bill))
}

/// Generates the bill of the built-in sample items
///
/// Bills the configured sample month unless the query names one.
pub async fn sample_bill(
    State(state): State<AppState>,
    Query(query): Query<SampleBillQuery>,
) -> Result<Json<BillResult>, ApiError> {
    let month = query.month.as_deref().unwrap_or(&state.config.sample_month);
    let bill = generate_monthly_bill(&sample_items(), month)?;
    Ok(Json(bill))
}

/// A desk rental that expired in October and its renewal at a higher rate
pub fn sample_items() -> Vec<ItemRecord> {
    vec![
        ItemRecord::new("Executive Desk (4*2)", 10, "1000", "2023-11-01", "2024-10-17"),
        ItemRecord::new("Executive Desk (4*2)", "10", "1080", "2024-10-18", "2025-10-31"),
    ]
}
