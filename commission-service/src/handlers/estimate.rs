use crate::dtos::{EstimateRequest, EstimateResponse};
use crate::pricing;
use axum::{response::IntoResponse, Json};

/// Compute a price estimate for a commission.
///
/// Pure computation over the request body: no state is read or written,
/// and the same request always yields the same total. Negative box prices
/// are propagated arithmetically rather than rejected.
pub async fn estimate(Json(req): Json<EstimateRequest>) -> impl IntoResponse {
    // The calculator maps every unknown tier to the base multiplier; flag
    // unexpected values here so typos are visible in the logs.
    if !pricing::is_known_tier(&req.tier) {
        tracing::warn!(tier = %req.tier, "Unrecognized tier on estimate request, using base multiplier");
    }

    let estimated_total = pricing::estimate_total(req.box_price, &req.tier, &req.addons);

    Json(EstimateResponse { estimated_total })
}
