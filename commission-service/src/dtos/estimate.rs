use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub box_price: f64,
    pub tier: String,
    #[serde(default)]
    pub addons: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub estimated_total: f64,
}
