use common::model::settings::MetalPrices;

use super::client::{get, send_json, ApiResult, Verb};

pub async fn metal_pricing() -> ApiResult<MetalPrices> {
    get("/settings/metal-pricing").await
}

pub async fn update_metal_pricing(prices: &MetalPrices) -> ApiResult<MetalPrices> {
    send_json(Verb::Put, "/settings/metal-pricing", prices).await
}
