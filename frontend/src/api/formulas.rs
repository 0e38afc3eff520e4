use common::model::formula::{CellUpdate, FormulaSheet};
use common::requests::SheetUpdateRequest;

use super::client::{get, get_with, send_json, ApiResult, Verb};

/// Fetches a worksheet by name, or the backend's default one.
pub async fn sheet(name: Option<&str>) -> ApiResult<FormulaSheet> {
    match name.filter(|name| !name.is_empty()) {
        Some(name) => get_with("/formulas", &[("sheet", name.to_string())]).await,
        None => get("/formulas").await,
    }
}

pub async fn update(sheet_name: &str, updates: Vec<CellUpdate>) -> ApiResult<FormulaSheet> {
    let body = SheetUpdateRequest { sheet_name: sheet_name.to_string(), updates };
    send_json(Verb::Put, "/formulas", &body).await
}
