use common::model::dashboard::DashboardStats;

use super::client::{get, ApiResult};

pub async fn stats() -> ApiResult<DashboardStats> {
    get("/dashboard/stats").await
}
