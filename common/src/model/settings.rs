use serde::{Deserialize, Serialize};

/// Reference metal quotes used by the backend to reprice products.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MetalPrices {
    #[serde(deserialize_with = "super::null_as_default")]
    pub platinum: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub palladium: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub rhodium: f64,
}
