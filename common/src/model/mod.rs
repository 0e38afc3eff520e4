//! Records owned by the REST backend, as the client receives them.
//!
//! The backend serialises ids as `_id` and everything else in camelCase.
//! The client only keeps transient copies of these records, so most fields
//! default when absent instead of failing the whole payload.

pub mod dashboard;
pub mod formula;
pub mod message;
pub mod order;
pub mod product;
pub mod promo;
pub mod settings;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole-number field that the backend sometimes sends as a float or `null`.
/// Fractions are truncated.
pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?
        .filter(|n| n.is_finite())
        .map(|n| n.trunc() as i64)
        .unwrap_or_default())
}
