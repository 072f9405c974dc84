//! Reads `null` back as NaN.
//!
//! `serde_json` already writes non-finite floats as `null`; this is the other
//! half, so a report survives a JSON round trip.

use serde::{Deserialize, Deserializer};

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
