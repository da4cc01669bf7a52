//! Configuration for the [`Gate`](crate::gate::Gate).
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The interval used when none is configured.
///
/// 400 milliseconds keeps a single client under an average of three requests per second.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(400);

/// Configuration data struct for the [`Gate`](crate::gate::Gate).
///
/// The interval is (de)serialized as an integer number of milliseconds:
///
/// ```json
/// { "min_interval_ms": 400 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum time between the end of one operation and the start of the next.
    #[serde(rename = "min_interval_ms", with = "millis")]
    pub min_interval: Duration,
}

impl GateConfig {
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self { min_interval: DEFAULT_MIN_INTERVAL }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
