use serde::{Deserialize, Deserializer};

/// Tells a missing field apart from an explicit `null`, so that
/// `Option<Option<T>>` fields can both keep and clear a value
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
