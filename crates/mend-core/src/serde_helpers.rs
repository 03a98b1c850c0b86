//! Shared serde helper functions used across multiple modules.

use std::time::Duration;

/// Serialize a `Duration` as whole milliseconds.
pub fn duration_as_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    serializer.serialize_u64(millis)
}
