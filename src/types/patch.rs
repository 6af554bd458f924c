//! Shared helpers for partial updates
//!
//! Every entity has a `*Patch` type whose fields are all optional. Applying a
//! patch is a shallow merge: fields left as `None` keep their stored value.
//! Nullable fields use `Option<Option<T>>` so a patch can distinguish between
//! "leave alone" (`None`), "clear" (`Some(None)`) and "set" (`Some(Some(v))`).

use serde::{Deserialize, Deserializer};

/// Overwrite `slot` when the patch carries a value
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Deserialize a nullable patch field
///
/// A missing key falls back to `#[serde(default)]` (`None`), while an explicit
/// `null` becomes `Some(None)`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
