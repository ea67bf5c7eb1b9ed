//! Deserialization of JSON objects whose concrete type depends on a field.
//!
//! Decoding happens in two passes over the same raw object. The first pass
//! reads only the base shape and picks the variant from it, the second pass
//! decodes the raw object again as that variant. The base shape is a plain
//! struct, so the first pass can never re-enter the resolver.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt::Debug;

/// A type with several concrete shapes chosen by a discriminator in the base
/// shape.
pub trait TypeMapping: Sized {
    /// Fields shared by every variant, including the discriminator.
    type Base: DeserializeOwned;

    /// Discriminator value.
    type Variant: Copy + Debug;

    fn variant_of(base: &Self::Base) -> Self::Variant;

    /// Decode `raw` as the concrete type for `variant`.
    fn decode_variant(variant: Self::Variant, raw: Value) -> serde_json::Result<Self>;
}

/// Resolve an already parsed JSON object into its concrete variant.
pub fn resolve<T: TypeMapping>(raw: Value) -> serde_json::Result<T> {
    let base = T::Base::deserialize(&raw)?;
    let variant = T::variant_of(&base);
    T::decode_variant(variant, raw)
}

/// `Deserialize` body for [`TypeMapping`] types.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TypeMapping,
{
    let raw = Value::deserialize(deserializer)?;
    resolve(raw).map_err(D::Error::custom)
}
