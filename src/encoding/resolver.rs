// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Polymorphic resolver for `properties` payloads.
//!
//! The raw fragment is first held as an untyped [`Value`] tree. The
//! discriminator is read at the axis' fixed path, looked up in the axis'
//! registry, and the same fragment is then decoded as the resolved
//! shape, so nested optional and collection fields go through the ordinary
//! serde mapping.

use serde::de::Error as _;
use serde_json::Value;
use tracing::trace;

use crate::core::error::FeedFormatError;
use crate::core::registry::VariantAxis;
use crate::encoding::naming::{matches_wire_key, to_wire_key};

/// Read the discriminator of `raw` for axis `P`.
///
/// A missing step on the path is a missing required field; a non-object
/// step or a non-string discriminator is a type mismatch.
pub fn discriminator<P: VariantAxis>(raw: &Value) -> Result<&str, FeedFormatError> {
    let mut node = raw;
    for segment in P::DISCRIMINATOR_PATH {
        let Value::Object(map) = node else {
            return Err(FeedFormatError::from_json(serde_json::Error::custom(format!(
                "invalid type: expected an object containing `{}`",
                to_wire_key(segment)
            ))));
        };
        node = map
            .iter()
            .find(|(key, _)| matches_wire_key(segment, key))
            .map(|(_, value)| value)
            .ok_or_else(|| {
                FeedFormatError::from_json(serde_json::Error::custom(format!(
                    "missing field `{}`",
                    to_wire_key(segment)
                )))
            })?;
    }

    node.as_str().ok_or_else(|| {
        FeedFormatError::from_json(serde_json::Error::custom(format!(
            "invalid type: expected a string discriminator, found {node}"
        )))
    })
}

/// Decode one `properties` fragment as the shape its discriminator names.
pub fn resolve<P: VariantAxis>(raw: Value) -> Result<P, FeedFormatError> {
    let registry = P::registry();
    let entry = {
        let tag = discriminator::<P>(&raw)?;
        let entry = registry
            .lookup(tag)
            .ok_or_else(|| FeedFormatError::unsupported_variant(registry.axis(), tag))?;
        trace!(axis = registry.axis(), tag, shape = entry.shape, "resolved properties variant");
        entry
    };

    entry.decode(raw).map_err(FeedFormatError::from_json)
}
