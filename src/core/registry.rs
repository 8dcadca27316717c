// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core registry types for polymorphic `properties` payloads.
//!
//! A feed's `properties` slot holds one of a closed set of concrete shapes,
//! selected by a discriminator tag embedded in the payload. Each polymorphic
//! axis owns a fixed, compile-time [`VariantRegistry`] mapping tags to the
//! function that decodes that shape. Lookup never falls back to a default
//! entry.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Decodes a raw `properties` tree as one concrete shape.
pub type DecodeFn<T> = fn(Value) -> serde_json::Result<T>;

/// One registered shape on a polymorphic axis.
pub struct VariantEntry<T: 'static> {
    /// Discriminator value on the wire (e.g., "arrow-board")
    pub tag: &'static str,
    /// Name of the concrete shape (e.g., "ArrowBoard")
    pub shape: &'static str,
    decode: DecodeFn<T>,
}

impl<T: 'static> VariantEntry<T> {
    /// Create a registry entry.
    pub const fn new(tag: &'static str, shape: &'static str, decode: DecodeFn<T>) -> Self {
        Self { tag, shape, decode }
    }

    /// Decode a raw tree as this entry's shape.
    pub fn decode(&self, raw: Value) -> serde_json::Result<T> {
        (self.decode)(raw)
    }
}

impl<T: 'static> fmt::Debug for VariantEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantEntry")
            .field("tag", &self.tag)
            .field("shape", &self.shape)
            .finish()
    }
}

/// Fixed table of tag → shape mappings for one axis.
///
/// Tables are `static` and never mutated, so lookups need no locking.
pub struct VariantRegistry<T: 'static> {
    axis: &'static str,
    entries: &'static [VariantEntry<T>],
}

impl<T: 'static> VariantRegistry<T> {
    /// Create a registry over a static table.
    pub const fn new(axis: &'static str, entries: &'static [VariantEntry<T>]) -> Self {
        Self { axis, entries }
    }

    /// Name of the discriminator axis (e.g., "field device type").
    pub fn axis(&self) -> &'static str {
        self.axis
    }

    /// Find the entry registered for a tag.
    pub fn lookup(&self, tag: &str) -> Option<&VariantEntry<T>> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    /// Check if a tag is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    /// All registered tags, in table order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.tag)
    }

    /// Get the number of registered shapes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: 'static> fmt::Debug for VariantRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("axis", &self.axis)
            .field("entries", &self.entries)
            .finish()
    }
}

/// Decode `raw` as shape `S` and lift it into the axis type `T`.
///
/// Used as the [`DecodeFn`] of registry entries.
pub fn decode_as<S, T>(raw: Value) -> serde_json::Result<T>
where
    S: serde::de::DeserializeOwned + Into<T>,
{
    serde_json::from_value::<S>(raw).map(Into::into)
}

/// A polymorphic `properties` axis (field devices, road events).
pub trait VariantAxis: Serialize + Sized + 'static {
    /// Name of the feed kind whose features carry this axis.
    const FEED_KIND: &'static str;

    /// Path from the `properties` object to the discriminator, as internal
    /// identifiers (e.g., `["CoreDetails", "DeviceType"]`).
    const DISCRIMINATOR_PATH: &'static [&'static str];

    /// The axis' fixed variant table.
    fn registry() -> &'static VariantRegistry<Self>;

    /// Registry tag of this value's runtime shape.
    fn tag(&self) -> &'static str;

    /// Discriminator value this value will write, as a wire token.
    fn declared_tag(&self) -> String;
}
