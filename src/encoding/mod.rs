// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Feed encoding/decoding.
//!
//! - [`naming`] - Naming transcoder for object keys and enum values
//! - [`timestamp`] - ISO-8601 timestamp fields
//! - [`number`] - Finite doubles
//! - [`formatter`] - JSON output formatting
//! - [`registry`] - Variant tables for field devices and road events
//! - [`resolver`] - Polymorphic resolution of `properties` payloads
//! - [`codec`] - Feed codec

pub mod codec;
pub mod formatter;
pub mod naming;
pub mod number;
pub mod registry;
pub mod resolver;
pub mod timestamp;

pub use codec::{deserialize_feed, serialize_feed, CodecConfig, FeedCodec};
pub use formatter::WireFormatter;
pub use naming::{to_wire_enum_value, to_wire_key, WireEnum};
pub use registry::{FIELD_DEVICES, ROAD_EVENTS};
