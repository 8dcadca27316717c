// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # wzdx-codec
//!
//! Codec for Work Zone Data Exchange (WZDx) feeds: GeoJSON documents
//! describing roadway work zones and field devices.
//!
//! This library maps feed text to typed values and back:
//! - **Device feeds** ([`DeviceFeed`]) carrying one of eight field device shapes
//! - **Work zone feeds** ([`WorkZoneFeed`]) carrying work zone road events
//!
//! ## Architecture
//!
//! - `core/` - Errors, null-safe structural equality, variant registry types
//! - `encoding/` - Naming transcoder, polymorphic resolver, feed codec
//! - `model/` - Feed data model
//!
//! Each feature's `properties` holds one concrete shape chosen by a
//! discriminator inside `core_details`; reads resolve it through a fixed
//! variant table and reject unknown tags.
//!
//! ## Example: Reading and writing a device feed
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wzdx_codec::{deserialize_feed, serialize_feed, DeviceFeed};
//!
//! let text = std::fs::read_to_string("device_feed.geojson")?;
//! let feed: DeviceFeed = deserialize_feed(&text)?;
//! for feature in &feed.features {
//!     println!("{}: {:?}", feature.id, feature.properties.core_details().device_status);
//! }
//! let output = serialize_feed(&feed)?;
//! let again: DeviceFeed = deserialize_feed(&output)?;
//! assert_eq!(feed, again);
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Compact output
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wzdx_codec::{CodecConfig, FeedCodec, WorkZoneFeed};
//!
//! let codec = FeedCodec::with_config(CodecConfig::default().with_pretty(false));
//! let text = std::fs::read_to_string("work_zone_feed.geojson")?;
//! let feed: WorkZoneFeed = codec.deserialize_feed(&text)?;
//! println!("{}", codec.serialize_feed(&feed)?);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{CodecError, FeedFormatError, FormatErrorKind, Result, Structural};

// Encoding/decoding
pub mod encoding;

pub use encoding::{deserialize_feed, serialize_feed, CodecConfig, FeedCodec};

// Feed data model
pub mod model;

pub use model::{DeviceFeed, Feature, Feed, FieldDevice, RoadEvent, WorkZoneFeed};
