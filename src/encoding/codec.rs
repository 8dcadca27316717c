// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Feed codec: text ⇄ typed feeds.
//!
//! ## Read path
//!
//! 1. Parse the text into an untyped tree (syntax errors are malformed input)
//! 2. Reject a bare `null` document
//! 3. Map the tree onto `Feed<Value, G>`, leaving each feature's properties raw
//! 4. Resolve every properties fragment through the axis' variant registry
//!
//! Any failure aborts the read; no partial feed is returned.
//!
//! ## Write path
//!
//! Fields go out in declaration order, absent optionals are omitted, and
//! properties are written with their runtime shape's field set.
//!
//! ## Example
//!
//! ```no_run
//! use wzdx_codec::{deserialize_feed, serialize_feed, DeviceFeed};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = std::fs::read_to_string("device_feed.geojson")?;
//! let feed: DeviceFeed = deserialize_feed(&text)?;
//! let written = serialize_feed(&feed)?;
//! # let _ = written;
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::error::{CodecError, FeedFormatError, Result};
use crate::core::registry::VariantAxis;
use crate::encoding::formatter::WireFormatter;
use crate::encoding::resolver;
use crate::model::feed::Feed;

// =============================================================================
// Configuration
// =============================================================================

/// Output settings for [`FeedCodec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Spaces per indentation level when pretty-printing
    pub indent: usize,
    /// Pretty-print output; compact single-line output when false
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            pretty: true,
        }
    }
}

impl CodecConfig {
    /// Set the indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enable or disable pretty-printing.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

// =============================================================================
// Feed Codec
// =============================================================================

/// Reads and writes feeds with a fixed configuration.
///
/// Holds no mutable state; one codec can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct FeedCodec {
    config: CodecConfig,
}

impl FeedCodec {
    /// Create a codec with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with the given configuration.
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Read a feed of the kind named by `P`.
    ///
    /// # Errors
    ///
    /// [`CodecError::Format`] carrying `P::FEED_KIND` and the cause.
    pub fn deserialize_feed<P, G>(&self, text: &str) -> Result<Feed<P, G>>
    where
        P: VariantAxis,
        G: DeserializeOwned,
    {
        match read_feed::<P, G>(text) {
            Ok(feed) => {
                debug!(
                    feed_kind = P::FEED_KIND,
                    features = feed.features.len(),
                    "deserialized feed"
                );
                Ok(feed)
            }
            Err(source) => {
                let err = CodecError::format(P::FEED_KIND, source);
                debug!(fields = ?err.log_fields(), "feed deserialization failed");
                Err(err)
            }
        }
    }

    /// Write a feed as text.
    ///
    /// # Errors
    ///
    /// [`CodecError::Serialize`] if the writer fails.
    pub fn serialize_feed<P, G>(&self, feed: &Feed<P, G>) -> Result<String>
    where
        P: VariantAxis,
        G: Serialize,
    {
        for feature in &feed.features {
            let declared = feature.properties.declared_tag();
            if declared != feature.properties.tag() {
                warn!(
                    feed_kind = P::FEED_KIND,
                    id = %feature.id,
                    declared = %declared,
                    shape = feature.properties.tag(),
                    "declared discriminator does not match properties shape"
                );
            }
        }

        let text = if self.config.pretty {
            let indent = vec![b' '; self.config.indent];
            write_feed(feed, PrettyFormatter::with_indent(&indent))
        } else {
            write_feed(feed, CompactFormatter)
        }
        .map_err(|source| CodecError::serialize(P::FEED_KIND, source))?;

        debug!(
            feed_kind = P::FEED_KIND,
            features = feed.features.len(),
            bytes = text.len(),
            "serialized feed"
        );
        Ok(text)
    }
}

fn read_feed<P, G>(text: &str) -> std::result::Result<Feed<P, G>, FeedFormatError>
where
    P: VariantAxis,
    G: DeserializeOwned,
{
    let root: Value = serde_json::from_str(text).map_err(FeedFormatError::MalformedInput)?;
    if root.is_null() {
        return Err(FeedFormatError::NullResult);
    }

    let raw: Feed<Value, G> = serde_json::from_value(root).map_err(FeedFormatError::from_json)?;
    raw.try_map_properties(resolver::resolve::<P>)
}

fn write_feed<T, F>(value: &T, formatter: F) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
    F: Formatter,
{
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, WireFormatter::new(formatter));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

/// Read a feed with the default configuration.
pub fn deserialize_feed<P, G>(text: &str) -> Result<Feed<P, G>>
where
    P: VariantAxis,
    G: DeserializeOwned,
{
    FeedCodec::new().deserialize_feed(text)
}

/// Write a feed with the default configuration.
pub fn serialize_feed<P, G>(feed: &Feed<P, G>) -> Result<String>
where
    P: VariantAxis,
    G: Serialize,
{
    FeedCodec::new().serialize_feed(feed)
}
