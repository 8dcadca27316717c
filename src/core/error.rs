// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for wzdx-codec.
//!
//! Every failure is surfaced to the caller as a single [`CodecError`] naming
//! the feed kind being read or written. Read failures carry a
//! [`FeedFormatError`] describing what went wrong:
//! - Malformed input (not JSON)
//! - Unsupported variant (discriminator tag missing from the registry)
//! - Missing required field / type mismatch
//! - Null result (valid JSON that maps to no document)

use serde_json::error::Category;

/// Classification of a read failure, for callers that match on the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatErrorKind {
    /// Text is not syntactically valid JSON
    MalformedInput,
    /// Discriminator tag not present in the variant registry
    UnsupportedVariant,
    /// A required field is absent
    MissingRequiredField,
    /// A field has the wrong shape or an unknown value
    TypeMismatch,
    /// Input parses but yields no root value
    NullResult,
}

impl FormatErrorKind {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatErrorKind::MalformedInput => "malformed_input",
            FormatErrorKind::UnsupportedVariant => "unsupported_variant",
            FormatErrorKind::MissingRequiredField => "missing_required_field",
            FormatErrorKind::TypeMismatch => "type_mismatch",
            FormatErrorKind::NullResult => "null_result",
        }
    }
}

/// The underlying cause of a failed feed read.
#[derive(Debug, thiserror::Error)]
pub enum FeedFormatError {
    /// Text is not valid JSON
    #[error("malformed input: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// Discriminator tag has no registered shape
    #[error("unsupported {axis} '{tag}'")]
    UnsupportedVariant {
        /// Discriminator axis (e.g., "field device type")
        axis: &'static str,
        /// The offending tag, verbatim
        tag: String,
    },

    /// A required field is absent
    #[error("missing required field: {0}")]
    MissingRequiredField(#[source] serde_json::Error),

    /// A field has the wrong type or an unknown value
    #[error("type mismatch: {0}")]
    TypeMismatch(#[source] serde_json::Error),

    /// Document is `null`
    #[error("input does not contain a feed")]
    NullResult,
}

impl FeedFormatError {
    /// Create an unsupported variant error.
    pub fn unsupported_variant(axis: &'static str, tag: impl Into<String>) -> Self {
        FeedFormatError::UnsupportedVariant {
            axis,
            tag: tag.into(),
        }
    }

    /// Classify a serde_json failure.
    ///
    /// serde_json reports syntax problems and data problems under separate
    /// categories; data problems are split further on serde's standard
    /// missing-field message.
    pub fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => FeedFormatError::MalformedInput(err),
            Category::Data if err.to_string().starts_with("missing field") => {
                FeedFormatError::MissingRequiredField(err)
            }
            Category::Data => FeedFormatError::TypeMismatch(err),
        }
    }

    /// Get the classification of this error.
    pub fn kind(&self) -> FormatErrorKind {
        match self {
            FeedFormatError::MalformedInput(_) => FormatErrorKind::MalformedInput,
            FeedFormatError::UnsupportedVariant { .. } => FormatErrorKind::UnsupportedVariant,
            FeedFormatError::MissingRequiredField(_) => FormatErrorKind::MissingRequiredField,
            FeedFormatError::TypeMismatch(_) => FormatErrorKind::TypeMismatch,
            FeedFormatError::NullResult => FormatErrorKind::NullResult,
        }
    }
}

impl From<serde_json::Error> for FeedFormatError {
    fn from(err: serde_json::Error) -> Self {
        FeedFormatError::from_json(err)
    }
}

/// Errors that can occur while reading or writing a feed.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text could not be read as the requested feed kind
    #[error("Unable to deserialize the provided string as a {feed_kind}: {source}")]
    Format {
        /// Feed kind being produced (e.g., "DeviceFeed")
        feed_kind: &'static str,
        /// Underlying cause
        #[source]
        source: FeedFormatError,
    },

    /// The feed could not be written
    #[error("Unable to serialize {feed_kind}: {source}")]
    Serialize {
        /// Feed kind being written
        feed_kind: &'static str,
        /// Underlying cause
        #[source]
        source: serde_json::Error,
    },
}

impl CodecError {
    /// Create a format error for a feed kind.
    pub fn format(feed_kind: &'static str, source: impl Into<FeedFormatError>) -> Self {
        CodecError::Format {
            feed_kind,
            source: source.into(),
        }
    }

    /// Create a serialize error for a feed kind.
    pub fn serialize(feed_kind: &'static str, source: serde_json::Error) -> Self {
        CodecError::Serialize { feed_kind, source }
    }

    /// Feed kind the failed operation was working on.
    pub fn feed_kind(&self) -> &'static str {
        match self {
            CodecError::Format { feed_kind, .. } | CodecError::Serialize { feed_kind, .. } => {
                feed_kind
            }
        }
    }

    /// Classification of a read failure; `None` for write failures.
    pub fn kind(&self) -> Option<FormatErrorKind> {
        match self {
            CodecError::Format { source, .. } => Some(source.kind()),
            CodecError::Serialize { .. } => None,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::Format { feed_kind, source } => {
                let mut fields = vec![
                    ("feed_kind", feed_kind.to_string()),
                    ("kind", source.kind().as_str().to_string()),
                ];
                match source {
                    FeedFormatError::UnsupportedVariant { axis, tag } => {
                        fields.push(("axis", axis.to_string()));
                        fields.push(("tag", tag.clone()));
                    }
                    FeedFormatError::MalformedInput(err)
                    | FeedFormatError::MissingRequiredField(err)
                    | FeedFormatError::TypeMismatch(err) => {
                        fields.push(("cause", err.to_string()));
                    }
                    FeedFormatError::NullResult => {}
                }
                fields
            }
            CodecError::Serialize { feed_kind, source } => vec![
                ("feed_kind", feed_kind.to_string()),
                ("cause", source.to_string()),
            ],
        }
    }
}

/// Result type for wzdx-codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
