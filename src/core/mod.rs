// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout wzdx-codec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error handling for feed reads and writes
//! - [`Structural`] - Null-safe structural equality
//! - [`VariantRegistry`] - Discriminator tag → concrete shape tables

pub mod equality;
pub mod error;
pub mod registry;

pub use equality::Structural;
pub use error::{CodecError, FeedFormatError, FormatErrorKind, Result};
pub use registry::{VariantAxis, VariantEntry, VariantRegistry};
