// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Finite doubles on the wire.
//!
//! JSON has no token for NaN or infinity; serde_json writes them as `null`,
//! which reads back as an absent value or fails outright. Fields holding
//! doubles are written through these helpers instead, which fail the write.
//! Use with `#[serde(serialize_with = "number::serialize")]`, or the
//! submodule matching the field's container type.

use serde::{Serialize, Serializer};

fn check<E: serde::ser::Error>(value: f64) -> Result<f64, E> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(E::custom(format!("non-finite number `{value}` cannot be written")))
    }
}

fn check_all<E: serde::ser::Error>(values: &[f64]) -> Result<(), E> {
    values.iter().try_for_each(|value| check::<E>(*value).map(|_| ()))
}

/// Write a required double.
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(check(*value)?)
}

/// Optional doubles.
pub mod option {
    use super::*;

    /// Write an optional double.
    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Sequences of doubles (a position, a bounding box).
pub mod seq {
    use super::*;

    /// Write a sequence of doubles.
    #[allow(clippy::ptr_arg)]
    pub fn serialize<S>(values: &Vec<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        check_all::<S::Error>(values)?;
        values.serialize(serializer)
    }

    /// Optional sequences of doubles.
    pub mod option {
        use super::*;

        /// Write an optional sequence of doubles.
        pub fn serialize<S>(values: &Option<Vec<f64>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match values {
                Some(values) => super::serialize(values, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// Sequences of positions (line strings, multi-points).
pub mod positions {
    use super::*;

    /// Write a sequence of positions.
    #[allow(clippy::ptr_arg)]
    pub fn serialize<S>(positions: &Vec<Vec<f64>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        for position in positions {
            check_all::<S::Error>(position)?;
        }
        positions.serialize(serializer)
    }
}
