// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Null-safe structural equality.
//!
//! Two independently built feeds must compare equal when they describe the
//! same document, which requires value equality all the way down:
//!
//! - absent vs. absent optional fields are equal;
//! - absent vs. present (even an empty sequence) are not;
//! - sequences are equal when they have the same length and pairwise-equal
//!   elements in order;
//! - doubles compare by canonical bit pattern, so equality stays reflexive.
//!
//! Records implement [`Structural`] through [`structural_record!`], which
//! derives `PartialEq`, `Eq` and `Hash` from a single field list. The list is
//! destructured exhaustively, so adding a field to a record without adding it
//! to its list fails to compile.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset};

/// Value equality and hashing with null-safe handling of optional fields.
///
/// Implementations must keep `structural_hash` consistent with
/// `structural_eq`: equal values hash identically.
pub trait Structural {
    /// Compare two values field by field.
    fn structural_eq(&self, other: &Self) -> bool;

    /// Feed exactly the compared fields into `state`.
    fn structural_hash<H: Hasher>(&self, state: &mut H);
}

/// Bit pattern used for equality and hashing of doubles.
///
/// Both zeros map to the same pattern, as do all NaNs.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl Structural for f64 {
    fn structural_eq(&self, other: &Self) -> bool {
        canonical_bits(*self) == canonical_bits(*other)
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(*self).hash(state);
    }
}

impl<T: Structural> Structural for Option<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.structural_eq(b),
            _ => false,
        }
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        match self {
            None => 0u8.hash(state),
            Some(value) => {
                1u8.hash(state);
                value.structural_hash(state);
            }
        }
    }
}

impl<T: Structural> Structural for Vec<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.structural_eq(b))
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.structural_hash(state);
        }
    }
}

/// Implement [`Structural`] for types whose `PartialEq`/`Hash` already have
/// value semantics.
macro_rules! structural_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::core::equality::Structural for $ty {
                fn structural_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn structural_hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    ::std::hash::Hash::hash(self, state);
                }
            }
        )+
    };
}

/// Implement [`Structural`], `PartialEq`, `Eq` and `Hash` for a record from
/// its complete field list.
macro_rules! structural_record {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::core::equality::Structural for $ty {
            fn structural_eq(&self, other: &Self) -> bool {
                let $ty { $($field),+ } = self;
                true $(&& $crate::core::equality::Structural::structural_eq($field, &other.$field))+
            }

            fn structural_hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                let $ty { $($field),+ } = self;
                $($crate::core::equality::Structural::structural_hash($field, state);)+
            }
        }

        impl ::std::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::core::equality::Structural::structural_eq(self, other)
            }
        }

        impl ::std::cmp::Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $crate::core::equality::Structural::structural_hash(self, state);
            }
        }
    };
}

pub(crate) use structural_leaf;
pub(crate) use structural_record;

structural_leaf!(String, bool, i32, i64, DateTime<FixedOffset>);
