// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Naming transcoder between internal identifiers and wire tokens.
//!
//! Internal identifiers are concatenated capitalized words (`DeviceType`,
//! `RightArrowFlashing`). Wire tokens insert a separator before every
//! uppercase character except the first, then lowercase the result:
//!
//! - object keys use `_` (`DeviceType` → `device_type`)
//! - enum values use `-` (`RightArrowFlashing` → `right-arrow-flashing`)
//!
//! The transform is one-way. Reads apply the same rule to the expected
//! identifiers and compare against the incoming token, so no reverse table
//! exists. Acronym runs are split one letter at a time (`HTTPServer` →
//! `h-t-t-p-server`).

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Visitor};

/// Separator used for object keys.
pub const KEY_SEPARATOR: char = '_';

/// Separator used for enum values.
pub const ENUM_SEPARATOR: char = '-';

/// Lazily transcoded characters of `identifier`.
pub fn wire_chars(identifier: &str, separator: char) -> impl Iterator<Item = char> + '_ {
    identifier.chars().enumerate().flat_map(move |(index, c)| {
        let split = (index > 0 && c.is_uppercase()).then_some(separator);
        split.into_iter().chain(c.to_lowercase())
    })
}

/// Convert an identifier to its object-key token.
pub fn to_wire_key(identifier: &str) -> String {
    wire_chars(identifier, KEY_SEPARATOR).collect()
}

/// Convert an identifier to its enum-value token.
pub fn to_wire_enum_value(identifier: &str) -> String {
    wire_chars(identifier, ENUM_SEPARATOR).collect()
}

/// Check whether `token` is the object-key form of `identifier`.
pub fn matches_wire_key(identifier: &str, token: &str) -> bool {
    wire_chars(identifier, KEY_SEPARATOR).eq(token.chars())
}

/// Check whether `token` is the enum-value form of `identifier`.
pub fn matches_wire_enum_value(identifier: &str, token: &str) -> bool {
    wire_chars(identifier, ENUM_SEPARATOR).eq(token.chars())
}

/// Display adapter writing a transcoded identifier without allocating.
#[derive(Debug, Clone, Copy)]
pub struct WireToken<'a> {
    identifier: &'a str,
    separator: char,
}

impl<'a> WireToken<'a> {
    /// Enum-value form of an identifier.
    pub fn enum_value(identifier: &'a str) -> Self {
        Self {
            identifier,
            separator: ENUM_SEPARATOR,
        }
    }

    /// Object-key form of an identifier.
    pub fn key(identifier: &'a str) -> Self {
        Self {
            identifier,
            separator: KEY_SEPARATOR,
        }
    }
}

impl fmt::Display for WireToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        for c in wire_chars(self.identifier, self.separator) {
            f.write_char(c)?;
        }
        Ok(())
    }
}

/// A closed enumeration carried on the wire as enum-value tokens.
///
/// Implemented by [`wire_enum!`]; members are written with
/// [`to_wire_enum_value`] and read by matching against the same rule.
pub trait WireEnum: Sized + Copy + 'static {
    /// Internal name of the enumeration.
    const NAME: &'static str;

    /// Every member with its internal identifier, in declaration order.
    const VARIANTS: &'static [(Self, &'static str)];

    /// Internal identifier of this member.
    fn identifier(&self) -> &'static str;

    /// Wire token of this member.
    fn wire_value(&self) -> String {
        to_wire_enum_value(self.identifier())
    }

    /// Find the member whose wire token is `token`.
    fn from_wire_value(token: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(_, identifier)| matches_wire_enum_value(identifier, token))
            .map(|(member, _)| *member)
    }
}

/// Deserialize a [`WireEnum`] from its wire token.
pub fn deserialize_wire_enum<'de, D, E>(deserializer: D) -> Result<E, D::Error>
where
    D: Deserializer<'de>,
    E: WireEnum,
{
    struct TokenVisitor<E>(PhantomData<E>);

    impl<E: WireEnum> Visitor<'_> for TokenVisitor<E> {
        type Value = E;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a {} value", E::NAME)
        }

        fn visit_str<Er: de::Error>(self, token: &str) -> Result<E, Er> {
            E::from_wire_value(token)
                .ok_or_else(|| Er::custom(format!("unknown {} value `{}`", E::NAME, token)))
        }
    }

    deserializer.deserialize_str(TokenVisitor(PhantomData))
}

/// Declare an enumeration that is written as enum-value tokens.
///
/// Generates the enum with `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and
/// `Hash`, plus [`WireEnum`], `Serialize`, `Deserialize` and
/// [`Structural`](crate::core::Structural) impls.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::encoding::naming::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [(Self, &'static str)] =
                &[$(($name::$variant, stringify!($variant))),+];

            fn identifier(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let identifier = $crate::encoding::naming::WireEnum::identifier(self);
                ::std::fmt::Display::fmt(&$crate::encoding::naming::WireToken::enum_value(identifier), f)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                $crate::encoding::naming::deserialize_wire_enum(deserializer)
            }
        }

        $crate::core::equality::structural_leaf!($name);
    };
}

pub(crate) use wire_enum;
