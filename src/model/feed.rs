// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Feed root, features and feed metadata.
//!
//! Both feed kinds share one generic shape: [`Feed<P, G>`] holds metadata and
//! an ordered list of [`Feature<P, G>`], where `P` is the polymorphic
//! properties axis and `G` the geometry. Field order here is the order in
//! which fields are written.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::core::equality::{structural_record, Structural};
use crate::encoding::naming::wire_enum;
use crate::encoding::{number, timestamp};

/// Declare a unit type that is always written as one fixed string.
///
/// Absent on read is accepted and defaults; a present value different from
/// the constant is rejected.
macro_rules! constant_tag {
    ($(#[$meta:meta])* $name:ident => $value:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            /// The fixed wire value.
            pub const VALUE: &'static str = $value;
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(Self::VALUE)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let text = String::deserialize(deserializer)?;
                if text == Self::VALUE {
                    Ok($name)
                } else {
                    Err(serde::de::Error::invalid_value(
                        serde::de::Unexpected::Str(&text),
                        &Self::VALUE,
                    ))
                }
            }
        }

        crate::core::equality::structural_leaf!($name);
    };
}

constant_tag! {
    /// `type` of a feed root.
    FeatureCollectionTag => "FeatureCollection"
}

constant_tag! {
    /// `type` of a feature.
    FeatureTag => "Feature"
}

constant_tag! {
    /// `license` of a feed; always CC0 1.0.
    FeedLicense => "https://creativecommons.org/publicdomain/zero/1.0/"
}

wire_enum! {
    /// Direction of travel on a road.
    pub enum RoadDirection {
        Unknown,
        Northbound,
        Southbound,
        Eastbound,
        Westbound,
        InnerLoop,
        OuterLoop,
        Undefined,
    }
}

/// A data source contributing to a feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedDataSource {
    pub data_source_id: String,
    pub organization_name: String,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<FixedOffset>>,
    /// Seconds between source updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_frequency: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

structural_record!(FeedDataSource {
    data_source_id,
    organization_name,
    update_date,
    update_frequency,
    contact_name,
    contact_email,
});

/// Feed metadata (`feed_info`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedInfo {
    pub publisher: String,
    pub version: String,
    #[serde(with = "timestamp")]
    pub update_date: DateTime<FixedOffset>,
    pub data_sources: Vec<FeedDataSource>,
    /// Seconds between feed updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_frequency: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub license: FeedLicense,
}

structural_record!(FeedInfo {
    publisher,
    version,
    update_date,
    data_sources,
    update_frequency,
    contact_name,
    contact_email,
    license,
});

/// One geolocated entity with its properties and geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature<P, G> {
    pub id: String,
    pub properties: P,
    pub geometry: G,
    #[serde(serialize_with = "number::seq::option::serialize", skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    #[serde(rename = "type", default)]
    pub kind: FeatureTag,
}

impl<P, G> Feature<P, G> {
    /// Create a feature with no bounding box.
    pub fn new(id: impl Into<String>, properties: P, geometry: G) -> Self {
        Self {
            id: id.into(),
            properties,
            geometry,
            bbox: None,
            kind: FeatureTag,
        }
    }

    /// Replace the properties, keeping everything else.
    pub fn try_map_properties<Q, E>(
        self,
        f: impl FnOnce(P) -> Result<Q, E>,
    ) -> Result<Feature<Q, G>, E> {
        Ok(Feature {
            id: self.id,
            properties: f(self.properties)?,
            geometry: self.geometry,
            bbox: self.bbox,
            kind: self.kind,
        })
    }
}

impl<P: Structural, G: Structural> Structural for Feature<P, G> {
    fn structural_eq(&self, other: &Self) -> bool {
        let Feature {
            id,
            properties,
            geometry,
            bbox,
            kind,
        } = self;
        id.structural_eq(&other.id)
            && properties.structural_eq(&other.properties)
            && geometry.structural_eq(&other.geometry)
            && bbox.structural_eq(&other.bbox)
            && kind.structural_eq(&other.kind)
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        let Feature {
            id,
            properties,
            geometry,
            bbox,
            kind,
        } = self;
        id.structural_hash(state);
        properties.structural_hash(state);
        geometry.structural_hash(state);
        bbox.structural_hash(state);
        kind.structural_hash(state);
    }
}

impl<P: Structural, G: Structural> PartialEq for Feature<P, G> {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<P: Structural, G: Structural> Eq for Feature<P, G> {}

impl<P: Structural, G: Structural> Hash for Feature<P, G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural_hash(state);
    }
}

/// A complete feed document (GeoJSON `FeatureCollection`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed<P, G> {
    pub feed_info: FeedInfo,
    pub features: Vec<Feature<P, G>>,
    #[serde(serialize_with = "number::seq::option::serialize", skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    #[serde(rename = "type", default)]
    pub kind: FeatureCollectionTag,
}

impl<P, G> Feed<P, G> {
    /// Create a feed with no bounding box.
    pub fn new(feed_info: FeedInfo, features: Vec<Feature<P, G>>) -> Self {
        Self {
            feed_info,
            features,
            bbox: None,
            kind: FeatureCollectionTag,
        }
    }

    /// Replace every feature's properties in order, stopping at the first
    /// failure.
    pub fn try_map_properties<Q, E>(
        self,
        mut f: impl FnMut(P) -> Result<Q, E>,
    ) -> Result<Feed<Q, G>, E> {
        let features = self
            .features
            .into_iter()
            .map(|feature| feature.try_map_properties(&mut f))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Feed {
            feed_info: self.feed_info,
            features,
            bbox: self.bbox,
            kind: self.kind,
        })
    }
}

impl<P: Structural, G: Structural> Structural for Feed<P, G> {
    fn structural_eq(&self, other: &Self) -> bool {
        let Feed {
            feed_info,
            features,
            bbox,
            kind,
        } = self;
        feed_info.structural_eq(&other.feed_info)
            && features.structural_eq(&other.features)
            && bbox.structural_eq(&other.bbox)
            && kind.structural_eq(&other.kind)
    }

    fn structural_hash<H: Hasher>(&self, state: &mut H) {
        let Feed {
            feed_info,
            features,
            bbox,
            kind,
        } = self;
        feed_info.structural_hash(state);
        features.structural_hash(state);
        bbox.structural_hash(state);
        kind.structural_hash(state);
    }
}

impl<P: Structural, G: Structural> PartialEq for Feed<P, G> {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<P: Structural, G: Structural> Eq for Feed<P, G> {}

impl<P: Structural, G: Structural> Hash for Feed<P, G> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural_hash(state);
    }
}
