// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Feed data model.
//!
//! - [`feed`] - Generic feed root, features and metadata
//! - [`field_devices`] - Field device shapes (device feeds)
//! - [`road_events`] - Road event shapes (work zone feeds)

pub mod feed;
pub mod field_devices;
pub mod road_events;

pub use feed::{
    Feature, FeatureCollectionTag, FeatureTag, Feed, FeedDataSource, FeedInfo, FeedLicense,
    RoadDirection,
};
pub use field_devices::{FieldDevice, FieldDeviceCoreDetails, FieldDeviceGeometry};
pub use road_events::{RoadEvent, RoadEventCoreDetails, RoadEventGeometry, WorkZoneRoadEvent};

/// A feed of field devices.
pub type DeviceFeed = Feed<FieldDevice, FieldDeviceGeometry>;

/// A feed of work zone road events.
pub type WorkZoneFeed = Feed<RoadEvent, RoadEventGeometry>;
