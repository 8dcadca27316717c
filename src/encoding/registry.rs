// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Variant tables for the two properties axes.
//!
//! | axis | discriminator | tags |
//! |---|---|---|
//! | field device | `core_details.device_type` | the eight [`FieldDeviceType`] values |
//! | road event | `core_details.event_type` | `work-zone` only |
//!
//! Tables are static and read-only; lookups from any thread need no
//! synchronization.

use crate::core::registry::{decode_as, VariantAxis, VariantEntry, VariantRegistry};
use crate::encoding::naming::WireEnum;
use crate::model::field_devices::{
    ArrowBoard, Camera, DynamicMessageSign, FieldDevice, FlashingBeacon, HybridSign,
    LocationMarker, TrafficSensor, TrafficSignal,
};
use crate::model::road_events::{RoadEvent, WorkZoneRoadEvent};

static FIELD_DEVICE_ENTRIES: [VariantEntry<FieldDevice>; 8] = [
    VariantEntry::new("arrow-board", "ArrowBoard", decode_as::<ArrowBoard, FieldDevice>),
    VariantEntry::new("camera", "Camera", decode_as::<Camera, FieldDevice>),
    VariantEntry::new(
        "dynamic-message-sign",
        "DynamicMessageSign",
        decode_as::<DynamicMessageSign, FieldDevice>,
    ),
    VariantEntry::new(
        "flashing-beacon",
        "FlashingBeacon",
        decode_as::<FlashingBeacon, FieldDevice>,
    ),
    VariantEntry::new("hybrid-sign", "HybridSign", decode_as::<HybridSign, FieldDevice>),
    VariantEntry::new(
        "location-marker",
        "LocationMarker",
        decode_as::<LocationMarker, FieldDevice>,
    ),
    VariantEntry::new(
        "traffic-sensor",
        "TrafficSensor",
        decode_as::<TrafficSensor, FieldDevice>,
    ),
    VariantEntry::new(
        "traffic-signal",
        "TrafficSignal",
        decode_as::<TrafficSignal, FieldDevice>,
    ),
];

/// Field device shapes by `device_type`.
pub static FIELD_DEVICES: VariantRegistry<FieldDevice> =
    VariantRegistry::new("field device type", &FIELD_DEVICE_ENTRIES);

static ROAD_EVENT_ENTRIES: [VariantEntry<RoadEvent>; 1] = [VariantEntry::new(
    "work-zone",
    "WorkZoneRoadEvent",
    decode_as::<WorkZoneRoadEvent, RoadEvent>,
)];

/// Road event shapes by `event_type`.
pub static ROAD_EVENTS: VariantRegistry<RoadEvent> =
    VariantRegistry::new("road event type", &ROAD_EVENT_ENTRIES);

impl VariantAxis for FieldDevice {
    const FEED_KIND: &'static str = "DeviceFeed";
    const DISCRIMINATOR_PATH: &'static [&'static str] = &["CoreDetails", "DeviceType"];

    fn registry() -> &'static VariantRegistry<Self> {
        &FIELD_DEVICES
    }

    fn tag(&self) -> &'static str {
        match self {
            FieldDevice::ArrowBoard(_) => "arrow-board",
            FieldDevice::Camera(_) => "camera",
            FieldDevice::DynamicMessageSign(_) => "dynamic-message-sign",
            FieldDevice::FlashingBeacon(_) => "flashing-beacon",
            FieldDevice::HybridSign(_) => "hybrid-sign",
            FieldDevice::LocationMarker(_) => "location-marker",
            FieldDevice::TrafficSensor(_) => "traffic-sensor",
            FieldDevice::TrafficSignal(_) => "traffic-signal",
        }
    }

    fn declared_tag(&self) -> String {
        self.core_details().device_type.wire_value()
    }
}

impl VariantAxis for RoadEvent {
    const FEED_KIND: &'static str = "WorkZoneFeed";
    const DISCRIMINATOR_PATH: &'static [&'static str] = &["CoreDetails", "EventType"];

    fn registry() -> &'static VariantRegistry<Self> {
        &ROAD_EVENTS
    }

    fn tag(&self) -> &'static str {
        match self {
            RoadEvent::WorkZone(_) => "work-zone",
        }
    }

    fn declared_tag(&self) -> String {
        self.core_details().event_type.wire_value()
    }
}
