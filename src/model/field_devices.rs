// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Field devices: the properties axis of a device feed.
//!
//! [`FieldDevice`] is a closed sum over eight concrete shapes. Every shape
//! embeds [`FieldDeviceCoreDetails`], whose `device_type` selects the shape on
//! read.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::equality::{structural_leaf, structural_record};
use crate::encoding::naming::wire_enum;
use crate::encoding::{number, resolver, timestamp};
use crate::model::feed::RoadDirection;

wire_enum! {
    /// Kind of field device; the discriminator of [`FieldDevice`].
    pub enum FieldDeviceType {
        ArrowBoard,
        Camera,
        DynamicMessageSign,
        FlashingBeacon,
        HybridSign,
        LocationMarker,
        TrafficSensor,
        TrafficSignal,
    }
}

wire_enum! {
    /// Operational status of a device.
    pub enum FieldDeviceStatus {
        Ok,
        Warning,
        Error,
        Unknown,
    }
}

wire_enum! {
    /// Pattern shown by an arrow board.
    pub enum ArrowBoardPattern {
        Blank,
        RightArrowStatic,
        RightArrowFlashing,
        RightArrowSequential,
        RightChevronStatic,
        RightChevronFlashing,
        RightChevronSequential,
        LeftArrowStatic,
        LeftArrowFlashing,
        LeftArrowSequential,
        LeftChevronStatic,
        LeftChevronFlashing,
        LeftChevronSequential,
        BidirectionalArrowStatic,
        BidirectionalArrowFlashing,
        LineFlashing,
        DiamondsAlternating,
        FourCornersFlashing,
        Unknown,
    }
}

wire_enum! {
    /// Purpose of a flashing beacon.
    pub enum FlashingBeaconFunction {
        VehicleEntering,
        QueueWarning,
        ReducedSpeed,
        WorkersPresent,
    }
}

wire_enum! {
    /// Purpose of the dynamic part of a hybrid sign.
    pub enum HybridSignDynamicMessageFunction {
        SpeedLimit,
        TravelTime,
        Other,
    }
}

wire_enum! {
    /// What a location marker marks.
    pub enum MarkedLocationType {
        Afad,
        Flagger,
        LaneShift,
        LaneClosure,
        RoadEventStart,
        RoadEventEnd,
        WorkZoneStart,
        WorkZoneEnd,
        PersonalDevice,
        Delineator,
        RampClosure,
        RoadClosure,
        /// Deprecated; use a traffic signal device instead.
        TemporaryTrafficSignal,
    }
}

wire_enum! {
    /// Operating mode of a traffic signal.
    pub enum TrafficSignalMode {
        Unknown,
        Blank,
        FlashingRed,
        FlashingYellow,
        FullyActuated,
        Manual,
        PreTimed,
        SemiActuated,
    }
}

/// Attributes shared by every field device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDeviceCoreDetails {
    pub device_type: FieldDeviceType,
    pub data_source_id: String,
    pub device_status: FieldDeviceStatus,
    #[serde(with = "timestamp")]
    pub update_date: DateTime<FixedOffset>,
    pub has_automatic_location: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_direction: Option<RoadDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub milepost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_messages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moving: Option<bool>,
    /// Identifiers of related road events; not checked for existence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_event_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub velocity_kph: Option<f64>,
}

structural_record!(FieldDeviceCoreDetails {
    device_type,
    data_source_id,
    device_status,
    update_date,
    has_automatic_location,
    road_names,
    road_direction,
    name,
    description,
    milepost,
    status_messages,
    is_moving,
    road_event_ids,
    make,
    model,
    serial_number,
    firmware_version,
    velocity_kph,
});

impl FieldDeviceCoreDetails {
    /// Core details with only the required fields set.
    pub fn new(
        device_type: FieldDeviceType,
        data_source_id: impl Into<String>,
        device_status: FieldDeviceStatus,
        update_date: DateTime<FixedOffset>,
        has_automatic_location: bool,
    ) -> Self {
        Self {
            device_type,
            data_source_id: data_source_id.into(),
            device_status,
            update_date,
            has_automatic_location,
            road_names: None,
            road_direction: None,
            name: None,
            description: None,
            milepost: None,
            status_messages: None,
            is_moving: None,
            road_event_ids: None,
            make: None,
            model: None,
            serial_number: None,
            firmware_version: None,
            velocity_kph: None,
        }
    }
}

/// An arrow board showing a directional pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrowBoard {
    pub core_details: FieldDeviceCoreDetails,
    pub pattern: ArrowBoardPattern,
    /// Deprecated; use `core_details.is_moving`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moving: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_transport_position: Option<bool>,
}

structural_record!(ArrowBoard {
    core_details,
    pattern,
    is_moving,
    is_in_transport_position,
});

/// A camera publishing still images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub core_details: FieldDeviceCoreDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub image_timestamp: Option<DateTime<FixedOffset>>,
}

structural_record!(Camera {
    core_details,
    image_url,
    image_timestamp,
});

/// A sign whose message can change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicMessageSign {
    pub core_details: FieldDeviceCoreDetails,
    /// Message in MULTI markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_multi_string: Option<String>,
}

structural_record!(DynamicMessageSign {
    core_details,
    message_multi_string,
});

/// A flashing beacon light.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashingBeacon {
    pub core_details: FieldDeviceCoreDetails,
    pub function: FlashingBeaconFunction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_flashing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_text: Option<String>,
}

structural_record!(FlashingBeacon {
    core_details,
    function,
    is_flashing,
    sign_text,
});

/// A static sign with a dynamic part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HybridSign {
    pub core_details: FieldDeviceCoreDetails,
    pub dynamic_message_function: HybridSignDynamicMessageFunction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_message_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_sign_text: Option<String>,
}

structural_record!(HybridSign {
    core_details,
    dynamic_message_function,
    dynamic_message_text,
    static_sign_text,
});

/// A location marked by a [`LocationMarker`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkedLocation {
    #[serde(rename = "type")]
    pub kind: MarkedLocationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_event_id: Option<String>,
}

structural_leaf!(MarkedLocation);

/// A device marking one or more locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationMarker {
    pub core_details: FieldDeviceCoreDetails,
    pub marked_locations: Vec<MarkedLocation>,
}

structural_record!(LocationMarker {
    core_details,
    marked_locations,
});

/// Per-lane measurements of a [`TrafficSensor`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSensorLaneData {
    pub lane_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_event_id: Option<String>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub average_speed_kph: Option<f64>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub volume_vph: Option<f64>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub occupancy_percent: Option<f64>,
}

structural_record!(TrafficSensorLaneData {
    lane_order,
    road_event_id,
    average_speed_kph,
    volume_vph,
    occupancy_percent,
});

/// A sensor reporting traffic measurements over an interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSensor {
    pub core_details: FieldDeviceCoreDetails,
    #[serde(with = "timestamp")]
    pub collection_interval_start_date: DateTime<FixedOffset>,
    #[serde(with = "timestamp")]
    pub collection_interval_end_date: DateTime<FixedOffset>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub average_speed_kph: Option<f64>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub volume_vph: Option<f64>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub occupancy_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane_data: Option<Vec<TrafficSensorLaneData>>,
}

structural_record!(TrafficSensor {
    core_details,
    collection_interval_start_date,
    collection_interval_end_date,
    average_speed_kph,
    volume_vph,
    occupancy_percent,
    lane_data,
});

/// A temporary traffic signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrafficSignal {
    pub core_details: FieldDeviceCoreDetails,
    pub mode: TrafficSignalMode,
}

structural_leaf!(TrafficSignal);

/// Properties of a device feed feature.
///
/// Written untagged: each shape's own field set goes out as-is, with the
/// discriminator inside `core_details`. Read through the field device
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FieldDevice {
    ArrowBoard(ArrowBoard),
    Camera(Camera),
    DynamicMessageSign(DynamicMessageSign),
    FlashingBeacon(FlashingBeacon),
    HybridSign(HybridSign),
    LocationMarker(LocationMarker),
    TrafficSensor(TrafficSensor),
    TrafficSignal(TrafficSignal),
}

structural_leaf!(FieldDevice);

impl FieldDevice {
    /// Core details of the runtime shape.
    pub fn core_details(&self) -> &FieldDeviceCoreDetails {
        match self {
            FieldDevice::ArrowBoard(device) => &device.core_details,
            FieldDevice::Camera(device) => &device.core_details,
            FieldDevice::DynamicMessageSign(device) => &device.core_details,
            FieldDevice::FlashingBeacon(device) => &device.core_details,
            FieldDevice::HybridSign(device) => &device.core_details,
            FieldDevice::LocationMarker(device) => &device.core_details,
            FieldDevice::TrafficSensor(device) => &device.core_details,
            FieldDevice::TrafficSignal(device) => &device.core_details,
        }
    }
}

macro_rules! field_device_from {
    ($($shape:ident),+) => {
        $(
            impl From<$shape> for FieldDevice {
                fn from(device: $shape) -> Self {
                    FieldDevice::$shape(device)
                }
            }
        )+
    };
}

field_device_from!(
    ArrowBoard,
    Camera,
    DynamicMessageSign,
    FlashingBeacon,
    HybridSign,
    LocationMarker,
    TrafficSensor,
    TrafficSignal
);

impl<'de> Deserialize<'de> for FieldDevice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        resolver::resolve(raw).map_err(serde::de::Error::custom)
    }
}

/// Geometry kinds used by device features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldDeviceGeometryType {
    Point,
}

structural_leaf!(FieldDeviceGeometryType);

/// Location of a device: a single position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDeviceGeometry {
    #[serde(rename = "type")]
    pub kind: FieldDeviceGeometryType,
    /// `[lon, lat]` or `[lon, lat, alt]`
    #[serde(serialize_with = "number::seq::serialize")]
    pub coordinates: Vec<f64>,
}

structural_record!(FieldDeviceGeometry { kind, coordinates });

impl FieldDeviceGeometry {
    /// A point geometry.
    pub fn point(coordinates: Vec<f64>) -> Self {
        Self {
            kind: FieldDeviceGeometryType::Point,
            coordinates,
        }
    }
}
