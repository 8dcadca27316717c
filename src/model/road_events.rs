// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Road events: the properties axis of a work zone feed.
//!
//! Only work zones are registered. Features whose `event_type` is `detour`
//! or `restriction` are rejected on read.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::equality::{structural_leaf, structural_record};
use crate::encoding::naming::wire_enum;
use crate::encoding::{number, resolver, timestamp};
use crate::model::feed::RoadDirection;

wire_enum! {
    /// Kind of road event; the discriminator of [`RoadEvent`].
    pub enum EventType {
        WorkZone,
        Detour,
        Restriction,
    }
}

wire_enum! {
    /// How a related road event relates to this one.
    pub enum RelatedRoadEventType {
        FirstInSequence,
        NextInSequence,
        FirstOccurrence,
        NextOccurrence,
        RelatedWorkZone,
        RelatedDetour,
        PlannedMovingOperation,
        ActiveMovingOperation,
    }
}

wire_enum! {
    /// Status of a lane.
    pub enum LaneStatus {
        Open,
        Closed,
        ShiftLeft,
        ShiftRight,
        MergeLeft,
        MergeRight,
        AlternatingFlow,
    }
}

wire_enum! {
    /// Kind of lane.
    pub enum LaneType {
        General,
        ExitLane,
        ExitRamp,
        EntranceLane,
        EntranceRamp,
        Sidewalk,
        BikeLane,
        Shoulder,
        Parking,
        Median,
        TwoWayCenterTurnLane,
        /// Deprecated; use `TwoWayCenterTurnLane`.
        CenterLeftTurnLane,
    }
}

wire_enum! {
    /// Kind of travel restriction.
    pub enum RestrictionType {
        LocalAccessOnly,
        NoTrucks,
        TravelPeakHoursOnly,
        Hov2,
        Hov3,
        NoParking,
        ReducedWidth,
        ReducedHeight,
        ReducedLength,
        ReducedWeight,
        AxleLoadLimit,
        GrossWeightLimit,
        TowingProhibited,
        PermittedOversizeLoadsProhibited,
        NoPassing,
    }
}

wire_enum! {
    /// Unit of a restriction value.
    pub enum UnitOfMeasurement {
        Feet,
        Inches,
        Centimeters,
        Pounds,
        Tons,
        Kilograms,
    }
}

wire_enum! {
    /// Impact of a work zone on travel lanes.
    pub enum VehicleImpact {
        Unknown,
        AllLanesOpen,
        SomeLanesClosed,
        AllLanesClosed,
        AlternatingOneWay,
        SomeLanesClosedMergeLeft,
        SomeLanesClosedMergeRight,
        AllLanesOpenShiftLeft,
        AllLanesOpenShiftRight,
        SomeLanesClosedSplit,
        Flagging,
        TemporaryTrafficSignal,
    }
}

wire_enum! {
    /// How a work zone moves.
    ///
    /// Published vocabulary only; no shape carries a field of this type.
    pub enum WorkZoneType {
        Static,
        Moving,
        PlannedMovingArea,
    }
}

wire_enum! {
    /// Deprecated; kept for feeds that still publish it.
    pub enum EventStatus {
        Planned,
        Pending,
        Active,
        Cancelled,
        Completed,
    }
}

wire_enum! {
    /// How the geometry of a road event was determined.
    pub enum LocationMethod {
        Unknown,
        ChannelDeviceMethod,
        SignMethod,
        JunctionMethod,
        Other,
    }
}

wire_enum! {
    /// Deprecated; how a position was verified.
    pub enum SpatialVerification {
        Estimated,
        Verified,
    }
}

wire_enum! {
    /// Deprecated; how a date was verified.
    pub enum TimeVerification {
        Estimated,
        Verified,
    }
}

wire_enum! {
    /// Kind of work in a work zone.
    pub enum WorkTypeName {
        Maintenance,
        MinorRoadDefectRepair,
        RoadsideWork,
        OverheadWork,
        BelowRoadWork,
        BarrierWork,
        SurfaceWork,
        Painting,
        RoadwayRelocation,
        RoadwayCreation,
    }
}

wire_enum! {
    /// Confidence in a worker presence report.
    pub enum WorkerPresenceConfidence {
        Low,
        Medium,
        High,
    }
}

wire_enum! {
    /// What counts as workers being present.
    pub enum WorkerPresenceDefinition {
        WorkersInWorkZoneWorking,
        WorkersInWorkZoneNotWorking,
        MobileEquipmentInWorkZoneMoving,
        MobileEquipmentInWorkZoneNotMoving,
        FixedEquipmentInWorkZone,
        HumansBehindBarrier,
        HumansInRightOfWay,
    }
}

wire_enum! {
    /// How worker presence was determined.
    pub enum WorkerPresenceMethod {
        CameraMonitoring,
        ArrowBoardPresent,
        ConesPresent,
        MaintenanceVehiclePresent,
        WearablesPresent,
        MobileDevicePresent,
        CheckInApp,
        CheckInVerbal,
        Scheduled,
    }
}

/// Reference to another road event by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelatedRoadEvent {
    #[serde(rename = "type")]
    pub kind: RelatedRoadEventType,
    pub id: String,
}

structural_leaf!(RelatedRoadEvent);

/// Deprecated sequencing of road events; use `related_road_events`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
}

structural_record!(Relationship {
    first,
    next,
    parents,
    children,
});

/// Attributes shared by every road event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadEventCoreDetails {
    pub event_type: EventType,
    pub data_source_id: String,
    pub road_names: Vec<String>,
    pub direction: RoadDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_road_events: Option<Vec<RelatedRoadEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<FixedOffset>>,
    /// Deprecated; use `related_road_events`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
}

structural_record!(RoadEventCoreDetails {
    event_type,
    data_source_id,
    road_names,
    direction,
    name,
    related_road_events,
    description,
    creation_date,
    update_date,
    relationship,
});

impl RoadEventCoreDetails {
    /// Core details with only the required fields set.
    pub fn new(
        event_type: EventType,
        data_source_id: impl Into<String>,
        road_names: Vec<String>,
        direction: RoadDirection,
    ) -> Self {
        Self {
            event_type,
            data_source_id: data_source_id.into(),
            road_names,
            direction,
            name: None,
            related_road_events: None,
            description: None,
            creation_date: None,
            update_date: None,
            relationship: None,
        }
    }
}

/// A restriction on travel through a road event or lane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restriction {
    #[serde(rename = "type")]
    pub kind: RestrictionType,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitOfMeasurement>,
}

structural_record!(Restriction { kind, value, unit });

impl Restriction {
    /// A restriction with no value or unit.
    pub fn new(kind: RestrictionType) -> Self {
        Self {
            kind,
            value: None,
            unit: None,
        }
    }
}

/// A lane within a road event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lane {
    /// Position from the left edge, starting at 1
    pub order: i32,
    #[serde(rename = "type")]
    pub kind: LaneType,
    pub status: LaneStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Vec<Restriction>>,
}

structural_leaf!(Lane);

/// Work being done in a road event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeOfWork {
    pub type_name: WorkTypeName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_architectural_change: Option<bool>,
}

structural_leaf!(TypeOfWork);

/// Whether workers are present in a work zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerPresence {
    pub are_workers_present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<WorkerPresenceDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<WorkerPresenceMethod>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub worker_presence_last_confirmed_date: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<WorkerPresenceConfidence>,
}

structural_record!(WorkerPresence {
    are_workers_present,
    definition,
    method,
    worker_presence_last_confirmed_date,
    confidence,
});

/// A work zone road event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkZoneRoadEvent {
    pub core_details: RoadEventCoreDetails,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<FixedOffset>,
    #[serde(with = "timestamp")]
    pub end_date: DateTime<FixedOffset>,
    pub location_method: LocationMethod,
    pub vehicle_impact: VehicleImpact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_start_date_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_end_date_verified: Option<bool>,
    /// Deprecated; use `is_start_date_verified`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_accuracy: Option<TimeVerification>,
    /// Deprecated; use `is_end_date_verified`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_accuracy: Option<TimeVerification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_start_position_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_end_position_verified: Option<bool>,
    /// Deprecated; use `is_start_position_verified`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginning_accuracy: Option<SpatialVerification>,
    /// Deprecated; use `is_end_position_verified`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_accuracy: Option<SpatialVerification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lanes: Option<Vec<Lane>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beginning_cross_street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_cross_street: Option<String>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub beginning_milepost: Option<f64>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub ending_milepost: Option<f64>,
    /// Deprecated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_status: Option<EventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types_of_work: Option<Vec<TypeOfWork>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_presence: Option<WorkerPresence>,
    #[serde(serialize_with = "number::option::serialize", skip_serializing_if = "Option::is_none")]
    pub reduced_speed_limit_kph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Vec<Restriction>>,
}

structural_record!(WorkZoneRoadEvent {
    core_details,
    start_date,
    end_date,
    location_method,
    vehicle_impact,
    is_start_date_verified,
    is_end_date_verified,
    start_date_accuracy,
    end_date_accuracy,
    is_start_position_verified,
    is_end_position_verified,
    beginning_accuracy,
    ending_accuracy,
    lanes,
    beginning_cross_street,
    ending_cross_street,
    beginning_milepost,
    ending_milepost,
    event_status,
    types_of_work,
    worker_presence,
    reduced_speed_limit_kph,
    restrictions,
});

impl WorkZoneRoadEvent {
    /// A work zone with only the required fields set.
    pub fn new(
        core_details: RoadEventCoreDetails,
        start_date: DateTime<FixedOffset>,
        end_date: DateTime<FixedOffset>,
        location_method: LocationMethod,
        vehicle_impact: VehicleImpact,
    ) -> Self {
        Self {
            core_details,
            start_date,
            end_date,
            location_method,
            vehicle_impact,
            is_start_date_verified: None,
            is_end_date_verified: None,
            start_date_accuracy: None,
            end_date_accuracy: None,
            is_start_position_verified: None,
            is_end_position_verified: None,
            beginning_accuracy: None,
            ending_accuracy: None,
            lanes: None,
            beginning_cross_street: None,
            ending_cross_street: None,
            beginning_milepost: None,
            ending_milepost: None,
            event_status: None,
            types_of_work: None,
            worker_presence: None,
            reduced_speed_limit_kph: None,
            restrictions: None,
        }
    }
}

/// Properties of a work zone feed feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RoadEvent {
    WorkZone(WorkZoneRoadEvent),
}

structural_leaf!(RoadEvent);

impl RoadEvent {
    /// Core details of the runtime shape.
    pub fn core_details(&self) -> &RoadEventCoreDetails {
        match self {
            RoadEvent::WorkZone(event) => &event.core_details,
        }
    }
}

impl From<WorkZoneRoadEvent> for RoadEvent {
    fn from(event: WorkZoneRoadEvent) -> Self {
        RoadEvent::WorkZone(event)
    }
}

impl<'de> Deserialize<'de> for RoadEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        resolver::resolve(raw).map_err(serde::de::Error::custom)
    }
}

/// Geometry kinds used by road event features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoadEventGeometryType {
    LineString,
    MultiPoint,
}

structural_leaf!(RoadEventGeometryType);

/// Path or set of points covered by a road event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadEventGeometry {
    #[serde(rename = "type")]
    pub kind: RoadEventGeometryType,
    /// Positions, each `[lon, lat]` or `[lon, lat, alt]`
    #[serde(serialize_with = "number::positions::serialize")]
    pub coordinates: Vec<Vec<f64>>,
}

structural_record!(RoadEventGeometry { kind, coordinates });

impl RoadEventGeometry {
    /// A line string through the given positions.
    pub fn line_string(coordinates: Vec<Vec<f64>>) -> Self {
        Self {
            kind: RoadEventGeometryType::LineString,
            coordinates,
        }
    }

    /// A set of unconnected positions.
    pub fn multi_point(coordinates: Vec<Vec<f64>>) -> Self {
        Self {
            kind: RoadEventGeometryType::MultiPoint,
            coordinates,
        }
    }
}
