// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};

use wzdx_codec::model::feed::{FeedDataSource, FeedInfo, FeedLicense, RoadDirection};
use wzdx_codec::model::field_devices::{
    ArrowBoard, ArrowBoardPattern, Camera, DynamicMessageSign, FieldDeviceCoreDetails,
    FieldDeviceGeometry, FieldDeviceStatus, FieldDeviceType, FlashingBeacon,
    FlashingBeaconFunction, HybridSign, HybridSignDynamicMessageFunction, LocationMarker,
    MarkedLocation, MarkedLocationType, TrafficSensor, TrafficSensorLaneData, TrafficSignal,
    TrafficSignalMode,
};
use wzdx_codec::model::road_events::{
    EventStatus, EventType, Lane, LaneStatus, LaneType, LocationMethod, RelatedRoadEvent,
    RelatedRoadEventType, Relationship, Restriction, RestrictionType, RoadEventCoreDetails,
    RoadEventGeometry, SpatialVerification, TimeVerification, TypeOfWork, UnitOfMeasurement,
    VehicleImpact, WorkTypeName, WorkZoneRoadEvent, WorkerPresence, WorkerPresenceConfidence,
    WorkerPresenceDefinition, WorkerPresenceMethod,
};
use wzdx_codec::{DeviceFeed, Feature, Feed, FieldDevice, RoadEvent, WorkZoneFeed};

// ============================================================================
// Fixtures
// ============================================================================

pub const DEVICE_FEED: &str = "device_feed.geojson";
pub const DEVICE_FEED_VALID: &str = "device_feed_valid.geojson";
pub const WORK_ZONE_FEED: &str = "work_zone_feed.geojson";
pub const WORK_ZONE_FEED_VALID: &str = "work_zone_feed_valid.geojson";
pub const WORK_ZONE_FEED_WITH_DETOURS: &str = "work_zone_feed_with_detours.geojson";

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Read a fixture document.
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

/// Remove whitespace outside JSON string literals.
pub fn strip_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    for c in text.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if !c.is_whitespace() {
            out.push(c);
        }
    }
    out
}

/// Assert two documents are identical up to whitespace, reporting the first
/// differing position.
pub fn assert_same_document(actual: &str, expected: &str) {
    let actual = strip_whitespace(actual);
    let expected = strip_whitespace(expected);
    if actual != expected {
        let at = actual
            .chars()
            .zip(expected.chars())
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| actual.len().min(expected.len()));
        let context = |s: &str| s.chars().skip(at.saturating_sub(40)).take(100).collect::<String>();
        panic!(
            "documents differ at {at}\n  actual:   {}\n  expected: {}",
            context(&actual),
            context(&expected)
        );
    }
}

pub fn ts(text: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(text).unwrap()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Sample Feed Metadata
// ============================================================================

pub fn sample_feed_info(data_source_id: &str) -> FeedInfo {
    FeedInfo {
        publisher: "TestDOT".to_string(),
        version: "4.1".to_string(),
        update_date: ts("2023-06-18T15:00:00+00:00"),
        data_sources: vec![FeedDataSource {
            data_source_id: data_source_id.to_string(),
            organization_name: "Test City 1".to_string(),
            update_date: Some(ts("2023-06-18T14:37:31+00:00")),
            update_frequency: Some(300),
            contact_name: Some("Solomn Soliel Sourcefeed".to_string()),
            contact_email: Some("solomon.sourcefeed@testcity1.gov".to_string()),
        }],
        update_frequency: Some(60),
        contact_name: Some("Frederick Francis Feedmanager".to_string()),
        contact_email: Some("fred.feedmanager@testdot.gov".to_string()),
        license: FeedLicense,
    }
}

// ============================================================================
// Sample Device Feed
// ============================================================================

const ARROW_BOARD_SOURCE: &str = "0d8c63cb-69f0-4b87-baed-b11d6bca9abf";
const DEVICE_ID: &str = "395fff35-46c5-41d9-acdd-85dc5bd3cba8";
const DEVICE_SOURCE: &str = "4f880fce-2dd1-4d29-9676-b2152fce1336";

fn device_point() -> FieldDeviceGeometry {
    FieldDeviceGeometry::point(vec![-93.77667436599995, 41.62032278300006])
}

fn device_core(
    device_type: FieldDeviceType,
    status: FieldDeviceStatus,
    automatic: bool,
) -> FieldDeviceCoreDetails {
    FieldDeviceCoreDetails::new(
        device_type,
        DEVICE_SOURCE,
        status,
        ts("2024-06-18T14:37:31Z"),
        automatic,
    )
}

pub fn sample_arrow_board_feature() -> Feature<FieldDevice, FieldDeviceGeometry> {
    let mut core = FieldDeviceCoreDetails::new(
        FieldDeviceType::ArrowBoard,
        ARROW_BOARD_SOURCE,
        FieldDeviceStatus::Ok,
        ts("2023-06-18T14:37:31Z"),
        true,
    );
    core.road_names = Some(strings(&["I-80"]));
    core.road_direction = Some(RoadDirection::Northbound);
    core.name = Some("Arrow Board 1".to_string());
    core.description = Some("An arrow board for testing".to_string());
    core.milepost = Some(15.1);
    core.status_messages = Some(strings(&["Arrow board is operational."]));
    core.is_moving = Some(false);
    core.road_event_ids = Some(strings(&["1f334f6b-14ad-4123-b92d-9d4a7e416629"]));
    core.make = Some("Ver-Mac".to_string());
    core.model = Some("AB-1".to_string());
    core.serial_number = Some("1234567890".to_string());
    core.firmware_version = Some("1.0.0".to_string());

    Feature::new(
        "3b46c53d-24a2-46e9-be73-f0d1165dfb3b",
        FieldDevice::ArrowBoard(ArrowBoard {
            core_details: core,
            pattern: ArrowBoardPattern::RightArrowFlashing,
            is_moving: Some(false),
            is_in_transport_position: Some(true),
        }),
        FieldDeviceGeometry::point(vec![-93.77668405099996, 41.617961698000045]),
    )
}

pub fn sample_device_features() -> Vec<Feature<FieldDevice, FieldDeviceGeometry>> {
    let devices = vec![
        FieldDevice::Camera(Camera {
            core_details: device_core(FieldDeviceType::Camera, FieldDeviceStatus::Warning, true),
            image_url: Some("https://test.com/image.jpg".to_string()),
            image_timestamp: Some(ts("2024-06-18T14:37:10Z")),
        }),
        FieldDevice::DynamicMessageSign(DynamicMessageSign {
            core_details: device_core(
                FieldDeviceType::DynamicMessageSign,
                FieldDeviceStatus::Error,
                false,
            ),
            message_multi_string: Some(
                "I-90 WB[nl]TRAFFIC[nl]BACKUPS[np]PLEASE[nl]USE[nl]CAUTION".to_string(),
            ),
        }),
        FieldDevice::FlashingBeacon(FlashingBeacon {
            core_details: device_core(
                FieldDeviceType::FlashingBeacon,
                FieldDeviceStatus::Error,
                false,
            ),
            function: FlashingBeaconFunction::ReducedSpeed,
            is_flashing: Some(true),
            sign_text: Some("SPEED LIMIT 50 MPH".to_string()),
        }),
        FieldDevice::HybridSign(HybridSign {
            core_details: device_core(FieldDeviceType::HybridSign, FieldDeviceStatus::Ok, true),
            dynamic_message_function: HybridSignDynamicMessageFunction::SpeedLimit,
            dynamic_message_text: Some("50".to_string()),
            static_sign_text: Some("SPEED LIMIT".to_string()),
        }),
        FieldDevice::LocationMarker(LocationMarker {
            core_details: device_core(
                FieldDeviceType::LocationMarker,
                FieldDeviceStatus::Ok,
                true,
            ),
            marked_locations: vec![MarkedLocation {
                kind: MarkedLocationType::WorkZoneStart,
                road_event_id: Some("395fff35-46aa-41d9-acdd-85dc5bd3cba8".to_string()),
            }],
        }),
        FieldDevice::TrafficSensor(TrafficSensor {
            core_details: device_core(FieldDeviceType::TrafficSensor, FieldDeviceStatus::Ok, true),
            collection_interval_start_date: ts("2024-06-18T14:36:00Z"),
            collection_interval_end_date: ts("2024-06-18T14:37:00Z"),
            average_speed_kph: Some(89.4),
            volume_vph: Some(2300.0),
            occupancy_percent: Some(5.22),
            lane_data: Some(vec![TrafficSensorLaneData {
                lane_order: 1,
                road_event_id: Some(DEVICE_ID.to_string()),
                average_speed_kph: Some(89.4),
                volume_vph: Some(2300.0),
                occupancy_percent: Some(5.22),
            }]),
        }),
        FieldDevice::TrafficSignal(TrafficSignal {
            core_details: device_core(FieldDeviceType::TrafficSignal, FieldDeviceStatus::Ok, true),
            mode: TrafficSignalMode::PreTimed,
        }),
    ];

    let mut features = vec![sample_arrow_board_feature()];
    features.extend(
        devices
            .into_iter()
            .map(|device| Feature::new(DEVICE_ID, device, device_point())),
    );
    features
}

/// The device feed in `device_feed.geojson`.
pub fn sample_device_feed() -> DeviceFeed {
    Feed::new(sample_feed_info(ARROW_BOARD_SOURCE), sample_device_features())
}

/// A device feed holding only the arrow board.
pub fn sample_arrow_board_feed() -> DeviceFeed {
    Feed::new(
        sample_feed_info(ARROW_BOARD_SOURCE),
        vec![sample_arrow_board_feature()],
    )
}

// ============================================================================
// Sample Work Zone Feed
// ============================================================================

const WORK_ZONE_SOURCE: &str = "ef96bc81-3249-495a-aa54-68c5b417cceb";
const WORK_ZONE_ID: &str = "4fee99c9-e138-4a21-87ba-297ca22234ab";
const NEXT_ID: &str = "6db3aa76-8851-4e09-af28-cc81d58cd848";
const DETOUR_ID: &str = "8739c2c3-8f46-421c-843b-2464fc00bf0b";

pub fn sample_relationship() -> Relationship {
    Relationship {
        first: Some(strings(&[WORK_ZONE_ID])),
        next: Some(strings(&[NEXT_ID])),
        parents: Some(strings(&["Parent Project"])),
        children: Some(strings(&[DETOUR_ID])),
    }
}

pub fn sample_work_zone() -> WorkZoneRoadEvent {
    let mut core = RoadEventCoreDetails::new(
        EventType::WorkZone,
        WORK_ZONE_SOURCE,
        strings(&["I-80", "I-35"]),
        RoadDirection::Northbound,
    );
    core.name = Some("Work Zone 1".to_string());
    core.related_road_events = Some(vec![
        RelatedRoadEvent {
            kind: RelatedRoadEventType::NextInSequence,
            id: NEXT_ID.to_string(),
        },
        RelatedRoadEvent {
            kind: RelatedRoadEventType::RelatedDetour,
            id: DETOUR_ID.to_string(),
        },
    ]);
    core.description = Some("Single direction work zone with lane-level information.".to_string());
    core.creation_date = Some(ts("2023-06-17T18:00:00Z"));
    core.update_date = Some(ts("2023-06-18T14:37:31Z"));
    core.relationship = Some(sample_relationship());

    let mut event = WorkZoneRoadEvent::new(
        core,
        ts("2023-06-19T07:00:00Z"),
        ts("2023-06-19T19:00:00Z"),
        LocationMethod::ChannelDeviceMethod,
        VehicleImpact::SomeLanesClosed,
    );
    event.is_start_date_verified = Some(false);
    event.is_end_date_verified = Some(false);
    event.start_date_accuracy = Some(TimeVerification::Estimated);
    event.end_date_accuracy = Some(TimeVerification::Estimated);
    event.is_start_position_verified = Some(true);
    event.is_end_position_verified = Some(true);
    event.beginning_accuracy = Some(SpatialVerification::Estimated);
    event.ending_accuracy = Some(SpatialVerification::Estimated);
    event.lanes = Some(vec![
        Lane {
            order: 1,
            kind: LaneType::General,
            status: LaneStatus::Open,
            restrictions: Some(vec![Restriction {
                kind: RestrictionType::ReducedWidth,
                value: Some(10.0),
                unit: Some(UnitOfMeasurement::Feet),
            }]),
        },
        Lane {
            order: 2,
            kind: LaneType::General,
            status: LaneStatus::Closed,
            restrictions: None,
        },
    ]);
    event.beginning_cross_street = Some("Main Street".to_string());
    event.ending_cross_street = Some("First Street".to_string());
    event.beginning_milepost = Some(125.2);
    event.ending_milepost = Some(126.3);
    event.event_status = Some(EventStatus::Active);
    event.types_of_work = Some(vec![TypeOfWork {
        type_name: WorkTypeName::Maintenance,
        is_architectural_change: None,
    }]);
    event.worker_presence = Some(WorkerPresence {
        are_workers_present: false,
        definition: Some(vec![
            WorkerPresenceDefinition::WorkersInWorkZoneWorking,
            WorkerPresenceDefinition::WorkersInWorkZoneNotWorking,
        ]),
        method: Some(WorkerPresenceMethod::CameraMonitoring),
        worker_presence_last_confirmed_date: Some(ts("2023-06-18T14:30:25Z")),
        confidence: Some(WorkerPresenceConfidence::High),
    });
    event.reduced_speed_limit_kph = Some(88.514);
    event.restrictions = Some(vec![Restriction::new(RestrictionType::NoTrucks)]);
    event
}

pub fn sample_work_zone_geometry() -> RoadEventGeometry {
    RoadEventGeometry::line_string(vec![
        vec![-93.77668405099996, 41.617961698000045],
        vec![-93.776682957, 41.61824496200006],
        vec![-93.77667737299998, 41.61960336200008],
        vec![-93.77667436599995, 41.62032278300006],
        vec![-93.77667174199996, 41.62095032100007],
        vec![-93.77668897499996, 41.62229722600006],
    ])
}

/// The work zone feed in `work_zone_feed.geojson`.
pub fn sample_work_zone_feed() -> WorkZoneFeed {
    Feed::new(
        sample_feed_info(WORK_ZONE_SOURCE),
        vec![Feature::new(
            WORK_ZONE_ID,
            RoadEvent::WorkZone(sample_work_zone()),
            sample_work_zone_geometry(),
        )],
    )
}
