use crate::model::room::RoomResponse;
use garde::Validate;
use kernel::model::availability::TimeSlot;
use kernel::model::id::{PackageId, RoomId};
use kernel::model::time::TimeOfDay;
use serde::{Deserialize, Serialize};

// /availability のクエリパラメータ。
// type で応答の形を切り替える（省略時は slots と rooms の両方を返す）
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    #[garde(skip)]
    pub date: Option<String>,
    #[garde(skip)]
    pub package_id: Option<PackageId>,
    #[garde(skip)]
    pub start_time: Option<String>,
    #[garde(range(min = 1))]
    pub people: Option<i32>,
    #[serde(rename = "type")]
    #[garde(skip)]
    pub kind: Option<AvailabilityKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityKind {
    Slots,
    Rooms,
    All,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotResponse {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub available: bool,
    pub available_rooms: Vec<RoomId>,
}

impl From<TimeSlot> for TimeSlotResponse {
    fn from(value: TimeSlot) -> Self {
        let TimeSlot {
            start_time,
            end_time,
            available,
            available_rooms,
        } = value;
        Self {
            start_time,
            end_time,
            available,
            available_rooms,
        }
    }
}

// type の指定によって応答の形が変わるため、untagged で出し分ける
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AvailabilityResponse {
    Slots(Vec<TimeSlotResponse>),
    Rooms(Vec<RoomResponse>),
    #[serde(rename_all = "camelCase")]
    All {
        time_slots: Vec<TimeSlotResponse>,
        available_rooms: Vec<RoomResponse>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parameters_deserialize_from_url_form() {
        let query: AvailabilityQuery = serde_urlencoded::from_str(
            "date=2025-09-01&packageId=3&type=slots&people=4",
        )
        .unwrap();
        assert_eq!(query.date.as_deref(), Some("2025-09-01"));
        assert_eq!(query.package_id, Some(PackageId::new(3)));
        assert_eq!(query.people, Some(4));
        assert_eq!(query.kind, Some(AvailabilityKind::Slots));
        assert!(query.start_time.is_none());
    }

    #[test]
    fn slot_response_serializes_with_camel_case_times() {
        let response = TimeSlotResponse::from(TimeSlot {
            start_time: TimeOfDay::hm(9, 0),
            end_time: TimeOfDay::hm(10, 0),
            available: true,
            available_rooms: vec![RoomId::new(2)],
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "startTime": "09:00",
                "endTime": "10:00",
                "available": true,
                "availableRooms": [2],
            })
        );
    }
}
