use chrono::Weekday;
use kernel::model::id::RoomId;
use kernel::model::room::{DaySchedule, Room, WeekSchedule};
use kernel::model::time::TimeOfDay;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub max_people: Option<i32>,
    pub is_active: bool,
    pub available: bool,
    pub work_schedule: WeekScheduleResponse,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            name,
            capacity,
            max_people,
            is_active,
            available,
            work_schedule,
        } = value;
        Self {
            id,
            name,
            capacity,
            max_people,
            is_active,
            available,
            work_schedule: work_schedule.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekScheduleResponse {
    pub monday: DayScheduleResponse,
    pub tuesday: DayScheduleResponse,
    pub wednesday: DayScheduleResponse,
    pub thursday: DayScheduleResponse,
    pub friday: DayScheduleResponse,
    pub saturday: DayScheduleResponse,
    pub sunday: DayScheduleResponse,
}

impl From<WeekSchedule> for WeekScheduleResponse {
    fn from(value: WeekSchedule) -> Self {
        let day = |weekday: Weekday| DayScheduleResponse::from(*value.day(weekday));
        Self {
            monday: day(Weekday::Mon),
            tuesday: day(Weekday::Tue),
            wednesday: day(Weekday::Wed),
            thursday: day(Weekday::Thu),
            friday: day(Weekday::Fri),
            saturday: day(Weekday::Sat),
            sunday: day(Weekday::Sun),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayScheduleResponse {
    pub is_active: bool,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl From<DaySchedule> for DayScheduleResponse {
    fn from(value: DaySchedule) -> Self {
        let DaySchedule {
            is_active,
            start,
            end,
        } = value;
        Self {
            is_active,
            start_time: start,
            end_time: end,
        }
    }
}
