use chrono::Weekday;
use kernel::model::id::RoomId;
use kernel::model::room::{DaySchedule, Room, WeekSchedule};
use kernel::model::time::TimeOfDay;
use serde::Deserialize;
use sqlx::types::Json;

// rooms テーブルの行。work_schedule は JSONB で、古いデータは
// 曜日の欠けやフィールド名の揺れがあるため、正規化前の Raw 型で受ける
#[derive(Debug, sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub max_people: Option<i32>,
    pub is_active: bool,
    pub available: bool,
    pub work_schedule: Option<Json<WeekScheduleRaw>>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            name,
            capacity,
            max_people,
            is_active,
            available,
            work_schedule,
        } = value;
        Room {
            id: room_id,
            name,
            capacity,
            max_people,
            is_active,
            available,
            work_schedule: work_schedule
                .map(|Json(raw)| raw.into_schedule())
                .unwrap_or_else(WeekSchedule::default_hours),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeekScheduleRaw {
    pub monday: Option<DayScheduleRaw>,
    pub tuesday: Option<DayScheduleRaw>,
    pub wednesday: Option<DayScheduleRaw>,
    pub thursday: Option<DayScheduleRaw>,
    pub friday: Option<DayScheduleRaw>,
    pub saturday: Option<DayScheduleRaw>,
    pub sunday: Option<DayScheduleRaw>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayScheduleRaw {
    // 旧データでは isActive ではなく active というフィールド名が使われている
    #[serde(alias = "active")]
    pub is_active: Option<bool>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl WeekScheduleRaw {
    // 欠けている曜日・項目・解釈できない時刻をデフォルト営業時間で補い、
    // 必ず 7 日分そろった WeekSchedule に正規化する。エラーにはしない
    pub fn into_schedule(self) -> WeekSchedule {
        let WeekScheduleRaw {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        } = self;
        let defaults = WeekSchedule::default_hours();
        let day = |raw: Option<DayScheduleRaw>, weekday: Weekday| {
            normalize_day(raw, *defaults.day(weekday))
        };
        WeekSchedule::new([
            day(monday, Weekday::Mon),
            day(tuesday, Weekday::Tue),
            day(wednesday, Weekday::Wed),
            day(thursday, Weekday::Thu),
            day(friday, Weekday::Fri),
            day(saturday, Weekday::Sat),
            day(sunday, Weekday::Sun),
        ])
    }
}

fn normalize_day(raw: Option<DayScheduleRaw>, default: DaySchedule) -> DaySchedule {
    let Some(raw) = raw else {
        return default;
    };
    let parse = |value: Option<String>, fallback: TimeOfDay| {
        value
            .as_deref()
            .and_then(|v| TimeOfDay::parse(v).ok())
            .unwrap_or(fallback)
    };
    DaySchedule {
        is_active: raw.is_active.unwrap_or(default.is_active),
        start: parse(raw.start_time, default.start),
        end: parse(raw.end_time, default.end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_from_json(json: &str) -> WeekSchedule {
        serde_json::from_str::<WeekScheduleRaw>(json)
            .unwrap()
            .into_schedule()
    }

    #[test]
    fn missing_days_fall_back_to_default_hours() {
        let schedule = schedule_from_json(
            r#"{ "monday": { "isActive": false, "startTime": "12:00", "endTime": "18:00" } }"#,
        );

        let monday = schedule.day(Weekday::Mon);
        assert!(!monday.is_active);
        assert_eq!(monday.start, TimeOfDay::hm(12, 0));
        assert_eq!(monday.end, TimeOfDay::hm(18, 0));

        // 指定のない曜日はデフォルト営業時間で埋まる
        assert_eq!(
            *schedule.day(Weekday::Tue),
            DaySchedule {
                is_active: true,
                start: TimeOfDay::hm(9, 0),
                end: TimeOfDay::hm(22, 0),
            }
        );
        assert_eq!(schedule.day(Weekday::Sat).start, TimeOfDay::hm(10, 0));
        assert_eq!(schedule.day(Weekday::Sun).end, TimeOfDay::hm(20, 0));
    }

    #[test]
    fn legacy_active_field_is_read_as_is_active() {
        let schedule = schedule_from_json(r#"{ "sunday": { "active": false } }"#);
        assert!(!schedule.day(Weekday::Sun).is_active);
        // 時刻の指定がないのでデフォルトの日曜時間が残る
        assert_eq!(schedule.day(Weekday::Sun).start, TimeOfDay::hm(10, 0));
    }

    #[test]
    fn unparsable_time_strings_fall_back_to_default() {
        let schedule = schedule_from_json(
            r#"{ "friday": { "isActive": true, "startTime": "invalid", "endTime": "25:00" } }"#,
        );
        let friday = schedule.day(Weekday::Fri);
        assert_eq!(friday.start, TimeOfDay::hm(9, 0));
        assert_eq!(friday.end, TimeOfDay::hm(22, 0));
    }

    #[test]
    fn empty_schedule_normalizes_to_all_defaults() {
        let schedule = schedule_from_json("{}");
        assert_eq!(schedule, WeekSchedule::default_hours());
    }
}
