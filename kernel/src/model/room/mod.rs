use crate::model::id::RoomId;
use crate::model::time::TimeOfDay;
use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub max_people: Option<i32>,
    pub is_active: bool,
    pub available: bool,
    pub work_schedule: WeekSchedule,
}

impl Room {
    // is_active（管理上の有効化）と available（一時的なオフライン切り替え）の
    // 両方が立っているルームだけが予約の対象になる
    pub fn is_offerable(&self) -> bool {
        self.is_active && self.available
    }

    // 予約を受け付ける人数の上限。max_people が未設定なら物理定員を使う
    pub fn effective_capacity(&self) -> i32 {
        self.max_people.unwrap_or(self.capacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySchedule {
    pub is_active: bool,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

// 月曜を先頭とした 7 曜日分の営業時間。
// 正規化済みであることが前提で、必ず 7 日分そろっている
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSchedule([DaySchedule; 7]);

impl WeekSchedule {
    pub fn new(days: [DaySchedule; 7]) -> Self {
        Self(days)
    }

    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        &self.0[weekday.num_days_from_monday() as usize]
    }

    // デフォルトの営業時間。平日 09:00-22:00、土曜 10:00-22:00、日曜 10:00-20:00
    pub fn default_hours() -> Self {
        let weekday = DaySchedule {
            is_active: true,
            start: TimeOfDay::hm(9, 0),
            end: TimeOfDay::hm(22, 0),
        };
        let saturday = DaySchedule {
            start: TimeOfDay::hm(10, 0),
            ..weekday
        };
        let sunday = DaySchedule {
            start: TimeOfDay::hm(10, 0),
            end: TimeOfDay::hm(20, 0),
            ..weekday
        };
        Self([
            weekday, weekday, weekday, weekday, weekday, saturday, sunday,
        ])
    }

    // 指定日の時間帯 [start, end) にルームが開いているかを判定する。
    // 曜日はカレンダー上の日付そのものから求める（UTC への変換はしない）
    pub fn admits(&self, date: NaiveDate, start: TimeOfDay, end: TimeOfDay) -> bool {
        let day = self.day(date.weekday());
        if !day.is_active {
            tracing::debug!(%date, "room is closed on this weekday");
            return false;
        }
        if start < day.start || end > day.end {
            tracing::debug!(
                %date, %start, %end,
                working_hours = %format_args!("{}-{}", day.start, day.end),
                "requested range is outside working hours"
            );
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_monday_schedule() -> WeekSchedule {
        // 月曜 09:00-22:00 で、それ以外はデフォルトのまま
        WeekSchedule::default_hours()
    }

    // 2025-06-02 は月曜日
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn weekday_is_taken_from_calendar_date() {
        // タイムゾーンに依存せず、カレンダー上の日付から曜日が決まることを固定する
        assert_eq!(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().weekday(),
            Weekday::Sun
        );
        assert_eq!(monday().weekday(), Weekday::Mon);
        assert_eq!(
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().weekday(),
            Weekday::Thu
        );
    }

    #[test]
    fn admits_rejects_range_starting_before_opening() {
        let schedule = open_monday_schedule();
        assert!(!schedule.admits(monday(), TimeOfDay::hm(8, 30), TimeOfDay::hm(9, 30)));
    }

    #[test]
    fn admits_accepts_exact_working_hours() {
        let schedule = open_monday_schedule();
        assert!(schedule.admits(monday(), TimeOfDay::hm(9, 0), TimeOfDay::hm(22, 0)));
    }

    #[test]
    fn admits_rejects_range_ending_after_closing() {
        let schedule = open_monday_schedule();
        assert!(!schedule.admits(monday(), TimeOfDay::hm(21, 30), TimeOfDay::hm(22, 30)));
    }

    #[test]
    fn admits_rejects_closed_weekday() {
        let mut days = [*WeekSchedule::default_hours().day(Weekday::Mon); 7];
        days[Weekday::Sun.num_days_from_monday() as usize].is_active = false;
        let schedule = WeekSchedule::new(days);

        // 2025-06-01 は日曜日
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(!schedule.admits(sunday, TimeOfDay::hm(12, 0), TimeOfDay::hm(13, 0)));
        // 他の曜日は営業時間内なら通る
        assert!(schedule.admits(monday(), TimeOfDay::hm(12, 0), TimeOfDay::hm(13, 0)));
    }

    #[test]
    fn effective_capacity_prefers_max_people() {
        let mut room = Room {
            id: RoomId::new(1),
            name: "Test Room".into(),
            capacity: 8,
            max_people: Some(6),
            is_active: true,
            available: true,
            work_schedule: WeekSchedule::default_hours(),
        };
        assert_eq!(room.effective_capacity(), 6);
        room.max_people = None;
        assert_eq!(room.effective_capacity(), 8);
    }

    #[test]
    fn offerable_requires_both_flags() {
        let mut room = Room {
            id: RoomId::new(1),
            name: "Test Room".into(),
            capacity: 8,
            max_people: None,
            is_active: true,
            available: true,
            work_schedule: WeekSchedule::default_hours(),
        };
        assert!(room.is_offerable());
        room.available = false;
        assert!(!room.is_offerable());
        room.available = true;
        room.is_active = false;
        assert!(!room.is_offerable());
    }
}
