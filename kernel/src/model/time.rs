use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use shared::error::{AppError, AppResult};
use std::fmt;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

// 一日のうちの時刻。内部表現は 0 時からの経過分で、
// "HH:MM" 文字列との相互変換は境界でのみ行う
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    // 範囲内であることが自明な定数時刻を作るためのコンストラクタ
    // 範囲外の値を渡すとコンパイル時（const 文脈）または起動時に panic する
    pub const fn hm(hours: u16, minutes: u16) -> Self {
        assert!(hours < 24 && minutes < 60);
        Self(hours * 60 + minutes)
    }

    pub fn new(hours: u16, minutes: u16) -> AppResult<Self> {
        if hours > 23 || minutes > 59 {
            return Err(AppError::ConversionEntityError(format!(
                "時刻の値が範囲外です。: {hours}:{minutes}"
            )));
        }
        Ok(Self(hours * 60 + minutes))
    }

    // "HH:MM" 形式の文字列を解釈する。時は 0..=23、分は 0..=59 のみ許す
    pub fn parse(value: &str) -> AppResult<Self> {
        let invalid =
            || AppError::ConversionEntityError(format!("時刻文字列を解釈できません。: {value}"));
        let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
        let hours: u16 = hours.parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
        Self::new(hours, minutes).map_err(|_| invalid())
    }

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    // 開始時刻に所要時間を足した終了時刻を返す。
    // 日をまたぐ場合は None（呼び出し側は枠に収まらない候補として捨てる）
    pub fn add_minutes(self, duration: i32) -> Option<Self> {
        let total = i32::from(self.0) + duration;
        u16::try_from(total).ok().and_then(Self::from_minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_padded_and_unpadded_hours() {
        assert_eq!(TimeOfDay::parse("09:30").unwrap().minutes(), 570);
        assert_eq!(TimeOfDay::parse("9:30").unwrap().minutes(), 570);
        assert_eq!(TimeOfDay::parse("00:00").unwrap().minutes(), 0);
        assert_eq!(TimeOfDay::parse("23:59").unwrap().minutes(), 1439);
    }

    #[test]
    fn parse_rejects_out_of_range_and_malformed_input() {
        for value in ["24:00", "12:60", "1200", "", "ab:cd", "-1:30", "12:"] {
            assert!(TimeOfDay::parse(value).is_err(), "{value} should be rejected");
        }
    }

    #[test]
    fn minutes_round_trip_over_the_whole_day() {
        for m in 0..MINUTES_PER_DAY {
            let time = TimeOfDay::from_minutes(m).unwrap();
            assert_eq!(time.minutes(), m);
            // 文字列化して読み戻しても同じ時刻になる
            assert_eq!(TimeOfDay::parse(&time.to_string()).unwrap(), time);
        }
        assert!(TimeOfDay::from_minutes(MINUTES_PER_DAY).is_none());
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeOfDay::hm(8, 0).to_string(), "08:00");
        assert_eq!(TimeOfDay::hm(22, 5).to_string(), "22:05");
    }

    #[test]
    fn add_minutes_computes_end_time() {
        let start = TimeOfDay::hm(10, 0);
        assert_eq!(start.add_minutes(90), Some(TimeOfDay::hm(11, 30)));
        // 日をまたぐ終了時刻は表現しない
        assert_eq!(TimeOfDay::hm(23, 30).add_minutes(60), None);
        assert_eq!(TimeOfDay::hm(1, 0).add_minutes(-120), None);
    }
}
