use chrono::NaiveDate;
use kernel::model::booking::Booking;
use kernel::model::id::{BookingId, PackageId, RoomId};
use kernel::model::time::TimeOfDay;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

// bookings テーブルの行。歴史データの揺れはこの型からの変換で吸収する:
// - 日付は date 列と旧 booking_date 列のどちらかに入っている
// - 時刻は TEXT で、"HH:MM" のほか "HH:MM:SS" や ISO タイムスタンプが混在する
#[derive(Debug, sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub package_id: PackageId,
    pub date: Option<NaiveDate>,
    pub booking_date: Option<NaiveDate>,
    pub start_time: String,
    pub end_time: String,
    pub number_of_people: i32,
    pub status: String,
    pub payment_status: String,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub comments: Option<String>,
    pub promo_code: Option<String>,
}

// "10:30" / "10:30:00" / "2024-05-01T10:30:00+03:00" のいずれからも
// HH:MM 部分を取り出す
pub(crate) fn normalize_time_text(value: &str) -> AppResult<TimeOfDay> {
    let time_part = match value.split_once('T') {
        Some((_, rest)) => rest,
        None => value,
    };
    let mut fields = time_part.splitn(3, ':');
    match (fields.next(), fields.next()) {
        (Some(hours), Some(minutes)) => TimeOfDay::parse(&format!("{hours}:{minutes}")),
        _ => Err(AppError::ConversionEntityError(format!(
            "時刻文字列を解釈できません。: {value}"
        ))),
    }
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            room_id,
            package_id,
            date,
            booking_date,
            start_time,
            end_time,
            number_of_people,
            status,
            payment_status,
            total_amount,
            paid_amount,
            customer_name,
            customer_email,
            customer_phone,
            comments,
            promo_code,
        } = value;
        // 新旧どちらかの列に入っている日付を採用する
        let date = date.or(booking_date).ok_or_else(|| {
            AppError::ConversionEntityError(format!("予約（{booking_id}）に日付が入っていません。"))
        })?;
        Ok(Booking {
            id: booking_id,
            room_id,
            package_id,
            date,
            start_time: normalize_time_text(&start_time)?,
            end_time: normalize_time_text(&end_time)?,
            number_of_people,
            status: status.parse()?,
            payment_status: payment_status.parse()?,
            total_amount,
            paid_amount,
            customer_name,
            customer_email,
            customer_phone,
            comments,
            promo_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::booking::{BookingStatus, PaymentStatus};

    #[test]
    fn time_text_variants_normalize_to_hh_mm() {
        assert_eq!(
            normalize_time_text("10:30").unwrap(),
            TimeOfDay::hm(10, 30)
        );
        assert_eq!(
            normalize_time_text("10:30:00").unwrap(),
            TimeOfDay::hm(10, 30)
        );
        assert_eq!(
            normalize_time_text("2024-05-01T10:30:00").unwrap(),
            TimeOfDay::hm(10, 30)
        );
        assert_eq!(
            normalize_time_text("2024-05-01T09:00:00+03:00").unwrap(),
            TimeOfDay::hm(9, 0)
        );
        assert!(normalize_time_text("1030").is_err());
        assert!(normalize_time_text("").is_err());
    }

    fn row() -> BookingRow {
        BookingRow {
            booking_id: BookingId::new(),
            room_id: RoomId::new(1),
            package_id: PackageId::new(2),
            date: Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()),
            booking_date: None,
            start_time: "10:00".into(),
            end_time: "11:00".into(),
            number_of_people: 4,
            status: "confirmed".into(),
            payment_status: "DEPOSIT_PAID".into(),
            total_amount: Decimal::from(12000),
            paid_amount: Decimal::from(3000),
            customer_name: "山田太郎".into(),
            customer_email: "taro@example.com".into(),
            customer_phone: "090-0000-0000".into(),
            comments: None,
            promo_code: None,
        }
    }

    #[test]
    fn row_converts_into_booking() {
        let booking = Booking::try_from(row()).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.payment_status, PaymentStatus::DepositPaid);
        assert_eq!(booking.start_time, TimeOfDay::hm(10, 0));
    }

    #[test]
    fn legacy_booking_date_column_is_used_when_date_is_missing() {
        let legacy_date = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
        let mut value = row();
        value.date = None;
        value.booking_date = Some(legacy_date);

        let booking = Booking::try_from(value).unwrap();
        assert_eq!(booking.date, legacy_date);
    }

    #[test]
    fn row_without_any_date_is_a_conversion_error() {
        let mut value = row();
        value.date = None;
        value.booking_date = None;
        assert!(matches!(
            Booking::try_from(value),
            Err(AppError::ConversionEntityError(_))
        ));
    }
}
