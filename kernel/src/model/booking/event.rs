use crate::model::id::{PackageId, RoomId};
use crate::model::time::TimeOfDay;
use chrono::NaiveDate;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Debug, new)]
pub struct CreateBooking {
    pub room_id: RoomId,
    pub package_id: PackageId,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub number_of_people: i32,
    pub total_amount: Decimal,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub comments: Option<String>,
    pub promo_code: Option<String>,
}
