use garde::Validate;
use kernel::model::id::{BookingId, PackageId, RoomId};
use kernel::model::time::TimeOfDay;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(skip)]
    pub package_id: PackageId,
    // YYYY-MM-DD
    #[garde(skip)]
    pub date: chrono::NaiveDate,
    #[garde(skip)]
    pub start_time: TimeOfDay,
    #[garde(range(min = 1))]
    pub number_of_people: i32,
    #[garde(length(min = 1))]
    pub customer_name: String,
    #[garde(email)]
    pub customer_email: String,
    #[garde(length(min = 1))]
    pub customer_phone: String,
    #[garde(skip)]
    pub comments: Option<String>,
    #[garde(skip)]
    pub promo_code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub booking_id: BookingId,
}
