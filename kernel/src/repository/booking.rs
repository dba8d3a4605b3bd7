use crate::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, RoomId},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 指定ルーム・日付のキャンセル以外の予約を取得する
    async fn find_active_by_room_date(
        &self,
        room_id: RoomId,
        date: NaiveDate,
    ) -> AppResult<Vec<Booking>>;
    // 予約操作を行う。既存予約との重複はストア側でも検査される
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
}
