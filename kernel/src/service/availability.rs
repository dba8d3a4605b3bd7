use crate::model::availability::TimeSlot;
use crate::model::id::{PackageId, RoomId};
use crate::model::package::Package;
use crate::model::room::Room;
use crate::model::time::TimeOfDay;
use crate::repository::{
    booking::BookingRepository, package::PackageRepository, room::RoomRepository,
};
use chrono::{Local, NaiveDate};
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

// 候補グリッド。開始時刻を 08:00 から 22:00 の手前まで 30 分刻みで並べ、
// 終了時刻が 22:00 を超える候補はスロットにしない
const GRID_OPENING: TimeOfDay = TimeOfDay::hm(8, 0);
const GRID_CLOSING: TimeOfDay = TimeOfDay::hm(22, 0);
const GRID_STEP_MINUTES: i32 = 30;

// 半開区間 [start, end) 同士の重なり判定。
// 終了時刻ちょうどに始まる予約は重ならない（背中合わせの予約を許す）
pub fn overlaps(
    start: TimeOfDay,
    end: TimeOfDay,
    booking_start: TimeOfDay,
    booking_end: TimeOfDay,
) -> bool {
    start < booking_end && end > booking_start
}

// 予約希望日が今日（ローカルのカレンダー日付）より前でないことを確認する。
// 時刻は見ない
pub fn ensure_not_past(date: NaiveDate) -> AppResult<()> {
    let today = Local::now().date_naive();
    if date < today {
        return Err(AppError::InvalidRequestParameter(format!(
            "過去の日付（{date}）には予約できません。"
        )));
    }
    Ok(())
}

// 空き照会のサービス本体。状態は持たず、リクエストのたびに
// ルーム・パッケージ・予約をリポジトリから読み直す
#[derive(Clone, new)]
pub struct AvailabilityService {
    room_repository: Arc<dyn RoomRepository>,
    package_repository: Arc<dyn PackageRepository>,
    booking_repository: Arc<dyn BookingRepository>,
}

impl AvailabilityService {
    pub async fn resolve_package(&self, package_id: PackageId) -> AppResult<Package> {
        self.package_repository
            .find_by_id(package_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "パッケージ（{package_id}）が見つかりませんでした。"
                ))
            })
    }

    // 指定ルーム・日付で、候補時間帯に重なる予約があるかを調べる。
    // ストアの読み出しに失敗した場合はエラーを返し、
    // そのルームを空きとして扱わない（fail closed）
    pub async fn has_conflict(
        &self,
        room_id: RoomId,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> AppResult<bool> {
        let bookings = self
            .booking_repository
            .find_active_by_room_date(room_id, date)
            .await?;
        Ok(bookings
            .iter()
            .any(|b| overlaps(start, end, b.start_time, b.end_time)))
    }

    // 指定時間帯に予約できるルームを列挙する。並び順はストアの返す順のまま
    pub async fn available_rooms(
        &self,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
        min_people: i32,
    ) -> AppResult<Vec<Room>> {
        ensure_not_past(date)?;
        self.collect_free_rooms(date, start, end, min_people).await
    }

    // 一日分の開始時刻グリッドを走査し、各候補の空き状況をまとめて返す。
    // スロットは構築順にそのまま時系列に並ぶ
    pub async fn time_slots(
        &self,
        date: NaiveDate,
        package_id: PackageId,
        min_people: i32,
    ) -> AppResult<Vec<TimeSlot>> {
        ensure_not_past(date)?;
        let package = self.resolve_package(package_id).await?;

        let mut slots = Vec::new();
        let mut start = GRID_OPENING;
        while start < GRID_CLOSING {
            if let Some(end) = start.add_minutes(package.duration_minutes) {
                if end <= GRID_CLOSING {
                    let rooms = self.collect_free_rooms(date, start, end, min_people).await?;
                    slots.push(TimeSlot {
                        start_time: start,
                        end_time: end,
                        available: !rooms.is_empty(),
                        available_rooms: rooms.into_iter().map(|room| room.id).collect(),
                    });
                }
            }
            start = match start.add_minutes(GRID_STEP_MINUTES) {
                Some(next) => next,
                None => break,
            };
        }
        Ok(slots)
    }

    async fn collect_free_rooms(
        &self,
        date: NaiveDate,
        start: TimeOfDay,
        end: TimeOfDay,
        min_people: i32,
    ) -> AppResult<Vec<Room>> {
        let rooms = self.room_repository.find_all().await?;

        let mut free = Vec::new();
        for room in rooms {
            if !room.is_offerable() {
                tracing::debug!(room_id = %room.id, "room is inactive or temporarily offline");
                continue;
            }
            if room.effective_capacity() < min_people {
                tracing::debug!(
                    room_id = %room.id,
                    capacity = room.effective_capacity(),
                    min_people,
                    "room is too small for the requested party"
                );
                continue;
            }
            if !room.work_schedule.admits(date, start, end) {
                continue;
            }
            if self.has_conflict(room.id, date, start, end).await? {
                tracing::debug!(room_id = %room.id, %date, %start, %end, "room already booked");
                continue;
            }
            free.push(room);
        }
        Ok(free)
    }
}
