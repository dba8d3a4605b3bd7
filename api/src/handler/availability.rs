use crate::model::availability::{
    AvailabilityKind, AvailabilityQuery, AvailabilityResponse, TimeSlotResponse,
};
use crate::model::room::RoomResponse;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use garde::Validate;
use kernel::model::id::PackageId;
use kernel::model::time::TimeOfDay;
use kernel::service::availability::AvailabilityService;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// GET /availability
// type=slots: 一日分の開始時刻グリッドごとの空き状況を返す
// type=rooms: 指定開始時刻に空いているルームの一覧を返す
// type=all（省略時）: 上記二つをまとめて返す
pub async fn get_availability(
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailabilityResponse>> {
    query.validate(&())?;

    let date = parse_date(query.date.as_deref())?;
    let package_id = query
        .package_id
        .ok_or_else(|| AppError::InvalidRequestParameter("packageId は必須です。".into()))?;
    let people = query.people.unwrap_or(1);
    let service = registry.availability_service();

    match query.kind.unwrap_or(AvailabilityKind::All) {
        AvailabilityKind::Slots => {
            let slots = service.time_slots(date, package_id, people).await?;
            Ok(Json(AvailabilityResponse::Slots(
                slots.into_iter().map(TimeSlotResponse::from).collect(),
            )))
        }
        AvailabilityKind::Rooms => {
            let (start, end) =
                resolve_range(service, package_id, query.start_time.as_deref()).await?;
            let rooms = service.available_rooms(date, start, end, people).await?;
            Ok(Json(AvailabilityResponse::Rooms(
                rooms.into_iter().map(RoomResponse::from).collect(),
            )))
        }
        AvailabilityKind::All => {
            let slots = service.time_slots(date, package_id, people).await?;
            // startTime が来ているときだけルーム一覧も指定時刻で絞り込む
            let rooms = match query.start_time.as_deref() {
                Some(_) => {
                    let (start, end) =
                        resolve_range(service, package_id, query.start_time.as_deref()).await?;
                    service.available_rooms(date, start, end, people).await?
                }
                None => Vec::new(),
            };
            Ok(Json(AvailabilityResponse::All {
                time_slots: slots.into_iter().map(TimeSlotResponse::from).collect(),
                available_rooms: rooms.into_iter().map(RoomResponse::from).collect(),
            }))
        }
    }
}

fn parse_date(date: Option<&str>) -> AppResult<NaiveDate> {
    let text = date.ok_or_else(|| AppError::InvalidRequestParameter("date は必須です。".into()))?;
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidRequestParameter(format!("date の形式が不正です。: {text}")))
}

// startTime とパッケージのプレイ時間から照会対象の時間帯を組み立てる
async fn resolve_range(
    service: &AvailabilityService,
    package_id: PackageId,
    start_time: Option<&str>,
) -> AppResult<(TimeOfDay, TimeOfDay)> {
    let text = start_time
        .ok_or_else(|| AppError::InvalidRequestParameter("startTime は必須です。".into()))?;
    let start = TimeOfDay::parse(text).map_err(|_| {
        AppError::InvalidRequestParameter(format!("startTime の形式が不正です。: {text}"))
    })?;
    let package = service.resolve_package(package_id).await?;
    let end = start.add_minutes(package.duration_minutes).ok_or_else(|| {
        AppError::InvalidRequestParameter(format!(
            "開始時刻（{start}）ではプレイ時間が営業日内に収まりません。"
        ))
    })?;
    Ok((start, end))
}
