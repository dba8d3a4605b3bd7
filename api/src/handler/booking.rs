use crate::model::booking::{CreateBookingRequest, CreateBookingResponse};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::booking::event::CreateBooking;
use kernel::service::availability::ensure_not_past;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// POST /bookings
// 空き確認と INSERT の競合はリポジトリ側の直列化トランザクションで防ぐ
pub async fn register_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<CreateBookingResponse>)> {
    req.validate(&())?;
    ensure_not_past(req.date)?;

    let package = registry
        .availability_service()
        .resolve_package(req.package_id)
        .await?;
    if req.number_of_people > package.max_people {
        return Err(AppError::UnprocessableEntity(format!(
            "このパッケージは {} 名まで予約できます。",
            package.max_people
        )));
    }
    let end_time = req
        .start_time
        .add_minutes(package.duration_minutes)
        .ok_or_else(|| {
            AppError::InvalidRequestParameter(format!(
                "開始時刻（{}）ではプレイ時間が営業日内に収まりません。",
                req.start_time
            ))
        })?;

    let event = CreateBooking::new(
        req.room_id,
        req.package_id,
        req.date,
        req.start_time,
        end_time,
        req.number_of_people,
        package.price,
        req.customer_name,
        req.customer_email,
        req.customer_phone,
        req.comments,
        req.promo_code,
    );

    registry
        .booking_repository()
        .create(event)
        .await
        .map(|booking_id| {
            (
                StatusCode::CREATED,
                Json(CreateBookingResponse { booking_id }),
            )
        })
}
