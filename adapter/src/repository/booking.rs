use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::booking::{event::CreateBooking, Booking};
use kernel::model::id::{BookingId, RoomId};
use kernel::repository::booking::BookingRepository;
use kernel::service::availability::overlaps;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    // 指定ルーム・日付のキャンセル以外の予約を取り出す。
    // 日付は date 列と旧 booking_date 列のどちらに入っていても拾う
    async fn find_active_by_room_date(
        &self,
        room_id: RoomId,
        date: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT
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
                    promo_code
                FROM bookings
                WHERE room_id = $1
                  AND COALESCE(date, booking_date) = $2
                  AND status <> 'cancelled'
                ORDER BY start_time
            "#,
        )
        .bind(room_id)
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }

    // 予約操作を行う
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する。
        // 空き確認から INSERT までを直列化し、ほぼ同時の二つのリクエストが
        // 同じ枠を取り合っても二重予約にならないようにする
        self.set_transaction_serializable(&mut tx).await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定のルーム ID をもつルームが存在し、予約を受け付けているか
        // - その時間帯に既存予約と重なりがないか
        //
        // 上記の両方が Yes だった場合、このブロック以降の処理に進む
        {
            //
            // ① ルームの存在確認 ＋ 受付可否チェック
            //
            let room_row: Option<(bool, bool)> = sqlx::query_as(
                r#"
                SELECT is_active, available
                FROM rooms
                WHERE room_id = $1
                "#,
            )
            .bind(event.room_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let Some((is_active, available)) = room_row else {
                return Err(AppError::EntityNotFound(format!(
                    "ルーム（{}）が見つかりませんでした。",
                    event.room_id
                )));
            };

            if !is_active || !available {
                return Err(AppError::UnprocessableEntity(format!(
                    "ルーム（{}）は現在予約を受け付けていません。",
                    event.room_id
                )));
            }

            //
            // ② 希望時間帯が既存予約と重なっていないか確認
            //    時刻は TEXT 列に旧形式が混在するため、SQL では比較せず
            //    正規化した値で判定する
            //
            let rows: Vec<BookingRow> = sqlx::query_as(
                r#"
                SELECT
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
                    promo_code
                FROM bookings
                WHERE room_id = $1
                  AND COALESCE(date, booking_date) = $2
                  AND status <> 'cancelled'
                "#,
            )
            .bind(event.room_id)
            .bind(event.date)
            .fetch_all(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let existing = rows
                .into_iter()
                .map(Booking::try_from)
                .collect::<AppResult<Vec<Booking>>>()?;

            if existing
                .iter()
                .any(|b| overlaps(event.start_time, event.end_time, b.start_time, b.end_time))
            {
                return Err(AppError::UnprocessableEntity(format!(
                    "ルーム（{}）は指定時間帯にすでに予約が存在します。",
                    event.room_id
                )));
            }
        }

        // 予約処理を行う、すなわち bookings テーブルにレコードを追加する
        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, room_id, package_id, date,
                start_time, end_time, number_of_people,
                status, payment_status, total_amount, paid_amount,
                customer_name, customer_email, customer_phone,
                comments, promo_code)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(booking_id)
        .bind(event.room_id)
        .bind(event.package_id)
        .bind(event.date)
        .bind(event.start_time.to_string())
        .bind(event.end_time.to_string())
        .bind(event.number_of_people)
        .bind("pending")
        .bind("UNPAID")
        .bind(event.total_amount)
        .bind(rust_decimal::Decimal::ZERO)
        .bind(event.customer_name)
        .bind(event.customer_email)
        .bind(event.customer_phone)
        .bind(event.comments)
        .bind(event.promo_code)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }
}

impl BookingRepositoryImpl {
    // create メソッドでのトランザクションを利用するにあたり
    // トランザクション分離レベルを SERIALIZABLE にするために
    // 内部的に使うメソッド
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}
