use crate::model::id::{BookingId, PackageId, RoomId};
use crate::model::time::TimeOfDay;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::AppError;
use std::str::FromStr;

pub mod event;

#[derive(Debug, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub package_id: PackageId,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub number_of_people: i32,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub comments: Option<String>,
    pub promo_code: Option<String>,
}

// 予約のステータス。レコードは物理削除せず、
// キャンセルは cancelled への遷移で表す（重複チェックの対象から外れる）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(AppError::ConversionEntityError(format!(
                "予約ステータスを解釈できません。: {other}"
            ))),
        }
    }
}

// 支払いの進行状況。決済 Webhook と管理側だけが書き換え、ここでは読むだけ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unpaid,
    DepositPaid,
    FullyPaid,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::DepositPaid => "DEPOSIT_PAID",
            PaymentStatus::FullyPaid => "FULLY_PAID",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNPAID" => Ok(PaymentStatus::Unpaid),
            "DEPOSIT_PAID" => Ok(PaymentStatus::DepositPaid),
            "FULLY_PAID" => Ok(PaymentStatus::FullyPaid),
            other => Err(AppError::ConversionEntityError(format!(
                "支払いステータスを解釈できません。: {other}"
            ))),
        }
    }
}
