use crate::model::id::{PackageId, RoomId};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    // 予約時に前払いする金額。price 以下であることが前提
    pub deposit_amount: Decimal,
    pub duration_minutes: i32,
    pub max_people: i32,
    // 表示用の推奨ルーム。空き判定の絞り込みには使わない
    pub preferred_rooms: Vec<RoomId>,
    pub is_active: bool,
}
