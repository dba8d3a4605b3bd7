use kernel::model::id::{PackageId, RoomId};
use kernel::model::package::Package;
use rust_decimal::Decimal;
use sqlx::types::Json;

#[derive(Debug, sqlx::FromRow)]
pub struct PackageRow {
    pub package_id: PackageId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub deposit_amount: Decimal,
    pub duration: i32,
    pub max_people: i32,
    pub preferred_rooms: Option<Json<Vec<i64>>>,
    pub is_active: bool,
}

impl From<PackageRow> for Package {
    fn from(value: PackageRow) -> Self {
        let PackageRow {
            package_id,
            name,
            description,
            price,
            deposit_amount,
            duration,
            max_people,
            preferred_rooms,
            is_active,
        } = value;
        Package {
            id: package_id,
            name,
            description,
            price,
            deposit_amount,
            duration_minutes: duration,
            max_people,
            preferred_rooms: preferred_rooms
                .map(|Json(ids)| ids.into_iter().map(RoomId::new).collect())
                .unwrap_or_default(),
            is_active,
        }
    }
}
