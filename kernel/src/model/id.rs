use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

// 管理側で採番されるルーム・パッケージの ID は整数、
// アプリ側で発行する予約 ID は UUID を使う

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct RoomId(i64);

impl RoomId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct PackageId(i64);

impl PackageId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// パッケージ ID はクエリ文字列では "3"、JSON では 3 の両方の形で届くため、
// どちらで来ても同じ ID として受け付ける
impl<'de> Deserialize<'de> for PackageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl de::Visitor<'_> for IdVisitor {
            type Value = PackageId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(PackageId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v).map(PackageId).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse::<i64>()
                    .map(PackageId)
                    .map_err(|_| E::custom(format!("invalid package id: {v}")))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct BookingId(Uuid);

impl BookingId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn raw(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_id_accepts_integer_and_numeric_string() {
        let from_number: PackageId = serde_json::from_str("3").unwrap();
        let from_string: PackageId = serde_json::from_str(r#""3""#).unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.raw(), 3);
    }

    #[test]
    fn package_id_rejects_non_numeric_string() {
        assert!(serde_json::from_str::<PackageId>(r#""abc""#).is_err());
    }
}
