use crate::model::id::RoomId;
use crate::model::time::TimeOfDay;

// 空き照会のたびに計算して返す派生データ。永続化はしない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    // 一つでも空きルームがあれば true
    pub available: bool,
    pub available_rooms: Vec<RoomId>,
}
