use serde::{Deserialize, Serialize};

/// デスクID - デスク在庫コンテキストへの参照
///
/// デスクは整数IDで識別される物理リソース。IDの採番と管理は
/// デスク在庫側（Desk Availability Provider）の責務。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeskId(i32);

impl DeskId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// 予約ID - Booking Storeが永続化時に採番する識別子
///
/// ストアが識別子を割り当てない場合もあるため、
/// 予約結果では`Option<BookingId>`として扱われる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(i32);

impl BookingId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// デスク - 予約可能な物理リソース
///
/// Desk Availability Providerが所有・提供する。
/// 予約コンテキストはIDを除いて不透明な値として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desk {
    pub id: DeskId,
}

impl Desk {
    pub fn new(id: DeskId) -> Self {
        Self { id }
    }
}
