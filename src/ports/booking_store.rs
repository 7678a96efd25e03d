use crate::domain::booking::BookingRecord;
use crate::domain::value_objects::BookingId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約ストアポート
///
/// 予約レコードの永続化を抽象化する。同一デスク・同一日の
/// 二重予約防止（一意性制約など）はストア側の責務。
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// 予約レコードを永続化する
    ///
    /// 新しく採番された予約IDを返す。ストアが識別子を
    /// 割り当てない場合はNone。
    /// ストレージ障害などのエラーは呼び出し元にそのまま伝播する。
    async fn save(&self, record: BookingRecord) -> Result<Option<BookingId>>;
}
