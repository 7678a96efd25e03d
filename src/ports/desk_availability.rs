use crate::domain::value_objects::Desk;
use async_trait::async_trait;
use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// デスク空き状況プロバイダーポート
///
/// 予約コンテキストとデスク在庫コンテキストの境界を維持する。
/// 予約コンテキストはDeskIdのみを知り、デスクの詳細は知らない。
#[async_trait]
pub trait DeskAvailabilityProvider: Send + Sync {
    /// 指定日に空いているデスクを取得する
    ///
    /// プロバイダー定義の順序で返す。空の場合もある。
    /// 変更系の副作用なし。
    async fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>>;
}
