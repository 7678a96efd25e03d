use thiserror::Error;

/// デスク予約アプリケーション層のエラー
///
/// コラボレーターの障害をそのまま（#[source]で）包んで伝播する。
/// 回復・リトライ・抑制はこの層では行わない。
#[derive(Debug, Error)]
pub enum BookDeskError {
    /// デスク空き状況プロバイダーのエラー
    #[error("Desk availability provider error")]
    DeskAvailabilityError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 予約ストアのエラー
    #[error("Booking store error")]
    BookingStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookDeskError>;
