use crate::application::booking::BookDeskError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    /// リクエスト引数が不正（欠落したパラメータ名を保持する）
    InvalidArgument(&'static str),
    /// アプリケーション層のエラー
    Application(BookDeskError),
}

impl From<BookDeskError> for ApiError {
    fn from(err: BookDeskError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 400 Bad Request - コラボレーター呼び出し前に拒否される
            ApiError::InvalidArgument(param) => (
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                format!("invalid argument: {}", param),
            ),

            // 500 Internal Server Error - コラボレーター障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(BookDeskError::DeskAvailabilityError(ref e)) => {
                tracing::error!("Desk availability provider error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DESK_AVAILABILITY_ERROR",
                    "Desk availability provider error".to_string(),
                )
            }
            ApiError::Application(BookDeskError::BookingStoreError(ref e)) => {
                tracing::error!("Booking store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BOOKING_STORE_ERROR",
                    "Booking store error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
