use crate::application::booking::{ServiceDependencies, book_desk as execute_book_desk};
use crate::domain::DeskBookingResultCode;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{AvailableDesksQuery, BookDeskHttpRequest, BookDeskResponse, DeskResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /bookings - デスクを予約
///
/// 指定日に空きデスクがあれば1台を割り当てて予約を永続化し、
/// なければNotAvailableDesksを返す（エラーではない）。
///
/// リクエストボディが欠落・不正な場合は、オーケストレーターを
/// 呼び出す前に400で拒否する（パラメータ名requestを明示）。
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    request: Option<Json<BookDeskHttpRequest>>,
) -> Result<(StatusCode, Json<BookDeskResponse>), ApiError> {
    let Json(request) = request.ok_or(ApiError::InvalidArgument("request"))?;

    let result = execute_book_desk(&state.service_deps, request.into_command()).await?;

    // デスクが割り当てられた場合のみ201、空きなしは200で結果を返す
    let status = match result.result_code {
        DeskBookingResultCode::Success => StatusCode::CREATED,
        DeskBookingResultCode::NotAvailableDesks => StatusCode::OK,
    };

    Ok((status, Json(BookDeskResponse::from(result))))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /desks/available - 指定日の空きデスク一覧取得
///
/// クエリパラメータ:
/// - date: 照会する日付（必須、YYYY-MM-DD）
///
/// プロバイダー定義の順序でデスクを返す。空の場合もある。
pub async fn list_available_desks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailableDesksQuery>,
) -> Result<Json<Vec<DeskResponse>>, QueryError> {
    // dateを必須とする
    let date = query
        .date
        .ok_or_else(|| QueryError::BadRequest("date query parameter is required".to_string()))?;

    match state
        .service_deps
        .desk_availability
        .get_available_desks(date)
        .await
    {
        Ok(desks) => Ok(Json(desks.into_iter().map(DeskResponse::from).collect())),
        Err(e) => Err(QueryError::InternalError(e.to_string())),
    }
}

// ============================================================================
// Error types
// ============================================================================

/// クエリハンドラー用のエラー型
#[derive(Debug)]
pub enum QueryError {
    BadRequest(String),
    InternalError(String),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            QueryError::InternalError(msg) => {
                // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                tracing::error!("Internal error in query handler: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(super::types::ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
