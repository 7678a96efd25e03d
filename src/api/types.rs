use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{BookDeskRequest, BookDeskResult, Desk};

/// デスク予約リクエスト（POST /bookings）
#[derive(Debug, Deserialize)]
pub struct BookDeskHttpRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl BookDeskHttpRequest {
    /// アプリケーション層のコマンドに変換する
    pub fn into_command(self) -> BookDeskRequest {
        BookDeskRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date: self.date,
        }
    }
}

/// デスク予約レスポンス（POST /bookings）
///
/// リクエストの氏名・メール・日付を引き写し、結果コードと
/// ストアが採番した予約ID（採番されなかった場合はnull）を返す。
#[derive(Debug, Serialize)]
pub struct BookDeskResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub result_code: String,
    pub booking_id: Option<i32>,
}

impl From<BookDeskResult> for BookDeskResponse {
    fn from(result: BookDeskResult) -> Self {
        Self {
            first_name: result.first_name,
            last_name: result.last_name,
            email: result.email,
            date: result.date,
            result_code: result.result_code.as_str().to_string(),
            booking_id: result.booking_id.map(|id| id.value()),
        }
    }
}

/// 空きデスク一覧のクエリパラメータ（GET /desks/available）
#[derive(Debug, Deserialize)]
pub struct AvailableDesksQuery {
    /// 照会する日付（必須）
    pub date: Option<NaiveDate>,
}

/// デスクレスポンス
#[derive(Debug, Serialize)]
pub struct DeskResponse {
    pub desk_id: i32,
}

impl From<Desk> for DeskResponse {
    fn from(desk: Desk) -> Self {
        Self {
            desk_id: desk.id.value(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
