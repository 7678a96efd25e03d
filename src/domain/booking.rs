use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookDeskRequest, BookingId, DeskId};

/// 組織ドメインのメールアドレス断片
///
/// リクエストのメールアドレスはこの断片を含むことが期待される。
pub const REQUIRED_EMAIL_DOMAIN: &str = "@tipranks.com";

/// 予約結果コード
///
/// どちらも正常に計算された結果であり、例外的な失敗ではない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeskBookingResultCode {
    /// デスクが割り当てられた
    Success,
    /// 指定日に空きデスクがなかった
    NotAvailableDesks,
}

impl DeskBookingResultCode {
    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            DeskBookingResultCode::Success => "success",
            DeskBookingResultCode::NotAvailableDesks => "not_available_desks",
        }
    }
}

/// 予約レコード - Booking Storeに永続化される予約
///
/// リクエストと選ばれたデスクから構築され、保存時に所有権が
/// Booking Storeへ移る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub desk_id: DeskId,
}

impl BookingRecord {
    /// 純粋なコンストラクタ：リクエストと割当デスクから予約レコードを構築する
    pub fn from_request(request: &BookDeskRequest, desk_id: DeskId) -> Self {
        Self {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
            desk_id,
        }
    }
}

/// 予約結果 - 呼び出し元に返される結果
///
/// リクエストの氏名・メール・日付を引き写す。永続化されない。
///
/// 不変条件：`booking_id`がSomeになるのは`result_code`がSuccessかつ
/// ストアが識別子を返した場合のみ。2つのコンストラクタで構造的に保証する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDeskResult {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub result_code: DeskBookingResultCode,
    pub booking_id: Option<BookingId>,
}

impl BookDeskResult {
    /// 純粋なコンストラクタ：予約成功の結果を構築する
    ///
    /// ストアが識別子を返さなかった場合（None）でも結果コードはSuccess。
    pub fn success(request: &BookDeskRequest, booking_id: Option<BookingId>) -> Self {
        Self {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
            result_code: DeskBookingResultCode::Success,
            booking_id,
        }
    }

    /// 純粋なコンストラクタ：空きデスクなしの結果を構築する
    pub fn not_available(request: &BookDeskRequest) -> Self {
        Self {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
            result_code: DeskBookingResultCode::NotAvailableDesks,
            booking_id: None,
        }
    }
}

/// 純粋関数：リクエストのバリデーション
///
/// メールアドレスが組織ドメイン断片を含むか検査する。
pub fn is_valid_request(request: &BookDeskRequest) -> bool {
    request.email.contains(REQUIRED_EMAIL_DOMAIN)
}
