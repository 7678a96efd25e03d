use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// コマンド：デスクを予約する
///
/// 呼び出しごとに生成される一時的なリクエスト。そのままでは永続化されない。
/// 日付は日単位（時刻の概念を持たない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDeskRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}
