use crate::domain::{BookDeskRequest, BookDeskResult, BookingRecord, is_valid_request};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{BookDeskError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
///
/// このパターンにより：
/// - すべての依存が明示的
/// - データと振る舞いの分離
/// - テストが明確
#[derive(Clone)]
pub struct ServiceDependencies {
    pub desk_availability: Arc<dyn DeskAvailabilityProvider>,
    pub booking_store: Arc<dyn BookingStore>,
}

/// デスクを予約する
///
/// ビジネスルール：
/// - 指定日に空きデスクがあれば、プロバイダー順の先頭デスクを割り当てる
/// - 空きデスクがなければNotAvailableDesks（正常な結果であり、エラーではない）
/// - ストアへの保存は空きデスクがある場合にちょうど1回。ない場合は0回
///
/// メールアドレスのバリデーション結果は制御フローにも結果コードにも
/// 反映されない（観測された既存挙動の維持。警告ログのみ）。
///
/// この関数自体は状態を持たない。呼び出しごとに独立しており、
/// 同時リクエスト間の同一デスクの調停はストア側の責務。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `request` - 予約リクエスト
///
/// # 戻り値
/// リクエストの氏名・メール・日付を引き写したBookDeskResult
pub async fn book_desk(
    deps: &ServiceDependencies,
    request: BookDeskRequest,
) -> Result<BookDeskResult> {
    // 1. リクエストのバリデーション（結果コードには反映されない）
    if !is_valid_request(&request) {
        tracing::warn!(
            email = %request.email,
            "booking request email is outside the organization domain"
        );
    }

    // 2. 空きデスクの照会（プロバイダー定義順、先頭が勝つ）
    let available_desks = deps
        .desk_availability
        .get_available_desks(request.date)
        .await
        .map_err(BookDeskError::DeskAvailabilityError)?;

    // 3. 分岐：空きデスクの有無
    match available_desks.into_iter().next() {
        Some(desk) => {
            // 4. 予約レコードを構築してストアに保存
            let record = BookingRecord::from_request(&request, desk.id);

            let booking_id = deps
                .booking_store
                .save(record)
                .await
                .map_err(BookDeskError::BookingStoreError)?;

            // ストアが識別子を返さなくても結果コードはSuccess
            Ok(BookDeskResult::success(&request, booking_id))
        }
        None => Ok(BookDeskResult::not_available(&request)),
    }
}
