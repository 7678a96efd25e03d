use chrono::NaiveDate;
use rusty_desk_booking_ddd::application::booking::{ServiceDependencies, book_desk};
use rusty_desk_booking_ddd::domain::booking::{BookingRecord, DeskBookingResultCode};
use rusty_desk_booking_ddd::domain::commands::BookDeskRequest;
use rusty_desk_booking_ddd::domain::value_objects::{BookingId, Desk, DeskId};
use rusty_desk_booking_ddd::ports::*;
use std::sync::{Arc, Mutex};

// ============================================================================
// インメモリモック実装（テスト用）
// ============================================================================

/// インメモリDeskAvailabilityProvider実装
///
/// 登録されたデスクを日付に関係なく登録順で返す。
struct InMemoryDeskAvailability {
    desks: Mutex<Vec<Desk>>,
}

impl InMemoryDeskAvailability {
    fn new() -> Self {
        Self {
            desks: Mutex::new(Vec::new()),
        }
    }

    fn add_desk(&self, desk: Desk) {
        self.desks.lock().unwrap().push(desk);
    }
}

#[async_trait::async_trait]
impl DeskAvailabilityProvider for InMemoryDeskAvailability {
    async fn get_available_desks(&self, _date: NaiveDate) -> desk_availability::Result<Vec<Desk>> {
        Ok(self.desks.lock().unwrap().clone())
    }
}

/// インメモリBookingStore実装
///
/// 保存された予約レコードを記録し、設定された予約IDを返す。
struct InMemoryBookingStore {
    saved_records: Mutex<Vec<BookingRecord>>,
    next_booking_id: Mutex<Option<BookingId>>,
}

impl InMemoryBookingStore {
    fn new() -> Self {
        Self {
            saved_records: Mutex::new(Vec::new()),
            next_booking_id: Mutex::new(Some(BookingId::new(1))),
        }
    }

    fn set_next_booking_id(&self, booking_id: Option<BookingId>) {
        *self.next_booking_id.lock().unwrap() = booking_id;
    }

    fn saved_records(&self) -> Vec<BookingRecord> {
        self.saved_records.lock().unwrap().clone()
    }

    fn save_count(&self) -> usize {
        self.saved_records.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn save(&self, record: BookingRecord) -> booking_store::Result<Option<BookingId>> {
        self.saved_records.lock().unwrap().push(record);
        Ok(*self.next_booking_id.lock().unwrap())
    }
}

// ============================================================================
// テスト用のヘルパー関数
// ============================================================================

fn sample_request() -> BookDeskRequest {
    BookDeskRequest {
        first_name: "Nir".to_string(),
        last_name: "Weber".to_string(),
        email: "webernir@tipranks.com".to_string(),
        date: NaiveDate::from_ymd_opt(2020, 2, 14).unwrap(),
    }
}

fn setup_deps() -> (
    Arc<InMemoryDeskAvailability>,
    Arc<InMemoryBookingStore>,
    ServiceDependencies,
) {
    let desk_availability = Arc::new(InMemoryDeskAvailability::new());
    let booking_store = Arc::new(InMemoryBookingStore::new());

    let deps = ServiceDependencies {
        desk_availability: desk_availability.clone(),
        booking_store: booking_store.clone(),
    };

    (desk_availability, booking_store, deps)
}

// ============================================================================
// 統合テスト（関数型DDD - 関数ベースのAPI）
// ============================================================================

#[tokio::test]
async fn test_book_desk_echoes_request_fields_on_success() {
    // Arrange: 空きデスクあり
    let (desk_availability, _booking_store, deps) = setup_deps();
    desk_availability.add_desk(Desk::new(DeskId::new(7)));

    let request = sample_request();

    // Act
    let result = book_desk(&deps, request.clone()).await.unwrap();

    // Assert: リクエストの氏名・メール・日付が引き写される
    assert_eq!(result.first_name, request.first_name);
    assert_eq!(result.last_name, request.last_name);
    assert_eq!(result.email, request.email);
    assert_eq!(result.date, request.date);
}

#[tokio::test]
async fn test_book_desk_echoes_request_fields_when_no_desks() {
    // Arrange: 空きデスクなし
    let (_desk_availability, _booking_store, deps) = setup_deps();

    let request = sample_request();

    // Act
    let result = book_desk(&deps, request.clone()).await.unwrap();

    // Assert: 空きなしでも引き写しは同じ
    assert_eq!(result.first_name, request.first_name);
    assert_eq!(result.last_name, request.last_name);
    assert_eq!(result.email, request.email);
    assert_eq!(result.date, request.date);
}

#[tokio::test]
async fn test_book_desk_saves_exactly_once_when_desk_available() {
    // Arrange
    let (desk_availability, booking_store, deps) = setup_deps();
    desk_availability.add_desk(Desk::new(DeskId::new(7)));

    let request = sample_request();

    // Act
    book_desk(&deps, request.clone()).await.unwrap();

    // Assert: 保存はちょうど1回、レコードはリクエストの内容を持つ
    assert_eq!(booking_store.save_count(), 1);

    let saved = booking_store.saved_records();
    assert_eq!(saved[0].first_name, request.first_name);
    assert_eq!(saved[0].last_name, request.last_name);
    assert_eq!(saved[0].email, request.email);
    assert_eq!(saved[0].date, request.date);
}

#[tokio::test]
async fn test_book_desk_does_not_save_when_no_desks_available() {
    // Arrange: デスクを登録しない
    let (_desk_availability, booking_store, deps) = setup_deps();

    // Act
    book_desk(&deps, sample_request()).await.unwrap();

    // Assert: 保存は0回
    assert_eq!(booking_store.save_count(), 0);
}

#[tokio::test]
async fn test_book_desk_assigns_first_available_desk() {
    // Arrange: プロバイダー順で複数のデスク
    let (desk_availability, booking_store, deps) = setup_deps();
    desk_availability.add_desk(Desk::new(DeskId::new(7)));
    desk_availability.add_desk(Desk::new(DeskId::new(12)));

    // Act
    book_desk(&deps, sample_request()).await.unwrap();

    // Assert: 先頭のデスクが割り当てられる
    let saved = booking_store.saved_records();
    assert_eq!(saved[0].desk_id, DeskId::new(7));
}

#[tokio::test]
async fn test_book_desk_result_code_success_when_desk_available() {
    // Arrange
    let (desk_availability, _booking_store, deps) = setup_deps();
    desk_availability.add_desk(Desk::new(DeskId::new(7)));

    // Act
    let result = book_desk(&deps, sample_request()).await.unwrap();

    // Assert
    assert_eq!(result.result_code, DeskBookingResultCode::Success);
}

#[tokio::test]
async fn test_book_desk_result_code_not_available_desks_when_no_desks() {
    // Arrange
    let (_desk_availability, _booking_store, deps) = setup_deps();

    // Act
    let result = book_desk(&deps, sample_request()).await.unwrap();

    // Assert
    assert_eq!(result.result_code, DeskBookingResultCode::NotAvailableDesks);
}

#[tokio::test]
async fn test_book_desk_returns_booking_id_from_store() {
    // Arrange: ストアは42を採番する
    let (desk_availability, booking_store, deps) = setup_deps();
    desk_availability.add_desk(Desk::new(DeskId::new(7)));
    booking_store.set_next_booking_id(Some(BookingId::new(42)));

    // Act
    let result = book_desk(&deps, sample_request()).await.unwrap();

    // Assert: ストアの戻り値がそのまま結果に載る
    assert_eq!(result.booking_id, Some(BookingId::new(42)));
}

#[tokio::test]
async fn test_book_desk_success_even_when_store_returns_no_id() {
    // Arrange: ストアが識別子を割り当てない
    let (desk_availability, booking_store, deps) = setup_deps();
    desk_availability.add_desk(Desk::new(DeskId::new(7)));
    booking_store.set_next_booking_id(None);

    // Act
    let result = book_desk(&deps, sample_request()).await.unwrap();

    // Assert: 結果コードはSuccessのまま、予約IDはNone
    assert_eq!(result.result_code, DeskBookingResultCode::Success);
    assert_eq!(result.booking_id, None);
    assert_eq!(booking_store.save_count(), 1);
}

#[tokio::test]
async fn test_book_desk_proceeds_when_email_outside_organization_domain() {
    // Arrange: 組織ドメイン外のメールアドレス
    let (desk_availability, booking_store, deps) = setup_deps();
    desk_availability.add_desk(Desk::new(DeskId::new(7)));

    let request = BookDeskRequest {
        email: "nir@example.com".to_string(),
        ..sample_request()
    };

    // Act
    let result = book_desk(&deps, request).await.unwrap();

    // Assert: バリデーション結果は制御フローに影響しない（既存挙動の維持）
    assert_eq!(result.result_code, DeskBookingResultCode::Success);
    assert_eq!(booking_store.save_count(), 1);
}

// ============================================================================
// シナリオテスト
// ============================================================================

#[tokio::test]
async fn test_book_desk_full_scenario_desk_available() {
    // Arrange: デスク7が空き、ストアは42を採番
    let (desk_availability, booking_store, deps) = setup_deps();
    desk_availability.add_desk(Desk::new(DeskId::new(7)));
    booking_store.set_next_booking_id(Some(BookingId::new(42)));

    let request = sample_request();

    // Act
    let result = book_desk(&deps, request.clone()).await.unwrap();

    // Assert: 結果全体を確認
    assert_eq!(result.first_name, "Nir");
    assert_eq!(result.last_name, "Weber");
    assert_eq!(result.email, "webernir@tipranks.com");
    assert_eq!(result.date, NaiveDate::from_ymd_opt(2020, 2, 14).unwrap());
    assert_eq!(result.result_code, DeskBookingResultCode::Success);
    assert_eq!(result.booking_id, Some(BookingId::new(42)));

    // 保存されたレコードはデスク7を持つ
    let saved = booking_store.saved_records();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].desk_id, DeskId::new(7));
}

#[tokio::test]
async fn test_book_desk_full_scenario_no_desks() {
    // Arrange: 同じリクエスト、デスクなし
    let (_desk_availability, booking_store, deps) = setup_deps();

    // Act
    let result = book_desk(&deps, sample_request()).await.unwrap();

    // Assert
    assert_eq!(result.result_code, DeskBookingResultCode::NotAvailableDesks);
    assert_eq!(result.booking_id, None);
    assert_eq!(booking_store.save_count(), 0);
}
