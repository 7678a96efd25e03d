use crate::domain::booking::BookingRecord;
use crate::domain::value_objects::BookingId;
use crate::ports::booking_store::{BookingStore as BookingStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row};

/// BookingStoreのPostgreSQL実装
///
/// bookingsテーブルに1行INSERTし、採番されたbooking_idを返す。
/// (desk_id, booked_for)の一意性制約が同時リクエスト間の
/// 二重予約を防ぐ。制約違反はエラーとして呼び出し元に伝播する。
pub struct BookingStore {
    pool: PgPool,
}

impl BookingStore {
    /// PostgreSQLコネクションプールから新しいBookingStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    /// 予約レコードを永続化し、採番された予約IDを返す
    async fn save(&self, record: BookingRecord) -> Result<Option<BookingId>> {
        let row = sqlx::query(
            r#"
            INSERT INTO bookings (
                first_name,
                last_name,
                email,
                booked_for,
                desk_id
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING booking_id
            "#,
        )
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(record.date)
        .bind(record.desk_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(BookingId::new(row.get("booking_id"))))
    }
}
