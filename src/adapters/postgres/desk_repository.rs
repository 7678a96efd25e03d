use crate::domain::value_objects::{Desk, DeskId};
use crate::ports::desk_availability::{
    DeskAvailabilityProvider as DeskAvailabilityProviderTrait, Result,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

/// DeskAvailabilityProviderのPostgreSQL実装
///
/// デスク在庫テーブルから、指定日にまだ予約されていない
/// デスクを返す。順序はdesk_idの昇順（プロバイダー定義順）。
pub struct DeskRepository {
    pool: PgPool,
}

impl DeskRepository {
    /// PostgreSQLコネクションプールから新しいDeskRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeskAvailabilityProviderTrait for DeskRepository {
    /// 指定日に空いているデスクを取得する
    ///
    /// 同日の予約が存在しないデスクのみを返す。変更系の副作用なし。
    async fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>> {
        let rows = sqlx::query(
            r#"
            SELECT d.desk_id
            FROM desks d
            WHERE NOT EXISTS (
                SELECT 1
                FROM bookings b
                WHERE b.desk_id = d.desk_id AND b.booked_for = $1
            )
            ORDER BY d.desk_id ASC
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| Desk::new(DeskId::new(row.get("desk_id"))))
            .collect())
    }
}
