use crate::domain::booking::BookingRecord;
use crate::domain::value_objects::BookingId;
use crate::ports::booking_store::{BookingStore as BookingStoreTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock implementation of BookingStore
///
/// Records every saved booking and returns a configurable booking id.
/// Saved records can be inspected for assertions.
pub struct BookingStore {
    saved_records: Mutex<Vec<BookingRecord>>,
    next_booking_id: Mutex<Option<BookingId>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            saved_records: Mutex::new(Vec::new()),
            next_booking_id: Mutex::new(Some(BookingId::new(1))),
        }
    }

    /// Configure the id returned by the next save, None included
    pub fn set_next_booking_id(&self, booking_id: Option<BookingId>) {
        *self.next_booking_id.lock().unwrap() = booking_id;
    }

    /// Records saved so far, in save order
    pub fn saved_records(&self) -> Vec<BookingRecord> {
        self.saved_records.lock().unwrap().clone()
    }

    /// Number of save calls observed
    pub fn save_count(&self) -> usize {
        self.saved_records.lock().unwrap().len()
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    /// Record the booking and return the configured id
    async fn save(&self, record: BookingRecord) -> Result<Option<BookingId>> {
        self.saved_records.lock().unwrap().push(record);
        Ok(*self.next_booking_id.lock().unwrap())
    }
}
