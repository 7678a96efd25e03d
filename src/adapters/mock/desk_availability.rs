use crate::domain::value_objects::Desk;
use crate::ports::desk_availability::{
    DeskAvailabilityProvider as DeskAvailabilityProviderTrait, Result,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock implementation of DeskAvailabilityProvider
///
/// Supports stateful testing by registering desks per date.
/// Desks are returned in registration order (provider-defined order).
pub struct DeskAvailabilityProvider {
    available_desks: Mutex<HashMap<NaiveDate, Vec<Desk>>>,
}

impl DeskAvailabilityProvider {
    pub fn new() -> Self {
        Self {
            available_desks: Mutex::new(HashMap::new()),
        }
    }

    /// Register a desk as available on a date for testing purposes
    pub fn add_available_desk(&self, date: NaiveDate, desk: Desk) {
        self.available_desks
            .lock()
            .unwrap()
            .entry(date)
            .or_default()
            .push(desk);
    }
}

impl Default for DeskAvailabilityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeskAvailabilityProviderTrait for DeskAvailabilityProvider {
    /// Return the desks registered for the given date
    async fn get_available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>> {
        Ok(self
            .available_desks
            .lock()
            .unwrap()
            .get(&date)
            .cloned()
            .unwrap_or_default())
    }
}
