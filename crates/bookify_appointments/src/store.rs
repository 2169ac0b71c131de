// --- File: crates/bookify_appointments/src/store.rs ---
//! In-memory appointment store.
//!
//! An insertion-ordered collection plus a monotonically increasing id
//! allocator, both behind one RwLock: the allocator advances under the same
//! write guard as the insert, so concurrent creates cannot share an id.

use bookify_common::ApiError;
use chrono::Datelike;
use tokio::sync::RwLock;
use tracing::info;

use bookify_auth::models::Account;

use crate::model::{combine_date_time, Appointment, AppointmentRequest};

#[derive(Default)]
struct Inner {
    records: Vec<Appointment>,
    next_id: u64,
}

pub struct AppointmentStore {
    inner: RwLock<Inner>,
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Owner-or-admin rule gating every mutation of an existing record.
    fn can_modify(record: &Appointment, requester: &Account) -> bool {
        record.phone == requester.phone || requester.is_admin()
    }

    // Empty result sets are reported as NotFound to preserve the original
    // wire contract for list endpoints.
    fn non_empty(records: Vec<Appointment>, detail: &str) -> Result<Vec<Appointment>, ApiError> {
        if records.is_empty() {
            Err(ApiError::NotFound(detail.to_string()))
        } else {
            Ok(records)
        }
    }

    /// Creates an appointment owned by `owner`.
    ///
    /// The payload is validated before the lock is taken; id, owner phone and
    /// owner name are server-assigned, never client-supplied. The name is a
    /// snapshot of the owner's full name at creation time.
    pub async fn create(
        &self,
        owner: &Account,
        req: AppointmentRequest,
    ) -> Result<Appointment, ApiError> {
        req.validate()?;

        let mut inner = self.inner.write().await;
        let record = Appointment {
            id: inner.next_id,
            name: owner.full_name.clone(),
            phone: owner.phone.clone(),
            date: req.date,
            time: req.time,
            service: req.service,
        };
        inner.next_id += 1;
        inner.records.push(record.clone());
        info!(id = record.id, phone = %record.phone, "appointment created");
        Ok(record)
    }

    /// All appointments owned by `phone`, in insertion order.
    pub async fn list_for_owner(&self, phone: &str) -> Result<Vec<Appointment>, ApiError> {
        let inner = self.inner.read().await;
        let matches = inner
            .records
            .iter()
            .filter(|a| a.phone == phone)
            .cloned()
            .collect();
        Self::non_empty(matches, "Appointments not found")
    }

    /// Replaces date/time/service of the record with `id`, preserving id,
    /// owner phone and owner name from the existing record.
    pub async fn update(
        &self,
        id: u64,
        req: AppointmentRequest,
        requester: &Account,
    ) -> Result<Appointment, ApiError> {
        req.validate()?;

        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ApiError::NotFound("Can't update, appointment not found".to_string()))?;
        if !Self::can_modify(record, requester) {
            return Err(ApiError::Forbidden(
                "Not authorized to update this appointment".to_string(),
            ));
        }
        record.date = req.date;
        record.time = req.time;
        record.service = req.service;
        Ok(record.clone())
    }

    /// Permanently removes the record with `id` and returns it.
    pub async fn delete(&self, id: u64, requester: &Account) -> Result<Appointment, ApiError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .records
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| ApiError::NotFound("Appointment not found".to_string()))?;
        if !Self::can_modify(&inner.records[index], requester) {
            return Err(ApiError::Forbidden(
                "Not authorized to delete this appointment".to_string(),
            ));
        }
        let removed = inner.records.remove(index);
        info!(id = removed.id, phone = %removed.phone, "appointment deleted");
        Ok(removed)
    }

    /// The entire collection, admin query.
    pub async fn list_all(&self) -> Result<Vec<Appointment>, ApiError> {
        let inner = self.inner.read().await;
        Self::non_empty(inner.records.clone(), "Appointments not found")
    }

    /// All appointments for an arbitrary phone, admin query.
    pub async fn list_by_owner(&self, phone: &str) -> Result<Vec<Appointment>, ApiError> {
        let inner = self.inner.read().await;
        let matches = inner
            .records
            .iter()
            .filter(|a| a.phone == phone)
            .cloned()
            .collect();
        Self::non_empty(matches, "Appointments not found for this phone number")
    }

    /// All appointments whose combined date+time falls in calendar month
    /// `month` (1-12), independent of year. Admin query.
    pub async fn list_by_month(&self, month: u32) -> Result<Vec<Appointment>, ApiError> {
        let inner = self.inner.read().await;
        let matches = inner
            .records
            .iter()
            .filter(|a| {
                combine_date_time(&a.date, &a.time).is_some_and(|dt| dt.month() == month)
            })
            .cloned()
            .collect();
        Self::non_empty(matches, "Appointments not found for this month")
    }

    /// Removes every appointment owned by `phone`; cascade path for admin
    /// user deletion. Returns the number of removed records.
    pub async fn remove_for_owner(&self, phone: &str) -> usize {
        let mut inner = self.inner.write().await;
        let before = inner.records.len();
        inner.records.retain(|a| a.phone != phone);
        before - inner.records.len()
    }

    /// Clears all records and rewinds the id allocator. Test support only;
    /// nothing in the request path calls this.
    pub async fn reset(&self) {
        let mut inner = self.inner.write().await;
        inner.records.clear();
        inner.next_id = 1;
    }
}
