//! Persistence layer
//!
//! The `Store` trait is the only way handlers reach the database. The
//! production implementation is [`SqliteStore`]; it is built once at startup
//! and shared through `AppState`.

pub mod error;
pub mod models;
pub mod sqlite;

use async_trait::async_trait;

pub use error::StoreError;
pub use models::{
    Barber, BarberUpdate, Client, NamedRef, NewAppointment, NewBarber, NewClient, NewService,
    RecordId, ReportRow, Service, ServiceUpdate,
};
pub use sqlite::SqliteStore;

use crate::scheduling::report::ReportFilter;

/// Parameterized query/insert/update operations over the four entities
///
/// Listing filters are substrings; `None` lists everything. Updates return
/// the number of affected rows so callers can tell "not found" apart.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a client, returning its generated id
    async fn create_client(&self, client: &NewClient) -> Result<RecordId, StoreError>;

    /// List clients whose national id contains `national_id`
    async fn list_clients(&self, national_id: Option<&str>) -> Result<Vec<Client>, StoreError>;

    /// Insert a barber, returning its generated id
    async fn create_barber(&self, barber: &NewBarber) -> Result<RecordId, StoreError>;

    /// List barbers whose national id contains `national_id`
    async fn list_barbers(&self, national_id: Option<&str>) -> Result<Vec<Barber>, StoreError>;

    /// Overwrite the barber identified by `national_id`
    async fn update_barber(
        &self,
        national_id: &str,
        update: &BarberUpdate,
    ) -> Result<u64, StoreError>;

    /// All barbers as `{id, nome}`
    async fn barber_refs(&self) -> Result<Vec<NamedRef>, StoreError>;

    /// Insert a service, returning its generated id
    async fn create_service(&self, service: &NewService) -> Result<RecordId, StoreError>;

    /// List services whose name contains `name`
    async fn list_services(&self, name: Option<&str>) -> Result<Vec<Service>, StoreError>;

    /// Overwrite the service identified by `name`
    async fn update_service(&self, name: &str, update: &ServiceUpdate)
        -> Result<u64, StoreError>;

    /// All services as `{id, nome}`
    async fn service_refs(&self) -> Result<Vec<NamedRef>, StoreError>;

    /// Insert an appointment, returning its generated id
    ///
    /// Fails with [`StoreError::Duplicate`] when the (date, time, service)
    /// slot is already taken.
    async fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<RecordId, StoreError>;

    /// Raw `horario` values booked for a service on a day
    async fn booked_times(
        &self,
        date: &str,
        service_id: RecordId,
    ) -> Result<Vec<String>, StoreError>;

    /// Appointments joined with client and service names
    async fn appointment_report(
        &self,
        filter: &ReportFilter,
    ) -> Result<Vec<ReportRow>, StoreError>;
}
