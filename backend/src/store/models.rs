//! Barbershop data models
//!
//! Row types returned by the store and the inputs it accepts for writes.
//! JSON and column names follow the public API (`nome`, `cpf`, ...).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row id generated by the database
pub type RecordId = i64;

/// A registered client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Client {
    /// Generated identifier
    pub id: RecordId,
    /// Display name
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    /// National id (CPF), unique per client
    #[serde(rename = "cpf")]
    #[sqlx(rename = "cpf")]
    pub national_id: String,
    /// Contact e-mail
    pub email: Option<String>,
    /// Contact phone
    #[serde(rename = "telefone")]
    #[sqlx(rename = "telefone")]
    pub phone: Option<String>,
    /// Postal address
    #[serde(rename = "endereco")]
    #[sqlx(rename = "endereco")]
    pub address: Option<String>,
}

/// Fields for a new client
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    /// Display name
    pub name: String,
    /// National id (CPF)
    pub national_id: String,
    /// Contact e-mail
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Postal address
    pub address: Option<String>,
}

/// A barber working at the shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Barber {
    /// Generated identifier
    pub id: RecordId,
    /// Display name
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    /// National id (CPF), the natural key used for updates
    #[serde(rename = "cpf")]
    #[sqlx(rename = "cpf")]
    pub national_id: String,
    /// Contact e-mail
    pub email: Option<String>,
    /// Contact phone
    #[serde(rename = "telefone")]
    #[sqlx(rename = "telefone")]
    pub phone: Option<String>,
    /// Specialty (free text)
    #[serde(rename = "especialidade")]
    #[sqlx(rename = "especialidade")]
    pub specialty: Option<String>,
    /// Postal address
    #[serde(rename = "endereco")]
    #[sqlx(rename = "endereco")]
    pub address: Option<String>,
}

/// Fields for a new barber
#[derive(Debug, Clone, Default)]
pub struct NewBarber {
    /// Display name
    pub name: String,
    /// National id (CPF)
    pub national_id: String,
    /// Contact e-mail
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Specialty
    pub specialty: Option<String>,
    /// Postal address
    pub address: Option<String>,
}

/// Replacement values for a barber's non-key columns
///
/// Every column is overwritten; `None` stores NULL.
#[derive(Debug, Clone, Default)]
pub struct BarberUpdate {
    /// Display name
    pub name: Option<String>,
    /// Contact e-mail
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Specialty
    pub specialty: Option<String>,
    /// Postal address
    pub address: Option<String>,
}

/// A service offered by the shop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Service {
    /// Generated identifier
    pub id: RecordId,
    /// Unique service name, the natural key used for updates
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub name: String,
    /// Price, kept as text exactly as entered
    #[serde(rename = "preco")]
    #[sqlx(rename = "preco")]
    pub price: String,
    /// Duration (free text)
    #[serde(rename = "duracao")]
    #[sqlx(rename = "duracao")]
    pub duration: Option<String>,
    /// Description
    #[serde(rename = "descricao")]
    #[sqlx(rename = "descricao")]
    pub description: Option<String>,
}

/// Fields for a new service
#[derive(Debug, Clone, Default)]
pub struct NewService {
    /// Unique name
    pub name: String,
    /// Price as text
    pub price: String,
    /// Duration
    pub duration: Option<String>,
    /// Description
    pub description: Option<String>,
}

/// Replacement values for a service's non-key columns
#[derive(Debug, Clone, Default)]
pub struct ServiceUpdate {
    /// Price as text
    pub price: Option<String>,
    /// Duration
    pub duration: Option<String>,
    /// Description
    pub description: Option<String>,
}

/// Fields for a new appointment
///
/// Nothing is validated before the insert; missing values hit the NOT NULL
/// constraints of the table.
#[derive(Debug, Clone, Default)]
pub struct NewAppointment {
    /// Day, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Start time, `HH:MM`
    pub time: Option<String>,
    /// Client national id
    pub client_national_id: Option<String>,
    /// Barber id
    pub barber_id: Option<RecordId>,
    /// Service id
    pub service_id: Option<RecordId>,
}

/// `{id, nome}` pair used to fill selection lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct NamedRef {
    /// Generated identifier
    pub id: RecordId,
    /// Display name
    pub nome: String,
}

/// One denormalized line of the appointment report
///
/// Joined columns are `None` when the appointment points at a client or
/// service that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ReportRow {
    /// Appointment id
    pub id: RecordId,
    /// Client name
    pub cliente_nome: Option<String>,
    /// Client national id
    pub cliente_cpf: Option<String>,
    /// Service name
    pub servico_nome: Option<String>,
    /// Start time as stored
    pub horario: String,
    /// Day as stored
    pub data: String,
}
