//! SQLite store
//!
//! Handles all database interactions for clients, barbers, services and
//! appointments.

use super::error::StoreError;
use super::models::{
    Barber, BarberUpdate, Client, NamedRef, NewAppointment, NewBarber, NewClient, NewService,
    RecordId, ReportRow, Service, ServiceUpdate,
};
use super::Store;
use crate::scheduling::report::{self, ReportFilter};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

/// Connection pool backing the [`Store`] trait
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database file and bring the schema up to date
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file, or a `sqlite:` URL
    ///
    /// # Returns
    /// * `Ok(SqliteStore)` if successful
    /// * `Err(StoreError)` if the connection or schema bootstrap failed
    pub async fn new(db_path: &str) -> Result<Self, StoreError> {
        let options = if db_path.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(db_path)?
        } else {
            if let Some(parent) = PathBuf::from(db_path).parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Migration(format!("Failed to create db directory: {}", e))
                })?;
            }
            SqliteConnectOptions::new().filename(db_path)
        };

        // References are declared in the schema but not enforced: an
        // appointment may point at a client that was never registered.
        let options = options.create_if_missing(true).foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        info!("Connected to SQLite database at: {}", db_path);

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Create the tables if they do not exist yet
    async fn run_migrations(&self) -> Result<(), StoreError> {
        info!("Running database migrations...");

        let migration_sql = include_str!("../../migrations/001_create_tables.sql");

        for statement in split_statements(migration_sql) {
            sqlx::query(&statement)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    StoreError::Migration(format!(
                        "{} - Statement: {}",
                        e,
                        statement.chars().take(100).collect::<String>()
                    ))
                })?;
        }

        info!("Database migrations completed successfully");
        Ok(())
    }
}

/// Strip `--` comments and split a script into single statements
fn split_statements(script: &str) -> Vec<String> {
    let mut cleaned_sql = String::new();
    for line in script.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }
        let without_comments = match trimmed.find("--") {
            Some(comment_pos) => &trimmed[..comment_pos],
            None => trimmed,
        };
        cleaned_sql.push_str(without_comments.trim());
        cleaned_sql.push(' ');
    }

    cleaned_sql
        .split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `%value%` pattern for LIKE filters
///
/// `%` and `_` in `value` are not escaped and act as wildcards.
fn contains_pattern(value: &str) -> String {
    format!("%{}%", value)
}

#[async_trait]
impl Store for SqliteStore {
    async fn create_client(&self, client: &NewClient) -> Result<RecordId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO clientes (nome, cpf, email, telefone, endereco) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&client.name)
        .bind(&client.national_id)
        .bind(&client.email)
        .bind(&client.phone)
        .bind(&client.address)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(client_id = id, "Created client");
        Ok(id)
    }

    async fn list_clients(&self, national_id: Option<&str>) -> Result<Vec<Client>, StoreError> {
        let clients = match national_id {
            Some(cpf) => {
                sqlx::query_as::<_, Client>(
                    "SELECT id, nome, cpf, email, telefone, endereco FROM clientes WHERE cpf LIKE ? ORDER BY id",
                )
                .bind(contains_pattern(cpf))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Client>(
                    "SELECT id, nome, cpf, email, telefone, endereco FROM clientes ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(clients)
    }

    async fn create_barber(&self, barber: &NewBarber) -> Result<RecordId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO barbeiros (nome, cpf, email, telefone, especialidade, endereco) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&barber.name)
        .bind(&barber.national_id)
        .bind(&barber.email)
        .bind(&barber.phone)
        .bind(&barber.specialty)
        .bind(&barber.address)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(barber_id = id, "Created barber");
        Ok(id)
    }

    async fn list_barbers(&self, national_id: Option<&str>) -> Result<Vec<Barber>, StoreError> {
        let barbers = match national_id {
            Some(cpf) => {
                sqlx::query_as::<_, Barber>(
                    "SELECT id, nome, cpf, email, telefone, especialidade, endereco FROM barbeiros WHERE cpf LIKE ? ORDER BY id",
                )
                .bind(contains_pattern(cpf))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Barber>(
                    "SELECT id, nome, cpf, email, telefone, especialidade, endereco FROM barbeiros ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(barbers)
    }

    async fn update_barber(
        &self,
        national_id: &str,
        update: &BarberUpdate,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE barbeiros SET nome = ?, email = ?, telefone = ?, especialidade = ?, endereco = ? WHERE cpf = ?",
        )
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.phone)
        .bind(&update.specialty)
        .bind(&update.address)
        .bind(national_id)
        .execute(&self.pool)
        .await?;

        debug!(cpf = %national_id, rows = result.rows_affected(), "Updated barber");
        Ok(result.rows_affected())
    }

    async fn barber_refs(&self) -> Result<Vec<NamedRef>, StoreError> {
        let refs = sqlx::query_as::<_, NamedRef>("SELECT id, nome FROM barbeiros ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(refs)
    }

    async fn create_service(&self, service: &NewService) -> Result<RecordId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO servicos (nome, preco, duracao, descricao) VALUES (?, ?, ?, ?)",
        )
        .bind(&service.name)
        .bind(&service.price)
        .bind(&service.duration)
        .bind(&service.description)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(service_id = id, "Created service");
        Ok(id)
    }

    async fn list_services(&self, name: Option<&str>) -> Result<Vec<Service>, StoreError> {
        let services = match name {
            Some(name) => {
                sqlx::query_as::<_, Service>(
                    "SELECT id, nome, preco, duracao, descricao FROM servicos WHERE nome LIKE ? ORDER BY id",
                )
                .bind(contains_pattern(name))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Service>(
                    "SELECT id, nome, preco, duracao, descricao FROM servicos ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(services)
    }

    async fn update_service(
        &self,
        name: &str,
        update: &ServiceUpdate,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE servicos SET preco = ?, duracao = ?, descricao = ? WHERE nome = ?",
        )
        .bind(&update.price)
        .bind(&update.duration)
        .bind(&update.description)
        .bind(name)
        .execute(&self.pool)
        .await?;

        debug!(nome = %name, rows = result.rows_affected(), "Updated service");
        Ok(result.rows_affected())
    }

    async fn service_refs(&self) -> Result<Vec<NamedRef>, StoreError> {
        let refs = sqlx::query_as::<_, NamedRef>("SELECT id, nome FROM servicos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(refs)
    }

    async fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<RecordId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO agendamentos (data, horario, cpf_cliente, id_barbeiro, id_servico) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&appointment.date)
        .bind(&appointment.time)
        .bind(&appointment.client_national_id)
        .bind(appointment.barber_id)
        .bind(appointment.service_id)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(
            appointment_id = id,
            data = ?appointment.date,
            horario = ?appointment.time,
            "Created appointment"
        );
        Ok(id)
    }

    async fn booked_times(
        &self,
        date: &str,
        service_id: RecordId,
    ) -> Result<Vec<String>, StoreError> {
        let times: Vec<String> = sqlx::query_scalar(
            "SELECT CAST(horario AS TEXT) FROM agendamentos WHERE data = ? AND id_servico = ? ORDER BY id",
        )
        .bind(date)
        .bind(service_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(times)
    }

    async fn appointment_report(
        &self,
        filter: &ReportFilter,
    ) -> Result<Vec<ReportRow>, StoreError> {
        let mut query = report::build_query(filter);
        let rows = query
            .build_query_as::<ReportRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(rows = rows.len(), "Appointment report");
        Ok(rows)
    }
}
