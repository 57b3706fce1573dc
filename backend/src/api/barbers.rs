//! Barber API handlers
//!
//! Registration, listing and update (by national id) of barbers, plus the
//! `{id, nome}` lookup used by the booking form.

use crate::api::utils::{lenient_string, non_empty, require_present, CreatedResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::store::{Barber, BarberUpdate, NamedRef, NewBarber};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::info;

/// Create barber request
#[derive(Debug, Default, Deserialize)]
pub struct CreateBarberRequest {
    /// Display name (required)
    #[serde(default, deserialize_with = "lenient_string")]
    pub nome: Option<String>,
    /// National id (required)
    #[serde(default, deserialize_with = "lenient_string")]
    pub cpf: Option<String>,
    /// Contact e-mail
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    /// Contact phone
    #[serde(default, deserialize_with = "lenient_string")]
    pub telefone: Option<String>,
    /// Specialty
    #[serde(default, deserialize_with = "lenient_string")]
    pub especialidade: Option<String>,
    /// Postal address
    #[serde(default, deserialize_with = "lenient_string")]
    pub endereco: Option<String>,
}

/// Update barber request
///
/// Every column is replaced; omitted fields become NULL.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBarberRequest {
    /// Display name
    #[serde(default, deserialize_with = "lenient_string")]
    pub nome: Option<String>,
    /// Contact e-mail
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    /// Contact phone
    #[serde(default, deserialize_with = "lenient_string")]
    pub telefone: Option<String>,
    /// Specialty
    #[serde(default, deserialize_with = "lenient_string")]
    pub especialidade: Option<String>,
    /// Postal address
    #[serde(default, deserialize_with = "lenient_string")]
    pub endereco: Option<String>,
}

/// Query string of `GET /barbeiros`
#[derive(Debug, Default, Deserialize)]
pub struct BarberQuery {
    /// National id substring
    pub cpf: Option<String>,
}

/// POST /barbeiros - Register a barber
pub async fn create_barber(
    State(state): State<AppState>,
    Json(request): Json<CreateBarberRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    const MISSING: &str = "Nome e CPF são obrigatórios.";
    let barber = NewBarber {
        name: require_present(request.nome, MISSING)?,
        national_id: require_present(request.cpf, MISSING)?,
        email: request.email,
        phone: request.telefone,
        specialty: request.especialidade,
        address: request.endereco,
    };

    let id = state
        .store()
        .create_barber(&barber)
        .await
        .map_err(|e| AppError::database("Erro ao cadastrar barbeiro.", e))?;

    info!(barber_id = id, "Barber registered");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Barbeiro cadastrado com sucesso.")),
    ))
}

/// GET /barbeiros - List barbers, optionally by national id substring
pub async fn list_barbers(
    State(state): State<AppState>,
    Query(query): Query<BarberQuery>,
) -> Result<Json<Vec<Barber>>, AppError> {
    let cpf = non_empty(query.cpf);
    let barbers = state
        .store()
        .list_barbers(cpf.as_deref())
        .await
        .map_err(|e| AppError::database("Erro ao buscar barbeiros.", e))?;

    Ok(Json(barbers))
}

/// PUT /barbeiros/cpf/:cpf - Replace a barber's details
pub async fn update_barber(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
    Json(request): Json<UpdateBarberRequest>,
) -> Result<&'static str, AppError> {
    let update = BarberUpdate {
        name: request.nome,
        email: request.email,
        phone: request.telefone,
        specialty: request.especialidade,
        address: request.endereco,
    };

    let changed = state
        .store()
        .update_barber(&cpf, &update)
        .await
        .map_err(|e| AppError::database("Erro ao atualizar barbeiro.", e))?;

    if changed == 0 {
        return Err(AppError::NotFound("Barbeiro não encontrado.".to_string()));
    }

    info!(cpf = %cpf, "Barber updated");
    Ok("Barbeiro atualizado com sucesso.")
}

/// GET /buscar-barbeiros - All barbers as `{id, nome}`
pub async fn barber_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<NamedRef>>, AppError> {
    let refs = state
        .store()
        .barber_refs()
        .await
        .map_err(|e| AppError::database("Erro ao buscar barbeiros", e))?;

    Ok(Json(refs))
}
