//! Client API handlers
//!
//! Registration and lookup of clients. Clients are never updated or deleted.

use crate::api::utils::{lenient_string, non_empty, require_present, CreatedResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::store::{Client, NewClient};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::info;

/// Create client request
#[derive(Debug, Default, Deserialize)]
pub struct CreateClientRequest {
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
    /// Postal address
    #[serde(default, deserialize_with = "lenient_string")]
    pub endereco: Option<String>,
}

/// Query string of `GET /clientes`
#[derive(Debug, Default, Deserialize)]
pub struct ClientQuery {
    /// National id substring
    pub cpf: Option<String>,
}

/// POST /clientes - Register a client
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    const MISSING: &str = "Nome e CPF são obrigatórios.";
    let client = NewClient {
        name: require_present(request.nome, MISSING)?,
        national_id: require_present(request.cpf, MISSING)?,
        email: request.email,
        phone: request.telefone,
        address: request.endereco,
    };

    let id = state
        .store()
        .create_client(&client)
        .await
        .map_err(|e| AppError::database("Erro ao cadastrar cliente.", e))?;

    info!(client_id = id, "Client registered");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Cliente cadastrado com sucesso.")),
    ))
}

/// GET /clientes - List clients, optionally by national id substring
pub async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<ClientQuery>,
) -> Result<Json<Vec<Client>>, AppError> {
    let cpf = non_empty(query.cpf);
    let clients = state
        .store()
        .list_clients(cpf.as_deref())
        .await
        .map_err(|e| AppError::database("Erro ao buscar clientes.", e))?;

    Ok(Json(clients))
}
