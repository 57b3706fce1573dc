//! Service catalog API handlers
//!
//! Services are identified by their unique name for updates.

use crate::api::utils::{lenient_string, non_empty, require_present, CreatedResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::store::{NamedRef, NewService, Service, ServiceUpdate};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::info;

/// Create service request
#[derive(Debug, Default, Deserialize)]
pub struct CreateServiceRequest {
    /// Unique name (required)
    #[serde(default, deserialize_with = "lenient_string")]
    pub nome: Option<String>,
    /// Price (required), number or text
    #[serde(default, deserialize_with = "lenient_string")]
    pub preco: Option<String>,
    /// Duration, number or text
    #[serde(default, deserialize_with = "lenient_string")]
    pub duracao: Option<String>,
    /// Description
    #[serde(default, deserialize_with = "lenient_string")]
    pub descricao: Option<String>,
}

/// Update service request
#[derive(Debug, Default, Deserialize)]
pub struct UpdateServiceRequest {
    /// Price
    #[serde(default, deserialize_with = "lenient_string")]
    pub preco: Option<String>,
    /// Duration
    #[serde(default, deserialize_with = "lenient_string")]
    pub duracao: Option<String>,
    /// Description
    #[serde(default, deserialize_with = "lenient_string")]
    pub descricao: Option<String>,
}

/// Query string of `GET /servicos`
#[derive(Debug, Default, Deserialize)]
pub struct ServiceQuery {
    /// Name substring
    pub nome: Option<String>,
}

/// POST /servicos - Add a service to the catalog
pub async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    const MISSING: &str = "Nome e Preço são obrigatórios.";
    let service = NewService {
        name: require_present(request.nome, MISSING)?,
        price: require_present(request.preco, MISSING)?,
        duration: request.duracao,
        description: request.descricao,
    };

    let id = state
        .store()
        .create_service(&service)
        .await
        .map_err(|e| AppError::database("Erro ao cadastrar serviço.", e))?;

    info!(service_id = id, nome = %service.name, "Service created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Serviço cadastrado com sucesso.")),
    ))
}

/// GET /servicos - List services, optionally by name substring
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceQuery>,
) -> Result<Json<Vec<Service>>, AppError> {
    let name = non_empty(query.nome);
    let services = state
        .store()
        .list_services(name.as_deref())
        .await
        .map_err(|e| AppError::database("Erro ao buscar serviços.", e))?;

    Ok(Json(services))
}

/// PUT /servicos/nome/:nome - Replace a service's price, duration and description
pub async fn update_service(
    State(state): State<AppState>,
    Path(nome): Path<String>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<&'static str, AppError> {
    let update = ServiceUpdate {
        price: request.preco,
        duration: request.duracao,
        description: request.descricao,
    };

    let changed = state
        .store()
        .update_service(&nome, &update)
        .await
        .map_err(|e| AppError::database("Erro ao atualizar serviço.", e))?;

    if changed == 0 {
        return Err(AppError::NotFound("Serviço não encontrado.".to_string()));
    }

    info!(nome = %nome, "Service updated");
    Ok("Serviço atualizado com sucesso.")
}

/// GET /buscar-servicos - All services as `{id, nome}`
pub async fn service_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<NamedRef>>, AppError> {
    let refs = state
        .store()
        .service_refs()
        .await
        .map_err(|e| AppError::database("Erro ao buscar serviços", e))?;

    Ok(Json(refs))
}
