//! API module
//!
//! HTTP request handlers for the barbershop endpoints and the router that
//! ties them together with the static front end.

pub mod appointments;
pub mod barbers;
pub mod clients;
pub mod services;
pub mod utils;

use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::path::Path;
use tower_http::services::ServeDir;

/// Liveness text returned by `GET /`
pub const LIVENESS_MESSAGE: &str = "Servidor está rodando e tabelas criadas!";

/// Build the application router
///
/// Any path not claimed by an API route is looked up in `static_dir`.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(liveness))
        // Clients
        .route(
            "/clientes",
            get(clients::list_clients).post(clients::create_client),
        )
        // Barbers
        .route(
            "/barbeiros",
            get(barbers::list_barbers).post(barbers::create_barber),
        )
        .route("/barbeiros/cpf/:cpf", put(barbers::update_barber))
        .route("/buscar-barbeiros", get(barbers::barber_options))
        // Services
        .route(
            "/servicos",
            get(services::list_services).post(services::create_service),
        )
        .route("/servicos/nome/:nome", put(services::update_service))
        .route("/buscar-servicos", get(services::service_options))
        // Appointments
        .route(
            "/horarios-disponiveis",
            get(appointments::available_slots),
        )
        .route(
            "/cadastrar-agendamento",
            post(appointments::create_appointment),
        )
        .route("/agendamentos", get(appointments::appointment_report))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// GET / - Liveness check
async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}
