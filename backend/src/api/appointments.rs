//! Appointment API handlers
//!
//! Booking, free-slot lookup and the filtered appointment report.

use crate::api::utils::{lenient_id, lenient_string, non_empty};
use crate::error::AppError;
use crate::scheduling::{self, ReportFilter};
use crate::state::AppState;
use crate::store::{NewAppointment, RecordId, ReportRow, StoreError};
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::{info, warn};

/// Query string of `GET /horarios-disponiveis`
#[derive(Debug, Default, Deserialize)]
pub struct AvailabilityQuery {
    /// Day, `YYYY-MM-DD`
    pub data: Option<String>,
    /// Service id
    pub id: Option<String>,
}

/// Create appointment request
///
/// Ids may be numbers or numeric strings.
#[derive(Debug, Default, Deserialize)]
pub struct CreateAppointmentRequest {
    /// Day, `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient_string")]
    pub data: Option<String>,
    /// Start time, `HH:MM`
    #[serde(default, deserialize_with = "lenient_string")]
    pub horario: Option<String>,
    /// Client national id
    #[serde(default, deserialize_with = "lenient_string")]
    pub cpf_cliente: Option<String>,
    /// Barber id
    #[serde(default, deserialize_with = "lenient_id")]
    pub id_barbeiro: Option<RecordId>,
    /// Service id
    #[serde(default, deserialize_with = "lenient_id")]
    pub id_servico: Option<RecordId>,
}

/// GET /horarios-disponiveis - Free roster slots for a service on a day
pub async fn available_slots(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let (Some(date), Some(service)) = (non_empty(query.data), non_empty(query.id)) else {
        return Err(AppError::Validation(
            "Data e serviço são obrigatórios.".to_string(),
        ));
    };
    let service_id: RecordId = service
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("Serviço inválido: {}", service)))?;

    let slots = scheduling::available_slots(state.store(), &date, service_id)
        .await
        .map_err(|e| AppError::database("Erro ao buscar horários ocupados", e))?;

    Ok(Json(slots))
}

/// POST /cadastrar-agendamento - Book a slot
///
/// The (day, time, service) uniqueness is checked by the database on insert,
/// so two concurrent requests for the same slot cannot both succeed. The time
/// is stored as `HH:MM` so `8:00` and `08:00:00` land on the `08:00` slot.
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<&'static str, AppError> {
    let appointment = NewAppointment {
        date: request.data,
        time: request.horario.map(|time| scheduling::normalize_time(&time)),
        client_national_id: request.cpf_cliente,
        barber_id: request.id_barbeiro,
        service_id: request.id_servico,
    };

    match state.store().create_appointment(&appointment).await {
        Ok(id) => {
            info!(
                appointment_id = id,
                data = ?appointment.date,
                horario = ?appointment.time,
                "Appointment booked"
            );
            Ok("Agendamento cadastrado com sucesso!")
        }
        Err(StoreError::Duplicate(detail)) => {
            warn!(
                data = ?appointment.date,
                horario = ?appointment.time,
                id_servico = ?appointment.service_id,
                %detail,
                "Slot already booked"
            );
            Err(AppError::Conflict(
                "Horário indisponível para este serviço.".to_string(),
            ))
        }
        Err(e) => Err(AppError::database("Erro ao cadastrar agendamento", e)),
    }
}

/// GET /agendamentos - Appointment report
///
/// Query parameters: `cpf_cliente`, `servico`, `dataInicio`, `dataFim`, `data`.
pub async fn appointment_report(
    State(state): State<AppState>,
    Query(filter): Query<ReportFilter>,
) -> Result<Json<Vec<ReportRow>>, AppError> {
    let rows = state
        .store()
        .appointment_report(&filter)
        .await
        .map_err(|e| AppError::database("Erro ao buscar agendamentos.", e))?;

    Ok(Json(rows))
}
