//! Appointment report
//!
//! Builds the filtered, denormalized appointment listing: every appointment
//! left-joined with the client (by national id) and the service (by id).

use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite};

const REPORT_SELECT: &str = "SELECT \
        agendamentos.id AS id, \
        clientes.nome AS cliente_nome, \
        clientes.cpf AS cliente_cpf, \
        servicos.nome AS servico_nome, \
        CAST(agendamentos.horario AS TEXT) AS horario, \
        CAST(agendamentos.data AS TEXT) AS data \
    FROM agendamentos \
    LEFT JOIN clientes ON agendamentos.cpf_cliente = clientes.cpf \
    LEFT JOIN servicos ON agendamentos.id_servico = servicos.id \
    WHERE 1=1";

/// Optional report filters, all AND-combined
///
/// Field names match the query string of `GET /agendamentos`. Empty values
/// count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportFilter {
    /// Exact client national id
    #[serde(rename = "cpf_cliente")]
    pub client_national_id: Option<String>,
    /// Case-sensitive substring of the service name
    #[serde(rename = "servico")]
    pub service_name: Option<String>,
    /// First day of the range, inclusive
    #[serde(rename = "dataInicio")]
    pub start_date: Option<String>,
    /// Last day of the range, inclusive
    #[serde(rename = "dataFim")]
    pub end_date: Option<String>,
    /// Substring of the appointment day
    #[serde(rename = "data")]
    pub day: Option<String>,
}

/// Date restriction derived from `dataInicio` / `dataFim`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange<'a> {
    /// No restriction
    Any,
    /// On or after the day
    From(&'a str),
    /// On or before the day
    Until(&'a str),
    /// Inclusive on both ends
    Between(&'a str, &'a str),
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ReportFilter {
    /// Client filter, if set
    pub fn client(&self) -> Option<&str> {
        present(&self.client_national_id)
    }

    /// Service name filter, if set
    pub fn service(&self) -> Option<&str> {
        present(&self.service_name)
    }

    /// Day substring filter, if set
    pub fn day(&self) -> Option<&str> {
        present(&self.day)
    }

    /// Date range restriction
    pub fn date_range(&self) -> DateRange<'_> {
        match (present(&self.start_date), present(&self.end_date)) {
            (Some(start), Some(end)) => DateRange::Between(start, end),
            (Some(start), None) => DateRange::From(start),
            (None, Some(end)) => DateRange::Until(end),
            (None, None) => DateRange::Any,
        }
    }
}

/// Report query with every active filter bound as a parameter
pub fn build_query(filter: &ReportFilter) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new(REPORT_SELECT);

    if let Some(cpf) = filter.client() {
        query.push(" AND agendamentos.cpf_cliente = ");
        query.push_bind(cpf.to_string());
    }

    // instr() keeps the match case-sensitive; LIKE would not be.
    if let Some(service) = filter.service() {
        query.push(" AND instr(servicos.nome, ");
        query.push_bind(service.to_string());
        query.push(") > 0");
    }

    if let Some(day) = filter.day() {
        query.push(" AND instr(agendamentos.data, ");
        query.push_bind(day.to_string());
        query.push(") > 0");
    }

    match filter.date_range() {
        DateRange::Between(start, end) => {
            query.push(" AND agendamentos.data BETWEEN ");
            query.push_bind(start.to_string());
            query.push(" AND ");
            query.push_bind(end.to_string());
        }
        DateRange::From(start) => {
            query.push(" AND agendamentos.data >= ");
            query.push_bind(start.to_string());
        }
        DateRange::Until(end) => {
            query.push(" AND agendamentos.data <= ");
            query.push_bind(end.to_string());
        }
        DateRange::Any => {}
    }

    query.push(" ORDER BY agendamentos.id");
    query
}
