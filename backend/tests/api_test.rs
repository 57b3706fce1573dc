//! End-to-end tests for the HTTP surface
//!
//! Each test builds the full router over a fresh SQLite file and drives it
//! with `tower::ServiceExt::oneshot`, checking status codes and bodies the
//! way the front end sees them.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use barbershop_backend::api::{self, LIVENESS_MESSAGE};
use barbershop_backend::state::AppState;
use barbershop_backend::store::SqliteStore;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// Router over an empty database, plus the directory keeping it alive
async fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("barbearia.db");
    let static_dir = dir.path().join("public");
    std::fs::create_dir_all(&static_dir).unwrap();
    std::fs::write(static_dir.join("index.html"), "<h1>Barbearia</h1>").unwrap();

    let store = SqliteStore::new(db_path.to_str().unwrap()).await.unwrap();
    let app = api::router(AppState::new(store), &static_dir);
    (app, dir)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let (status, body) = send(app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK, "GET {} failed: {}", uri, body);
    serde_json::from_str(&body).unwrap()
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, String) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, String) {
    send(app, Method::PUT, uri, Some(body)).await
}

#[tokio::test]
async fn test_liveness() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, LIVENESS_MESSAGE);
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let (app, _dir) = test_app().await;
    let (status, body) = send(&app, Method::GET, "/index.html", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Barbearia"));

    let (status, _) = send(&app, Method::GET, "/nao-existe.js", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_scenario() {
    let (app, _dir) = test_app().await;

    let (status, body) = post_json(&app, "/servicos", json!({"nome": "Corte", "preco": "30"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(created["id"], 1);

    let (status, body) = post_json(&app, "/barbeiros", json!({"nome": "Joao", "cpf": "111"})).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(created["id"], 1);

    let (status, _) = post_json(&app, "/clientes", json!({"nome": "Ana", "cpf": "222"})).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        &app,
        "/cadastrar-agendamento",
        json!({
            "data": "2024-06-10",
            "horario": "08:00",
            "cpf_cliente": "222",
            "id_barbeiro": 1,
            "id_servico": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let slots = get_json(&app, "/horarios-disponiveis?data=2024-06-10&id=1").await;
    let slots: Vec<String> = serde_json::from_value(slots).unwrap();
    assert_eq!(slots.len(), 8);
    assert_eq!(slots[0], "09:00");
    assert!(!slots.contains(&"08:00".to_string()));

    let report = get_json(&app, "/agendamentos?cpf_cliente=222").await;
    assert_eq!(
        report,
        json!([{
            "id": 1,
            "cliente_nome": "Ana",
            "cliente_cpf": "222",
            "servico_nome": "Corte",
            "horario": "08:00",
            "data": "2024-06-10"
        }])
    );
}

#[tokio::test]
async fn test_form_style_ids_and_double_booking() {
    let (app, _dir) = test_app().await;
    let booking = json!({
        "data": "2024-06-10",
        "horario": "14:00",
        "cpf_cliente": "222",
        "id_barbeiro": "1",
        "id_servico": "1"
    });

    let (status, _) = post_json(&app, "/cadastrar-agendamento", booking.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(&app, "/cadastrar-agendamento", booking).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, "Horário indisponível para este serviço.");

    // A different barber offering the same service still competes for the slot
    let (status, _) = post_json(
        &app,
        "/cadastrar-agendamento",
        json!({
            "data": "2024-06-10",
            "horario": "14:00",
            "cpf_cliente": "333",
            "id_barbeiro": 2,
            "id_servico": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_missing_required_fields_are_rejected() {
    let (app, _dir) = test_app().await;

    let (status, body) = post_json(&app, "/clientes", json!({"nome": "Ana"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Nome e CPF são obrigatórios.");

    let (status, _) = post_json(&app, "/barbeiros", json!({"cpf": "111", "nome": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post_json(&app, "/servicos", json!({"nome": "Corte"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Nome e Preço são obrigatórios.");

    assert_eq!(get_json(&app, "/clientes").await, json!([]));
    assert_eq!(get_json(&app, "/barbeiros").await, json!([]));
    assert_eq!(get_json(&app, "/servicos").await, json!([]));
}

#[tokio::test]
async fn test_listing_filters() {
    let (app, _dir) = test_app().await;
    for (nome, cpf) in [("Ana", "11122233344"), ("Bia", "55566677788")] {
        let (status, _) = post_json(&app, "/clientes", json!({"nome": nome, "cpf": cpf})).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let all = get_json(&app, "/clientes?cpf=").await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let one = get_json(&app, "/clientes?cpf=666").await;
    assert_eq!(one[0]["nome"], "Bia");
    assert_eq!(one[0]["telefone"], Value::Null);

    let none = get_json(&app, "/clientes?cpf=000").await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_updates_by_natural_key() {
    let (app, _dir) = test_app().await;
    post_json(&app, "/barbeiros", json!({"nome": "Joao", "cpf": "111"})).await;
    post_json(&app, "/servicos", json!({"nome": "Corte", "preco": "30"})).await;

    let (status, body) = put_json(
        &app,
        "/barbeiros/cpf/111",
        json!({"nome": "Joao", "especialidade": "Degradê"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Barbeiro atualizado com sucesso.");

    let (status, body) = put_json(&app, "/barbeiros/cpf/999", json!({"nome": "X"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Barbeiro não encontrado.");

    let (status, _) = put_json(&app, "/servicos/nome/Corte", json!({"preco": 35})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = put_json(&app, "/servicos/nome/Barba", json!({"preco": "20"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Serviço não encontrado.");

    let barbers = get_json(&app, "/barbeiros").await;
    assert_eq!(barbers[0]["especialidade"], "Degradê");

    let services = get_json(&app, "/servicos?nome=Cor").await;
    assert_eq!(services[0]["preco"], "35");

    assert_eq!(
        get_json(&app, "/buscar-barbeiros").await,
        json!([{"id": 1, "nome": "Joao"}])
    );
    assert_eq!(
        get_json(&app, "/buscar-servicos").await,
        json!([{"id": 1, "nome": "Corte"}])
    );
}

#[tokio::test]
async fn test_availability_requires_parameters() {
    let (app, _dir) = test_app().await;
    let (status, _) = send(&app, Method::GET, "/horarios-disponiveis?data=2024-06-10", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/horarios-disponiveis?id=1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_report_date_range_and_orphans() {
    let (app, _dir) = test_app().await;
    post_json(&app, "/clientes", json!({"nome": "Ana", "cpf": "222"})).await;
    post_json(&app, "/servicos", json!({"nome": "Corte", "preco": "30"})).await;

    for (data, cpf, servico) in [
        ("2024-05-31", "222", 1),
        ("2024-06-01", "222", 1),
        ("2024-06-30", "404", 9),
        ("2024-07-01", "222", 1),
    ] {
        let (status, _) = post_json(
            &app,
            "/cadastrar-agendamento",
            json!({
                "data": data,
                "horario": "10:00",
                "cpf_cliente": cpf,
                "id_barbeiro": 1,
                "id_servico": servico
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let rows = get_json(&app, "/agendamentos?dataInicio=2024-06-01&dataFim=2024-06-30").await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["data"], "2024-06-01");
    assert_eq!(rows[0]["servico_nome"], "Corte");
    assert_eq!(rows[1]["data"], "2024-06-30");
    assert_eq!(rows[1]["cliente_nome"], Value::Null);
    assert_eq!(rows[1]["servico_nome"], Value::Null);

    let everything = get_json(&app, "/agendamentos").await;
    assert_eq!(everything.as_array().unwrap().len(), 4);

    let by_service = get_json(&app, "/agendamentos?servico=Cor&dataFim=2024-06-01").await;
    assert_eq!(by_service.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_double_booking_across_time_formats() {
    let (app, _dir) = test_app().await;
    let booking = |horario: &str| {
        json!({
            "data": "2024-06-10",
            "horario": horario,
            "cpf_cliente": "222",
            "id_barbeiro": 1,
            "id_servico": 1
        })
    };

    let (status, _) = post_json(&app, "/cadastrar-agendamento", booking("08:00")).await;
    assert_eq!(status, StatusCode::OK);

    for horario in ["08:00:00", "8:00"] {
        let (status, body) = post_json(&app, "/cadastrar-agendamento", booking(horario)).await;
        assert_eq!(status, StatusCode::CONFLICT, "{} was booked twice", horario);
        assert_eq!(body, "Horário indisponível para este serviço.");
    }

    let report = get_json(&app, "/agendamentos?data=2024-06-10").await;
    assert_eq!(report.as_array().unwrap().len(), 1);

    let slots = get_json(&app, "/horarios-disponiveis?data=2024-06-10&id=1").await;
    assert_eq!(slots.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_numeric_text_fields_are_stored_as_text() {
    let (app, _dir) = test_app().await;

    let (status, _) = post_json(&app, "/clientes", json!({"nome": "Ana", "cpf": 22233344455_i64})).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = post_json(&app, "/barbeiros", json!({"nome": "Joao", "cpf": 111})).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = post_json(
        &app,
        "/cadastrar-agendamento",
        json!({
            "data": "2024-06-10",
            "horario": "10:00",
            "cpf_cliente": 22233344455_i64,
            "id_barbeiro": 1,
            "id_servico": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let clients = get_json(&app, "/clientes?cpf=22233344455").await;
    assert_eq!(clients[0]["cpf"], "22233344455");
    let barbers = get_json(&app, "/barbeiros").await;
    assert_eq!(barbers[0]["cpf"], "111");

    let report = get_json(&app, "/agendamentos?cpf_cliente=22233344455").await;
    assert_eq!(report[0]["cliente_nome"], "Ana");
}
