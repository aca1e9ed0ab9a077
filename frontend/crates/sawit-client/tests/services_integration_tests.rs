//! Integration tests for the per-service wrappers using wiremock mock server

use sawit_client::models::{
    EmployeeRequest, EmployeeStatus, HarvestQuality, HarvestRequest, LoginRequest,
    PayrollRequest, PayrollStatus, PlantationRequest, RegisterRequest, ShipmentStatus,
};
use sawit_client::services::{SawitApi, build_dummy_identity};
use sawit_client::{Client, MemorySessionStore, SessionKey, SessionStore};
use sawit_config::{ApiEndpoints, ServicesConfig};

use std::sync::Arc;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

fn api_for(server: &MockServer) -> (SawitApi, Arc<MemorySessionStore>) {
    let uri = server.uri();
    let services = ServicesConfig {
        identity: uri.clone(),
        plantation: uri.clone(),
        harvest: uri.clone(),
        shipment: uri.clone(),
        payroll: uri,
    };
    let store = Arc::new(MemorySessionStore::new());
    let api = SawitApi::new(Client::new(store.clone()), ApiEndpoints::new(&services));
    (api, store)
}

fn auth_body() -> serde_json::Value {
    json!({
        "token": "jwt",
        "type": "Bearer",
        "id": 10,
        "username": "user",
        "email": "user@mail.com",
        "role": "USER"
    })
}

// =========================================================================
// Auth & Identity
// =========================================================================

#[tokio::test]
async fn test_login_posts_credentials_and_saves_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "user", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (api, store) = api_for(&mock_server);
    let response = api
        .auth()
        .login(&LoginRequest {
            username: "user".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, "jwt");
    assert!(api.auth().is_authenticated());
    assert_eq!(store.get(SessionKey::UserId).as_deref(), Some("10"));
    assert_eq!(
        api.auth().get_user_info().unwrap().username.as_deref(),
        Some("user")
    );
}

#[tokio::test]
async fn test_failed_login_leaves_session_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    let err = api
        .auth()
        .login(&LoginRequest {
            username: "user".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Invalid credentials");
    assert!(!api.auth().is_authenticated());
}

#[tokio::test]
async fn test_register_saves_session_and_logout_clears_it() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(auth_body()))
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    api.auth()
        .register(&RegisterRequest {
            username: "user".into(),
            email: "user@mail.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert!(api.auth().is_authenticated());

    api.auth().logout().unwrap();

    assert!(!api.auth().is_authenticated());
    assert!(api.auth().get_user_info().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_dummy_user_does_not_replace_session() {
    let mock_server = MockServer::start().await;

    let dummy = build_dummy_identity(1_700_000_000_000);
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "username": "dummy.user.1700000000000",
            "email": "dummy.1700000000000@mysawit.local",
            "password": "dummy123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": "other-jwt",
            "type": "Bearer",
            "id": 99,
            "username": "dummy.user.1700000000000",
            "email": "dummy.1700000000000@mysawit.local",
            "role": "USER"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (api, store) = api_for(&mock_server);
    store.set(SessionKey::AuthToken, "admin-jwt").unwrap();

    let created = api.identity().create_dummy_user(&dummy).await.unwrap();

    assert_eq!(created.id, 99);
    assert_eq!(store.get(SessionKey::AuthToken).as_deref(), Some("admin-jwt"));
}

#[tokio::test]
async fn test_auth_health() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "UP", "service": "identity-service" })),
        )
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    let health = api.auth().check_health().await.unwrap();

    assert!(health.is_up());
    assert_eq!(health.service, "identity-service");
}

// =========================================================================
// Plantations
// =========================================================================

#[tokio::test]
async fn test_get_plantations_by_owner_uses_query_and_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/plantations"))
        .and(query_param("ownerId", "7"))
        .and(header("Authorization", "Bearer jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "Kebun Sawit A",
            "location": "Riau",
            "area": 12.5,
            "ownerId": 7,
            "createdAt": "2026-01-01T00:00:00",
            "updatedAt": "2026-01-01T00:00:00"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (api, store) = api_for(&mock_server);
    store.set(SessionKey::AuthToken, "jwt").unwrap();
    let plantations = api.plantations().get_by_owner(7).await.unwrap();

    assert_eq!(plantations.len(), 1);
    assert_eq!(plantations[0].owner_id, 7);
    assert_eq!(plantations[0].area, 12.5);
}

#[tokio::test]
async fn test_update_plantation_puts_to_id_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/plantations/12"))
        .and(body_json(json!({
            "name": "Kebun B",
            "location": "Jambi",
            "area": 30.0,
            "ownerId": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "name": "Kebun B",
            "location": "Jambi",
            "area": 30.0,
            "ownerId": 10
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    let request = PlantationRequest {
        name: "Kebun B".into(),
        location: "Jambi".into(),
        area: 30.0,
        owner_id: Some(10),
        description: None,
        plant_date: None,
    };
    let updated = api.plantations().update(12, &request).await.unwrap();

    assert_eq!(updated.id, 12);
}

#[tokio::test]
async fn test_delete_plantation_returns_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/plantations/3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Plantation deleted successfully" })),
        )
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    let response = api.plantations().delete(3).await.unwrap();

    assert_eq!(response.message, "Plantation deleted successfully");
}

// =========================================================================
// Harvests & Shipments
// =========================================================================

#[tokio::test]
async fn test_create_harvest_posts_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/harvests"))
        .and(body_json(json!({
            "plantationId": 1,
            "harvestDate": "2026-02-01T07:30",
            "weight": 1250.0,
            "quality": "STANDARD"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5,
            "plantationId": 1,
            "harvestDate": "2026-02-01T07:30:00",
            "weight": 1250.0,
            "quality": "STANDARD"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    let harvest = api
        .harvests()
        .create(&HarvestRequest {
            plantation_id: 1,
            harvest_date: "2026-02-01T07:30".into(),
            weight: 1250.0,
            quality: Some(HarvestQuality::Standard),
            harvester_id: None,
            notes: None,
        })
        .await
        .unwrap();

    assert_eq!(harvest.id, 5);
    assert_eq!(harvest.quality, HarvestQuality::Standard);
}

#[tokio::test]
async fn test_get_harvests_by_plantation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/harvests"))
        .and(query_param("plantationId", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    let harvests = api.harvests().get_by_plantation(9).await.unwrap();

    assert!(harvests.is_empty());
}

#[tokio::test]
async fn test_get_shipments_by_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/shipments"))
        .and(query_param("status", "IN_TRANSIT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 4,
            "harvestId": 5,
            "destination": "Pabrik Kelapa Sawit Dumai",
            "weight": 1200.0,
            "status": "IN_TRANSIT",
            "vehicleNumber": "BM 1234 XY"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    let shipments = api
        .shipments()
        .get_by_status(ShipmentStatus::InTransit)
        .await
        .unwrap();

    assert_eq!(shipments[0].status, ShipmentStatus::InTransit);
    assert_eq!(shipments[0].vehicle_number.as_deref(), Some("BM 1234 XY"));
}

#[tokio::test]
async fn test_get_shipment_not_found_surfaces_service_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/shipments/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Shipment not found" })),
        )
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    let err = api.shipments().get_by_id(404).await.unwrap_err();

    assert_eq!(err.message(), "Shipment not found");
}

// =========================================================================
// Payroll
// =========================================================================

#[tokio::test]
async fn test_create_employee_posts_to_employees() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .and(body_json(json!({
            "name": "Budi",
            "employeeCode": "EMP001",
            "position": "Harvester",
            "baseSalary": 5000000.0,
            "status": "ACTIVE"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "name": "Budi",
            "employeeCode": "EMP001",
            "position": "Harvester",
            "baseSalary": 5000000.0,
            "status": "ACTIVE"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    let employee = api
        .payroll()
        .create_employee(&EmployeeRequest {
            name: "Budi".into(),
            employee_code: "EMP001".into(),
            position: "Harvester".into(),
            plantation_id: None,
            base_salary: 5_000_000.0,
            phone_number: None,
            address: None,
            hire_date: None,
            status: EmployeeStatus::Active,
        })
        .await
        .unwrap();

    assert_eq!(employee.employee_code, "EMP001");
}

#[tokio::test]
async fn test_create_payroll_posts_to_payrolls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/payrolls"))
        .and(body_json(json!({
            "employeeId": 1,
            "periodStart": "2026-01-01T00:00",
            "periodEnd": "2026-01-31T23:59",
            "baseAmount": 5000000.0,
            "bonusAmount": 200000.0,
            "deductionAmount": 100000.0,
            "status": "PENDING",
            "paymentMethod": "BANK_TRANSFER"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11,
            "employeeId": 1,
            "periodStart": "2026-01-01T00:00",
            "periodEnd": "2026-01-31T23:59",
            "baseAmount": 5000000.0,
            "bonusAmount": 200000.0,
            "deductionAmount": 100000.0,
            "totalAmount": 5100000.0,
            "status": "PENDING",
            "paymentMethod": "BANK_TRANSFER"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);
    let payroll = api
        .payroll()
        .create_payroll(&PayrollRequest {
            employee_id: 1,
            period_start: "2026-01-01T00:00".into(),
            period_end: "2026-01-31T23:59".into(),
            base_amount: 5_000_000.0,
            bonus_amount: 200_000.0,
            deduction_amount: 100_000.0,
            status: PayrollStatus::Pending,
            payment_method: Some("BANK_TRANSFER".into()),
            notes: None,
        })
        .await
        .unwrap();

    assert_eq!(payroll.id, 11);
    assert_eq!(payroll.total(), 5_100_000.0);
}

#[tokio::test]
async fn test_get_payrolls_and_employees() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/payrolls"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (api, _store) = api_for(&mock_server);

    assert!(api.payroll().get_employees().await.unwrap().is_empty());
    assert!(api.payroll().get_payrolls().await.unwrap().is_empty());
}
