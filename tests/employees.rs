mod common;

use fullslate::ApiError;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn lists_all_employees() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {"id": 11, "first_name": "Alma", "last_name": "Reyes", "services": [2, 3]},
                {"id": 12, "first_name": "Theo", "last_name": "Park", "services": []}
            ]));
    });

    let api = common::public_client(&server);
    let employees = api.employees().await.unwrap();

    mock.assert();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].id, 11);
    assert_eq!(employees[0].full_name(), "Alma Reyes");
    assert_eq!(employees[0].services, vec![2, 3]);
}

#[tokio::test]
async fn fetches_a_single_employee() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/employees/11");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!(
                {"id": 11, "first_name": "Alma", "last_name": "Reyes", "services": [2]}
            ));
    });

    let api = common::public_client(&server);
    let employee = api.employee(11).await.unwrap();

    mock.assert();
    assert_eq!(employee.id, 11);
    assert_eq!(employee.first_name, "Alma");
}

#[tokio::test]
async fn sends_the_token_as_the_auth_parameter() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/employees")
            .query_param("auth", common::TOKEN);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([]));
    });

    let api = common::token_client(&server);
    let employees = api.employees().await.unwrap();

    mock.assert();
    assert!(employees.is_empty());
}

#[tokio::test]
async fn surfaces_the_server_failure_message() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/employees/-1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"failure": true, "errorMessage": "Employee not found."}));
    });

    let api = common::public_client(&server);
    let err = api.employee(-1).await.unwrap_err();

    mock.assert();
    match err {
        ApiError::Failure { message } => assert_eq!(message, "Employee not found."),
        other => panic!("expected a failure, got {other:?}"),
    }
}
