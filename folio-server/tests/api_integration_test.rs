//! End-to-end tests over the full router: listing endpoints, file
//! streaming, and error mapping.

use axum::http::StatusCode;
use serde_json::Value;

mod common;
use common::build_test_app;

#[tokio::test]
async fn empty_uploads_tree_lists_nothing() {
    let app = build_test_app();

    let response = app.server.get("/api/project").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 0);

    let response = app.server.get("/api/tech").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 0);
}

#[tokio::test]
async fn listed_projects_carry_directory_ids() {
    let app = build_test_app();
    app.add_project("Alpha", &[("readme.md", b"hello")]);
    app.add_project("Beta", &[]);

    let response = app.server.get("/api/project").await;
    response.assert_status_ok();

    let projects = response.json::<Vec<Value>>();
    let mut ids: Vec<&str> = projects
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["Alpha", "Beta"]);
}

#[tokio::test]
async fn portfolio_project_gets_title_override_and_logo() {
    let app = build_test_app();
    app.add_project("Portfolio", &[("logo.svg", b"<svg/>")]);

    let response = app.server.get("/api/project/Portfolio").await;
    response.assert_status_ok();

    let project = response.json::<Value>();
    assert_eq!(project["id"], "Portfolio");
    assert_eq!(project["title"], "Portfolio Website");
    assert_eq!(project["logo"], "/api/project/Portfolio/file/logo.svg");
    assert_eq!(
        project["files"]["logo.svg"],
        "/api/project/Portfolio/file/logo.svg"
    );
}

#[tokio::test]
async fn unknown_project_is_404_with_error_body() {
    let app = build_test_app();

    let response = app.server.get("/api/project/nonexistent").await;
    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["status"], 404);
}

#[tokio::test]
async fn unknown_showcase_is_404() {
    let app = build_test_app();

    let response = app.server.get("/api/tech/nonexistent").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn simulator_showcase_reports_python_and_long_description() {
    let app = build_test_app();
    app.add_showcase("DashboardSim", &[("simulator.py", "print('hi')")]);

    let response = app.server.get("/api/tech/DashboardSim").await;
    response.assert_status_ok();

    let showcase = response.json::<Value>();
    assert_eq!(showcase["id"], "DashboardSim");
    assert_eq!(showcase["language"], "python");
    assert_eq!(showcase["files"]["simulator.py"], "print('hi')");
    assert!(
        showcase["description"]
            .as_str()
            .unwrap()
            .starts_with("A high-fidelity Python simulation")
    );
}

#[tokio::test]
async fn project_file_streams_with_pdf_content_type() {
    let app = build_test_app();
    app.add_project("Alpha", &[("report.pdf", b"%PDF-1.4 fake")]);

    let response = app.server.get("/api/project/Alpha/file/report.pdf").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/pdf");
    assert_eq!(response.as_bytes().to_vec(), b"%PDF-1.4 fake".to_vec());
}

#[tokio::test]
async fn missing_project_file_is_404() {
    let app = build_test_app();
    app.add_project("Alpha", &[]);

    let response = app.server.get("/api/project/Alpha/file/missing.pdf").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn traversal_out_of_projects_root_is_400() {
    let app = build_test_app();
    app.add_project("Alpha", &[]);
    // Reachable via ../.. from the project directory, but outside the
    // projects root.
    std::fs::write(app.uploads.path().join("secret.txt"), b"secret").unwrap();

    let response = app
        .server
        .get("/api/project/Alpha/file/..%2F..%2Fsecret.txt")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_image_is_served_as_jpeg() {
    let app = build_test_app();
    std::fs::write(app.uploads.path().join("self.jpeg"), b"\xff\xd8jpeg").unwrap();

    let response = app.server.get("/api/self").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/jpeg");
}

#[tokio::test]
async fn missing_profile_image_is_404() {
    let app = build_test_app();

    let response = app.server.get("/api/self").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn cross_origin_requests_are_allowed_by_default() {
    let app = build_test_app();

    let response = app
        .server
        .get("/api/project")
        .add_header("origin", "https://example.com")
        .await;
    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn ping_and_health_respond() {
    let app = build_test_app();

    let response = app.server.get("/ping").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    let health = response.json::<Value>();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["checks"]["projects_root"], true);
}
