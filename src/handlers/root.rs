use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"Accounts service
Version: {version}

Available endpoints:
  - GET    /accounts[?status=]  - List accounts, newest first
  - POST   /accounts            - Create an account
  - GET    /accounts/{{email}}    - Fetch an account
  - PUT    /accounts/{{email}}    - Update fields of an account
  - DELETE /accounts/{{email}}    - Delete an account
  - GET    /health              - Light health check
  - GET    /health?mode=full    - Full health check (pings the database)
  - GET    /metrics             - Prometheus metrics
"#
    )
}
