use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderName, Method, StatusCode};
use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use users_api::build_router;
use users_api::config::{ApiConfig, MiddlewareConfig};
use users_api::constants::{DEFAULT_PORT, ENV, LOCAL_ENV, SERVICE, USERS_API_PORT};
use users_api::methods::routes::{OPENAPI_JSON_PATH, SERVICE_DOCS_PATH};
use users_api::openapi::ApiDoc;
use users_api::shutdown::shutdown_signal;
use users_api::state::AppState;
use users_api::upstream::{
    RemoteAuthenticator, RemoteGroupsService, RemoteUsersService, UpstreamClient, UpstreamConfig,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let env = std::env::var(ENV)
        .map_err(|_| format!("{} environment variable must be set", ENV))?;

    let registry = tracing_subscriber::registry().with(filter);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true);

    if env == LOCAL_ENV {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty();
        registry.with(json_layer).with(pretty_layer).init();
    } else {
        registry.with(json_layer).init();
    }

    tracing::info!(service = SERVICE, env = %env, "tracing initialized");

    let middleware_config = MiddlewareConfig::from_env();
    tracing::info!(
        rate_limit_per_minute = middleware_config.rate_limit_per_minute,
        rate_limit_burst = middleware_config.rate_limit_burst,
        request_timeout_secs = middleware_config.request_timeout.as_secs(),
        max_body_size = middleware_config.max_body_size,
        cors_origins = ?middleware_config.cors_allowed_origins,
        "middleware configuration loaded"
    );

    let api_config = ApiConfig::from_env();
    let upstream = UpstreamConfig::from_env();
    tracing::info!(
        users_url = %upstream.users_url,
        groups_url = %upstream.groups_url,
        auth_url = %upstream.auth_url,
        self_register = api_config.self_register,
        password_min_length = api_config.password_policy.min_length,
        "upstream services configured"
    );

    let app_state = AppState {
        users: Arc::new(RemoteUsersService::new(UpstreamClient::new(
            upstream.users_url.clone(),
            upstream.timeout,
        )?)),
        groups: Arc::new(RemoteGroupsService::new(UpstreamClient::new(
            upstream.groups_url.clone(),
            upstream.timeout,
        )?)),
        authn: Arc::new(RemoteAuthenticator::new(UpstreamClient::new(
            upstream.auth_url.clone(),
            upstream.timeout,
        )?)),
        config: api_config,
        env: env.clone(),
    };

    let x_request_id = HeaderName::from_static("x-request-id");
    let governor = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_interval_ms(middleware_config.rate_limit_per_minute))
            .burst_size(middleware_config.rate_limit_burst)
            .finish()
            .ok_or("failed to build governor config")?,
    );

    // Each `layer` wraps the previous ones, so the governor sees requests first.
    let app = build_router(app_state)
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
        )
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(middleware_config.max_body_size))
        .layer(cors_layer(&middleware_config.cors_allowed_origins, x_request_id))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            middleware_config.request_timeout,
        ))
        .layer(GovernorLayer { config: governor });

    let port: u16 = std::env::var(USERS_API_PORT)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("users-api is ready to accept requests at: http://127.0.0.1:{}", port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(middleware_config.shutdown_timeout))
    .await
    .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}

fn replenish_interval_ms(requests_per_minute: u32) -> u64 {
    (60_000 / u64::from(requests_per_minute)).max(1)
}

fn cors_layer(allowed_origins: &[String], x_request_id: HeaderName) -> CorsLayer {
    let layer = if allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<_> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(origins)
    };

    layer
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::REFERER,
            x_request_id,
        ])
}
