use crate::cli::ServeArgs;
use crate::infra::{build_engine, AppState};
use crate::routes::with_entitlement_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use reserve_benefits::config::AppConfig;
use reserve_benefits::error::AppError;
use reserve_benefits::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(build_engine(&config)?);
    let schedule_version = engine.schedule().version.clone();

    let app = with_entitlement_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, %schedule_version, "entitlement evaluation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
