//! Local HTTP host for the formatter endpoint.
//!
//! Answers `GET` and `POST` on a single route, the way the function host does
//! in production. Function keys are not checked here.

use crate::config::ServeArgs;
use crate::core::formatter::PhoneFormatter;
use crate::core::{HttpReply, NumberFormatter};
use crate::utils::error::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router<F>(formatter: Arc<PhoneFormatter<F>>, route: &str) -> Router
where
    F: NumberFormatter + 'static,
{
    Router::new()
        .route(route, get(format_phone_number::<F>).post(format_phone_number::<F>))
        .layer(TraceLayer::new_for_http())
        .with_state(formatter)
}

async fn format_phone_number<F>(
    State(formatter): State<Arc<PhoneFormatter<F>>>,
    body: Bytes,
) -> Response
where
    F: NumberFormatter + 'static,
{
    into_response(formatter.handle(&body))
}

fn into_response(reply: HttpReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, reply.content_type)], reply.body).into_response()
}

pub async fn serve<F>(formatter: PhoneFormatter<F>, args: &ServeArgs) -> Result<()>
where
    F: NumberFormatter + 'static,
{
    let app = router(Arc::new(formatter), &args.route);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(
        "🚀 Listening on http://{}{}",
        listener.local_addr()?,
        args.route
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
