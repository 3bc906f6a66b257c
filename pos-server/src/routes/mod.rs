use std::time::Duration;

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request id
#[derive(Clone, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, no middleware, no state
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(api::health::router())
        .merge(api::catalog::router())
        .merge(api::tables::router())
        .merge(api::orders::router())
}

/// Fully configured application, used by the HTTP server and by tests
pub fn build_app(state: &ServerState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router()
        .layer(
            // 自上而下：最外层先执行
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), XRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state.clone())
}
