//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{jwt_auth_middleware, AuthUser};
use crate::server::routes::{
    error_log_handler, graphql_batch_handler, graphql_handler, health_handler,
    member_card_handler, member_cards_handler, members_csv_handler, report_pdf_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Populated by jwt_auth_middleware
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    let context = GraphQLContext::new(state.deps.clone(), auth_user);
    request.extensions_mut().insert(context);

    next.run(request).await
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        // Lets browsers read the download file name
        .expose_headers([CONTENT_DISPOSITION])
}

/// Router with every route and middleware except rate limiting.
///
/// Rate limiting keys on the client address, which only exists when the
/// router is served over a socket, so it is added by [`build_app`].
pub fn build_router(deps: Arc<ServerDeps>, allowed_origins: &[String]) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let app_state = AppState { deps: deps.clone() };

    let mut router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(crate::server::routes::graphql_playground));
    }

    router
        .route("/health", get(health_handler))
        .route("/exports/members.csv", get(members_csv_handler))
        .route("/exports/members.pdf", get(member_cards_handler))
        .route("/exports/members/:id/card.pdf", get(member_card_handler))
        .route("/exports/report.pdf", get(report_pdf_handler))
        .route("/diagnostics/error-log", get(error_log_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn_with_state(deps, jwt_auth_middleware))
        .layer(Extension(app_state)) // must be outside the middlewares that read it
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        // State (schema for GraphQL handlers)
        .with_state(schema)
}

/// The production application: [`build_router`] plus per-IP rate limiting.
pub fn build_app(deps: Arc<ServerDeps>, allowed_origins: &[String]) -> Result<Router> {
    // 10 requests per second per IP with bursts of 20
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            // Keys on the peer address; adds x-ratelimit-* response headers
            .use_headers()
            .finish()
            .context("Invalid rate limiter configuration")?,
    );

    Ok(build_router(deps, allowed_origins).layer(GovernorLayer {
        config: rate_limit_config,
    }))
}
