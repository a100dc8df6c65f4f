use axum::{
    middleware,
    routing::{any, delete, get, patch, post},
    Router,
};
use domain::services::InquiryNotifier;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    inquiry_access, metrics_handler, metrics_middleware, require_admin,
    security_headers_middleware, trace_id,
};
use crate::routes::{
    admin, announcements, health, inquiries, method_not_allowed, posts, praises,
};
use crate::services::EmailInquiryNotifier;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub notifier: Arc<dyn InquiryNotifier>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let notifier = Arc::new(EmailInquiryNotifier::new(
        &config.email,
        &config.notification,
    ));
    create_app_with_notifier(config, pool, notifier)
}

/// Builds the router with an explicit inquiry notifier.
pub fn create_app_with_notifier(
    config: Config,
    pool: PgPool,
    notifier: Arc<dyn InquiryNotifier>,
) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        notifier,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public content routes (no authentication required)
    let content_routes = Router::new()
        .route(
            "/api/v1/announcements",
            get(announcements::list_announcements).fallback(method_not_allowed),
        )
        .route("/api/v1/announcements/:id", any(method_not_allowed))
        .route(
            "/api/v1/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/api/v1/posts/:id",
            get(posts::get_post)
                .put(posts::replace_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/api/v1/praises",
            get(praises::list_praises)
                .post(praises::create_praise)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/v1/praises/:id",
            get(praises::get_praise).fallback(method_not_allowed),
        )
        .route("/api/v1/inquiries", post(inquiries::create_inquiry));

    // Inquiry routes other than creation, guarded by the configured access policy
    let inquiry_routes = Router::new()
        .route("/api/v1/inquiries", get(inquiries::list_inquiries))
        .route(
            "/api/v1/inquiries/:id",
            get(inquiries::get_inquiry)
                .put(inquiries::replace_inquiry)
                .patch(inquiries::update_inquiry)
                .delete(inquiries::delete_inquiry),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            inquiry_access,
        ));

    // Admin console routes (require admin API key)
    let admin_routes = Router::new()
        .route(
            "/api/v1/admin/announcements",
            get(admin::list_announcements).post(admin::create_announcement),
        )
        .route(
            "/api/v1/admin/announcements/:id",
            delete(admin::delete_announcement),
        )
        .route("/api/v1/admin/inquiries", get(admin::list_inquiries))
        .route(
            "/api/v1/admin/inquiries/export",
            post(admin::export_inquiries),
        )
        .route("/api/v1/admin/posts", get(admin::list_posts))
        .route(
            "/api/v1/admin/posts/:id/blocked",
            patch(admin::set_post_blocked),
        )
        .route("/api/v1/admin/praises", get(admin::list_praises))
        .route("/api/v1/admin/praises/:id", delete(admin::delete_praise))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Health and metrics routes (public, no auth)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(content_routes)
        .merge(inquiry_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
