use axum::extract::{rejection::JsonRejection, Path, State};
use axum::http::HeaderValue;
use axum::routing::{get, post, put};
use axum::{middleware, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::database::models::{DependentKind, NewDependent};
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Build the full HTTP surface around the given state
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(public::health))
        .merge(auth_public_routes())
        // Protected API
        .merge(protected_routes(state.clone()));

    let router = if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.layer(cors_layer(config)).with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    Router::new().route("/api/v1/auth/sign-in", post(public::auth::sign_in_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(brand_routes())
        .merge(monitor_routes())
        .merge(system_routes())
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn auth_routes() -> Router<AppState> {
    use protected::auth;

    Router::new().route("/api/v1/auth/me", get(auth::me_get))
}

fn brand_routes() -> Router<AppState> {
    use protected::brand;

    let mut router = Router::new()
        .route("/api/v1/brands", get(brand::brand_list).post(brand::brand_create))
        .route(
            "/api/v1/brands/:id",
            get(brand::brand_show)
                .put(brand::brand_update)
                .delete(brand::brand_delete),
        )
        .route("/api/v1/brands/:id/soft-delete", put(brand::brand_soft_delete))
        .route("/api/v1/brands/:id/restore", put(brand::brand_restore))
        .route("/api/v1/brands/:id/token", get(brand::brand_token));

    // Static path per dependent kind
    for kind in DependentKind::ALL {
        let path = format!("/api/v1/brands/:id/{}", kind.plural());
        router = router.route(
            &path,
            get(move |state: State<AppState>, id: Path<String>| brand::dependents_get(state, id, kind)).post(
                move |state: State<AppState>, id: Path<String>, payload: Result<Json<NewDependent>, JsonRejection>| {
                    brand::dependents_post(state, id, kind, payload)
                },
            ),
        );
    }

    router
}

fn monitor_routes() -> Router<AppState> {
    use protected::{agent_status, dashboard};

    Router::new()
        .route("/api/v1/agent-status", get(agent_status::agent_status_get))
        .route("/api/v1/dashboard/stats", get(dashboard::stats_get))
        .route("/api/v1/dashboard/agent-monitor", get(dashboard::agent_monitor_get))
}

fn system_routes() -> Router<AppState> {
    use protected::system;

    Router::new().route(
        "/api/v1/system/settings",
        get(system::settings_get).put(system::settings_put),
    )
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = &config.security.cors_origins;
    if config.is_development() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn root() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "name": "HRM API (Rust)",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "health": "/health (public)",
                "auth": "/api/v1/auth/sign-in (public), /api/v1/auth/me",
                "brands": "/api/v1/brands[/:id[/soft-delete|/restore|/token|/workspaces|/bots|/agents]]",
                "agent_status": "/api/v1/agent-status?workspace_id&brand_id",
                "dashboard": "/api/v1/dashboard/stats, /api/v1/dashboard/agent-monitor",
                "system": "/api/v1/system/settings"
            }
        }
    }))
}
