use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::database::{models, Resource, ResourceVisitor};
use crate::handlers::{resource, system};
use crate::state::AppState;

pub const API_PREFIX: &str = "/api/v1";

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .nest(API_PREFIX, api_routes())
        .fallback(system::not_found)
        .with_state(state)
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Any origin, method and header. Every OPTIONS request is answered here
/// with an empty 200 and never reaches a handler.
fn cors_layer() -> CorsLayer {
    CorsLayer::permissive().max_age(Duration::from_secs(3600))
}

fn api_routes() -> Router<AppState> {
    let mut routes = ApiRoutes {
        router: Router::new(),
    };
    models::visit_all(&mut routes);
    routes.router
}

struct ApiRoutes {
    router: Router<AppState>,
}

impl ResourceVisitor for ApiRoutes {
    fn visit<R: Resource>(&mut self) {
        let router = std::mem::replace(&mut self.router, Router::new());
        self.router = router.merge(resource_routes::<R>());
    }
}

pub fn resource_routes<R: Resource>() -> Router<AppState> {
    Router::new()
        .route(
            &format!("/{}", R::PATH),
            get(resource::list::<R>).post(resource::create::<R>),
        )
        .route(
            &format!("/{}/:key", R::PATH),
            get(resource::get::<R>)
                .put(resource::update::<R>)
                .delete(resource::delete::<R>),
        )
}
