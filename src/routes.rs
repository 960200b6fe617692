use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;
use crate::handlers::{auth, entrepreneur, health, idea, investor, summary};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/entrepreneurs", get(entrepreneur::get_entrepreneurs))
        .route("/entrepreneurs/register", post(entrepreneur::register_entrepreneur))
        .route("/ideas", get(idea::get_ideas))
        .route("/ideas/submit", post(idea::submit_idea))
        .route("/investors", get(investor::get_investors))
        .route("/investors/proposals", post(investor::submit_investor))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/summary/all-data", get(summary::get_all_data))
        .route("/summary/stats", get(summary::get_stats))
        .route("/summary/test", get(summary::get_health))
        .route("/summary/matching", get(summary::get_matching));

    Router::new()
        .route("/", get(health::hello_investmatch))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        // The browser frontend is served from another origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
