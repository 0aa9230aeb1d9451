use axum::{
    Router, middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use campus_core::middleware::request_id_layer;

use crate::handlers::{
    activity::get_activity_feed,
    auth::{login, register},
    checkin::checkin,
    comment::{get_comments, post_comment},
    event::{create_event, delete_event, get_event, get_events, update_event},
    health::{healthz, readyz},
    rating::{get_ratings, submit_rating},
    recommendation::get_recommendations,
    registration::{bookmark_event, register_for_event},
    user::{get_me, update_me},
};
use crate::middleware::require_auth;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Bearer-token validation applies to the protected set only; reads on
    // events, comments and ratings stay public.
    let protected = Router::new()
        .route("/events", post(create_event))
        .route("/events/{id}", put(update_event))
        .route("/events/{id}", delete(delete_event))
        .route("/events/{id}/register", post(register_for_event))
        .route("/events/{id}/bookmark", post(bookmark_event))
        .route("/events/{id}/checkin", post(checkin))
        .route("/events/{id}/comments", post(post_comment))
        .route("/events/{id}/ratings", post(submit_rating))
        .route("/activity-feed", get(get_activity_feed))
        .route("/users/{user_id}/recommendations", get(get_recommendations))
        .route("/users/@me", get(get_me))
        .route("/users/@me", patch(update_me))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        // Public reads
        .route("/events", get(get_events))
        .route("/events/{id}", get(get_event))
        .route("/events/{id}/comments", get(get_comments))
        .route("/events/{id}/ratings", get(get_ratings))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
