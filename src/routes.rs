use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/", get(handlers::landing::landing_page))
        .route("/contact", post(handlers::landing::send_message))
        .route("/book", get(handlers::booking::booking_page))
        .route("/book/service", post(handlers::booking::select_service))
        .route("/book/next", post(handlers::booking::next_step))
        .route("/book/back", post(handlers::booking::previous_step))
        .route("/book/date", post(handlers::booking::select_date))
        .route("/book/time", post(handlers::booking::select_time))
        .route("/book/submit", post(handlers::booking::submit_booking))
        .route("/book/close", post(handlers::booking::close_booking))
        .route("/admin", get(handlers::admin::dashboard_page))
        .route("/admin/login", post(handlers::admin::login))
        .route("/admin/logout", post(handlers::admin::logout))
        .route(
            "/admin/bookings/:id/status",
            post(handlers::admin::update_status),
        )
        .route(
            "/admin/bookings/:id/delete",
            get(handlers::admin::confirm_delete_booking).post(handlers::admin::delete_booking),
        )
        .route(
            "/admin/messages/:id/delete",
            get(handlers::admin::confirm_delete_message).post(handlers::admin::delete_message),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
