use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::{removal_cookie, session_cookie};
use crate::models::BookingStatus;
use crate::session::Session;
use crate::state::AppState;
use crate::ui::admin::{CONFIRM_DELETE_BOOKING, CONFIRM_DELETE_MESSAGE};
use crate::ui::{AdminDashboard, Confirmation, DashboardError, Notice, Tab};
use crate::views;

pub const ADMIN_COOKIE: &str = "admin_token";

fn dashboard_for(state: &AppState, jar: &CookieJar) -> AdminDashboard {
    let session = Session::from_stored(jar.get(ADMIN_COOKIE).map(|c| c.value()));
    AdminDashboard::new(state.services.clone(), session)
}

/// Render whatever the session allows. A session that is no longer valid
/// also drops the stored token.
fn respond(
    state: &AppState,
    jar: CookieJar,
    dashboard: &AdminDashboard,
) -> (CookieJar, Html<String>) {
    let site = &state.config.site;
    match dashboard.session().token() {
        Some(token) => {
            let jar = jar.add(session_cookie(
                ADMIN_COOKIE,
                token.as_str().to_string(),
                state.config.secure_cookies,
            ));
            (jar, Html(views::admin::dashboard(site, dashboard)))
        }
        None => (
            jar.remove(removal_cookie(ADMIN_COOKIE)),
            Html(views::admin::login(site, dashboard.notice(), "")),
        ),
    }
}

fn report(dashboard: &mut AdminDashboard, result: Result<impl Sized, DashboardError>) {
    // Backend failures already left a notice behind.
    if let Err(e @ DashboardError::UnknownBooking(_)) = result {
        dashboard.set_notice(Notice::error(e.to_string()));
    }
}

fn confirmation(answer: &str) -> Confirmation {
    if answer == "yes" {
        Confirmation::Confirmed
    } else {
        Confirmation::Declined
    }
}

// GET /admin
#[derive(Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<Tab>,
    pub booking: Option<String>,
}

pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<DashboardQuery>,
) -> (CookieJar, Html<String>) {
    let mut dashboard = dashboard_for(&state, &jar);
    dashboard.set_tab(query.tab.unwrap_or_default());

    if dashboard.is_authenticated() && dashboard.open().await.is_ok() {
        if let Some(id) = query.booking.as_deref() {
            let result = dashboard.view_booking(id);
            report(&mut dashboard, result);
        }
    }
    respond(&state, jar, &dashboard)
}

// POST /admin/login
#[derive(Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(input): Form<LoginInput>,
) -> (CookieJar, Html<String>) {
    let mut dashboard = AdminDashboard::new(state.services.clone(), Session::Absent);

    if dashboard.login(&input.email, &input.password).await.is_err() {
        let html = views::admin::login(&state.config.site, dashboard.notice(), &input.email);
        return (jar.remove(removal_cookie(ADMIN_COOKIE)), Html(html));
    }

    let _ = dashboard.refresh().await;
    respond(&state, jar, &dashboard)
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let mut dashboard = dashboard_for(&state, &jar);
    dashboard.logout();
    respond(&state, jar, &dashboard)
}

// POST /admin/bookings/:id/status
#[derive(Deserialize)]
pub struct StatusInput {
    pub status: BookingStatus,
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
    Form(input): Form<StatusInput>,
) -> (CookieJar, Html<String>) {
    let mut dashboard = dashboard_for(&state, &jar);
    if dashboard.open().await.is_ok() {
        let result = dashboard.update_status(&id, input.status).await;
        report(&mut dashboard, result);
    }
    respond(&state, jar, &dashboard)
}

// GET /admin/bookings/:id/delete, /admin/messages/:id/delete
pub async fn confirm_delete_booking(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> (CookieJar, Html<String>) {
    confirm_page(
        &state,
        jar,
        CONFIRM_DELETE_BOOKING,
        views::link(&["admin", "bookings", &id, "delete"], &[]),
    )
}

pub async fn confirm_delete_message(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> (CookieJar, Html<String>) {
    confirm_page(
        &state,
        jar,
        CONFIRM_DELETE_MESSAGE,
        views::link(&["admin", "messages", &id, "delete"], &[]),
    )
}

fn confirm_page(
    state: &AppState,
    jar: CookieJar,
    prompt: &str,
    action: String,
) -> (CookieJar, Html<String>) {
    let dashboard = dashboard_for(state, &jar);
    if !dashboard.is_authenticated() {
        return respond(state, jar, &dashboard);
    }
    (jar, Html(views::admin::confirm(&state.config.site, prompt, &action)))
}

// POST /admin/bookings/:id/delete, /admin/messages/:id/delete
#[derive(Deserialize)]
pub struct ConfirmInput {
    #[serde(default)]
    pub confirm: String,
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
    Form(input): Form<ConfirmInput>,
) -> (CookieJar, Html<String>) {
    let mut dashboard = dashboard_for(&state, &jar);
    dashboard.set_tab(Tab::Bookings);
    if dashboard.open().await.is_ok() {
        let result = dashboard
            .delete_booking(&id, confirmation(&input.confirm))
            .await;
        report(&mut dashboard, result);
    }
    respond(&state, jar, &dashboard)
}

pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
    Form(input): Form<ConfirmInput>,
) -> (CookieJar, Html<String>) {
    let mut dashboard = dashboard_for(&state, &jar);
    dashboard.set_tab(Tab::Messages);
    if dashboard.open().await.is_ok() {
        let result = dashboard
            .delete_message(&id, confirmation(&input.confirm))
            .await;
        report(&mut dashboard, result);
    }
    respond(&state, jar, &dashboard)
}
