use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use chrono::NaiveDate;
use serde::Deserialize;

use super::{removal_cookie, session_cookie, today};
use crate::errors::AppError;
use crate::models::ServiceType;
use crate::state::AppState;
use crate::ui::{BookingWizard, ContactForm, LandingPage, Notice, WizardError};
use crate::views;

pub const WIZARD_COOKIE: &str = "wizard_id";

const WIZARD_PAGE: &str = "/book#booking";
const RESTART: &str = "/book?start=true#booking";

fn wizard_id(jar: &CookieJar) -> Option<String> {
    jar.get(WIZARD_COOKIE).map(|c| c.value().to_string())
}

/// Run a synchronous wizard action and go back to the modal. Failures are
/// shown as the wizard's notice.
fn apply(
    state: &AppState,
    jar: &CookieJar,
    action: impl FnOnce(&mut BookingWizard) -> Result<(), WizardError>,
) -> Redirect {
    let Some(id) = wizard_id(jar) else {
        return Redirect::to(RESTART);
    };
    let found = state.wizards.update(&id, |wizard| {
        if let Err(e) = action(wizard) {
            tracing::debug!(error = %e, "wizard action refused");
            wizard.set_notice(Notice::error(e.to_string()));
        }
    });
    match found {
        Some(()) => Redirect::to(WIZARD_PAGE),
        None => Redirect::to(RESTART),
    }
}

// GET /book
#[derive(Deserialize)]
pub struct BookQuery {
    #[serde(default)]
    pub start: bool,
    pub service: Option<String>,
}

pub async fn booking_page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<BookQuery>,
) -> Result<Response, AppError> {
    let mut page = LandingPage::default();

    let existing = match wizard_id(&jar) {
        Some(id) if !query.start => state
            .wizards
            .update(&id, |wizard| {
                let shown = wizard.clone();
                wizard.take_notice();
                shown
            }),
        _ => None,
    };

    let Some(wizard) = existing else {
        let service = match query.service.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                ServiceType::parse(raw)
                    .ok_or_else(|| AppError::BadRequest(format!("unknown service type: {raw}")))?,
            ),
            None => None,
        };

        if let Some(id) = wizard_id(&jar) {
            state.wizards.remove(&id);
        }
        let id = state.wizards.insert(page.open_booking(service));
        tracing::debug!(
            wizard_id = %id,
            service = service.map(|s| s.as_str()).unwrap_or_default(),
            "booking wizard started"
        );

        let jar = jar.add(session_cookie(WIZARD_COOKIE, id, state.config.secure_cookies));
        return Ok((jar, Redirect::to(WIZARD_PAGE)).into_response());
    };

    page.resume_booking(&wizard);
    Ok(Html(views::landing::render(
        &state.config.site,
        &page,
        Some(&wizard),
        &ContactForm::default(),
        today(),
    ))
    .into_response())
}

// POST /book/service
#[derive(Deserialize)]
pub struct ServiceInput {
    #[serde(default)]
    pub service_type: String,
}

pub async fn select_service(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(input): Form<ServiceInput>,
) -> Redirect {
    apply(&state, &jar, |wizard| {
        let service =
            ServiceType::parse(&input.service_type).ok_or(WizardError::ServiceRequired)?;
        wizard.select_service(service)
    })
}

pub async fn next_step(State(state): State<Arc<AppState>>, jar: CookieJar) -> Redirect {
    apply(&state, &jar, |wizard| wizard.next().map(|_| ()))
}

pub async fn previous_step(State(state): State<Arc<AppState>>, jar: CookieJar) -> Redirect {
    apply(&state, &jar, |wizard| {
        wizard.back();
        Ok(())
    })
}

// POST /book/date
#[derive(Deserialize)]
pub struct DateInput {
    #[serde(default)]
    pub date: String,
}

pub async fn select_date(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(input): Form<DateInput>,
) -> Redirect {
    let Some(id) = wizard_id(&jar) else {
        return Redirect::to(RESTART);
    };
    let Some(mut wizard) = state.wizards.get(&id) else {
        return Redirect::to(RESTART);
    };

    match NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d") {
        Ok(date) => {
            // The slot lookup runs without holding the store lock.
            if let Err(e) = wizard
                .select_date(date, today(), state.services.bookings.as_ref())
                .await
            {
                wizard.set_notice(Notice::error(e.to_string()));
            }
        }
        Err(_) => wizard.set_notice(Notice::error("Please choose a valid date.")),
    }

    // Closed or restarted while the lookup ran: the snapshot is stale.
    match state.wizards.replace(&id, wizard) {
        Some(()) => Redirect::to(WIZARD_PAGE),
        None => Redirect::to(RESTART),
    }
}

// POST /book/time
#[derive(Deserialize)]
pub struct TimeInput {
    #[serde(default)]
    pub time: String,
}

pub async fn select_time(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(input): Form<TimeInput>,
) -> Redirect {
    apply(&state, &jar, |wizard| wizard.select_time(&input.time))
}

// POST /book/submit
#[derive(Deserialize)]
pub struct DetailsInput {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_phone: String,
    #[serde(default)]
    pub message: String,
}

pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(input): Form<DetailsInput>,
) -> Redirect {
    let Some(id) = wizard_id(&jar) else {
        return Redirect::to(RESTART);
    };

    let started = state.wizards.update(&id, |wizard| {
        let result = wizard
            .update_details(
                &input.client_name,
                &input.client_email,
                &input.client_phone,
                &input.message,
            )
            .and_then(|()| wizard.begin_submit());
        if let Err(e) = &result {
            wizard.set_notice(Notice::error(e.to_string()));
        }
        result.ok()
    });

    let booking = match started {
        None => return Redirect::to(RESTART),
        Some(None) => return Redirect::to(WIZARD_PAGE),
        Some(Some(booking)) => booking,
    };

    let result = state.services.bookings.create(&booking).await;
    let finished = state.wizards.update(&id, |wizard| wizard.finish_submit(result));
    if finished.is_none() {
        tracing::warn!(wizard_id = %id, "booking wizard expired during submission");
    }
    Redirect::to(WIZARD_PAGE)
}

pub async fn close_booking(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let mut page = LandingPage::default();
    if let Some(id) = wizard_id(&jar) {
        if let Some(wizard) = state.wizards.get(&id) {
            page.resume_booking(&wizard);
        }
        state.wizards.remove(&id);
    }
    page.close_booking();

    let html = views::landing::render(
        &state.config.site,
        &page,
        None,
        &ContactForm::default(),
        today(),
    );
    (jar.remove(removal_cookie(WIZARD_COOKIE)), Html(html))
}
