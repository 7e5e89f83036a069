use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use super::today;
use crate::state::AppState;
use crate::ui::{ContactForm, LandingPage};
use crate::views;

pub async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(views::landing::render(
        &state.config.site,
        &LandingPage::default(),
        None,
        &ContactForm::default(),
        today(),
    ))
}

// POST /contact
#[derive(Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Form(input): Form<ContactInput>,
) -> Html<String> {
    let mut form = ContactForm::new(&input.name, &input.email, &input.message);
    // The outcome is carried by the form's notice.
    let _ = form.submit(state.services.contact.as_ref()).await;

    Html(views::landing::render(
        &state.config.site,
        &LandingPage::default(),
        None,
        &form,
        today(),
    ))
}
