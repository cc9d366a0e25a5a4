//! `GET` usage guides. No auth required.

use axum::{Json, extract::State};
use recruit_core::{Envelope, usage::{self, UsageGuide}};

use crate::AppState;

/// `GET /get-user-info`
pub async fn get_user_info(State(state): State<AppState>) -> Json<Envelope<UsageGuide>> {
  Json(Envelope::data(usage::get_user_info(state.keys.as_ref())))
}

/// `GET /book-appointment`
pub async fn book_appointment(State(state): State<AppState>) -> Json<Envelope<UsageGuide>> {
  Json(Envelope::data(usage::book_appointment(state.keys.as_ref())))
}
