use crate::errors::AppError;
use crate::metrics::{build_dashboard, recent_history};
use crate::models::{validate_entry, Dashboard, EntryForm, Record};
use crate::state::AppState;
use crate::storage::{persist_records, sorted_records, upsert_record};
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<Option<Dashboard>>, AppError> {
    let records = state.records.lock().await;
    Ok(Json(build_dashboard(&sorted_records(&records))))
}

pub async fn get_history(State(state): State<AppState>) -> Result<Json<Vec<Record>>, AppError> {
    let records = state.records.lock().await;
    Ok(Json(recent_history(&sorted_records(&records))))
}

pub async fn save_entry(
    State(state): State<AppState>,
    Json(form): Json<EntryForm>,
) -> Result<Json<Record>, AppError> {
    let record = apply_entry(&state, &form).await?;
    Ok(Json(record))
}

/// Plain-form fallback for the same operation; works without JS.
pub async fn entry_add(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> Result<Redirect, AppError> {
    apply_entry(&state, &form).await?;
    Ok(Redirect::to("/"))
}

async fn apply_entry(state: &AppState, form: &EntryForm) -> Result<Record, AppError> {
    let record = validate_entry(form).map_err(AppError::Invalid)?;

    let mut records = state.records.lock().await;
    upsert_record(&mut records, record.clone());
    persist_records(&state.data_path, &records).await?;

    Ok(record)
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
