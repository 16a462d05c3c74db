use crate::dates::today_key;
use crate::errors::AppError;
use crate::events::AppEvent;
use crate::models::{Ledger, TodayResponse};
use crate::progress::progress;
use crate::settings::Settings;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_key();
    let ledger = state.ledger.lock().await;
    let settings = state.settings.lock().await;
    let count = ledger.count_for(&date);
    Html(render_index(&date, count, &settings))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let date = today_key();
    let ledger = state.ledger.lock().await;
    let goal = state.settings.lock().await.goal;
    let count = ledger.count_for(&date);

    Ok(Json(to_response(date, count, goal)))
}

/// Registers one glass for today. When a positive goal is already met the
/// drink is refused, not failed: the unchanged count comes back with
/// `at_or_over_goal` set and the caller decides what to show.
pub async fn drink(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let response = apply_drink(&state).await?;
    Ok(Json(response))
}

pub async fn drink_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_drink(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let response = apply_reset(&state).await?;
    Ok(Json(response))
}

pub async fn reset_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_reset(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_history(State(state): State<AppState>) -> Result<Json<Ledger>, AppError> {
    let ledger = state.ledger.lock().await;
    Ok(Json(ledger.clone()))
}

pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>, AppError> {
    let settings = state.settings.lock().await;
    Ok(Json(settings.clone()))
}

/// Persists the new settings, then refreshes the reminder scheduler. The
/// two steps are not transactional: a scheduler hiccup is logged by the
/// scheduler itself and never rolls back the saved record.
pub async fn put_settings(
    State(state): State<AppState>,
    Json(payload): Json<Settings>,
) -> Result<Json<Settings>, AppError> {
    payload.validate().map_err(AppError::validation)?;

    // lock held across save-and-update so file and memory can't diverge
    {
        let mut settings = state.settings.lock().await;
        state.settings_store.save(&payload).await?;
        *settings = payload.clone();
    }
    state.scheduler.refresh(&payload).await;

    Ok(Json(payload))
}

async fn apply_drink(state: &AppState) -> Result<TodayResponse, AppError> {
    let date = today_key();
    let goal = state.settings.lock().await.goal;
    let mut ledger = state.ledger.lock().await;

    let current = ledger.count_for(&date);
    if goal > 0 && current >= goal {
        return Ok(to_response(date, current, goal));
    }

    let count = ledger.increment(&date);
    state.ledger_store.save(&ledger).await?;

    // no subscribers is fine; the mutation already succeeded
    let _ = state.events.send(AppEvent::CountChanged {
        date: date.clone(),
        count,
    });

    Ok(to_response(date, count, goal))
}

async fn apply_reset(state: &AppState) -> Result<TodayResponse, AppError> {
    let date = today_key();
    let goal = state.settings.lock().await.goal;
    let mut ledger = state.ledger.lock().await;

    ledger.reset_day(&date);
    state.ledger_store.save(&ledger).await?;

    let count = ledger.count_for(&date);
    Ok(to_response(date, count, goal))
}

fn to_response(date: String, count: u32, goal: u32) -> TodayResponse {
    let progress = progress(count, goal);
    TodayResponse {
        date,
        count,
        goal,
        display: progress.display,
        at_or_over_goal: progress.at_or_over_goal,
    }
}
