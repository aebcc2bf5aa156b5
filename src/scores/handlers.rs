use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::CurrentUser,
    error::ApiError,
    scores::{
        dto::{BestScoreOut, GlobalBestOut, ScoreSubmit},
        repo::BestScore,
    },
    state::AppState,
};

pub fn score_routes() -> Router<AppState> {
    Router::new()
        .route("/scores/submit", post(submit_score))
        .route("/scores/global-best", get(global_best))
}

#[instrument(skip_all)]
pub async fn submit_score(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ScoreSubmit>,
) -> Result<Json<BestScoreOut>, ApiError> {
    if payload.score < 0 {
        return Err(ApiError::validation("Score must be non-negative"));
    }

    let best = BestScore::submit(&state.db, user.id, payload.score).await?;

    info!(
        user_id = user.id,
        score = payload.score,
        best = best.best_score,
        "score submitted"
    );
    Ok(Json(BestScoreOut {
        user_id: best.user_id,
        best_score: best.best_score,
        updated_at: best.updated_at,
    }))
}

#[instrument(skip(state))]
pub async fn global_best(State(state): State<AppState>) -> Result<Json<GlobalBestOut>, ApiError> {
    let best = BestScore::global_best(&state.db).await?;
    Ok(Json(GlobalBestOut {
        best_score: best.map(|b| b.best_score),
    }))
}
